//! # IMAP4 request parser
//!
//! imapd-parse turns one client command line into a typed, fully validated
//! [`Command`](imapd_types::command::Command): tag, command name, and
//! command-specific arguments including mailbox names, flag lists, sequence
//! sets, FETCH attribute trees, SEARCH key trees and date/date-time values.
//!
//! The grammar is case-insensitive and position-sensitive, so the parser
//! keeps a cursor over two same-length views of the line (original and
//! ASCII-upper-cased) and matches against the upper view while taking values
//! from the original. Literals (`{n}`, `{n+}`, `~{n}`) interrupt parsing:
//! through the [`Transport`](transport::Transport) trait the parser sends a
//! continuation prompt where required, reads exactly `n` octets, and resumes
//! on the next line fragment. That trait is the parser's only IO surface;
//! tests run against a scripted implementation.
//!
//! ## Example
//!
//! ```
//! use imapd_parse::{Parser, Transport};
//! use imapd_types::command::CommandBody;
//!
//! struct NoIo;
//!
//! impl Transport for NoIo {
//!     fn read_literal(&mut self, _size: u64, _sync: bool) -> std::io::Result<Vec<u8>> {
//!         unimplemented!("no literal in this request")
//!     }
//!     fn read_line(&mut self) -> std::io::Result<Vec<u8>> {
//!         unimplemented!("no literal in this request")
//!     }
//! }
//!
//! let cmd = Parser::new("a001 LOGIN \"alice\" \"pw\"", &mut NoIo)
//!     .command()
//!     .unwrap();
//!
//! assert_eq!(cmd.tag, "a001");
//! assert_eq!(cmd.name, "LOGIN");
//! assert_eq!(
//!     cmd.body,
//!     CommandBody::Login {
//!         username: "alice".into(),
//!         password: "pw".into(),
//!     }
//! );
//! ```
//!
//! Besides [`Parser::command`], the typed construct parsers (`xastring`,
//! `xnum_set`, `xsearch_key`, `xfetch_atts`, ...) are public, so a dispatcher
//! can combine them when reading the arguments of extension commands.
//!
//! ## Errors
//!
//! Parsing fails with a [`SyntaxError`](error::SyntaxError) carrying a short
//! message, the parser context path and the residual input, plus an optional
//! response code and pre-formatted untagged line for errors with a defined
//! server-visible form (an oversized literal yields `TOOBIG` and a
//! `* BYE [ALERT] ...` line). Transport failures propagate unchanged as
//! [`ParseError::Transport`](error::ParseError).

pub use imapd_types as types;

mod chars;
mod command;
mod core;
mod datetime;
pub mod error;
mod fetch;
mod flag;
mod mailbox;
mod parser;
mod search;
mod sequence;
mod status;
mod tagged_ext;
#[cfg(test)]
mod testing;
pub mod transport;
mod utf7;

pub use error::{ErrorCode, ParseError, Result, SyntaxError};
pub use parser::{Limits, Parser};
pub use transport::{Capability, Transport};
