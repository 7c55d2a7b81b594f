//! # Typed AST for IMAP4 client requests
//!
//! imapd-types defines the data model produced by [imapd-parse] when it parses
//! a single client request: the command envelope (tag + name + body) and every
//! command-specific argument shape, such as sequence sets, flag lists, FETCH
//! attribute trees, and SEARCH key trees.
//!
//! All values are plain data. Construction happens in the parser; nothing in
//! this crate performs IO or holds references into the wire buffer. "Either-or"
//! constructs of the protocol (a section specifier is *either* a message-text
//! selector *or* a part path, a sequence set is *either* `$` *or* ranges) are
//! modelled as enums so that the invariants are structural rather than
//! documented.
//!
//! Note that IMAP requests are not guaranteed to be UTF-8 on the wire; string
//! fields in this crate hold values that were validated as UTF-8 during
//! parsing, while message payloads (the APPEND literal) stay `Vec<u8>`.
//!
//! [imapd-parse]: https://docs.rs/imapd-parse

pub mod command;
pub mod core;
pub mod fetch;
pub mod flag;
pub mod search;
pub mod sequence;
pub mod status;
