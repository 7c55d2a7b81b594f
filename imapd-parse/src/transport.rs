//! The parser's contract with the connection.
//!
//! Literals interrupt parsing: the parser must ask the connection to read
//! exact octet counts and the remainder of the command line before it can
//! continue. This trait is the only place where the parser touches IO, which
//! keeps every parser unit-testable against a scripted implementation.

use std::io;

/// Capabilities the parser consults while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// When enabled, mailbox names are taken verbatim instead of being run
    /// through modified UTF-7 decoding.
    Imap4Rev2,
}

/// IO operations the parser requires from the connection.
pub trait Transport {
    /// Reads exactly `size` octets of literal data. When `sync` is true, the
    /// continuation prompt must be sent (and flushed) before reading.
    ///
    /// The octets are returned verbatim; NUL bytes are legal in binary
    /// literals.
    fn read_literal(&mut self, size: u64, sync: bool) -> io::Result<Vec<u8>>;

    /// Reads the next command-line fragment up to and including CRLF,
    /// returning the content without the CRLF.
    fn read_line(&mut self) -> io::Result<Vec<u8>>;

    /// The authenticated account, if any. Only used to decide how much detail
    /// goes into client-visible error messages.
    fn account(&self) -> Option<&str> {
        None
    }

    /// Whether the client has enabled the given capability.
    fn enabled(&self, cap: Capability) -> bool {
        let _ = cap;
        false
    }
}
