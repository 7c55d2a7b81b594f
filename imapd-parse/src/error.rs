//! Parser failures.

use std::fmt;
use std::io;

use thiserror::Error;

/// A response code with a defined server-visible representation, attached to
/// syntax errors that carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A literal announced a size above the allowed maximum.
    TooBig,
    /// SEARCH requested an unsupported charset.
    BadCharset,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TooBig => "TOOBIG",
            Self::BadCharset => "BADCHARSET",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request that could not be parsed.
///
/// The dispatcher renders this as a tagged `BAD` (prefixed by `untagged` when
/// present) and keeps the session alive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SyntaxError {
    /// Short description. When the connection is authenticated this embeds
    /// the remaining-input and context detail as well.
    pub message: String,
    /// A pre-formatted untagged response line (without CRLF) to send before
    /// the tagged result, e.g. the `* BYE [ALERT] ...` for oversized
    /// literals.
    pub untagged: Option<String>,
    pub code: Option<ErrorCode>,
    /// Unconsumed input at the point of failure (lossily decoded for
    /// display).
    pub remaining: String,
    /// Context path of the parsers that were active, outermost first.
    pub contexts: Vec<&'static str>,
}

/// Any failure while reading a request.
///
/// Transport errors pass through unchanged so the dispatcher can tear the
/// session down; they are never reported to the client as syntax problems.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error("transport: {0}")]
    Transport(#[from] io::Error),
}

impl ParseError {
    /// The syntax error inside, if this is one.
    pub fn syntax(&self) -> Option<&SyntaxError> {
        match self {
            Self::Syntax(err) => Some(err),
            Self::Transport(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
