//! Sequence sets: the message-number and UID range arguments of FETCH, STORE,
//! COPY, MOVE, and the UID variants.

use std::fmt;
use std::num::NonZeroU32;

use crate::core::Vec1;

/// One endpoint of a sequence range: a message/UID number, or `*` for the
/// highest number in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetNumber {
    Number(NonZeroU32),
    /// `*`
    Star,
}

impl From<NonZeroU32> for SetNumber {
    fn from(value: NonZeroU32) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for SetNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Star => f.write_str("*"),
        }
    }
}

/// `n`, `n:m`, `n:*`, `*:n` or `*`.
///
/// Both endpoints may be `*`; the server interprets the range regardless of
/// endpoint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumRange {
    pub first: SetNumber,
    pub last: Option<SetNumber>,
}

impl NumRange {
    pub fn single(first: SetNumber) -> Self {
        Self { first, last: None }
    }
}

impl fmt::Display for NumRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.first)?;
        if let Some(last) = &self.last {
            write!(f, ":{last}")?;
        }
        Ok(())
    }
}

/// A sequence set: either `$` (the saved result of the last SEARCH) or a
/// non-empty list of ranges. `$` never combines with ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumSet {
    /// `$`
    SearchResult,
    Ranges(Vec1<NumRange>),
}

impl From<NumRange> for NumSet {
    fn from(range: NumRange) -> Self {
        Self::Ranges(Vec1::from(range))
    }
}

impl fmt::Display for NumSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::SearchResult => f.write_str("$"),
            Self::Ranges(ranges) => {
                for (i, range) in ranges.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{range}")?;
                }
                Ok(())
            }
        }
    }
}
