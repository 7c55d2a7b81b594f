//! SEARCH keys.

use chrono::NaiveDate;

use crate::core::Vec1;
use crate::sequence::NumSet;

/// One node of a SEARCH key tree.
///
/// The tree is finite (no cycles); `NOT` and `OR` own their children. Dates
/// carry no time component; the original value is interpreted as midnight UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchKey {
    // Nullary.
    All,
    Answered,
    Deleted,
    Draft,
    Flagged,
    New,
    Old,
    Recent,
    Seen,
    Unanswered,
    Undeleted,
    Undraft,
    Unflagged,
    Unseen,

    // One astring.
    Bcc(String),
    Body(String),
    Cc(String),
    From(String),
    Subject(String),
    Text(String),
    To(String),

    // One date.
    Before(NaiveDate),
    On(NaiveDate),
    Since(NaiveDate),
    SentBefore(NaiveDate),
    SentOn(NaiveDate),
    SentSince(NaiveDate),

    // One atom.
    Keyword(String),
    Unkeyword(String),

    /// `HEADER <field-name> <string>`
    Header(String, String),

    Larger(i64),
    Smaller(i64),

    Not(Box<SearchKey>),
    Or(Box<SearchKey>, Box<SearchKey>),

    Uid(NumSet),
    /// A bare sequence set used as a key.
    SeqSet(NumSet),
    /// A parenthesised conjunction group.
    And(Vec1<SearchKey>),
}
