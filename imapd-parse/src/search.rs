//! SEARCH keys.

use imapd_types::core::Vec1;
use imapd_types::search::SearchKey;

use crate::error::Result;
use crate::parser::Parser;
use crate::transport::Transport;

// Matched in the listed order; a non-match falls through to the bare
// sequence-set form.
const SEARCH_KEY_WORDS: [&str; 35] = [
    "ALL",
    "ANSWERED",
    "BCC",
    "BEFORE",
    "BODY",
    "CC",
    "DELETED",
    "FLAGGED",
    "FROM",
    "KEYWORD",
    "NEW",
    "OLD",
    "ON",
    "RECENT",
    "SEEN",
    "SINCE",
    "SUBJECT",
    "TEXT",
    "TO",
    "UNANSWERED",
    "UNDELETED",
    "UNFLAGGED",
    "UNKEYWORD",
    "UNSEEN",
    "DRAFT",
    "HEADER",
    "LARGER",
    "NOT",
    "OR",
    "SENTBEFORE",
    "SENTON",
    "SENTSINCE",
    "SMALLER",
    "UID",
    "UNDRAFT",
];

impl<T: Transport> Parser<'_, T> {
    /// `search-key`, recursive: a parenthesised conjunction group, one of the
    /// key words with its arguments, or a bare sequence set.
    pub fn xsearch_key(&mut self) -> Result<SearchKey> {
        if self.take("(") {
            let mut l = vec![self.xsearch_key()?];
            while !self.take(")") {
                self.xspace()?;
                l.push(self.xsearch_key()?);
            }
            return Ok(SearchKey::And(Vec1::unvalidated(l)));
        }

        let Some(w) = self.takelist(&SEARCH_KEY_WORDS) else {
            return Ok(SearchKey::SeqSet(self.xnum_set()?));
        };

        match w {
            "ALL" => Ok(SearchKey::All),
            "ANSWERED" => Ok(SearchKey::Answered),
            "DELETED" => Ok(SearchKey::Deleted),
            "DRAFT" => Ok(SearchKey::Draft),
            "FLAGGED" => Ok(SearchKey::Flagged),
            "NEW" => Ok(SearchKey::New),
            "OLD" => Ok(SearchKey::Old),
            "RECENT" => Ok(SearchKey::Recent),
            "SEEN" => Ok(SearchKey::Seen),
            "UNANSWERED" => Ok(SearchKey::Unanswered),
            "UNDELETED" => Ok(SearchKey::Undeleted),
            "UNDRAFT" => Ok(SearchKey::Undraft),
            "UNFLAGGED" => Ok(SearchKey::Unflagged),
            "UNSEEN" => Ok(SearchKey::Unseen),
            "BCC" => {
                self.xspace()?;
                Ok(SearchKey::Bcc(self.xastring()?))
            }
            "BODY" => {
                self.xspace()?;
                Ok(SearchKey::Body(self.xastring()?))
            }
            "CC" => {
                self.xspace()?;
                Ok(SearchKey::Cc(self.xastring()?))
            }
            "FROM" => {
                self.xspace()?;
                Ok(SearchKey::From(self.xastring()?))
            }
            "SUBJECT" => {
                self.xspace()?;
                Ok(SearchKey::Subject(self.xastring()?))
            }
            "TEXT" => {
                self.xspace()?;
                Ok(SearchKey::Text(self.xastring()?))
            }
            "TO" => {
                self.xspace()?;
                Ok(SearchKey::To(self.xastring()?))
            }
            "BEFORE" => {
                self.xspace()?;
                Ok(SearchKey::Before(self.xdate()?))
            }
            "ON" => {
                self.xspace()?;
                Ok(SearchKey::On(self.xdate()?))
            }
            "SINCE" => {
                self.xspace()?;
                Ok(SearchKey::Since(self.xdate()?))
            }
            "SENTBEFORE" => {
                self.xspace()?;
                Ok(SearchKey::SentBefore(self.xdate()?))
            }
            "SENTON" => {
                self.xspace()?;
                Ok(SearchKey::SentOn(self.xdate()?))
            }
            "SENTSINCE" => {
                self.xspace()?;
                Ok(SearchKey::SentSince(self.xdate()?))
            }
            "KEYWORD" => {
                self.xspace()?;
                Ok(SearchKey::Keyword(self.xatom()?))
            }
            "UNKEYWORD" => {
                self.xspace()?;
                Ok(SearchKey::Unkeyword(self.xatom()?))
            }
            "HEADER" => {
                self.xspace()?;
                let field = self.xastring()?;
                self.xspace()?;
                Ok(SearchKey::Header(field, self.xastring()?))
            }
            "LARGER" => {
                self.xspace()?;
                Ok(SearchKey::Larger(self.xnumber64()?))
            }
            "SMALLER" => {
                self.xspace()?;
                Ok(SearchKey::Smaller(self.xnumber64()?))
            }
            "NOT" => {
                self.xspace()?;
                Ok(SearchKey::Not(Box::new(self.xsearch_key()?)))
            }
            "OR" => {
                self.xspace()?;
                let first = self.xsearch_key()?;
                self.xspace()?;
                Ok(SearchKey::Or(Box::new(first), Box::new(self.xsearch_key()?)))
            }
            "UID" => {
                self.xspace()?;
                Ok(SearchKey::Uid(self.xnum_set()?))
            }
            _ => unreachable!("missing case for search op {w}"),
        }
    }
}
