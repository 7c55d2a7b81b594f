//! Sequence sets (`1`, `1:*`, `*,3:5`, `$`).

use imapd_types::core::Vec1;
use imapd_types::sequence::{NumRange, NumSet, SetNumber};

use crate::error::Result;
use crate::parser::Parser;
use crate::transport::Transport;

impl<T: Transport> Parser<'_, T> {
    /// `sequence-set`: `$` (the saved SEARCH result) or a comma-separated
    /// list of ranges.
    pub fn xnum_set(&mut self) -> Result<NumSet> {
        self.context("sequence-set", |p| {
            if p.take("$") {
                return Ok(NumSet::SearchResult);
            }
            let mut ranges = vec![p.xnum_range()?];
            while p.take(",") {
                ranges.push(p.xnum_range()?);
            }
            Ok(NumSet::Ranges(Vec1::unvalidated(ranges)))
        })
    }

    /// One range, which can be a single number: `n`, `n:m`, with `*` allowed
    /// on either side.
    pub(crate) fn xnum_range(&mut self) -> Result<NumRange> {
        let first = self.xset_number()?;
        let last = if self.take(":") {
            Some(self.xset_number()?)
        } else {
            None
        };
        Ok(NumRange { first, last })
    }

    fn xset_number(&mut self) -> Result<SetNumber> {
        if self.take("*") {
            return Ok(SetNumber::Star);
        }
        Ok(SetNumber::Number(self.xnznumber()?))
    }
}
