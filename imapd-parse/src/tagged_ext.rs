//! Tagged extension syntax: the generic label/value forms used by SELECT and
//! EXAMINE parameters, FETCH and STORE modifiers, and LIST RETURN options.
//!
//! Only the grammar is enforced; values are discarded after validation.

use crate::error::Result;
use crate::parser::Parser;
use crate::transport::Transport;

impl<T: Transport> Parser<'_, T> {
    /// `tagged-ext-label`: first char in `A-Z_.-`, later chars additionally
    /// digits and `:`. Returned upper-cased.
    pub(crate) fn xtagged_ext_label(&mut self) -> Result<String> {
        self.xtake1fn(|i, c| {
            c.is_ascii_uppercase()
                || c == b'-'
                || c == b'_'
                || c == b'.'
                || i > 0 && (c.is_ascii_digit() || c == b':')
        })
    }

    /// `tagged-ext-val`: a parenthesised composite (possibly empty `()`) or a
    /// simple value.
    pub(crate) fn xtagged_ext_val(&mut self) -> Result<()> {
        if self.take("(") {
            if self.take(")") {
                return Ok(());
            }
            self.xtagged_ext_comp()?;
            self.xtake(")")?;
            return Ok(());
        }
        self.xtagged_ext_simple()
    }

    /// `tagged-ext-simple`: a number64, or a sequence set. A value starting
    /// with digits can continue as a sequence set, but only within u32 range;
    /// a value with no leading digits must be a full sequence set and ends
    /// there.
    pub(crate) fn xtagged_ext_simple(&mut self) -> Result<()> {
        let s = self.digits();
        if s.is_empty() {
            self.xnum_set()?;
            return Ok(());
        }
        if let Err(err) = s.parse::<i64>() {
            return self.fail(format!("parsing int: {err}"));
        }
        if self.take(":") {
            if !self.take("*") {
                self.xnznumber()?;
            }
        }
        while self.take(",") {
            self.xnum_range()?;
        }
        Ok(())
    }

    /// `tagged-ext-comp`: astrings, possibly parenthesised, space-separated.
    pub(crate) fn xtagged_ext_comp(&mut self) -> Result<()> {
        if self.take("(") {
            self.xtagged_ext_comp()?;
            self.xtake(")")?;
            return Ok(());
        }
        self.xastring()?;
        while self.space() {
            self.xtagged_ext_comp()?;
        }
        Ok(())
    }

    /// True when the byte at the cursor can start a tagged-ext value rather
    /// than the next label.
    pub(crate) fn tagged_ext_value_follows(&self) -> bool {
        matches!(
            self.upper.get(self.pos),
            Some(b'(' | b'0'..=b'9' | b'*' | b'$')
        )
    }

    /// `"(" [label [SP value] *(SP label [SP value])] ")"`, returning the
    /// labels. Shared by SELECT/EXAMINE parameters, FETCH/STORE modifiers and
    /// LIST RETURN options.
    pub(crate) fn xtagged_ext_list(&mut self) -> Result<Vec<String>> {
        self.xtake("(")?;
        let mut labels = Vec::new();
        if self.take(")") {
            return Ok(labels);
        }
        loop {
            labels.push(self.xtagged_ext_label()?);
            if self.take(")") {
                break;
            }
            self.xspace()?;
            if self.tagged_ext_value_follows() {
                self.xtagged_ext_val()?;
                if self.take(")") {
                    break;
                }
                self.xspace()?;
            }
        }
        Ok(labels)
    }
}
