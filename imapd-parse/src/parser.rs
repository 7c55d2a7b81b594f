//! The cursor over one command line and its peek/consume primitives.
//!
//! The parser keeps the line in two views: the original bytes, and an
//! ASCII-upper-cased copy of the same length. Matching happens against the
//! upper view (the grammar is case-insensitive almost everywhere), while
//! token values are taken from the original view to preserve the client's
//! casing.
//!
//! Naming follows one convention throughout the crate: an `x`-prefixed method
//! fails with a syntax error when the input does not match, while the
//! unprefixed probe returns `bool` (or an `Option`) and leaves the offset
//! untouched on a non-match.

use crate::chars::to_upper;
use crate::error::{ErrorCode, ParseError, Result, SyntaxError};
use crate::transport::Transport;

/// Literal size ceilings, per context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum size of a string literal (mailbox names, search strings, ...).
    pub max_literal_size: i64,
    /// Maximum size of the APPEND message literal.
    pub max_message_size: i64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_literal_size: 100 * 1024,
            max_message_size: 100 * 1024 * 1024,
        }
    }
}

/// Parser for a single client request.
///
/// One instance parses one request; no state survives into the next request.
/// The transport is only consulted at literal boundaries.
pub struct Parser<'a, T: Transport> {
    pub(crate) orig: Vec<u8>,
    pub(crate) upper: Vec<u8>,
    pub(crate) pos: usize,
    pub(crate) contexts: Vec<&'static str>,
    pub(crate) conn: &'a mut T,
    pub(crate) limits: Limits,
}

impl<'a, T: Transport> Parser<'a, T> {
    pub fn new(line: impl Into<Vec<u8>>, conn: &'a mut T) -> Self {
        let orig = line.into();
        let upper = to_upper(&orig);
        Self {
            orig,
            upper,
            pos: 0,
            contexts: Vec::new(),
            conn,
            limits: Limits::default(),
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Replaces the cursor with a fresh command-line fragment, offset 0. Used
    /// after a literal has been read from the transport.
    pub(crate) fn reseed(&mut self, line: Vec<u8>) {
        self.upper = to_upper(&line);
        self.orig = line;
        self.pos = 0;
    }

    // ----- error building -----

    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        self.error_with(message, None, None)
    }

    pub(crate) fn error_with(
        &self,
        message: impl Into<String>,
        code: Option<ErrorCode>,
        untagged: Option<String>,
    ) -> ParseError {
        let mut message = message.into();
        let remaining = String::from_utf8_lossy(&self.orig[self.pos..]).into_owned();

        let mut detail = format!("remaining {remaining:?}");
        if !self.contexts.is_empty() {
            detail.push_str(", context ");
            detail.push_str(&self.contexts.join(","));
        }
        // Only an authenticated client gets the detail echoed back; before
        // authentication it stays in the structured error.
        if self.conn.account().is_some() {
            message = format!("{message} ({detail})");
        }

        ParseError::Syntax(SyntaxError {
            message,
            untagged,
            code,
            remaining,
            contexts: self.contexts.clone(),
        })
    }

    pub(crate) fn fail<R>(&self, message: impl Into<String>) -> Result<R> {
        Err(self.error(message))
    }

    /// Pushes a context label for the duration of `f`; error messages name
    /// the full path.
    pub(crate) fn context<R>(
        &mut self,
        label: &'static str,
        f: impl FnOnce(&mut Self) -> Result<R>,
    ) -> Result<R> {
        self.contexts.push(label);
        let r = f(self);
        self.contexts.pop();
        r
    }

    // ----- peek/consume primitives -----

    pub(crate) fn empty(&self) -> bool {
        self.pos == self.upper.len()
    }

    pub(crate) fn xempty(&self) -> Result<()> {
        if !self.empty() {
            return self.fail("leftover data");
        }
        Ok(())
    }

    pub(crate) fn xnonempty(&self) -> Result<()> {
        if self.empty() {
            return self.fail("unexpected end");
        }
        Ok(())
    }

    /// `s` must already be upper-cased; it is compared against the upper
    /// view.
    pub(crate) fn has_prefix(&self, s: &str) -> bool {
        self.upper[self.pos..].starts_with(s.as_bytes())
    }

    pub(crate) fn take(&mut self, s: &str) -> bool {
        if !self.has_prefix(s) {
            return false;
        }
        self.pos += s.len();
        true
    }

    pub(crate) fn xtake(&mut self, s: &str) -> Result<()> {
        if !self.take(s) {
            return self.fail(format!("expected {s}"));
        }
        Ok(())
    }

    /// Takes the next `n` bytes of the original view.
    pub(crate) fn xtaken(&mut self, n: usize) -> Result<Vec<u8>> {
        if self.pos + n > self.orig.len() {
            return self.fail("not enough data");
        }
        let r = self.orig[self.pos..self.pos + n].to_vec();
        self.pos += n;
        Ok(r)
    }

    /// Takes everything up to the end of the line, original casing.
    pub(crate) fn xtakeall(&mut self) -> Vec<u8> {
        let r = self.orig[self.pos..].to_vec();
        self.pos = self.orig.len();
        r
    }

    /// Takes a non-empty run of bytes matching `pred` from the original view.
    pub(crate) fn xtakechars(&mut self, pred: fn(u8) -> bool, what: &str) -> Result<String> {
        self.xnonempty()?;
        let mut n = 0;
        while self.pos + n < self.orig.len() && pred(self.orig[self.pos + n]) {
            n += 1;
        }
        if n == 0 {
            return self.fail(format!("expected chars from {what}"));
        }
        let taken = &self.orig[self.pos..self.pos + n];
        self.pos += n;
        // # Safety
        //
        // `unwrap` is safe because every character class in the grammar is a
        // subset of ASCII.
        Ok(std::str::from_utf8(taken).unwrap().to_string())
    }

    /// Takes a non-empty run from the upper view where `f(index, byte)`
    /// holds.
    pub(crate) fn xtake1fn(&mut self, f: impl Fn(usize, u8) -> bool) -> Result<String> {
        let mut n = 0;
        while self.pos + n < self.upper.len() && f(n, self.upper[self.pos + n]) {
            n += 1;
        }
        if n == 0 {
            return self.fail("expected at least one character");
        }
        let taken = &self.upper[self.pos..self.pos + n];
        self.pos += n;
        // # Safety
        //
        // `unwrap` is safe because the predicate callers only match ASCII.
        Ok(std::str::from_utf8(taken).unwrap().to_string())
    }

    pub(crate) fn space(&mut self) -> bool {
        self.take(" ")
    }

    pub(crate) fn xspace(&mut self) -> Result<()> {
        if !self.space() {
            return self.fail("expected space");
        }
        Ok(())
    }

    /// A possibly empty run of decimal digits.
    pub(crate) fn digits(&mut self) -> String {
        let mut n = 0;
        while self.pos + n < self.upper.len() && self.upper[self.pos + n].is_ascii_digit() {
            n += 1;
        }
        let taken = &self.upper[self.pos..self.pos + n];
        self.pos += n;
        // # Safety
        //
        // `unwrap` is safe, the run contains only ASCII digits.
        std::str::from_utf8(taken).unwrap().to_string()
    }

    pub(crate) fn digit(&mut self) -> Option<u8> {
        let b = *self.orig.get(self.pos)?;
        if !b.is_ascii_digit() {
            return None;
        }
        self.pos += 1;
        Some(b)
    }

    pub(crate) fn xdigit(&mut self) -> Result<u8> {
        match self.digit() {
            Some(b) => Ok(b),
            None => self.fail("expected digit"),
        }
    }

    /// The first word of `l` that matches at the cursor, consumed. Words must
    /// be upper-cased; order resolves prefix conflicts, so longer words come
    /// first.
    pub(crate) fn takelist<'w>(&mut self, l: &[&'w str]) -> Option<&'w str> {
        for &w in l {
            if self.take(w) {
                return Some(w);
            }
        }
        None
    }

    pub(crate) fn xtakelist<'w>(&mut self, l: &[&'w str]) -> Result<&'w str> {
        match self.takelist(l) {
            Some(w) => Ok(w),
            None => self.fail(format!("expected one of {}", l.join(","))),
        }
    }

    /// Parses an already-taken digit run as u32.
    pub(crate) fn xint(&self, s: &[u8]) -> Result<u32> {
        let s = String::from_utf8_lossy(s);
        match s.parse::<u32>() {
            Ok(v) => Ok(v),
            Err(err) => self.fail(format!("bad int {s:?}: {err}")),
        }
    }
}
