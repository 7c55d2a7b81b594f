//! Lexical token parsers: numbers, atoms, strings, literals, tag and command
//! name.

use std::num::NonZeroU32;

use crate::chars::{is_astring_char, is_atom_char};
use crate::error::{ErrorCode, Result};
use crate::parser::Parser;
use crate::transport::Transport;

fn is_tag_char(b: u8) -> bool {
    is_astring_char(b) && b != b'+'
}

impl<T: Transport> Parser<'_, T> {
    /// `number = 1*DIGIT`
    ///
    /// Unsigned 32-bit. Does not advance when the digit run is missing or the
    /// value overflows.
    pub fn number(&mut self) -> Option<u32> {
        let mut n = 0;
        while self.pos + n < self.upper.len() && self.upper[self.pos + n].is_ascii_digit() {
            n += 1;
        }
        if n == 0 {
            return None;
        }
        // # Safety
        //
        // `unwrap` is safe, the run contains only ASCII digits.
        let s = std::str::from_utf8(&self.upper[self.pos..self.pos + n]).unwrap();
        let v = s.parse::<u32>().ok()?;
        self.pos += n;
        Some(v)
    }

    pub fn xnumber(&mut self) -> Result<u32> {
        match self.number() {
            Some(v) => Ok(v),
            None => self.fail("expected number"),
        }
    }

    /// `nz-number = digit-nz *DIGIT`
    ///
    /// As [`Self::number`], but zero does not match (and does not advance).
    pub fn nznumber(&mut self) -> Option<NonZeroU32> {
        let mut n = 0;
        while self.pos + n < self.upper.len() && self.upper[self.pos + n].is_ascii_digit() {
            n += 1;
        }
        if n == 0 {
            return None;
        }
        // # Safety
        //
        // `unwrap` is safe, the run contains only ASCII digits.
        let s = std::str::from_utf8(&self.upper[self.pos..self.pos + n]).unwrap();
        let v = s.parse::<u32>().ok().and_then(NonZeroU32::new)?;
        self.pos += n;
        Some(v)
    }

    pub fn xnznumber(&mut self) -> Result<NonZeroU32> {
        match self.nznumber() {
            Some(v) => Ok(v),
            None => self.fail("expected non-zero number"),
        }
    }

    /// `number64 = 1*DIGIT`
    ///
    /// Signed 63-bit range on the wire (no sign in the grammar).
    pub fn xnumber64(&mut self) -> Result<i64> {
        let s = self.digits();
        if s.is_empty() {
            return self.fail("expected number64");
        }
        match s.parse::<i64>() {
            Ok(v) => Ok(v),
            Err(err) => self.fail(format!("parsing number64 {s:?}: {err}")),
        }
    }

    /// `atom = 1*ATOM-CHAR`
    pub fn xatom(&mut self) -> Result<String> {
        self.xtakechars(is_atom_char, "atom")
    }

    /// `astring = 1*ASTRING-CHAR / string`
    pub fn xastring(&mut self) -> Result<String> {
        if self.has_prefix("\"") || self.has_prefix("{") || self.has_prefix("~{") {
            return self.xstring();
        }
        self.xtakechars(is_astring_char, "astring")
    }

    /// `string = quoted / literal`
    ///
    /// Quoted strings accept `\\` and `\"` as the only escapes and reject
    /// NUL, CR and LF. Literal data comes from the transport and must be
    /// valid UTF-8 here; only the APPEND message literal stays raw bytes.
    pub fn xstring(&mut self) -> Result<String> {
        if self.take("\"") {
            let mut r = Vec::new();
            let mut esc = false;
            let mut i = self.pos;
            while i < self.orig.len() {
                let b = self.orig[i];
                if esc {
                    if b == b'\\' || b == b'"' {
                        r.push(b);
                        esc = false;
                    } else {
                        return self.fail(format!("invalid escape char {:?}", b as char));
                    }
                } else if b == 0 || b == b'\r' || b == b'\n' {
                    return self.fail("invalid nul, cr or lf in string");
                } else if b == b'\\' {
                    esc = true;
                } else if b == b'"' {
                    self.pos = i + 1;
                    return match String::from_utf8(r) {
                        Ok(s) => Ok(s),
                        Err(_) => self.fail("invalid utf-8 in string"),
                    };
                } else {
                    r.push(b);
                }
                i += 1;
            }
            return self.fail("missing closing dquote in string");
        }

        let data = self.xliteral(self.limits.max_literal_size, false)?;
        match String::from_utf8(data) {
            Ok(s) => Ok(s),
            Err(_) => self.fail("invalid utf-8 in literal"),
        }
    }

    /// The word `NIL` yields an empty string, anything else must be a
    /// `string`.
    pub fn xnil_string(&mut self) -> Result<String> {
        if self.take("NIL") {
            return Ok(String::new());
        }
        self.xstring()
    }

    /// `literal = "{" number64 ["+"] "}" CRLF`, prefix only.
    ///
    /// A leading `~` (binary literal, NUL allowed in the data) is only
    /// consumed when the caller permits it. The size prefix must end the
    /// line. A size above `max_size` (when positive) fails with `TOOBIG` and
    /// the alert line, before anything is read from the transport.
    pub(crate) fn xliteral_size(&mut self, max_size: i64, lit8: bool) -> Result<(i64, bool)> {
        if lit8 {
            self.take("~");
        }
        self.xtake("{")?;
        let size = self.xnumber64()?;
        if max_size > 0 && size > max_size {
            let untagged = format!(
                "* BYE [ALERT] Max literal size {size} is larger than allowed {max_size} in this context"
            );
            return Err(self.error_with("literal too big", Some(ErrorCode::TooBig), Some(untagged)));
        }
        let sync = !self.take("+");
        self.xtake("}")?;
        self.xempty()?;
        Ok((size, sync))
    }

    /// Reads a full literal through the transport: the size prefix from the
    /// current line, exactly that many octets, then the rest of the command
    /// line, which becomes the new cursor.
    pub(crate) fn xliteral(&mut self, max_size: i64, lit8: bool) -> Result<Vec<u8>> {
        let (size, sync) = self.xliteral_size(max_size, lit8)?;
        let data = self.conn.read_literal(size as u64, sync)?;
        let line = self.conn.read_line()?;
        self.reseed(line);
        Ok(data)
    }

    /// `tag = 1*<any ASTRING-CHAR except "+">`
    pub fn xtag(&mut self) -> Result<String> {
        self.xtakechars(is_tag_char, "tag")
    }

    /// The command name: a run of `A-Z` in the upper view, where the single
    /// two-word form `UID <subcommand>` also swallows the separating space.
    pub fn xcommand(&mut self) -> Result<String> {
        let mut n = 0;
        while let Some(&b) = self.upper.get(self.pos + n) {
            if b.is_ascii_uppercase()
                || (b == b' ' && self.upper[self.pos..self.pos + n] == *b"UID")
            {
                n += 1;
            } else {
                break;
            }
        }
        if n == 0 {
            return self.fail("expected chars from command");
        }
        let taken = &self.upper[self.pos..self.pos + n];
        self.pos += n;
        // # Safety
        //
        // `unwrap` is safe, the run contains only A-Z and a space.
        Ok(std::str::from_utf8(taken).unwrap().to_string())
    }
}
