//! Mailbox names and LIST patterns.

use crate::chars::is_list_char;
use crate::error::Result;
use crate::parser::Parser;
use crate::transport::{Capability, Transport};
use crate::utf7;

impl<T: Transport> Parser<'_, T> {
    /// `mailbox = astring`
    ///
    /// Without IMAP4rev2, clients may send names in modified UTF-7, which is
    /// decoded here. A name that fails to decode is kept verbatim; older
    /// clients are also allowed to send raw UTF-8.
    pub fn xmailbox(&mut self) -> Result<String> {
        let s = self.xastring()?;
        if self.conn.enabled(Capability::Imap4Rev2) {
            return Ok(s);
        }
        Ok(match utf7::decode(&s) {
            Ok(decoded) => decoded,
            Err(err) => {
                log::info!("decoding utf7 mailbox name {s:?}: {err}");
                s
            }
        })
    }

    /// `list-mailbox = 1*list-char / string`
    ///
    /// The unquoted form additionally permits the list wildcards `%`/`*` and
    /// `]`.
    pub fn xlist_mailbox(&mut self) -> Result<String> {
        if self.has_prefix("\"") || self.has_prefix("{") {
            return self.xstring();
        }
        self.xtakechars(is_list_char, "list-char")
    }

    /// One pattern, or a parenthesised list of patterns. Returns the
    /// patterns and whether the list form was used.
    pub(crate) fn xmbox_or_pat(&mut self) -> Result<(Vec<String>, bool)> {
        if !self.take("(") {
            return Ok((vec![self.xlist_mailbox()?], false));
        }
        let mut l = vec![self.xlist_mailbox()?];
        while !self.take(")") {
            self.xspace()?;
            l.push(self.xlist_mailbox()?);
        }
        Ok((l, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeConn;

    #[test]
    fn test_mailbox_utf7() {
        // Pre-rev2, modified UTF-7 is decoded.
        let mut conn = FakeConn::default();
        let mut p = Parser::new("Caf&AOk-", &mut conn);
        assert_eq!(p.xmailbox().unwrap(), "Café");

        // Undecodable names are kept as they came in.
        let mut p = Parser::new("a&b-c&", &mut conn);
        assert_eq!(p.xmailbox().unwrap(), "a&b-c&");
    }

    #[test]
    fn test_mailbox_rev2_verbatim() {
        let mut conn = FakeConn {
            rev2: true,
            ..FakeConn::default()
        };
        let mut p = Parser::new("Caf&AOk-", &mut conn);
        assert_eq!(p.xmailbox().unwrap(), "Caf&AOk-");
    }

    #[test]
    fn test_list_mailbox() {
        let mut conn = FakeConn::default();
        let mut p = Parser::new("INBOX.%.*]", &mut conn);
        assert_eq!(p.xlist_mailbox().unwrap(), "INBOX.%.*]");

        let mut p = Parser::new("\"quoted name\"", &mut conn);
        assert_eq!(p.xlist_mailbox().unwrap(), "quoted name");
    }

    #[test]
    fn test_mbox_or_pat() {
        let mut conn = FakeConn::default();
        let mut p = Parser::new("INBOX rest", &mut conn);
        assert_eq!(
            p.xmbox_or_pat().unwrap(),
            (vec!["INBOX".to_string()], false)
        );

        let mut p = Parser::new("(a b%)", &mut conn);
        assert_eq!(
            p.xmbox_or_pat().unwrap(),
            (vec!["a".to_string(), "b%".to_string()], true)
        );
    }
}
