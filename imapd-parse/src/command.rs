//! Per-command argument parsers and the request dispatcher.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use imapd_types::command::{Command, CommandBody, ListSelectOpt, StoreAction};
use imapd_types::core::Vec1;

use crate::error::{ErrorCode, Result};
use crate::parser::Parser;
use crate::transport::Transport;

impl<T: Transport> Parser<'_, T> {
    /// Parses one full request: tag, command name, command-specific
    /// arguments, end of line.
    pub fn command(&mut self) -> Result<Command> {
        let tag = self.xtag()?;
        self.xspace()?;
        let name = self.xcommand()?;

        let body = match name.as_str() {
            "CAPABILITY" => CommandBody::Capability,
            "NOOP" => CommandBody::Noop,
            "LOGOUT" => CommandBody::Logout,
            "STARTTLS" => CommandBody::StartTls,
            "CHECK" => CommandBody::Check,
            "CLOSE" => CommandBody::Close,
            "UNSELECT" => CommandBody::Unselect,
            "IDLE" => CommandBody::Idle,
            "NAMESPACE" => CommandBody::Namespace,
            "EXPUNGE" => CommandBody::Expunge { uid_set: None },
            "UID EXPUNGE" => self.uid_expunge()?,
            "LOGIN" => self.login()?,
            "AUTHENTICATE" => self.authenticate()?,
            "ENABLE" => self.enable()?,
            "SELECT" => self.select_examine(true)?,
            "EXAMINE" => self.select_examine(false)?,
            "CREATE" => CommandBody::Create {
                mailbox: self.xspace_mailbox()?,
            },
            "DELETE" => CommandBody::Delete {
                mailbox: self.xspace_mailbox()?,
            },
            "SUBSCRIBE" => CommandBody::Subscribe {
                mailbox: self.xspace_mailbox()?,
            },
            "UNSUBSCRIBE" => CommandBody::Unsubscribe {
                mailbox: self.xspace_mailbox()?,
            },
            "RENAME" => self.rename()?,
            "LIST" => self.list()?,
            "LSUB" => self.lsub()?,
            "STATUS" => self.status()?,
            "APPEND" => self.append()?,
            "SEARCH" => self.search(false)?,
            "UID SEARCH" => self.search(true)?,
            "FETCH" => self.fetch(false)?,
            "UID FETCH" => self.fetch(true)?,
            "STORE" => self.store(false)?,
            "UID STORE" => self.store(true)?,
            "COPY" => self.copy_move(false, false)?,
            "UID COPY" => self.copy_move(true, false)?,
            "MOVE" => self.copy_move(false, true)?,
            "UID MOVE" => self.copy_move(true, true)?,
            _ => return self.fail("unknown command"),
        };

        self.xempty()?;
        Ok(Command { tag, name, body })
    }

    fn xspace_mailbox(&mut self) -> Result<String> {
        self.xspace()?;
        self.xmailbox()
    }

    /// `uid-expunge = "UID EXPUNGE" SP sequence-set`
    fn uid_expunge(&mut self) -> Result<CommandBody> {
        self.xspace()?;
        Ok(CommandBody::Expunge {
            uid_set: Some(self.xnum_set()?),
        })
    }

    /// `login = "LOGIN" SP userid SP password`
    fn login(&mut self) -> Result<CommandBody> {
        self.xspace()?;
        let username = self.xastring()?;
        self.xspace()?;
        let password = self.xastring()?;
        Ok(CommandBody::Login { username, password })
    }

    /// `authenticate = "AUTHENTICATE" SP auth-type [SP initial-resp]`
    ///
    /// The initial response is base64 on the rest of the line; a lone `=`
    /// stands for an empty response.
    fn authenticate(&mut self) -> Result<CommandBody> {
        self.xspace()?;
        let mechanism = self.xatom()?.to_ascii_uppercase();
        let initial = if self.space() {
            let rest = self.xtakeall();
            if rest == b"=" {
                Some(Vec::new())
            } else {
                match BASE64.decode(&rest) {
                    Ok(decoded) => Some(decoded),
                    Err(err) => return self.fail(format!("parsing base64 initial response: {err}")),
                }
            }
        } else {
            None
        };
        Ok(CommandBody::Authenticate { mechanism, initial })
    }

    /// `enable = "ENABLE" 1*(SP capability)`
    fn enable(&mut self) -> Result<CommandBody> {
        self.xspace()?;
        let mut capabilities = vec![self.xatom()?.to_ascii_uppercase()];
        while self.space() {
            capabilities.push(self.xatom()?.to_ascii_uppercase());
        }
        Ok(CommandBody::Enable {
            capabilities: Vec1::unvalidated(capabilities),
        })
    }

    /// `select = "SELECT" SP mailbox [SP "(" select-params ")"]`, and the
    /// same shape for EXAMINE. Parameter values are validated and dropped.
    fn select_examine(&mut self, select: bool) -> Result<CommandBody> {
        self.xspace()?;
        let mailbox = self.xmailbox()?;
        let params = if self.space() {
            self.xtagged_ext_list()?
        } else {
            Vec::new()
        };
        Ok(if select {
            CommandBody::Select { mailbox, params }
        } else {
            CommandBody::Examine { mailbox, params }
        })
    }

    /// `rename = "RENAME" SP mailbox SP mailbox`
    fn rename(&mut self) -> Result<CommandBody> {
        self.xspace()?;
        let from = self.xmailbox()?;
        self.xspace()?;
        let to = self.xmailbox()?;
        Ok(CommandBody::Rename { from, to })
    }

    /// `list = "LIST" [SP "(" selection-options ")"] SP mailbox SP
    /// (list-mailbox / "(" list-mailbox *(SP list-mailbox) ")")
    /// [SP "RETURN" SP "(" return-options ")"]`
    fn list(&mut self) -> Result<CommandBody> {
        self.xspace()?;
        let mut select_opts = Vec::new();
        if self.take("(") {
            while !self.take(")") {
                if !select_opts.is_empty() {
                    self.xspace()?;
                }
                let w = self.xtakelist(&["SUBSCRIBED", "REMOTE", "RECURSIVEMATCH"])?;
                select_opts.push(match w {
                    "SUBSCRIBED" => ListSelectOpt::Subscribed,
                    "REMOTE" => ListSelectOpt::Remote,
                    "RECURSIVEMATCH" => ListSelectOpt::RecursiveMatch,
                    _ => unreachable!(),
                });
            }
            self.xspace()?;
        }
        let reference = self.xmailbox()?;
        self.xspace()?;
        let (patterns, _) = self.xmbox_or_pat()?;
        let return_opts = if self.space() {
            self.xtake("RETURN")?;
            self.xspace()?;
            self.xtagged_ext_list()?
        } else {
            Vec::new()
        };
        Ok(CommandBody::List {
            select_opts,
            reference,
            patterns: Vec1::unvalidated(patterns),
            return_opts,
        })
    }

    /// `lsub = "LSUB" SP mailbox SP list-mailbox`
    fn lsub(&mut self) -> Result<CommandBody> {
        self.xspace()?;
        let reference = self.xmailbox()?;
        self.xspace()?;
        let pattern = self.xlist_mailbox()?;
        Ok(CommandBody::Lsub { reference, pattern })
    }

    /// `status = "STATUS" SP mailbox SP "(" status-att *(SP status-att) ")"`
    fn status(&mut self) -> Result<CommandBody> {
        self.xspace()?;
        let mailbox = self.xmailbox()?;
        self.xspace()?;
        self.xtake("(")?;
        let mut attrs = vec![self.xstatus_att()?];
        while self.space() {
            attrs.push(self.xstatus_att()?);
        }
        self.xtake(")")?;
        Ok(CommandBody::Status {
            mailbox,
            attrs: Vec1::unvalidated(attrs),
        })
    }

    /// `append = "APPEND" SP mailbox [SP flag-list] [SP date-time] SP
    /// literal`
    ///
    /// The message literal is the one place the binary `~{n}` form is
    /// accepted, and the one place the message-size ceiling applies.
    fn append(&mut self) -> Result<CommandBody> {
        self.xspace()?;
        let mailbox = self.xmailbox()?;
        self.xspace()?;
        let flags = if self.has_prefix("(") {
            let flags = self.xflag_list()?;
            self.xspace()?;
            flags
        } else {
            Vec::new()
        };
        let date = if self.has_prefix("\"") {
            let date = self.xdate_time()?;
            self.xspace()?;
            Some(date)
        } else {
            None
        };
        let message = self.xliteral(self.limits.max_message_size, true)?;
        Ok(CommandBody::Append {
            mailbox,
            flags,
            date,
            message,
        })
    }

    /// `search = "SEARCH" [SP "CHARSET" SP charset] 1*(SP search-key)`
    ///
    /// Only US-ASCII and UTF-8 are accepted as charsets.
    fn search(&mut self, uid: bool) -> Result<CommandBody> {
        self.xspace()?;
        let mut charset = None;
        if self.take("CHARSET ") {
            let cs = self.xastring()?.to_ascii_uppercase();
            if cs != "US-ASCII" && cs != "UTF-8" {
                return Err(self.error_with(
                    "only US-ASCII and UTF-8 supported",
                    Some(ErrorCode::BadCharset),
                    None,
                ));
            }
            charset = Some(cs);
            self.xspace()?;
        }
        let mut criteria = vec![self.xsearch_key()?];
        while self.space() {
            criteria.push(self.xsearch_key()?);
        }
        Ok(CommandBody::Search {
            uid,
            charset,
            criteria: Vec1::unvalidated(criteria),
        })
    }

    /// `fetch = "FETCH" SP sequence-set SP fetch-atts [SP "(" fetch-modifiers
    /// ")"]`
    fn fetch(&mut self, uid: bool) -> Result<CommandBody> {
        self.xspace()?;
        let set = self.xnum_set()?;
        self.xspace()?;
        let atts = self.xfetch_atts()?;
        let modifiers = if self.space() {
            self.xtagged_ext_list()?
        } else {
            Vec::new()
        };
        Ok(CommandBody::Fetch {
            uid,
            set,
            atts,
            modifiers,
        })
    }

    /// `store = "STORE" SP sequence-set [SP "(" store-modifiers ")"] SP
    /// ["+" / "-"] "FLAGS" [".SILENT"] SP (flag-list / flag *(SP flag))`
    fn store(&mut self, uid: bool) -> Result<CommandBody> {
        self.xspace()?;
        let set = self.xnum_set()?;
        self.xspace()?;
        let modifiers = if self.has_prefix("(") {
            let modifiers = self.xtagged_ext_list()?;
            self.xspace()?;
            modifiers
        } else {
            Vec::new()
        };
        let action = match self.takelist(&["+", "-"]) {
            Some("+") => StoreAction::Add,
            Some("-") => StoreAction::Remove,
            _ => StoreAction::Replace,
        };
        self.xtake("FLAGS")?;
        let silent = self.take(".SILENT");
        self.xspace()?;
        let flags = if self.has_prefix("(") {
            self.xflag_list()?
        } else {
            let mut flags = vec![self.xflag()?];
            while self.space() {
                flags.push(self.xflag()?);
            }
            flags
        };
        Ok(CommandBody::Store {
            uid,
            set,
            modifiers,
            action,
            silent,
            flags,
        })
    }

    /// `copy = "COPY" SP sequence-set SP mailbox`, and the same shape for
    /// MOVE.
    fn copy_move(&mut self, uid: bool, mv: bool) -> Result<CommandBody> {
        self.xspace()?;
        let set = self.xnum_set()?;
        self.xspace()?;
        let mailbox = self.xmailbox()?;
        Ok(if mv {
            CommandBody::Move { uid, set, mailbox }
        } else {
            CommandBody::Copy { uid, set, mailbox }
        })
    }
}
