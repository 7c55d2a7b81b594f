//! Flags and flag lists.

use imapd_types::flag::Flag;

use crate::error::Result;
use crate::parser::Parser;
use crate::transport::Transport;

impl<T: Transport> Parser<'_, T> {
    /// `flag`: an atom with an optional `\` or `$` prefix.
    ///
    /// Backslash flags must name one of the five known system flags, matched
    /// case-insensitively; anything else is rejected.
    pub fn xflag(&mut self) -> Result<Flag> {
        let prefix = self.takelist(&["\\", "$"]);
        let atom = self.xatom()?;
        match prefix {
            Some("\\") => match Flag::system(&atom) {
                Some(flag) => Ok(flag),
                None => self.fail(format!("unknown system flag \\{atom}")),
            },
            Some("$") => Ok(Flag::Keyword(format!("${atom}"))),
            _ => Ok(Flag::Keyword(atom)),
        }
    }

    /// `flag-list = "(" [flag *(SP flag)] ")"`
    pub fn xflag_list(&mut self) -> Result<Vec<Flag>> {
        self.xtake("(")?;
        let mut l = Vec::new();
        if !self.has_prefix(")") {
            l.push(self.xflag()?);
        }
        while !self.take(")") {
            self.xspace()?;
            l.push(self.xflag()?);
        }
        Ok(l)
    }
}
