//! STATUS attributes.

use imapd_types::status::StatusAttr;

use crate::error::Result;
use crate::parser::Parser;
use crate::transport::Transport;

impl<T: Transport> Parser<'_, T> {
    /// `status-att`, one of the eight attribute names.
    pub fn xstatus_att(&mut self) -> Result<StatusAttr> {
        let w = self.xtakelist(&[
            "MESSAGES",
            "UIDNEXT",
            "UIDVALIDITY",
            "UNSEEN",
            "DELETED",
            "SIZE",
            "RECENT",
            "APPENDLIMIT",
        ])?;
        Ok(match w {
            "MESSAGES" => StatusAttr::Messages,
            "UIDNEXT" => StatusAttr::UidNext,
            "UIDVALIDITY" => StatusAttr::UidValidity,
            "UNSEEN" => StatusAttr::Unseen,
            "DELETED" => StatusAttr::Deleted,
            "SIZE" => StatusAttr::Size,
            "RECENT" => StatusAttr::Recent,
            "APPENDLIMIT" => StatusAttr::AppendLimit,
            _ => unreachable!(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeConn;

    #[test]
    fn test_status_att() {
        let mut conn = FakeConn::default();

        let mut p = Parser::new("uidnext", &mut conn);
        assert_eq!(p.xstatus_att().unwrap(), StatusAttr::UidNext);

        let mut p = Parser::new("UIDVALIDITY", &mut conn);
        assert_eq!(p.xstatus_att().unwrap(), StatusAttr::UidValidity);

        let mut p = Parser::new("BOGUS", &mut conn);
        assert!(p.xstatus_att().is_err());
    }
}
