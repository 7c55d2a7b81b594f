//! The parsed request envelope and per-command argument payloads.

use chrono::{DateTime, FixedOffset};

use crate::core::Vec1;
use crate::fetch::FetchAtt;
use crate::flag::Flag;
use crate::search::SearchKey;
use crate::sequence::NumSet;
use crate::status::StatusAttr;

/// A fully parsed client request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The client-chosen tag, echoed in the response.
    pub tag: String,
    /// The upper-cased command name as it appeared on the wire; two words for
    /// the `UID` subcommands (e.g. `UID FETCH`).
    pub name: String,
    pub body: CommandBody,
}

/// What to do when STORE changes flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    /// `+FLAGS`
    Add,
    /// `-FLAGS`
    Remove,
    /// `FLAGS`
    Replace,
}

/// Extended-LIST selection options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSelectOpt {
    Subscribed,
    Remote,
    RecursiveMatch,
}

/// Command-specific arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandBody {
    Capability,
    Noop,
    Logout,
    StartTls,
    Check,
    Close,
    Unselect,
    Idle,
    Namespace,
    /// Plain EXPUNGE has no arguments; UID EXPUNGE carries a UID set.
    Expunge { uid_set: Option<NumSet> },
    Login {
        username: String,
        password: String,
    },
    Authenticate {
        mechanism: String,
        /// Decoded initial response, when present. `=` on the wire decodes to
        /// an empty response.
        initial: Option<Vec<u8>>,
    },
    Enable {
        capabilities: Vec1<String>,
    },
    Select {
        mailbox: String,
        /// Parameter labels such as `CONDSTORE`; values are not retained.
        params: Vec<String>,
    },
    Examine {
        mailbox: String,
        params: Vec<String>,
    },
    Create { mailbox: String },
    Delete { mailbox: String },
    Rename {
        from: String,
        to: String,
    },
    Subscribe { mailbox: String },
    Unsubscribe { mailbox: String },
    List {
        select_opts: Vec<ListSelectOpt>,
        reference: String,
        patterns: Vec1<String>,
        /// RETURN option labels; values are not retained.
        return_opts: Vec<String>,
    },
    Lsub {
        reference: String,
        pattern: String,
    },
    Status {
        mailbox: String,
        attrs: Vec1<StatusAttr>,
    },
    Append {
        mailbox: String,
        flags: Vec<Flag>,
        date: Option<DateTime<FixedOffset>>,
        /// Raw message octets, exactly as received in the literal.
        message: Vec<u8>,
    },
    Search {
        uid: bool,
        charset: Option<String>,
        criteria: Vec1<SearchKey>,
    },
    Fetch {
        uid: bool,
        set: NumSet,
        atts: Vec1<FetchAtt>,
        /// Fetch modifier labels such as `CHANGEDSINCE`; values are not
        /// retained.
        modifiers: Vec<String>,
    },
    Store {
        uid: bool,
        set: NumSet,
        modifiers: Vec<String>,
        action: StoreAction,
        silent: bool,
        flags: Vec<Flag>,
    },
    Copy {
        uid: bool,
        set: NumSet,
        mailbox: String,
    },
    Move {
        uid: bool,
        set: NumSet,
        mailbox: String,
    },
}
