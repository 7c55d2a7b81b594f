//! Whole-request parsing against a scripted transport.

use std::collections::VecDeque;
use std::io;

use imapd_parse::{Capability, ErrorCode, Limits, ParseError, Parser, Transport};
use imapd_types::command::{Command, CommandBody};
use imapd_types::core::Vec1;
use imapd_types::fetch::{FetchField, SectionMsgtext, SectionSpec};
use imapd_types::search::SearchKey;
use imapd_types::sequence::{NumRange, NumSet, SetNumber};
use imapd_types::status::StatusAttr;

/// Serves scripted literal data and continuation lines, recording every
/// transport interaction for assertions.
#[derive(Default)]
struct Scripted {
    lines: VecDeque<Vec<u8>>,
    literals: VecDeque<Vec<u8>>,
    prompts: Vec<bool>,
    literal_sizes: Vec<u64>,
    fail_reads: bool,
    rev2: bool,
}

impl Transport for Scripted {
    fn read_literal(&mut self, size: u64, sync: bool) -> io::Result<Vec<u8>> {
        if self.fail_reads {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "gone"));
        }
        self.prompts.push(sync);
        self.literal_sizes.push(size);
        let data = self
            .literals
            .pop_front()
            .expect("parser read a literal the script does not provide");
        assert_eq!(data.len() as u64, size);
        Ok(data)
    }

    fn read_line(&mut self) -> io::Result<Vec<u8>> {
        self.lines
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more lines"))
    }

    fn enabled(&self, cap: Capability) -> bool {
        match cap {
            Capability::Imap4Rev2 => self.rev2,
        }
    }
}

fn parse(line: &str) -> Command {
    let mut conn = Scripted::default();
    Parser::new(line, &mut conn)
        .command()
        .unwrap_or_else(|err| panic!("parsing {line:?}: {err}"))
}

fn nz(n: u32) -> SetNumber {
    SetNumber::Number(n.try_into().unwrap())
}

#[test]
fn login() {
    let cmd = parse("a001 LOGIN \"alice\" \"pw\"");
    assert_eq!(cmd.tag, "a001");
    assert_eq!(cmd.name, "LOGIN");
    assert_eq!(
        cmd.body,
        CommandBody::Login {
            username: "alice".into(),
            password: "pw".into(),
        }
    );
}

#[test]
fn uid_fetch_with_sections() {
    let cmd = parse("x UID FETCH 1:* (UID FLAGS BODY.PEEK[HEADER.FIELDS (From To)])");
    assert_eq!(cmd.tag, "x");
    assert_eq!(cmd.name, "UID FETCH");

    let CommandBody::Fetch {
        uid,
        set,
        atts,
        modifiers,
    } = cmd.body
    else {
        panic!("not a fetch");
    };
    assert!(uid);
    assert!(modifiers.is_empty());
    assert_eq!(
        set,
        NumSet::Ranges(Vec1::from(NumRange {
            first: nz(1),
            last: Some(SetNumber::Star),
        }))
    );

    let atts = atts.into_inner();
    assert_eq!(atts.len(), 3);
    assert_eq!(atts[0].field, FetchField::Uid);
    assert_eq!(atts[1].field, FetchField::Flags);
    assert_eq!(atts[2].field, FetchField::Body);
    assert!(atts[2].peek);
    assert_eq!(
        atts[2].section,
        Some(SectionSpec::Msgtext(SectionMsgtext::HeaderFields(
            Vec1::unvalidated(vec!["From".into(), "To".into()])
        )))
    );
}

#[test]
fn search_keys() {
    let cmd = parse("t SEARCH OR FROM \"a@b\" NOT SUBJECT \"x\" UID 1,3:5");

    let CommandBody::Search { uid, criteria, .. } = cmd.body else {
        panic!("not a search");
    };
    assert!(!uid);
    assert_eq!(
        criteria.into_inner(),
        vec![
            SearchKey::Or(
                Box::new(SearchKey::From("a@b".into())),
                Box::new(SearchKey::Not(Box::new(SearchKey::Subject("x".into())))),
            ),
            SearchKey::Uid(NumSet::Ranges(Vec1::unvalidated(vec![
                NumRange::single(nz(1)),
                NumRange {
                    first: nz(3),
                    last: Some(nz(5)),
                },
            ]))),
        ]
    );
}

#[test]
fn append_non_sync_literal() {
    let mut conn = Scripted {
        lines: VecDeque::from([b"".to_vec()]),
        literals: VecDeque::from([b"hello world".to_vec()]),
        ..Scripted::default()
    };

    let cmd = Parser::new("t APPEND INBOX {11+}", &mut conn)
        .command()
        .unwrap();

    assert_eq!(cmd.name, "APPEND");
    let CommandBody::Append {
        mailbox,
        flags,
        date,
        message,
    } = cmd.body
    else {
        panic!("not an append");
    };
    assert_eq!(mailbox, "INBOX");
    assert!(flags.is_empty());
    assert_eq!(date, None);
    assert_eq!(message, b"hello world");

    // Non-synchronising: no continuation prompt, exactly 11 octets read.
    assert_eq!(conn.prompts, vec![false]);
    assert_eq!(conn.literal_sizes, vec![11]);
}

#[test]
fn append_sync_literal_with_nul() {
    let mut conn = Scripted {
        lines: VecDeque::from([b"".to_vec()]),
        literals: VecDeque::from([b"a\x00b\x00c".to_vec()]),
        ..Scripted::default()
    };

    let cmd = Parser::new("t APPEND INBOX (\\Seen) ~{5}", &mut conn)
        .command()
        .unwrap();

    let CommandBody::Append { message, .. } = cmd.body else {
        panic!("not an append");
    };
    // Every octet arrives, NUL included.
    assert_eq!(message, b"a\x00b\x00c");
    assert_eq!(conn.prompts, vec![true]);
}

#[test]
fn append_with_flags_and_date() {
    let mut conn = Scripted {
        lines: VecDeque::from([b"".to_vec()]),
        literals: VecDeque::from([b"msg".to_vec()]),
        ..Scripted::default()
    };

    let cmd = Parser::new(
        "t APPEND Sent (\\Seen custom) \"07-Feb-1994 21:52:25 +0100\" {3+}",
        &mut conn,
    )
    .command()
    .unwrap();

    let CommandBody::Append {
        mailbox,
        flags,
        date,
        message,
    } = cmd.body
    else {
        panic!("not an append");
    };
    assert_eq!(mailbox, "Sent");
    assert_eq!(flags.len(), 2);
    let date = date.expect("date present");
    assert_eq!(date.offset().local_minus_utc(), 3600);
    assert_eq!(message, b"msg");
}

#[test]
fn append_over_max_literal_size() {
    let mut conn = Scripted::default();
    let limits = Limits {
        max_message_size: 100 * 1024,
        ..Limits::default()
    };

    let err = Parser::new("t APPEND INBOX {9999999999}", &mut conn)
        .with_limits(limits)
        .command()
        .unwrap_err();

    let syntax = err.syntax().expect("syntax error");
    assert_eq!(syntax.code, Some(ErrorCode::TooBig));
    assert_eq!(
        syntax.untagged.as_deref(),
        Some("* BYE [ALERT] Max literal size 9999999999 is larger than allowed 102400 in this context"),
    );
    // The octets were never requested from the transport.
    assert!(conn.literal_sizes.is_empty());
    assert!(conn.prompts.is_empty());
}

#[test]
fn status_attributes() {
    let cmd = parse("t STATUS INBOX (MESSAGES UIDNEXT)");
    assert_eq!(
        cmd.body,
        CommandBody::Status {
            mailbox: "INBOX".into(),
            attrs: Vec1::unvalidated(vec![StatusAttr::Messages, StatusAttr::UidNext]),
        }
    );
}

#[test]
fn case_insensitive_commands() {
    // Lower-casing the letters of a command yields the identical AST.
    let pairs = [
        ("t FETCH 1:* FULL", "t fetch 1:* full"),
        ("t STATUS INBOX (MESSAGES)", "t status INBOX (messages)"),
        ("t SEARCH SEEN UNSEEN", "t search seen unseen"),
        ("t STORE 3 +FLAGS.SILENT (\\Seen)", "t store 3 +flags.silent (\\seen)"),
    ];
    for (upper, lower) in pairs {
        assert_eq!(parse(upper), parse(lower), "{upper}");
    }
}

#[test]
fn mailbox_utf7_depends_on_rev2() {
    let mut conn = Scripted::default();
    let cmd = Parser::new("t SELECT Caf&AOk-", &mut conn).command().unwrap();
    assert!(matches!(
        cmd.body,
        CommandBody::Select { ref mailbox, .. } if mailbox == "Café"
    ));

    let mut conn = Scripted {
        rev2: true,
        ..Scripted::default()
    };
    let cmd = Parser::new("t SELECT Caf&AOk-", &mut conn).command().unwrap();
    assert!(matches!(
        cmd.body,
        CommandBody::Select { ref mailbox, .. } if mailbox == "Caf&AOk-"
    ));
}

#[test]
fn literal_mailbox_resumes_line() {
    // A literal in the middle of a command: the cursor continues on the next
    // line fragment after the octets.
    let mut conn = Scripted {
        lines: VecDeque::from([b" (MESSAGES)".to_vec()]),
        literals: VecDeque::from([b"INBOX".to_vec()]),
        ..Scripted::default()
    };

    let cmd = Parser::new("t STATUS {5}", &mut conn).command().unwrap();
    assert_eq!(
        cmd.body,
        CommandBody::Status {
            mailbox: "INBOX".into(),
            attrs: Vec1::from(StatusAttr::Messages),
        }
    );
    assert_eq!(conn.prompts, vec![true]);
}

#[test]
fn transport_errors_pass_through() {
    let mut conn = Scripted {
        fail_reads: true,
        ..Scripted::default()
    };

    let err = Parser::new("t APPEND INBOX {3+}", &mut conn)
        .command()
        .unwrap_err();

    match err {
        ParseError::Transport(io_err) => {
            assert_eq!(io_err.kind(), io::ErrorKind::ConnectionReset);
        }
        ParseError::Syntax(err) => panic!("expected transport error, got syntax: {err}"),
    }
}

#[test]
fn syntax_error_keeps_residual_input() {
    let mut conn = Scripted::default();
    let err = Parser::new("t FETCH 0 FULL", &mut conn)
        .command()
        .unwrap_err();

    let syntax = err.syntax().expect("syntax error");
    assert!(syntax.contexts.contains(&"sequence-set"));
    assert_eq!(syntax.remaining, "0 FULL");
}
