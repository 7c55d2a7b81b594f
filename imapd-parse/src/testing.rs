//! A scripted transport for unit tests.

use std::collections::VecDeque;
use std::io;

use crate::transport::{Capability, Transport};

/// Serves pre-arranged literal data and continuation lines, recording what
/// the parser asked for.
#[derive(Default)]
pub(crate) struct FakeConn {
    pub lines: VecDeque<Vec<u8>>,
    pub literals: VecDeque<Vec<u8>>,
    /// The `sync` flag of each literal read, in request order.
    pub prompts: Vec<bool>,
    /// The size of each literal read, in request order.
    pub literal_sizes: Vec<u64>,
    pub account: Option<String>,
    pub rev2: bool,
}

impl FakeConn {
    /// A connection scripted with one literal and the (often empty)
    /// command-line fragment following it.
    pub fn with_literal(data: &[u8], next_line: &[u8]) -> Self {
        Self {
            lines: VecDeque::from([next_line.to_vec()]),
            literals: VecDeque::from([data.to_vec()]),
            ..Self::default()
        }
    }
}

impl Transport for FakeConn {
    fn read_literal(&mut self, size: u64, sync: bool) -> io::Result<Vec<u8>> {
        self.prompts.push(sync);
        self.literal_sizes.push(size);
        let data = self
            .literals
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted literal"))?;
        assert_eq!(data.len() as u64, size, "scripted literal has the wrong size");
        Ok(data)
    }

    fn read_line(&mut self) -> io::Result<Vec<u8>> {
        self.lines
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted line"))
    }

    fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    fn enabled(&self, cap: Capability) -> bool {
        match cap {
            Capability::Imap4Rev2 => self.rev2,
        }
    }
}
