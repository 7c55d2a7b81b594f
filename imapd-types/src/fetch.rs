//! FETCH attributes and the section specifiers used by BODY and BINARY.

use std::fmt;
use std::num::NonZeroU32;

use crate::core::Vec1;

/// `section-msgtext`: a top-level (or MESSAGE/RFC822 part) text selector.
///
/// The header-field lists carry canonicalised header names and are non-empty
/// by grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionMsgtext {
    Header,
    HeaderFields(Vec1<String>),
    HeaderFieldsNot(Vec1<String>),
    Text,
}

/// `section-text`: what follows a part path after the final dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionText {
    Mime,
    Msgtext(SectionMsgtext),
}

/// A part path into the MIME structure, e.g. `1.2.3`, with an optional
/// trailing text selector (`1.2.MIME`, `1.2.HEADER`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPart {
    pub part: Vec1<NonZeroU32>,
    pub text: Option<SectionText>,
}

/// The contents of a `[...]` section in a BODY fetch attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionSpec {
    /// `[]`: the entire message.
    Empty,
    Msgtext(SectionMsgtext),
    Part(SectionPart),
}

/// `<offset.count>`: an octet range limiting a BODY or BINARY fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partial {
    pub offset: u32,
    pub count: NonZeroU32,
}

/// The name of a fetch attribute, after stripping a `.PEEK` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchField {
    Envelope,
    Flags,
    InternalDate,
    Rfc822Size,
    BodyStructure,
    Uid,
    Body,
    Binary,
    BinarySize,
    Rfc822Header,
    Rfc822Text,
    Rfc822,
}

impl FetchField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Envelope => "ENVELOPE",
            Self::Flags => "FLAGS",
            Self::InternalDate => "INTERNALDATE",
            Self::Rfc822Size => "RFC822.SIZE",
            Self::BodyStructure => "BODYSTRUCTURE",
            Self::Uid => "UID",
            Self::Body => "BODY",
            Self::Binary => "BINARY",
            Self::BinarySize => "BINARY.SIZE",
            Self::Rfc822Header => "RFC822.HEADER",
            Self::Rfc822Text => "RFC822.TEXT",
            Self::Rfc822 => "RFC822",
        }
    }
}

impl fmt::Display for FetchField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One parsed fetch attribute.
///
/// `section` is only set for BODY; `section_binary` only for BINARY and
/// BINARY.SIZE (where an empty list is the valid `[]` form); `partial` only
/// for BODY and BINARY.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchAtt {
    pub field: FetchField,
    /// True iff the attribute was spelled with a `.PEEK` suffix.
    pub peek: bool,
    pub section: Option<SectionSpec>,
    pub section_binary: Option<Vec<NonZeroU32>>,
    pub partial: Option<Partial>,
}

impl FetchAtt {
    /// A bare attribute with no section or partial, as produced by the
    /// ALL/FAST/FULL macros.
    pub fn bare(field: FetchField) -> Self {
        Self {
            field,
            peek: false,
            section: None,
            section_binary: None,
            partial: None,
        }
    }
}
