//! FETCH attributes and the BODY/BINARY section specifiers.

use std::num::NonZeroU32;

use imapd_types::core::Vec1;
use imapd_types::fetch::{
    FetchAtt, FetchField, Partial, SectionMsgtext, SectionPart, SectionSpec, SectionText,
};

use crate::chars::canonical_header_name;
use crate::error::Result;
use crate::parser::Parser;
use crate::transport::Transport;

// Longest match first: BODY.PEEK before BODY, BINARY.PEEK and BINARY.SIZE
// before BINARY, the RFC822 suffixes before RFC822. BODYSTRUCTURE precedes
// BODY.* so it can never be misread as BODY.
const FETCH_ATT_WORDS: [&str; 14] = [
    "ENVELOPE",
    "FLAGS",
    "INTERNALDATE",
    "RFC822.SIZE",
    "BODYSTRUCTURE",
    "UID",
    "BODY.PEEK",
    "BODY",
    "BINARY.PEEK",
    "BINARY.SIZE",
    "BINARY",
    "RFC822.HEADER",
    "RFC822.TEXT",
    "RFC822",
];

impl<T: Transport> Parser<'_, T> {
    /// `section-msgtext = "HEADER" / "HEADER.FIELDS" [".NOT"] SP header-list
    /// / "TEXT"`
    ///
    /// Header names are stored with canonical MIME casing.
    pub(crate) fn xsection_msgtext(&mut self) -> Result<SectionMsgtext> {
        self.context("section-msgtext", |p| {
            let w = p.xtakelist(&["HEADER.FIELDS.NOT", "HEADER.FIELDS", "HEADER", "TEXT"])?;
            match w {
                "HEADER" => Ok(SectionMsgtext::Header),
                "TEXT" => Ok(SectionMsgtext::Text),
                _ => {
                    p.xspace()?;
                    p.xtake("(")?;
                    let mut headers = vec![canonical_header_name(&p.xastring()?)];
                    loop {
                        if p.take(")") {
                            break;
                        }
                        p.xspace()?;
                        headers.push(canonical_header_name(&p.xastring()?));
                    }
                    let headers = Vec1::unvalidated(headers);
                    Ok(if w == "HEADER.FIELDS.NOT" {
                        SectionMsgtext::HeaderFieldsNot(headers)
                    } else {
                        SectionMsgtext::HeaderFields(headers)
                    })
                }
            }
        })
    }

    /// `section-spec = section-msgtext / (section-part ["." section-text])`
    pub(crate) fn xsection_spec(&mut self) -> Result<SectionSpec> {
        self.context("section-spec", |p| {
            let Some(n) = p.nznumber() else {
                return Ok(SectionSpec::Msgtext(p.xsection_msgtext()?));
            };

            p.context("section-part", |p| {
                let mut part = vec![n];
                let mut text = None;
                while p.take(".") {
                    if let Some(n) = p.nznumber() {
                        part.push(n);
                        continue;
                    }
                    if p.take("MIME") {
                        text = Some(SectionText::Mime);
                    } else {
                        text = Some(SectionText::Msgtext(p.xsection_msgtext()?));
                    }
                    break;
                }
                Ok(SectionSpec::Part(SectionPart {
                    part: Vec1::unvalidated(part),
                    text,
                }))
            })
        })
    }

    /// `section = "[" [section-spec] "]"`
    pub(crate) fn xsection(&mut self) -> Result<SectionSpec> {
        self.context("section", |p| {
            p.xtake("[")?;
            if p.take("]") {
                return Ok(SectionSpec::Empty);
            }
            let spec = p.xsection_spec()?;
            p.xtake("]")?;
            Ok(spec)
        })
    }

    /// `partial = "<" number "." nz-number ">"`
    pub(crate) fn xpartial(&mut self) -> Result<Partial> {
        self.xtake("<")?;
        let offset = self.xnumber()?;
        self.xtake(".")?;
        let count = self.xnznumber()?;
        self.xtake(">")?;
        Ok(Partial { offset, count })
    }

    /// `section-binary = "[" [nz-number *("." nz-number)] "]"`
    pub(crate) fn xsection_binary(&mut self) -> Result<Vec<NonZeroU32>> {
        self.xtake("[")?;
        if self.take("]") {
            return Ok(Vec::new());
        }
        let mut r = vec![self.xnznumber()?];
        while self.take(".") {
            r.push(self.xnznumber()?);
        }
        self.xtake("]")?;
        Ok(r)
    }

    /// `fetch-att`: one attribute keyword with its section/partial suffixes.
    pub fn xfetch_att(&mut self) -> Result<FetchAtt> {
        self.context("fetch-att", |p| {
            let w = p.xtakelist(&FETCH_ATT_WORDS)?;
            let peek = w.ends_with(".PEEK");
            let field = match w.trim_end_matches(".PEEK") {
                "ENVELOPE" => FetchField::Envelope,
                "FLAGS" => FetchField::Flags,
                "INTERNALDATE" => FetchField::InternalDate,
                "RFC822.SIZE" => FetchField::Rfc822Size,
                "BODYSTRUCTURE" => FetchField::BodyStructure,
                "UID" => FetchField::Uid,
                "BODY" => FetchField::Body,
                "BINARY.SIZE" => FetchField::BinarySize,
                "BINARY" => FetchField::Binary,
                "RFC822.HEADER" => FetchField::Rfc822Header,
                "RFC822.TEXT" => FetchField::Rfc822Text,
                "RFC822" => FetchField::Rfc822,
                _ => unreachable!(),
            };

            let mut att = FetchAtt::bare(field);
            att.peek = peek;
            match field {
                FetchField::Body => {
                    if p.has_prefix("[") {
                        att.section = Some(p.xsection()?);
                        if p.has_prefix("<") {
                            att.partial = Some(p.xpartial()?);
                        }
                    }
                }
                FetchField::Binary => {
                    att.section_binary = Some(p.xsection_binary()?);
                    if p.has_prefix("<") {
                        att.partial = Some(p.xpartial()?);
                    }
                }
                FetchField::BinarySize => {
                    att.section_binary = Some(p.xsection_binary()?);
                }
                _ => {}
            }
            Ok(att)
        })
    }

    /// `fetch-atts`: a single attribute, one of the ALL/FAST/FULL macros, or
    /// a parenthesised list.
    pub fn xfetch_atts(&mut self) -> Result<Vec1<FetchAtt>> {
        self.context("fetch-atts", |p| {
            use FetchField::*;

            if let Some(w) = p.takelist(&["ALL", "FAST", "FULL"]) {
                let fields: &[FetchField] = match w {
                    "ALL" => &[Flags, InternalDate, Rfc822Size, Envelope],
                    "FAST" => &[Flags, InternalDate, Rfc822Size],
                    "FULL" => &[Flags, InternalDate, Rfc822Size, Envelope, Body],
                    _ => unreachable!(),
                };
                return Ok(Vec1::unvalidated(
                    fields.iter().copied().map(FetchAtt::bare).collect(),
                ));
            }

            if !p.has_prefix("(") {
                return Ok(Vec1::from(p.xfetch_att()?));
            }

            p.xtake("(")?;
            let mut l = vec![p.xfetch_att()?];
            while p.take(" ") {
                l.push(p.xfetch_att()?);
            }
            p.xtake(")")?;
            Ok(Vec1::unvalidated(l))
        })
    }
}
