//! Modified UTF-7 decoding of mailbox names.
//!
//! Pre-IMAP4rev2 clients encode non-ASCII mailbox names in a UTF-7 variant:
//! `&` shifts into a base64 section (standard alphabet with `,` in place of
//! `/`, no padding) holding UTF-16BE code units, `-` shifts out, and `&-`
//! stands for a literal `&`.

use base64::alphabet::Alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use thiserror::Error;

const UTF7_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+,";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum Utf7Error {
    #[error("missing dash after encoded section")]
    UnterminatedShift,
    #[error("invalid base64 in encoded section")]
    BadBase64,
    #[error("invalid utf-16 in encoded section")]
    BadUtf16,
}

fn engine() -> GeneralPurpose {
    // # Safety
    //
    // `unwrap` is safe, the alphabet literal is 64 unique ASCII characters.
    let alphabet = Alphabet::new(UTF7_ALPHABET).unwrap();
    GeneralPurpose::new(
        &alphabet,
        GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::RequireNone),
    )
}

/// Decodes a modified-UTF-7 mailbox name. Plain characters pass through
/// unchanged, so a name without `&` always decodes to itself.
pub(crate) fn decode(s: &str) -> Result<String, Utf7Error> {
    let engine = engine();
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '&' {
            out.push(c);
            continue;
        }

        let mut b64 = String::new();
        let mut terminated = false;
        for c in chars.by_ref() {
            if c == '-' {
                terminated = true;
                break;
            }
            b64.push(c);
        }
        if !terminated {
            return Err(Utf7Error::UnterminatedShift);
        }
        if b64.is_empty() {
            out.push('&');
            continue;
        }

        let bytes = engine.decode(b64.as_bytes()).map_err(|_| Utf7Error::BadBase64)?;
        if bytes.len() % 2 != 0 {
            return Err(Utf7Error::BadUtf16);
        }
        let units = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
        for c in char::decode_utf16(units) {
            out.push(c.map_err(|_| Utf7Error::BadUtf16)?);
        }
    }

    Ok(out)
}
