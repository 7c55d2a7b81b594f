//! ASCII character classes of the request grammar, and the byte-preserving
//! upper-caser used to build the cursor's case-folded view.

/// `CHAR`: any byte 0x01..=0x7f.
pub(crate) fn is_char(b: u8) -> bool {
    (0x01..=0x7f).contains(&b)
}

/// `CTL`: control bytes 0x01..=0x19.
pub(crate) fn is_ctl(b: u8) -> bool {
    (0x01..=0x19).contains(&b)
}

pub(crate) fn is_quoted_special(b: u8) -> bool {
    b == b'"' || b == b'\\'
}

pub(crate) fn is_resp_special(b: u8) -> bool {
    b == b']'
}

pub(crate) fn is_list_wildcard(b: u8) -> bool {
    b == b'%' || b == b'*'
}

/// `ATOM-CHAR`: CHAR minus controls, delimiters, wildcards and specials.
pub(crate) fn is_atom_char(b: u8) -> bool {
    is_char(b)
        && !is_ctl(b)
        && !matches!(b, b'(' | b')' | b'{' | b' ')
        && !is_list_wildcard(b)
        && !is_quoted_special(b)
        && !is_resp_special(b)
}

/// `ASTRING-CHAR`: ATOM-CHAR plus `]`.
pub(crate) fn is_astring_char(b: u8) -> bool {
    is_atom_char(b) || is_resp_special(b)
}

/// `list-char`: ASTRING-CHAR plus the list wildcards, for unquoted LIST
/// patterns.
pub(crate) fn is_list_char(b: u8) -> bool {
    is_atom_char(b) || is_list_wildcard(b) || is_resp_special(b)
}

/// Upper-cases only the bytes a-z.
///
/// A full Unicode upper-caser would replace invalid bytes with replacement
/// characters and could change the byte length, breaking the requirement that
/// offsets into the original and upper-cased views point at the same
/// character. This fold keeps every other byte, including non-UTF-8 input,
/// exactly as is.
pub(crate) fn to_upper(s: &[u8]) -> Vec<u8> {
    let mut r = s.to_vec();
    for b in &mut r {
        if (b'a'..=b'z').contains(b) {
            *b -= 0x20;
        }
    }
    r
}

/// Canonical MIME header casing: the first letter and every letter following
/// a hyphen upper-cased, the rest lowered (`content-type` -> `Content-Type`).
/// Names containing bytes that are not valid header-field bytes are returned
/// unchanged.
pub(crate) fn canonical_header_name(name: &str) -> String {
    fn is_token_char(b: u8) -> bool {
        b.is_ascii_alphanumeric()
            || matches!(
                b,
                b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'^'
                    | b'_' | b'`' | b'|' | b'~'
            )
    }

    if !name.bytes().all(is_token_char) {
        return name.to_string();
    }

    let mut r = String::with_capacity(name.len());
    let mut upper = true;
    for b in name.bytes() {
        let c = if upper {
            b.to_ascii_uppercase()
        } else {
            b.to_ascii_lowercase()
        };
        r.push(c as char);
        upper = b == b'-';
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_char() {
        assert!(is_atom_char(b'a'));
        assert!(is_atom_char(b'Z'));
        assert!(is_atom_char(b'0'));
        assert!(is_atom_char(b'.'));
        assert!(is_atom_char(b'$'));

        assert!(!is_atom_char(b' '));
        assert!(!is_atom_char(b'('));
        assert!(!is_atom_char(b')'));
        assert!(!is_atom_char(b'{'));
        assert!(!is_atom_char(b'%'));
        assert!(!is_atom_char(b'*'));
        assert!(!is_atom_char(b'"'));
        assert!(!is_atom_char(b'\\'));
        assert!(!is_atom_char(b']'));
        assert!(!is_atom_char(0x01));
        assert!(!is_atom_char(0x80));
        assert!(!is_atom_char(0x00));
    }

    #[test]
    fn test_astring_char() {
        assert!(is_astring_char(b']'));
        assert!(!is_astring_char(b'%'));
    }

    #[test]
    fn test_to_upper_preserves_offsets() {
        // Non-ASCII and control bytes must survive untouched so that the
        // original and folded views stay bit-aligned.
        let input: Vec<u8> = (0u8..=255).collect();
        let upper = to_upper(&input);

        assert_eq!(input.len(), upper.len());
        for (i, (&o, &u)) in input.iter().zip(upper.iter()).enumerate() {
            if (b'a'..=b'z').contains(&o) {
                assert_eq!(u, o - 0x20, "byte {i}");
            } else {
                assert_eq!(u, o, "byte {i}");
            }
        }
    }

    #[test]
    fn test_canonical_header_name() {
        assert_eq!(canonical_header_name("from"), "From");
        assert_eq!(canonical_header_name("CONTENT-TYPE"), "Content-Type");
        assert_eq!(canonical_header_name("x-my-header"), "X-My-Header");
        // Invalid header bytes: returned as given.
        assert_eq!(canonical_header_name("a b"), "a b");
    }
}
