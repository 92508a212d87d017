//! Character classifiers: pure predicates over a single UTF-16 code unit.
//!
//! These mirror the classifier functions in the C++ reference this crate's
//! algorithm was distilled from (`isQuote`, `isDelimiter`, `isUrlChar`, ...).
//! None of them touch parser state; they are free functions over `u16` so
//! the recognizers that use them stay readable as boolean expressions.

#[inline]
pub fn is_hex(c: u16) -> bool {
    u8::try_from(c).is_ok_and(|b| b.is_ascii_hexdigit())
}

#[inline]
pub fn is_digit(c: u16) -> bool {
    (b'0' as u16..=b'9' as u16).contains(&c)
}

/// Code units considered "valid" inside a string body without further escaping
/// (everything at or above the C0 control range).
#[inline]
pub fn is_valid_string_character(c: u16) -> bool {
    c >= 0x20
}

/// The general delimiter set.
#[inline]
pub fn is_delimiter(c: u16) -> bool {
    matches!(
        c,
        0x2C /* , */ | 0x3A /* : */ | 0x5B /* [ */ | 0x5D /* ] */ | 0x2F /* / */
        | 0x7B /* { */ | 0x7D /* } */ | 0x28 /* ( */ | 0x29 /* ) */ | 0x0A /* \n */
        | 0x2B /* + */
    )
}

/// The narrower delimiter set used while scanning an unquoted string run:
/// colon and parens are not terminators here, since unquoted values may
/// legitimately contain them (URLs, bare function-like tokens).
#[inline]
pub fn is_unquoted_string_delimiter(c: u16) -> bool {
    matches!(
        c,
        0x2C /* , */ | 0x5B /* [ */ | 0x5D /* ] */ | 0x2F /* / */
        | 0x7B /* { */ | 0x7D /* } */ | 0x0A /* \n */ | 0x2B /* + */
    )
}

#[inline]
pub fn is_function_name_char_start(c: u16) -> bool {
    (b'a' as u16..=b'z' as u16).contains(&c)
        || (b'A' as u16..=b'Z' as u16).contains(&c)
        || c == b'_' as u16
        || c == b'$' as u16
}

#[inline]
pub fn is_function_name_char(c: u16) -> bool {
    is_function_name_char_start(c) || is_digit(c)
}

#[inline]
pub fn is_start_of_value(c: u16) -> bool {
    c == b'"' as u16
        || c == b'\'' as u16
        || c == b'{' as u16
        || c == b'[' as u16
        || c == b'-' as u16
        || is_digit(c)
        || is_function_name_char_start(c)
}

#[inline]
pub fn is_control_character(c: u16) -> bool {
    matches!(c, 0x0A | 0x0D | 0x09 | 0x08 | 0x0C)
}

/// ASCII whitespace families, including the newline. The `_except_newline`
/// variant is used by callers that must not swallow a line boundary (e.g.
/// while peeking past a just-closed string).
#[inline]
pub fn is_whitespace(c: u16) -> bool {
    matches!(c, 0x20 | 0x0A | 0x09 | 0x0D)
}

#[inline]
pub fn is_whitespace_except_newline(c: u16) -> bool {
    matches!(c, 0x20 | 0x09 | 0x0D)
}

/// Unicode "special" whitespace variants that collapse to a single ASCII
/// space in the output (NBSP, the U+2000-U+200A family, narrow/medium
/// mathematical spaces, ideographic space).
#[inline]
pub fn is_special_whitespace(c: u16) -> bool {
    c == 0x00A0 || (0x2000..=0x200A).contains(&c) || c == 0x202F || c == 0x205F || c == 0x3000
}

#[inline]
pub fn is_double_quote(c: u16) -> bool {
    matches!(c, 0x22 /* " */ | 0x201C /* “ */ | 0x201D /* ” */)
}

#[inline]
pub fn is_single_quote(c: u16) -> bool {
    matches!(c, 0x27 /* ' */ | 0x60 /* ` */ | 0x2018 /* ‘ */ | 0x2019 /* ’ */)
}

#[inline]
pub fn is_quote(c: u16) -> bool {
    is_double_quote(c) || is_single_quote(c)
}

const URL_SCHEME_PREFIXES: &[&str] = &[
    "http://", "https://", "ftp://", "mailto:", "file://", "data:", "irc://",
];

/// Whether a short lookahead string begins with a recognized URL scheme prefix.
pub fn is_url_start(s: &str) -> bool {
    URL_SCHEME_PREFIXES.iter().any(|p| s.starts_with(p))
}

#[inline]
pub fn is_url_char(c: u16) -> bool {
    (b'A' as u16..=b'Z' as u16).contains(&c)
        || (b'a' as u16..=b'z' as u16).contains(&c)
        || is_digit(c)
        || matches!(
            c,
            0x2D /* - */ | 0x2E /* . */ | 0x5F /* _ */ | 0x7E /* ~ */ | 0x3A /* : */
            | 0x2F /* / */ | 0x3F /* ? */ | 0x23 /* # */ | 0x40 /* @ */ | 0x21 /* ! */
            | 0x24 /* $ */ | 0x26 /* & */ | 0x27 /* ' */ | 0x28 /* ( */ | 0x29 /* ) */
            | 0x2A /* * */ | 0x2B /* + */ | 0x2C /* , */ | 0x3B /* ; */ | 0x3D /* = */
        )
}
