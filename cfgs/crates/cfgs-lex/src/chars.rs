//! Character classes of the configuration language.
//!
//! The grammar is ASCII-only. Every predicate here works on a single byte
//! and is pure; any byte outside the classes (including every byte of a
//! multi-byte UTF-8 sequence) simply fails to match.

/// Checks if a byte may start an identifier.
///
/// Identifier characters are ASCII letters plus `$`, `_`, `.` and `@`.
///
/// # Example
///
/// ```
/// use cfgs_lex::chars::is_ident_start;
///
/// assert!(is_ident_start(b'a'));
/// assert!(is_ident_start(b'@'));
/// assert!(is_ident_start(b'.'));
/// assert!(!is_ident_start(b'1'));
/// assert!(!is_ident_start(b'%'));
/// ```
#[inline]
pub const fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || matches!(c, b'$' | b'_' | b'.' | b'@')
}

/// Checks if a byte may continue an identifier.
///
/// This is the identifier-start class plus the decimal digits.
///
/// # Example
///
/// ```
/// use cfgs_lex::chars::is_ident_continue;
///
/// assert!(is_ident_continue(b'x'));
/// assert!(is_ident_continue(b'9'));
/// assert!(!is_ident_continue(b'-'));
/// ```
#[inline]
pub const fn is_ident_continue(c: u8) -> bool {
    is_ident_start(c) || is_dec_digit(c)
}

/// Alias for [`is_ident_continue`]; reads better at call sites that test
/// whether something "looks like a word".
#[inline]
pub const fn is_alnum(c: u8) -> bool {
    is_ident_continue(c)
}

/// Checks if a byte is a decimal digit (`0-9`).
#[inline]
pub const fn is_dec_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Checks if a byte is an octal digit (`0-7`).
#[inline]
pub const fn is_oct_digit(c: u8) -> bool {
    matches!(c, b'0'..=b'7')
}

/// Checks if a byte is a hexadecimal digit (`0-9`, `a-f`, `A-F`).
#[inline]
pub const fn is_hex_digit(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

/// Checks if a byte is a binary digit (`0` or `1`).
#[inline]
pub const fn is_bin_digit(c: u8) -> bool {
    matches!(c, b'0' | b'1')
}
