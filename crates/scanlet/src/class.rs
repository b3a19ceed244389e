//! Byte classes usable as [`Criterion`](crate::Criterion)s.
//!
//! All predicates work on raw 8-bit units and know nothing about encodings.

/// Printable range `32..=128`.
///
/// The upper bound includes `128` for compatibility with existing callers.
#[inline]
#[must_use]
pub fn is_printable(byte: u8) -> bool {
    (32..=128).contains(&byte)
}

/// ASCII letter or digit.
#[inline]
#[must_use]
pub fn is_alphanumeric(byte: u8) -> bool {
    is_letter(byte) || is_digit(byte)
}

/// `0` through `9`.
#[inline]
#[must_use]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Negation of [`is_digit`].
#[inline]
#[must_use]
pub fn is_not_digit(byte: u8) -> bool {
    !is_digit(byte)
}

/// A byte that can appear in a number: a digit, `.`, `,` or `-`.
#[inline]
#[must_use]
pub fn is_numeric(byte: u8) -> bool {
    is_digit(byte) || matches!(byte, b'.' | b',' | b'-')
}

/// ASCII letter of either case.
#[inline]
#[must_use]
pub fn is_letter(byte: u8) -> bool {
    is_upper_case_letter(byte) || is_lower_case_letter(byte)
}

/// Negation of [`is_letter`].
#[inline]
#[must_use]
pub fn is_not_letter(byte: u8) -> bool {
    !is_letter(byte)
}

/// `A` through `Z`.
#[inline]
#[must_use]
pub fn is_upper_case_letter(byte: u8) -> bool {
    byte.is_ascii_uppercase()
}

/// `a` through `z`.
#[inline]
#[must_use]
pub fn is_lower_case_letter(byte: u8) -> bool {
    byte.is_ascii_lowercase()
}

/// Printable, but neither a digit nor a letter.
#[inline]
#[must_use]
pub fn is_symbol(byte: u8) -> bool {
    is_printable(byte) && !is_digit(byte) && !is_letter(byte)
}

/// One of `| . , ; _ - # ?`, a space, or NUL.
#[inline]
#[must_use]
pub fn is_separator(byte: u8) -> bool {
    matches!(
        byte,
        b'|' | b'.' | b',' | b';' | b' ' | b'_' | b'-' | b'#' | b'?' | b'\0'
    )
}

/// `\n`.
#[inline]
#[must_use]
pub fn is_new_line(byte: u8) -> bool {
    byte == b'\n'
}

/// `\r`.
#[inline]
#[must_use]
pub fn is_carriage_return(byte: u8) -> bool {
    byte == b'\r'
}

/// [`is_separator`] or [`is_new_line`].
#[inline]
#[must_use]
pub fn is_separator_or_new_line(byte: u8) -> bool {
    is_separator(byte) || is_new_line(byte)
}
