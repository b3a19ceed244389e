//! Greedy ASCII number accumulation.
//!
//! The scanning routines here work on the unread tail of the buffer and report
//! how many bytes they consumed; the [`Scanner`](crate::Scanner) owns the
//! guard check and the cursor update. Integers accumulate in their target
//! width with wrapping arithmetic, so `"300"` read as `u8` yields `44`.

use crate::class;

/// Fixed-width integer accumulation.
pub(crate) trait Digits: Copy + Default {
    fn push_digit(self, digit: u8) -> Self;
    fn negate(self) -> Self;
}

macro_rules! impl_digits {
    ($($ty:ty),*) => {$(
        impl Digits for $ty {
            #[inline]
            #[allow(clippy::cast_possible_wrap, clippy::cast_lossless)]
            fn push_digit(self, digit: u8) -> Self {
                self.wrapping_mul(10).wrapping_add(digit as $ty)
            }

            #[inline]
            fn negate(self) -> Self {
                self.wrapping_neg()
            }
        }
    )*};
}

impl_digits!(i8, i16, i32, u8, u16, u32);

/// Accumulates consecutive digits from the start of `bytes`.
pub(crate) fn scan_unsigned<T: Digits>(bytes: &[u8]) -> (T, usize) {
    let mut acc = T::default();
    let mut consumed = 0;
    for &b in bytes.iter().take_while(|b| class::is_digit(**b)) {
        acc = acc.push_digit(b - b'0');
        consumed += 1;
    }
    (acc, consumed)
}

/// Like [`scan_unsigned`], after an optional leading `-`.
///
/// A lone `-` is consumed and yields zero.
pub(crate) fn scan_signed<T: Digits>(bytes: &[u8]) -> (T, usize) {
    let negative = bytes.first() == Some(&b'-');
    let sign = usize::from(negative);
    let (acc, digits) = scan_unsigned::<T>(&bytes[sign..]);
    let value = if negative { acc.negate() } else { acc };
    (value, sign + digits)
}

// Fractional digits past this scale no longer change an f64 mantissa.
const MAX_FRACTION_SCALE: f64 = 1e18;

/// Scans `[-]digits[(.|,)digits...]`.
///
/// Every `.` or `,` switches to (or stays in) the fractional stage, so
/// `"1.2.3"` reads as `1.23`. The leading `-` is only honoured when `signed`.
pub(crate) fn scan_float(bytes: &[u8], signed: bool) -> (f32, usize) {
    let negative = signed && bytes.first() == Some(&b'-');
    let mut consumed = usize::from(negative);
    let mut whole = 0f64;
    let mut fraction = 0f64;
    let mut scale = 1f64;
    let mut fractional = false;

    while let Some(&b) = bytes.get(consumed) {
        match b {
            b'.' | b',' => fractional = true,
            b'0'..=b'9' => {
                let digit = f64::from(b - b'0');
                if !fractional {
                    whole = whole * 10.0 + digit;
                } else if scale < MAX_FRACTION_SCALE {
                    fraction = fraction * 10.0 + digit;
                    scale *= 10.0;
                }
            }
            _ => break,
        }
        consumed += 1;
    }

    #[allow(clippy::cast_possible_truncation)]
    let value = (whole + fraction / scale) as f32;
    (if negative { -value } else { value }, consumed)
}

/// A value the scanner can read with [`Scanner::read`](crate::Scanner::read).
///
/// Implementations describe the lexical class of the first byte and a greedy
/// scan over the unread input. The scanner checks [`ScanValue::accepts`]
/// against the current byte first; when it fails, or the input is exhausted,
/// the read yields `Self::default()` and consumes nothing.
///
/// ```rust
/// use scanlet::{ScanValue, Scanner};
///
/// #[derive(Debug, Default, Clone, Copy, PartialEq)]
/// struct Hex(u8);
///
/// impl ScanValue for Hex {
///     fn accepts(byte: u8) -> bool {
///         byte.is_ascii_hexdigit()
///     }
///
///     fn scan(bytes: &[u8]) -> (Self, usize) {
///         let mut acc = 0u8;
///         let mut n = 0;
///         for b in bytes.iter().take_while(|b| b.is_ascii_hexdigit()) {
///             acc = acc.wrapping_mul(16) + (*b as char).to_digit(16).unwrap() as u8;
///             n += 1;
///         }
///         (Hex(acc), n)
///     }
/// }
///
/// let mut s = Scanner::from("1f;");
/// assert_eq!(s.read::<Hex>(), Hex(0x1f));
/// assert_eq!(s.current(), b';');
/// ```
pub trait ScanValue: Copy + Default {
    /// When `true`, reading this value only inspects the input unless
    /// [`ScannerOptions::consume_bool`](crate::ScannerOptions::consume_bool)
    /// is set.
    const LOOKAHEAD: bool = false;

    /// Whether `byte` may start a value of this type.
    fn accepts(byte: u8) -> bool;

    /// Scans a value from the start of `bytes`, returning it and the number of
    /// bytes it spans. Called only after [`ScanValue::accepts`] passed for
    /// `bytes[0]`.
    fn scan(bytes: &[u8]) -> (Self, usize);
}

impl ScanValue for bool {
    const LOOKAHEAD: bool = true;

    fn accepts(byte: u8) -> bool {
        matches!(byte, b'0' | b'1')
    }

    fn scan(bytes: &[u8]) -> (Self, usize) {
        (bytes.first() == Some(&b'1'), 1)
    }
}

macro_rules! impl_scan_value {
    (signed: $($ty:ty),*) => {$(
        impl ScanValue for $ty {
            fn accepts(byte: u8) -> bool {
                class::is_numeric(byte)
            }

            fn scan(bytes: &[u8]) -> (Self, usize) {
                scan_signed(bytes)
            }
        }
    )*};
    (unsigned: $($ty:ty),*) => {$(
        impl ScanValue for $ty {
            fn accepts(byte: u8) -> bool {
                class::is_digit(byte)
            }

            fn scan(bytes: &[u8]) -> (Self, usize) {
                scan_unsigned(bytes)
            }
        }
    )*};
}

impl_scan_value!(signed: i8, i16, i32);
impl_scan_value!(unsigned: u8, u16, u32);

impl ScanValue for f32 {
    fn accepts(byte: u8) -> bool {
        class::is_numeric(byte)
    }

    fn scan(bytes: &[u8]) -> (Self, usize) {
        scan_float(bytes, true)
    }
}
