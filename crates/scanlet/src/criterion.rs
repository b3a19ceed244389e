/// A single-byte matcher used wherever a literal delimiter could be used.
///
/// Implemented for `u8` (matches that exact byte) and for every
/// `FnMut(u8) -> bool`, so the predicates in [`crate::class`] and ad hoc
/// closures plug in directly:
///
/// ```rust
/// use scanlet::{Scanner, class};
///
/// let mut s = Scanner::from("abc123;");
/// s.jump_to(class::is_digit);
/// assert_eq!(s.current(), b'1');
/// s.jump_to(b';');
/// assert_eq!(s.position(), 6);
/// s.reset();
/// s.skip_while(|b: u8| b.is_ascii_lowercase());
/// assert_eq!(s.position(), 3);
/// ```
pub trait Criterion {
    /// Returns `true` when `byte` satisfies this criterion.
    fn matches(&mut self, byte: u8) -> bool;
}

impl Criterion for u8 {
    #[inline]
    fn matches(&mut self, byte: u8) -> bool {
        *self == byte
    }
}

impl<F> Criterion for F
where
    F: FnMut(u8) -> bool,
{
    #[inline]
    fn matches(&mut self, byte: u8) -> bool {
        self(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::Criterion;
    use crate::class;

    #[test]
    fn literal_byte_matches_only_itself() {
        let mut c = b'|';
        assert!(c.matches(b'|'));
        assert!(!c.matches(b'-'));
    }

    #[test]
    fn predicates_and_closures_are_criteria() {
        fn check(mut c: impl Criterion, byte: u8) -> bool {
            c.matches(byte)
        }
        assert!(check(class::is_digit, b'7'));
        assert!(!check(class::is_digit, b'x'));

        let mut seen = 0;
        assert!(check(
            |b: u8| {
                seen += 1;
                b == b'\t'
            },
            b'\t'
        ));
        assert_eq!(seen, 1);
    }
}
