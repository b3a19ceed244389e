/// How [`Scanner::compare_by`](crate::Scanner::compare_by) interprets its
/// predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CriterionCompare {
    /// The comparison succeeds when the predicate is **false** for the
    /// current byte.
    #[default]
    Inverted,
    /// The comparison succeeds when the predicate is true, like every other
    /// criterion-driven operation.
    Matching,
}

/// Configuration for a [`Scanner`](crate::Scanner).
///
/// Options survive rebinding: [`Scanner::begin`](crate::Scanner::begin)
/// resets the cursor but keeps the options.
///
/// # Examples
///
/// ```rust
/// use scanlet::{CriterionCompare, Scanner, ScannerOptions, class};
///
/// let options = ScannerOptions {
///     criterion_compare: CriterionCompare::Matching,
///     ..Default::default()
/// };
/// let mut s = Scanner::with_options(b"7", options);
/// assert!(s.compare_by(class::is_digit));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScannerOptions {
    /// Whether the short delimited reads (`read_char_array`, `read_string`)
    /// deliver a run that reached the end of input without meeting its
    /// delimiter.
    ///
    /// When `false`, only runs terminated by an actual delimiter are
    /// delivered. The cursor moves the same way in both cases.
    ///
    /// # Default
    ///
    /// `true`
    pub end_if_not_found: bool,

    /// Interpretation of the predicate passed to `compare_by`.
    ///
    /// # Default
    ///
    /// [`CriterionCompare::Inverted`]
    pub criterion_compare: CriterionCompare,

    /// Whether `read_bool` advances past the `'0'` or `'1'` it accepted.
    ///
    /// By default a boolean read only inspects the current byte, unlike
    /// `read_char` and `read_byte`.
    ///
    /// # Default
    ///
    /// `false`
    pub consume_bool: bool,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            end_if_not_found: true,
            criterion_compare: CriterionCompare::Inverted,
            consume_bool: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let o = ScannerOptions::default();
        assert!(o.end_if_not_found);
        assert_eq!(o.criterion_compare, CriterionCompare::Inverted);
        assert!(!o.consume_bool);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_options() {
        let o: ScannerOptions =
            serde_json::from_str(r#"{"criterion_compare":"matching"}"#).unwrap();
        assert_eq!(o.criterion_compare, CriterionCompare::Matching);
        assert!(o.end_if_not_found);
        assert!(!o.consume_bool);
    }
}
