//! Scanner: a cursor over a borrowed byte buffer.
//!
//! What it does
//! - Holds a read-only `&'s [u8]`, a cursor `pos` and the
//!   [`ScannerOptions`]. Every operation is a method; there is no other state.
//! - Typed reads check the current byte against the value's lexical class
//!   before consuming anything and fall back to the type's zero value.
//! - Delimited reads capture a run of bytes up to a [`Criterion`] match,
//!   borrowing from the bound buffer (`read_span`, `read_char_array`) or
//!   copying it (`read_string`).
//! - Movement (`skip*`, `jump*`, `search_token`, `compare_token`) moves the
//!   cursor forward. `reset` rewinds, and `skip` on an exhausted cursor
//!   clamps back onto the last byte.
//!
//! Invariants
//! - `pos <= bytes.len()`. `pos == bytes.len()` is the overflow state: the
//!   current item reads as NUL and every typed read yields its zero value
//!   without moving.
//! - The buffer is never written.
//!
//! Notes
//! - Callbacks are plain `FnOnce` parameters on the `_with` variants; the
//!   short forms are the "no callback" configuration.
//! - Control-flow helpers (`if_current_is`, `do_while`, ...) hand `&mut
//!   Scanner` to their closures, so loop bodies can keep reading.

use core::ffi::CStr;

use bstr::{BStr, BString, ByteSlice};
use log::trace;

use crate::{
    criterion::Criterion,
    error::ScanError,
    numbers::{self, ScanValue},
    options::{CriterionCompare, ScannerOptions},
};

/// A cursor over a fixed byte buffer with typed reads and predicate-driven
/// movement.
///
/// ```rust
/// use scanlet::{Scanner, class};
///
/// let mut s = Scanner::from("ab|cd");
/// assert_eq!(s.read_span(b'|', true).unwrap(), "ab");
/// assert_eq!(s.current(), b'c');
/// assert_eq!(s.read_string(class::is_separator), "cd");
/// assert!(s.is_overflow());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scanner<'s> {
    bytes: &'s [u8],
    pos: usize,
    options: ScannerOptions,
}

impl<'s> From<&'s [u8]> for Scanner<'s> {
    fn from(bytes: &'s [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'s, const N: usize> From<&'s [u8; N]> for Scanner<'s> {
    fn from(bytes: &'s [u8; N]) -> Self {
        Self::new(bytes)
    }
}

impl<'s> From<&'s str> for Scanner<'s> {
    fn from(s: &'s str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<'s> From<&'s BStr> for Scanner<'s> {
    fn from(s: &'s BStr) -> Self {
        Self::new(s.as_bytes())
    }
}

// --- Binding and cursor primitives -----------------------------------------

impl<'s> Scanner<'s> {
    /// Binds a scanner to `bytes` with default options.
    #[must_use]
    pub fn new(bytes: &'s [u8]) -> Self {
        Self::with_options(bytes, ScannerOptions::default())
    }

    /// Binds a scanner to `bytes` with the given options.
    #[must_use]
    pub fn with_options(bytes: &'s [u8], options: ScannerOptions) -> Self {
        let mut scanner = Self {
            bytes: &[],
            pos: 0,
            options,
        };
        scanner.begin(bytes);
        scanner
    }

    /// Binds to the bytes before the first NUL in `bytes`.
    ///
    /// # Errors
    ///
    /// [`ScanError::MissingTerminator`] when `bytes` holds no NUL byte.
    pub fn from_nul_terminated(bytes: &'s [u8]) -> Result<Self, ScanError> {
        let c_str = CStr::from_bytes_until_nul(bytes)?;
        Ok(Self::new(c_str.to_bytes()))
    }

    /// Rebinds to `bytes` and rewinds the cursor. Options are kept.
    pub fn begin(&mut self, bytes: &'s [u8]) {
        trace!("scanner bound to {} bytes", bytes.len());
        self.bytes = bytes;
        self.pos = 0;
    }

    /// Rebinds to the bytes before the first NUL, or to all of `bytes` when
    /// there is none.
    pub fn begin_nul_terminated(&mut self, bytes: &'s [u8]) {
        let len = bytes.find_byte(b'\0').unwrap_or(bytes.len());
        self.begin(&bytes[..len]);
    }

    /// Rebinds to the contents of a C string, without its terminator.
    pub fn begin_c_str(&mut self, s: &'s CStr) {
        self.begin(s.to_bytes());
    }

    /// Rebinds to the bytes of `s`.
    pub fn begin_str(&mut self, s: &'s str) {
        self.begin(s.as_bytes());
    }

    /// Rebinds to the bytes of `s`.
    pub fn begin_bstr(&mut self, s: &'s BStr) {
        self.begin(s.as_bytes());
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> ScannerOptions {
        self.options
    }

    /// Replaces the options without touching the cursor.
    pub fn set_options(&mut self, options: ScannerOptions) {
        self.options = options;
    }

    /// Offset of the cursor from the start of the buffer.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Length of the bound buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the bound buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The whole bound buffer, independent of the cursor.
    #[must_use]
    pub fn as_bstr(&self) -> &'s BStr {
        self.bytes.as_bstr()
    }

    /// The byte at the cursor, or NUL once the input is exhausted.
    #[must_use]
    pub fn current(&self) -> u8 {
        self.bytes.get(self.pos).copied().unwrap_or(b'\0')
    }

    /// The unread input, starting at the cursor.
    #[must_use]
    pub fn remaining(&self) -> &'s BStr {
        self.tail().as_bstr()
    }

    /// Rewinds the cursor to the start of the same buffer.
    pub fn reset(&mut self) {
        trace!("scanner reset at {}", self.pos);
        self.pos = 0;
    }

    /// Whether the cursor has reached the end of the input.
    #[must_use]
    pub fn is_overflow(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    #[inline]
    fn tail(&self) -> &'s [u8] {
        let bytes = self.bytes;
        &bytes[self.pos.min(bytes.len())..]
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.bytes.len());
    }

    /// Asserts the cursor invariant. Exposed for fuzzing harnesses.
    #[cfg(any(test, feature = "fuzzing"))]
    #[doc(hidden)]
    pub fn assert_invariants(&self) {
        assert!(
            self.pos <= self.bytes.len(),
            "cursor {} past end of {}-byte buffer",
            self.pos,
            self.bytes.len()
        );
    }
}

// --- Typed reads -----------------------------------------------------------

macro_rules! typed_reads {
    ($( $(#[$meta:meta])* $name:ident => $ty:ty; )*) => { paste::paste! {$(
        $(#[$meta])*
        pub fn $name(&mut self) -> $ty {
            self.read::<$ty>()
        }

        /// Same as the plain read; `notify` receives the value when the
        /// guard accepted the current byte.
        pub fn [<$name _with>](&mut self, notify: impl FnOnce($ty)) -> $ty {
            self.read_with::<$ty>(notify)
        }
    )*}};
}

impl Scanner<'_> {
    /// Reads a value of type `T` at the cursor.
    ///
    /// Returns `T::default()` without moving when the input is exhausted or
    /// the current byte cannot start a `T`.
    pub fn read<T: ScanValue>(&mut self) -> T {
        self.read_with(|_| {})
    }

    /// Same as [`Scanner::read`]; `notify` receives the value when the read
    /// succeeded.
    pub fn read_with<T: ScanValue>(&mut self, notify: impl FnOnce(T)) -> T {
        if self.is_overflow() || !T::accepts(self.current()) {
            return T::default();
        }
        let (value, consumed) = T::scan(self.tail());
        if !T::LOOKAHEAD || self.options.consume_bool {
            self.advance(consumed);
        }
        notify(value);
        value
    }

    typed_reads! {
        /// `'1'` reads `true`, `'0'` reads `false`, anything else reads
        /// `false` without notifying.
        ///
        /// The cursor stays on the digit unless
        /// [`ScannerOptions::consume_bool`] is set.
        read_bool => bool;
        /// Reads `[-]digits` into an `i8`, wrapping on overflow.
        ///
        /// The current byte must be numeric (a digit, `.`, `,` or `-`); a
        /// leading `.` or `,` passes the guard but yields `0` without
        /// consuming.
        read_i8 => i8;
        /// Reads `[-]digits` into an `i16`, wrapping on overflow.
        read_i16 => i16;
        /// Reads `[-]digits` into an `i32`, wrapping on overflow.
        ///
        /// ```rust
        /// let mut s = scanlet::Scanner::from("-123abc");
        /// assert_eq!(s.read_i32(), -123);
        /// assert_eq!(s.current(), b'a');
        /// ```
        read_i32 => i32;
        /// Reads digits into a `u8`, wrapping on overflow. A leading `-`
        /// yields `0` and consumes nothing.
        read_u8 => u8;
        /// Reads digits into a `u16`, wrapping on overflow.
        read_u16 => u16;
        /// Reads digits into a `u32`, wrapping on overflow.
        read_u32 => u32;
        /// Reads `[-]digits[(.|,)digits]`. Both `.` and `,` act as the
        /// decimal separator.
        ///
        /// A whole part beyond the `f32` range reads as infinity.
        read_f32 => f32;
    }

    /// Reads `digits[(.|,)digits]` without a sign.
    ///
    /// The guard still accepts `-`, in which case the read yields `0.0` and
    /// consumes nothing.
    pub fn read_unsigned_f32(&mut self) -> f32 {
        self.read_unsigned_f32_with(|_| {})
    }

    /// See [`Scanner::read_unsigned_f32`].
    pub fn read_unsigned_f32_with(&mut self, notify: impl FnOnce(f32)) -> f32 {
        if self.is_overflow() || !f32::accepts(self.current()) {
            return 0.0;
        }
        let (value, consumed) = numbers::scan_float(self.tail(), false);
        self.advance(consumed);
        notify(value);
        value
    }

    /// Consumes and returns the current byte, or NUL without moving once the
    /// input is exhausted.
    pub fn read_byte(&mut self) -> u8 {
        self.read_byte_with(|_| {})
    }

    /// See [`Scanner::read_byte`]. `notify` only runs when a byte was
    /// consumed.
    pub fn read_byte_with(&mut self, notify: impl FnOnce(u8)) -> u8 {
        if self.is_overflow() {
            return b'\0';
        }
        let byte = self.current();
        self.advance(1);
        notify(byte);
        byte
    }

    /// [`Scanner::read_byte`] as a Latin-1 `char`.
    pub fn read_char(&mut self) -> char {
        char::from(self.read_byte())
    }

    /// See [`Scanner::read_char`].
    pub fn read_char_with(&mut self, notify: impl FnOnce(char)) -> char {
        char::from(self.read_byte_with(|b| notify(char::from(b))))
    }
}

// --- Delimited reads -------------------------------------------------------

impl<'s> Scanner<'s> {
    /// Scans from the cursor to the first byte matching `delimiter` (or to the
    /// end), moves past the run and, when `consume_delimiter`, past the
    /// delimiter too.
    fn take_run(
        &mut self,
        mut delimiter: impl Criterion,
        consume_delimiter: bool,
    ) -> (&'s BStr, bool) {
        let tail = self.tail();
        let (len, found) = match tail.iter().position(|b| delimiter.matches(*b)) {
            Some(len) => (len, true),
            None => (tail.len(), false),
        };
        self.advance(len + usize::from(found && consume_delimiter));
        (tail[..len].as_bstr(), found)
    }

    /// Reads the run up to `delimiter` and returns its length, moving the
    /// cursor past the delimiter when one is found.
    pub fn read_char_array(&mut self, delimiter: impl Criterion) -> usize {
        let end_if_not_found = self.options.end_if_not_found;
        self.read_char_array_with(delimiter, end_if_not_found, |_| {})
    }

    /// Reads the run up to `delimiter` and returns its length.
    ///
    /// The cursor moves past the run and past the delimiter when one is
    /// found. `notify` receives the run borrowed from the bound buffer when
    /// a delimiter was found, or when `end_if_not_found` is set and the run
    /// reached the end of input instead.
    ///
    /// ```rust
    /// let mut s = scanlet::Scanner::from("abcd");
    /// let mut seen = None;
    /// assert_eq!(s.read_char_array_with(b'|', false, |run| seen = Some(run)), 4);
    /// assert!(seen.is_none());
    /// assert!(s.is_overflow());
    /// ```
    pub fn read_char_array_with(
        &mut self,
        delimiter: impl Criterion,
        end_if_not_found: bool,
        notify: impl FnOnce(&'s BStr),
    ) -> usize {
        let (run, found) = self.take_run(delimiter, true);
        if end_if_not_found || found {
            notify(run);
        }
        run.len()
    }

    /// Borrowing form of [`Scanner::read_char_array_with`]: the run is
    /// returned instead of handed to a callback.
    pub fn read_span(
        &mut self,
        delimiter: impl Criterion,
        end_if_not_found: bool,
    ) -> Option<&'s BStr> {
        let (run, found) = self.take_run(delimiter, true);
        (end_if_not_found || found).then_some(run)
    }

    /// Copies the run up to `delimiter` into an owned string.
    ///
    /// Unlike [`Scanner::read_char_array`], the cursor is left **on** the
    /// delimiter. With [`ScannerOptions::end_if_not_found`] cleared, a run
    /// that hit the end of input yields an empty string.
    pub fn read_string(&mut self, delimiter: impl Criterion) -> BString {
        let end_if_not_found = self.options.end_if_not_found;
        self.read_string_with(delimiter, end_if_not_found, |_| {})
    }

    /// See [`Scanner::read_string`]. `notify` receives the copy whenever the
    /// policy delivers the run (delimiter found, or `end_if_not_found`),
    /// even if it is empty.
    pub fn read_string_with(
        &mut self,
        delimiter: impl Criterion,
        end_if_not_found: bool,
        notify: impl FnOnce(&BString),
    ) -> BString {
        let (run, found) = self.take_run(delimiter, false);
        if !(end_if_not_found || found) {
            return BString::default();
        }
        let copy = BString::from(run.as_bytes());
        notify(&copy);
        copy
    }
}

// --- Compare and search ----------------------------------------------------

impl Scanner<'_> {
    /// Moves past `token` if the input at `at` starts with it.
    fn match_token_at(&mut self, at: usize, token: &[u8]) -> bool {
        let hit = self
            .bytes
            .get(at..)
            .is_some_and(|rest| rest.starts_with(token));
        if hit {
            self.pos = at + token.len();
        }
        hit
    }

    /// Whether the current byte is `byte`. Never moves the cursor.
    #[must_use]
    pub fn compare(&self, byte: u8) -> bool {
        self.compare_with(byte, || {})
    }

    /// See [`Scanner::compare`].
    pub fn compare_with(&self, byte: u8, notify: impl FnOnce()) -> bool {
        let hit = !self.is_overflow() && self.current() == byte;
        if hit {
            notify();
        }
        hit
    }

    /// Whether the input at the cursor starts with `token`; on success the
    /// cursor moves past it.
    pub fn compare_token(&mut self, token: impl AsRef<[u8]>) -> bool {
        self.compare_token_with(token, || {})
    }

    /// See [`Scanner::compare_token`].
    pub fn compare_token_with(&mut self, token: impl AsRef<[u8]>, notify: impl FnOnce()) -> bool {
        if self.is_overflow() || !self.match_token_at(self.pos, token.as_ref()) {
            return false;
        }
        notify();
        true
    }

    /// Tests the current byte against `predicate`. Never moves the cursor.
    ///
    /// With the default [`CriterionCompare::Inverted`] this succeeds when the
    /// predicate is **false**; switch to [`CriterionCompare::Matching`] for
    /// the intuitive reading.
    ///
    /// ```rust
    /// use scanlet::{Scanner, class};
    ///
    /// let s = Scanner::from("x");
    /// assert!(s.compare_by(class::is_digit));
    /// ```
    #[must_use]
    pub fn compare_by(&self, predicate: impl FnMut(u8) -> bool) -> bool {
        self.compare_by_with(predicate, || {})
    }

    /// See [`Scanner::compare_by`].
    pub fn compare_by_with(
        &self,
        mut predicate: impl FnMut(u8) -> bool,
        notify: impl FnOnce(),
    ) -> bool {
        if self.is_overflow() {
            return false;
        }
        let hit = predicate(self.current());
        let hit = match self.options.criterion_compare {
            CriterionCompare::Inverted => !hit,
            CriterionCompare::Matching => hit,
        };
        if hit {
            notify();
        }
        hit
    }

    /// Whether any byte from the cursor on matches `criterion`. Never moves
    /// the cursor.
    #[must_use]
    pub fn search(&self, criterion: impl Criterion) -> bool {
        self.search_with(criterion, || {})
    }

    /// See [`Scanner::search`].
    pub fn search_with(&self, mut criterion: impl Criterion, notify: impl FnOnce()) -> bool {
        let found = self.tail().iter().any(|b| criterion.matches(*b));
        if found {
            notify();
        }
        found
    }

    /// Finds the first occurrence of `token` at or after the cursor and moves
    /// the cursor just past it. The cursor stays put when there is none.
    ///
    /// ```rust
    /// let mut s = scanlet::Scanner::from("xxOKyy");
    /// assert!(s.search_token("OK"));
    /// assert_eq!(s.current(), b'y');
    /// assert!(!s.search_token("OK"));
    /// assert_eq!(s.position(), 4);
    /// ```
    pub fn search_token(&mut self, token: impl AsRef<[u8]>) -> bool {
        self.search_token_with(token, || {})
    }

    /// See [`Scanner::search_token`].
    pub fn search_token_with(&mut self, token: impl AsRef<[u8]>, notify: impl FnOnce()) -> bool {
        let token = token.as_ref();
        for at in self.pos..self.bytes.len() {
            if self.match_token_at(at, token) {
                notify();
                return true;
            }
        }
        false
    }
}

// --- Branching and loops ---------------------------------------------------

impl Scanner<'_> {
    /// Whether the current byte matches `criterion`.
    ///
    /// Once the input is exhausted the current byte reads as NUL, so a
    /// criterion accepting NUL still matches.
    #[must_use]
    pub fn current_is(&self, mut criterion: impl Criterion) -> bool {
        criterion.matches(self.current())
    }

    /// Runs `yes` or `no` depending on [`Scanner::current_is`] and returns
    /// the outcome. The branch closures may drive the scanner.
    pub fn if_current_is(
        &mut self,
        criterion: impl Criterion,
        yes: impl FnOnce(&mut Self),
        no: impl FnOnce(&mut Self),
    ) -> bool {
        let hit = self.current_is(criterion);
        if hit { yes(self) } else { no(self) }
        hit
    }

    /// Negated [`Scanner::if_current_is`]: `yes` runs when the current byte
    /// does **not** match.
    pub fn if_current_is_not(
        &mut self,
        criterion: impl Criterion,
        yes: impl FnOnce(&mut Self),
        no: impl FnOnce(&mut Self),
    ) -> bool {
        let miss = !self.current_is(criterion);
        if miss { yes(self) } else { no(self) }
        miss
    }

    /// Runs `body` while `condition` holds. The scanner does not bound the
    /// loop; a condition that never changes never terminates.
    pub fn do_while(
        &mut self,
        condition: impl FnMut(&mut Self) -> bool,
        body: impl FnMut(&mut Self),
    ) {
        self.do_while_then(condition, body, |_| {});
    }

    /// [`Scanner::do_while`], then `finally` once.
    pub fn do_while_then(
        &mut self,
        mut condition: impl FnMut(&mut Self) -> bool,
        mut body: impl FnMut(&mut Self),
        finally: impl FnOnce(&mut Self),
    ) {
        while condition(self) {
            body(self);
        }
        finally(self);
    }

    /// Runs `body` until `condition` holds, checking before every iteration.
    ///
    /// ```rust
    /// let mut s = scanlet::Scanner::from("1,2,3;");
    /// let mut sum = 0;
    /// s.do_until(
    ///     |s| s.is_overflow() || s.compare(b';'),
    ///     |s| {
    ///         sum += s.read_u32();
    ///         s.skip_while(b',');
    ///     },
    /// );
    /// assert_eq!(sum, 6);
    /// ```
    pub fn do_until(
        &mut self,
        condition: impl FnMut(&mut Self) -> bool,
        body: impl FnMut(&mut Self),
    ) {
        self.do_until_then(condition, body, |_| {});
    }

    /// [`Scanner::do_until`], then `finally` once.
    pub fn do_until_then(
        &mut self,
        mut condition: impl FnMut(&mut Self) -> bool,
        mut body: impl FnMut(&mut Self),
        finally: impl FnOnce(&mut Self),
    ) {
        while !condition(self) {
            body(self);
        }
        finally(self);
    }
}

// --- Skip and jump ---------------------------------------------------------

impl Scanner<'_> {
    /// Advances `n` bytes.
    ///
    /// A target at or past the end clamps to the last byte, so `skip` never
    /// enters the overflow state on its own. Called on an exhausted cursor it
    /// therefore steps back onto the last byte. An empty input stays at `0`.
    ///
    /// ```rust
    /// let mut s = scanlet::Scanner::from("ab");
    /// s.read_byte();
    /// s.read_byte();
    /// s.skip(3);
    /// assert_eq!(s.position(), 1);
    /// ```
    pub fn skip(&mut self, n: usize) {
        if self.bytes.is_empty() {
            return;
        }
        let target = self.pos.saturating_add(n);
        if target >= self.bytes.len() {
            trace!("skip({n}) from {} clamped to last byte", self.pos);
            self.pos = self.bytes.len() - 1;
        } else {
            self.pos = target;
        }
    }

    /// Advances while the current byte matches `criterion`.
    pub fn skip_while(&mut self, mut criterion: impl Criterion) {
        let n = self.tail().iter().take_while(|b| criterion.matches(**b)).count();
        self.pos += n;
    }

    /// Advances until the current byte matches `criterion` or the input ends.
    pub fn skip_until(&mut self, mut criterion: impl Criterion) {
        let n = self.tail().iter().take_while(|b| !criterion.matches(**b)).count();
        self.pos += n;
    }

    /// Moves the cursor onto the first byte at or after it that matches
    /// `criterion`. Returns `false`, leaving the cursor unchanged, when
    /// nothing matches.
    pub fn jump_to(&mut self, mut criterion: impl Criterion) -> bool {
        match self.tail().iter().position(|b| criterion.matches(*b)) {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => {
                trace!("jump_to: no match after {}", self.pos);
                false
            }
        }
    }

    /// Like [`Scanner::jump_to`], then steps over the matched byte.
    pub fn jump_after(&mut self, criterion: impl Criterion) -> bool {
        let found = self.jump_to(criterion);
        if found {
            self.advance(1);
        }
        found
    }
}
