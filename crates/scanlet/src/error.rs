use core::ffi::FromBytesUntilNulError;

use thiserror::Error;

/// Errors raised while binding a [`Scanner`](crate::Scanner).
///
/// Scanning itself never fails: reads fall back to zero values. Only
/// constructors that promise a NUL-terminated input can reject their
/// argument.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanError {
    /// The input was expected to be NUL-terminated but carries no NUL byte.
    #[error("input is not NUL-terminated")]
    MissingTerminator(#[from] FromBytesUntilNulError),
}
