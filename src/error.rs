//! Error type returned at the block-cipher boundary.
//!
//! Every failure this crate can produce is rejected before any cryptographic
//! work starts: a bad key size, an unsupported round count, or a buffer that
//! is not exactly one block wide. There is no partial output on failure.

use std::error::Error as StdError;
use std::fmt;

/// Failure reported by `vistrutah256`/`vistrutah512` encrypt/decrypt calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key slice length did not match one of the accepted sizes for the
    /// variant (16/32 bytes for Vistrutah-256; 32/64 bytes for Vistrutah-512).
    InvalidKeySize { got: usize },
    /// The round count is not one of the accepted counts for the variant and
    /// the key size it was combined with.
    InvalidRoundCount { got: u32 },
    /// A `&[u8]` buffer was not exactly one block wide for the variant.
    BufferSizeMismatch { expected: usize, got: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeySize { got } => {
                write!(f, "invalid key size: got {got} bytes")
            }
            Error::InvalidRoundCount { got } => {
                write!(f, "invalid round count: got {got}")
            }
            Error::BufferSizeMismatch { expected, got } => {
                write!(f, "buffer size mismatch: expected {expected} bytes, got {got}")
            }
        }
    }
}

impl StdError for Error {}
