//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Precondition violations reported by key, block and round-count checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The master key was not exactly 16 bytes.
    #[error("invalid key size: AES-128 requires a 16-byte key, got {len} bytes")]
    InvalidKeySize {
        /// Length of the rejected key.
        len: usize,
    },

    /// The input block was not exactly 16 bytes.
    #[error("invalid block size: expected 16 bytes, got {len}")]
    InvalidBlockSize {
        /// Length of the rejected block.
        len: usize,
    },

    /// A reduced-round encryption asked for a round count outside `1..=10`.
    #[error("invalid round count {rounds}: expected 1 to 10")]
    InvalidRoundCount {
        /// The rejected round count.
        rounds: usize,
    },
}

/// Result alias for this crate.
pub type Result<T> = core::result::Result<T, Error>;
