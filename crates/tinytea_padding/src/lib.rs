mod buffer;
mod pad;

pub use buffer::PaddedBuffer;
pub use pad::{checked_padded_len, pad, pad_with_policy, padded_len};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default bound on how many input bytes are copied before padding.
pub const DEFAULT_MAX_INPUT_LEN: usize = 128;

/// What to do when the input is longer than the copy bound.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum TruncationPolicy {
    /// Copy the first `max_len` bytes and drop the rest without reporting it.
    #[default]
    Silent,

    /// Refuse the input with [`PaddingError::InputTooLong`].
    Reject,
}

/// Errors that can occur while padding input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaddingError {
    /// Occurs under [`TruncationPolicy::Reject`] when the input exceeds the bound.
    #[error("Input length ({length}) exceeds the maximum of {max_len} bytes")]
    InputTooLong {
        /// The length of the rejected input.
        length: usize,
        /// The configured copy bound.
        max_len: usize,
    },
}
