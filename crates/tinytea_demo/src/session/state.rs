use bevy::prelude::*;
use bytes::Bytes;
use tinytea_padding::PaddedBuffer;

/// The message picked from the menu.
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct SelectedMessage {
    /// 1-based menu option.
    pub option: usize,

    /// The message bytes, before truncation or padding.
    pub text: Bytes,
}

/// How far the session buffer has been processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Holds the padded plaintext.
    Padded,

    /// Every block has been encrypted.
    Encrypted,

    /// Every block has been decrypted again.
    Decrypted,
}

/// The padded buffer being pushed through the cipher.
#[derive(Resource, Debug)]
pub struct Session {
    /// The selected message, as supplied.
    pub original: Bytes,

    /// The block-aligned working buffer, mutated in place.
    pub buffer: PaddedBuffer,

    /// Last transformation applied to `buffer`.
    pub stage: Stage,
}

impl Session {
    pub(crate) fn new(original: Bytes, buffer: PaddedBuffer) -> Self {
        Self {
            original,
            buffer,
            stage: Stage::Padded,
        }
    }

    /// The part of the original message that was copied into the buffer.
    pub fn expected_payload(&self) -> &[u8] {
        &self.original[..self.buffer.original_len()]
    }
}

/// Outcome of comparing the decrypted buffer with the original message.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundTrip {
    /// Whether the payload matched and the padding came back as zeros.
    pub verified: bool,

    /// Length of the message as supplied.
    pub original_len: usize,

    /// Number of blocks processed.
    pub block_count: usize,
}
