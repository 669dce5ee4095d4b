mod block;
mod decrypt;
mod direction;
mod encrypt;

pub use block::{key_from_bytes, read_block, write_block};
pub use decrypt::{decrypt, decrypt_block, decrypt_in_place};
pub use direction::Direction;
pub use encrypt::{encrypt, encrypt_block, encrypt_in_place};

use thiserror::Error;

/// Represents a 128-bit TEA key composed of four 32-bit words (4 × u32 = 16 bytes).
///
/// Every bit pattern is a valid key. The key is only ever read by the cipher,
/// so a single instance can be shared freely between threads.
pub type TeaKey = [u32; 4];

/// Represents a single 64-bit TEA block as the word pair `(v0, v1)`.
///
/// When built from bytes, the first four bytes form `v0` and the last four
/// form `v1`, each in little-endian order.
pub type TeaBlock = [u32; 2];

/// The delta constant added to the running sum once per round.
///
/// Derived from the golden ratio: `(sqrt(5) - 1) * 2^31`. Changing it yields a
/// cipher incompatible with every TEA reference implementation.
pub const TEA_DELTA: u32 = 0x9E3779B9;

/// Number of rounds executed per block.
///
/// Fixed at 32 by the reference algorithm.
pub const TEA_NUM_ROUNDS: usize = 32;

/// The fixed size (in bytes) of a single TEA block.
pub const TEA_BLOCK_SIZE: usize = 8;

/// The fixed size (in bytes) of a TEA key.
pub const TEA_KEY_SIZE: usize = 16;

/// Value of the running sum after all encryption rounds, where decryption starts.
pub(crate) const TEA_FINAL_SUM: u32 = TEA_DELTA.wrapping_mul(TEA_NUM_ROUNDS as u32);

/// Errors raised by the buffer-level operations.
///
/// The block functions themselves are total and never fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TeaError {
    /// Occurs when a buffer length is not a multiple of 8 bytes.
    #[error("Data length ({length}) must be a multiple of 8 bytes")]
    InvalidBlockSize {
        /// The length of the rejected buffer.
        length: usize,
    },
}

/// Ensures `length` covers a whole number of blocks.
pub(crate) fn check_block_aligned(length: usize) -> Result<(), TeaError> {
    if length % TEA_BLOCK_SIZE != 0 {
        return Err(TeaError::InvalidBlockSize { length });
    }

    Ok(())
}
