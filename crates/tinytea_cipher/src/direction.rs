use crate::{
    TeaBlock, TeaError, TeaKey, decrypt::decrypt_block, decrypt::decrypt_in_place,
    encrypt::encrypt_block, encrypt::encrypt_in_place,
};

/// Which way a block transformation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Plaintext to ciphertext.
    Encrypt,

    /// Ciphertext to plaintext.
    Decrypt,
}

impl Direction {
    /// Applies this direction to a single block in place.
    #[inline]
    pub fn apply(self, block: &mut TeaBlock, key: &TeaKey) {
        match self {
            Self::Encrypt => encrypt_block(block, key),
            Self::Decrypt => decrypt_block(block, key),
        }
    }

    /// Applies this direction to every block of an aligned buffer in place.
    ///
    /// # Errors
    /// - [`TeaError::InvalidBlockSize`]: If `buffer` is not a multiple of 8 bytes.
    pub fn apply_in_place(self, buffer: &mut [u8], key: &TeaKey) -> Result<(), TeaError> {
        match self {
            Self::Encrypt => encrypt_in_place(buffer, key),
            Self::Decrypt => decrypt_in_place(buffer, key),
        }
    }

    /// Returns the direction that undoes this one.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Encrypt => Self::Decrypt,
            Self::Decrypt => Self::Encrypt,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encrypt => f.write_str("encrypt"),
            Self::Decrypt => f.write_str("decrypt"),
        }
    }
}
