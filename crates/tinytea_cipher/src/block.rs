//! Little-endian mapping between bytes and the cipher's 32-bit words.

use crate::{TEA_BLOCK_SIZE, TEA_KEY_SIZE, TeaBlock, TeaKey};

/// Interprets 8 bytes as a block: bytes 0..4 become `v0`, bytes 4..8 become `v1`.
///
/// # Example
/// ```
/// let block = tinytea_cipher::read_block(b"HOLA1234");
/// assert_eq!(block, [0x414C4F48, 0x34333231]);
/// ```
#[inline]
pub fn read_block(bytes: &[u8; TEA_BLOCK_SIZE]) -> TeaBlock {
    let [b0, b1, b2, b3, b4, b5, b6, b7] = *bytes;
    [
        u32::from_le_bytes([b0, b1, b2, b3]),
        u32::from_le_bytes([b4, b5, b6, b7]),
    ]
}

/// Writes a block back into 8 bytes, the inverse of [`read_block`].
#[inline]
pub fn write_block(block: &TeaBlock, bytes: &mut [u8; TEA_BLOCK_SIZE]) {
    bytes[0..4].copy_from_slice(&block[0].to_le_bytes());
    bytes[4..8].copy_from_slice(&block[1].to_le_bytes());
}

/// Builds a key from 16 bytes, four little-endian words in order.
pub fn key_from_bytes(bytes: &[u8; TEA_KEY_SIZE]) -> TeaKey {
    let mut key = [0u32; 4];

    for (word, chunk) in key.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    key
}

/// Reads an 8-byte chunk as a block, applies `transform`, and writes it back.
#[inline]
pub(crate) fn transform_chunk(
    chunk: &mut [u8; TEA_BLOCK_SIZE],
    transform: impl FnOnce(&mut TeaBlock),
) {
    let mut words = read_block(chunk);
    transform(&mut words);
    write_block(&words, chunk);
}
