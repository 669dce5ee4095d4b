use bytes::{Bytes, BytesMut};
use log::trace;

use crate::{
    TEA_BLOCK_SIZE, TEA_DELTA, TEA_NUM_ROUNDS, TeaBlock, TeaError, TeaKey, block,
    check_block_aligned,
};

/// Encrypts a single 64-bit block in place using a 128-bit key.
///
/// Runs the 32 reference rounds: every round advances the running sum by
/// [`TEA_DELTA`](crate::TEA_DELTA), then mixes `v0` from `v1` with key words
/// 0 and 1, then `v1` from the new `v0` with key words 2 and 3.
///
/// All arithmetic wraps modulo 2^32 and the shifts are logical, so the
/// function is total over every block and key.
///
/// # Example
/// ```
/// let mut block = [0, 0];
/// tinytea_cipher::encrypt_block(&mut block, &[0; 4]);
/// assert_eq!(block, [0x41EA3A0A, 0x94BAA940]);
/// ```
#[inline]
pub fn encrypt_block(block: &mut TeaBlock, key: &TeaKey) {
    let [mut word_left, mut word_right] = *block;
    let [k0, k1, k2, k3] = *key;

    // Running sum, one delta per round.
    let mut sum: u32 = 0;

    for _ in 0..TEA_NUM_ROUNDS {
        // Advance the schedule before mixing.
        sum = sum.wrapping_add(TEA_DELTA);

        // Mix the left word from the right one with key words 0 and 1.
        word_left = word_left.wrapping_add(
            (word_right << 4).wrapping_add(k0)
                ^ word_right.wrapping_add(sum)
                ^ (word_right >> 5).wrapping_add(k1),
        );

        // Mix the right word from the updated left one with key words 2 and 3.
        word_right = word_right.wrapping_add(
            (word_left << 4).wrapping_add(k2)
                ^ word_left.wrapping_add(sum)
                ^ (word_left >> 5).wrapping_add(k3),
        );
    }

    *block = [word_left, word_right];
}

/// Encrypts every 8-byte block of `buffer` in place, lowest offset first.
///
/// Blocks are independent of each other (no chaining), so callers may also
/// split an aligned buffer into aligned chunks and encrypt them concurrently.
///
/// # Errors
/// - [`TeaError::InvalidBlockSize`]: If `buffer` is not a multiple of 8 bytes.
///   Nothing is modified in that case.
pub fn encrypt_in_place(buffer: &mut [u8], key: &TeaKey) -> Result<(), TeaError> {
    check_block_aligned(buffer.len())?;

    trace!(
        "Encrypting {} block(s) in place",
        buffer.len() / TEA_BLOCK_SIZE
    );

    // Alignment was checked above, so there is no remainder.
    let (chunks, _) = buffer.as_chunks_mut::<TEA_BLOCK_SIZE>();

    for chunk in chunks {
        block::transform_chunk(chunk, |words| encrypt_block(words, key));
    }

    Ok(())
}

/// Encrypts a copy of `plaintext` and returns it as an immutable [`Bytes`] buffer.
///
/// Unlike a packet-level cipher this does not pad: the input must already be
/// block aligned, see `tinytea_padding` for producing such a buffer.
///
/// # Errors
/// - [`TeaError::InvalidBlockSize`]: If `plaintext` is not a multiple of 8 bytes.
pub fn encrypt(plaintext: &[u8], key: &TeaKey) -> Result<Bytes, TeaError> {
    check_block_aligned(plaintext.len())?;

    let mut ciphertext = BytesMut::from(plaintext);
    encrypt_in_place(&mut ciphertext, key)?;

    Ok(ciphertext.freeze())
}
