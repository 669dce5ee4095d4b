use bytes::{Bytes, BytesMut};
use log::trace;

use crate::{
    TEA_BLOCK_SIZE, TEA_DELTA, TEA_FINAL_SUM, TEA_NUM_ROUNDS, TeaBlock, TeaError, TeaKey, block,
    check_block_aligned,
};

/// Decrypts a single 64-bit block in place using a 128-bit key.
///
/// This is the exact inverse of [`encrypt_block`](crate::encrypt_block): the
/// running sum starts at `delta * 32` and counts down, and each round undoes
/// the `v1` update before the `v0` update.
///
/// # Example
/// ```
/// let key = [5, 6, 7, 8];
/// let mut block = [128, 256];
/// tinytea_cipher::encrypt_block(&mut block, &key);
/// tinytea_cipher::decrypt_block(&mut block, &key);
/// assert_eq!(block, [128, 256]);
/// ```
#[inline]
pub fn decrypt_block(block: &mut TeaBlock, key: &TeaKey) {
    let [mut word_left, mut word_right] = *block;
    let [k0, k1, k2, k3] = *key;

    // Start where encryption ended and walk the schedule back.
    let mut sum: u32 = TEA_FINAL_SUM;

    for _ in 0..TEA_NUM_ROUNDS {
        // Undo the right word first, it was mixed last.
        word_right = word_right.wrapping_sub(
            (word_left << 4).wrapping_add(k2)
                ^ word_left.wrapping_add(sum)
                ^ (word_left >> 5).wrapping_add(k3),
        );

        // Then undo the left word with the restored right word.
        word_left = word_left.wrapping_sub(
            (word_right << 4).wrapping_add(k0)
                ^ word_right.wrapping_add(sum)
                ^ (word_right >> 5).wrapping_add(k1),
        );

        // Step back to the previous round's sum.
        sum = sum.wrapping_sub(TEA_DELTA);
    }

    *block = [word_left, word_right];
}

/// Decrypts every 8-byte block of `buffer` in place, lowest offset first.
///
/// # Errors
/// - [`TeaError::InvalidBlockSize`]: If `buffer` is not a multiple of 8 bytes.
///   Nothing is modified in that case.
pub fn decrypt_in_place(buffer: &mut [u8], key: &TeaKey) -> Result<(), TeaError> {
    check_block_aligned(buffer.len())?;

    trace!(
        "Decrypting {} block(s) in place",
        buffer.len() / TEA_BLOCK_SIZE
    );

    // Alignment was checked above, so there is no remainder.
    let (chunks, _) = buffer.as_chunks_mut::<TEA_BLOCK_SIZE>();

    for chunk in chunks {
        block::transform_chunk(chunk, |words| decrypt_block(words, key));
    }

    Ok(())
}

/// Decrypts a copy of `ciphertext` and returns it as an immutable [`Bytes`] buffer.
///
/// Padding is left in place; callers that know the original length truncate
/// the result themselves.
///
/// # Errors
/// - [`TeaError::InvalidBlockSize`]: If `ciphertext` is not a multiple of 8 bytes.
pub fn decrypt(ciphertext: &[u8], key: &TeaKey) -> Result<Bytes, TeaError> {
    check_block_aligned(ciphertext.len())?;

    let mut plaintext = BytesMut::from(ciphertext);
    decrypt_in_place(&mut plaintext, key)?;

    Ok(plaintext.freeze())
}
