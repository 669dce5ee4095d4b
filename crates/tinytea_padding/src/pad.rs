use bytes::BytesMut;
use log::{trace, warn};
use tinytea_cipher::TEA_BLOCK_SIZE;

use crate::{PaddedBuffer, PaddingError, TruncationPolicy};

/// Returns the padded length for `len` copied bytes, or `None` when it does
/// not fit in a `usize`.
///
/// The smallest multiple of 8 that is at least `len`, or a full block when
/// `len` is zero.
///
/// # Example
/// ```
/// assert_eq!(tinytea_padding::checked_padded_len(5), Some(8));
/// assert_eq!(tinytea_padding::checked_padded_len(usize::MAX), None);
/// ```
#[inline]
pub const fn checked_padded_len(len: usize) -> Option<usize> {
    if len == 0 {
        Some(TEA_BLOCK_SIZE)
    } else {
        len.checked_next_multiple_of(TEA_BLOCK_SIZE)
    }
}

/// Returns the padded length for `len` copied bytes.
///
/// See [`checked_padded_len`] for the rounding rule.
///
/// # Panics
/// If `len` is greater than `usize::MAX - 7`. Slice lengths never exceed
/// `isize::MAX`, so the length of any real input is accepted.
///
/// # Example
/// ```
/// assert_eq!(tinytea_padding::padded_len(0), 8);
/// assert_eq!(tinytea_padding::padded_len(5), 8);
/// assert_eq!(tinytea_padding::padded_len(16), 16);
/// ```
#[inline]
pub const fn padded_len(len: usize) -> usize {
    match checked_padded_len(len) {
        Some(padded) => padded,
        None => panic!("padded length overflows usize"),
    }
}

/// Copies at most `max_len` bytes of `input` and zero pads them to whole blocks.
///
/// - The end of `input` is the end-of-input marker; interior zero bytes are
///   copied like any other byte.
/// - Input beyond `max_len` is dropped silently (a warning is logged).
/// - Empty input yields a single all-zero block.
///
/// # Example
/// ```
/// let padded = tinytea_padding::pad(b"Texto", 128);
/// assert_eq!(padded.as_bytes(), b"Texto\0\0\0");
/// assert_eq!(padded.block_count(), 1);
/// ```
pub fn pad(input: &[u8], max_len: usize) -> PaddedBuffer {
    let copied = &input[..input.len().min(max_len)];

    if copied.len() < input.len() {
        warn!(
            "Input of {} bytes truncated to the maximum of {} bytes",
            input.len(),
            max_len
        );
    }

    let total_len = padded_len(copied.len());

    let mut bytes = BytesMut::with_capacity(total_len);
    bytes.extend_from_slice(copied);
    bytes.resize(total_len, 0);

    trace!(
        "Padded {} byte(s) to {} byte(s) ({} block(s))",
        copied.len(),
        total_len,
        total_len / TEA_BLOCK_SIZE
    );

    PaddedBuffer::new(bytes, copied.len())
}

/// Pads `input` like [`pad`], applying `policy` when it is longer than `max_len`.
///
/// # Errors
/// - [`PaddingError::InputTooLong`]: If `policy` is [`TruncationPolicy::Reject`]
///   and `input` is longer than `max_len`.
pub fn pad_with_policy(
    input: &[u8],
    max_len: usize,
    policy: TruncationPolicy,
) -> Result<PaddedBuffer, PaddingError> {
    if policy == TruncationPolicy::Reject && input.len() > max_len {
        return Err(PaddingError::InputTooLong {
            length: input.len(),
            max_len,
        });
    }

    Ok(pad(input, max_len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_MAX_INPUT_LEN;

    #[test]
    fn test_pad_short_text_to_single_block() {
        let padded = pad(b"Texto", DEFAULT_MAX_INPUT_LEN);

        assert_eq!(padded.len(), 8);
        assert_eq!(padded.original_len(), 5);
        assert_eq!(padded.padding_len(), 3);
        assert_eq!(padded.as_bytes(), b"Texto\0\0\0");
    }

    #[test]
    fn test_pad_long_message_to_five_blocks() {
        const MESSAGE: &[u8] = b"Este es un mensaje de prueba muy largo";

        let padded = pad(MESSAGE, DEFAULT_MAX_INPUT_LEN);

        assert_eq!(MESSAGE.len(), 38);
        assert_eq!(padded.len(), 40);
        assert_eq!(padded.block_count(), 5);
        assert_eq!(padded.payload(), MESSAGE);
        assert_eq!(padded.padding(), &[0, 0]);
    }

    #[test]
    fn test_checked_padded_len_reports_overflow() {
        assert_eq!(checked_padded_len(0), Some(8));
        assert_eq!(checked_padded_len(usize::MAX - 7), Some(usize::MAX - 7));
        assert_eq!(checked_padded_len(usize::MAX - 6), None);
        assert_eq!(checked_padded_len(usize::MAX), None);
    }

    #[test]
    #[should_panic(expected = "padded length overflows usize")]
    fn test_padded_len_panics_past_last_block() {
        let _ = padded_len(usize::MAX);
    }

    #[test]
    fn test_pad_empty_input_yields_one_zero_block() {
        let padded = pad(b"", DEFAULT_MAX_INPUT_LEN);

        assert_eq!(padded.as_bytes(), &[0u8; 8]);
        assert_eq!(padded.len(), 8);
        assert_eq!(padded.original_len(), 0);
    }

    #[test]
    fn test_pad_aligned_input_is_unchanged() {
        for message in [&b"HOLA1234"[..], b"0123456789ABCDEF"] {
            let padded = pad(message, DEFAULT_MAX_INPUT_LEN);

            assert_eq!(padded.as_bytes(), message);
            assert_eq!(padded.padding_len(), 0);
        }
    }

    #[test]
    fn test_pad_keeps_interior_zero_bytes() {
        let padded = pad(b"ab\0cd", DEFAULT_MAX_INPUT_LEN);

        assert_eq!(padded.payload(), b"ab\0cd");
        assert_eq!(padded.original_len(), 5);
    }

    #[test]
    fn test_pad_truncates_silently_at_bound() {
        let input: Vec<u8> = (1u8..=200).collect();

        let padded = pad(&input, DEFAULT_MAX_INPUT_LEN);

        assert_eq!(padded.original_len(), DEFAULT_MAX_INPUT_LEN);
        assert_eq!(padded.len(), DEFAULT_MAX_INPUT_LEN);
        assert_eq!(padded.payload(), &input[..DEFAULT_MAX_INPUT_LEN]);
    }

    #[test]
    fn test_pad_unaligned_bound_stays_within_bound_plus_block() {
        let input = [0xAAu8; 64];

        let padded = pad(&input, 13);

        assert_eq!(padded.original_len(), 13);
        assert_eq!(padded.len(), 16);
        assert!(padded.len() <= 13 + TEA_BLOCK_SIZE);
    }

    #[test]
    fn test_pad_zero_bound_yields_one_zero_block() {
        let padded = pad(b"ignored", 0);

        assert_eq!(padded.as_bytes(), &[0u8; 8]);
        assert_eq!(padded.original_len(), 0);
    }

    #[test]
    fn test_padded_length_invariant_over_range() {
        let input: Vec<u8> = (0u8..=255).collect();

        for max_len in [0usize, 1, 7, 8, 9, 128, 300] {
            for len in 0..=input.len() {
                let padded = pad(&input[..len], max_len);
                let copied = len.min(max_len);

                assert_eq!(padded.len() % TEA_BLOCK_SIZE, 0);
                assert!(padded.len() >= copied);
                assert!(padded.len() > 0);
                assert_eq!(padded.len(), padded_len(copied));
                assert!(padded.padding().iter().all(|&byte| byte == 0));
            }
        }
    }

    #[test]
    fn test_pad_with_policy_rejects_long_input() {
        let input = [b'x'; 129];

        let result = pad_with_policy(&input, DEFAULT_MAX_INPUT_LEN, TruncationPolicy::Reject);

        assert_eq!(
            result.unwrap_err(),
            PaddingError::InputTooLong {
                length: 129,
                max_len: DEFAULT_MAX_INPUT_LEN,
            }
        );
    }

    #[test]
    fn test_pad_with_policy_accepts_input_at_bound() {
        let input = [b'x'; DEFAULT_MAX_INPUT_LEN];

        let padded = pad_with_policy(&input, DEFAULT_MAX_INPUT_LEN, TruncationPolicy::Reject)
            .expect("input at the bound should be accepted");

        assert_eq!(padded.original_len(), DEFAULT_MAX_INPUT_LEN);
    }

    #[test]
    fn test_pad_with_silent_policy_matches_pad() {
        let input = [b'y'; 150];

        let padded = pad_with_policy(&input, DEFAULT_MAX_INPUT_LEN, TruncationPolicy::Silent)
            .expect("silent policy never fails");

        assert_eq!(padded, pad(&input, DEFAULT_MAX_INPUT_LEN));
    }
}
