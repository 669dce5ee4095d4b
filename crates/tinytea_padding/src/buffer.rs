use bytes::{Bytes, BytesMut};
use tinytea_cipher::{TEA_BLOCK_SIZE, TeaBlock, read_block};

/// A zero-padded, block-aligned copy of some input.
///
/// Invariants, upheld by [`pad`](crate::pad) which is the only constructor:
/// - the length is a positive multiple of 8;
/// - the first `original_len` bytes are the copied input;
/// - every byte after `original_len` is zero until the buffer is transformed.
///
/// The buffer is meant to be mutated in place block by block, first by
/// encryption and later by decryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedBuffer {
    bytes: BytesMut,
    original_len: usize,
}

impl PaddedBuffer {
    pub(crate) fn new(bytes: BytesMut, original_len: usize) -> Self {
        debug_assert_eq!(bytes.len() % TEA_BLOCK_SIZE, 0);
        debug_assert!(original_len <= bytes.len());

        Self {
            bytes,
            original_len,
        }
    }

    /// Total padded length in bytes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`: even empty input is padded to one block.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of input bytes that were copied before padding.
    #[inline(always)]
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    /// Number of zero bytes appended after the copied input.
    #[inline(always)]
    pub fn padding_len(&self) -> usize {
        self.bytes.len() - self.original_len
    }

    /// Number of 8-byte blocks in the buffer.
    #[inline(always)]
    pub fn block_count(&self) -> usize {
        self.bytes.len() / TEA_BLOCK_SIZE
    }

    /// The whole buffer, padding included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The whole buffer, mutable, for in-place block transforms.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// The first `original_len` bytes.
    pub fn payload(&self) -> &[u8] {
        &self.bytes[..self.original_len]
    }

    /// The bytes after `original_len`.
    pub fn padding(&self) -> &[u8] {
        &self.bytes[self.original_len..]
    }

    /// Iterates over the blocks in index order: block `i` is bytes `[8i, 8i + 8)`.
    pub fn blocks(&self) -> std::slice::Iter<'_, [u8; TEA_BLOCK_SIZE]> {
        let (blocks, _) = self.bytes.as_chunks::<TEA_BLOCK_SIZE>();
        blocks.iter()
    }

    /// Iterates mutably over the blocks in index order.
    pub fn blocks_mut(&mut self) -> std::slice::IterMut<'_, [u8; TEA_BLOCK_SIZE]> {
        let (blocks, _) = self.bytes.as_chunks_mut::<TEA_BLOCK_SIZE>();
        blocks.iter_mut()
    }

    /// Iterates over the blocks as little-endian word pairs.
    pub fn words(&self) -> impl ExactSizeIterator<Item = TeaBlock> + '_ {
        self.blocks().map(read_block)
    }

    /// Converts the buffer into an immutable [`Bytes`], dropping the length bookkeeping.
    pub fn freeze(self) -> Bytes {
        self.bytes.freeze()
    }
}

impl AsRef<[u8]> for PaddedBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsMut<[u8]> for PaddedBuffer {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}
