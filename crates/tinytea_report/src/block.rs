use tinytea_cipher::{TEA_BLOCK_SIZE, TeaBlock, read_block};

use crate::HexWord;

/// Bytes rendered as 2-digit uppercase hex separated by single spaces.
///
/// # Example
/// ```
/// use tinytea_report::BlockHex;
///
/// assert_eq!(BlockHex(b"HOLA").to_string(), "48 4F 4C 41");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlockHex<'a>(pub &'a [u8]);

impl std::fmt::Display for BlockHex<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, byte) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02X}")?;
        }

        Ok(())
    }
}

/// A block split into its two 32-bit words, one labelled line per word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockWords(pub TeaBlock);

impl From<&[u8; TEA_BLOCK_SIZE]> for BlockWords {
    /// Reads the block bytes as little-endian words.
    #[inline(always)]
    fn from(bytes: &[u8; TEA_BLOCK_SIZE]) -> Self {
        Self(read_block(bytes))
    }
}

impl From<TeaBlock> for BlockWords {
    #[inline(always)]
    fn from(block: TeaBlock) -> Self {
        Self(block)
    }
}

impl std::fmt::Display for BlockWords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [first, second] = self.0;

        writeln!(f, "  Word 1 (32 bits): {}", HexWord(first))?;
        write!(f, "  Word 2 (32 bits): {}", HexWord(second))
    }
}
