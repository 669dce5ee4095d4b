use tinytea_cipher::TEA_BLOCK_SIZE;
use tinytea_padding::PaddedBuffer;

/// Lengths before and after padding, rendered as a short multi-line report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingSummary {
    /// Length of the text as supplied, before any truncation.
    pub original_len: usize,

    /// Length of the padded buffer.
    pub padded_len: usize,
}

impl PaddingSummary {
    /// Number of 64-bit blocks in the padded buffer.
    pub const fn block_count(&self) -> usize {
        self.padded_len / TEA_BLOCK_SIZE
    }

    /// Bytes appended beyond the original length, zero when the input was
    /// aligned or truncated.
    pub const fn padding_len(&self) -> usize {
        self.padded_len.saturating_sub(self.original_len)
    }
}

impl From<&PaddedBuffer> for PaddingSummary {
    /// Summarizes a buffer using its copied length as the original length.
    fn from(buffer: &PaddedBuffer) -> Self {
        Self {
            original_len: buffer.original_len(),
            padded_len: buffer.len(),
        }
    }
}

impl std::fmt::Display for PaddingSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Original length: {} bytes", self.original_len)?;
        writeln!(
            f,
            "Padded length: {} bytes ({} bits)",
            self.padded_len,
            self.padded_len * 8
        )?;
        write!(f, "64-bit blocks: {}", self.block_count())?;

        if self.padding_len() > 0 {
            write!(
                f,
                "\nPadding applied: {} bytes (to the last block)",
                self.padding_len()
            )?;
        }

        Ok(())
    }
}
