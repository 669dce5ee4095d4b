use tinytea_serde::hex::format_word;

/// A 32-bit word rendered as `0x` followed by 8 uppercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexWord(pub u32);

impl std::ops::Deref for HexWord {
    type Target = u32;

    /// Dereferences to the wrapped word.
    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<u32> for HexWord {
    #[inline(always)]
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for HexWord {
    /// Formats the word as an 8-digit uppercase hexadecimal string.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_word(self.0))
    }
}
