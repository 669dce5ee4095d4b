use std::num::ParseIntError;

/// Parses a 32-bit word written in hexadecimal, with or without a `0x` prefix.
///
/// Underscores are accepted as digit separators (`0x9E37_79B9`).
pub fn parse_word(text: &str) -> Result<u32, ParseIntError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    u32::from_str_radix(&digits.replace('_', ""), 16)
}

/// Formats a 32-bit word as `0x` followed by 8 uppercase hex digits.
pub fn format_word(word: u32) -> String {
    format!("0x{word:08X}")
}

/// Module for serializing and deserializing fixed-size `u32` arrays as hex strings.
///
/// Used for key material in configuration files, where
/// `["0x12345678", "0x9ABCDEF0"]` reads better than decimal integers.
pub mod as_words {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::{format_word, parse_word};

    /// Serializes `[u32; N]` as a sequence of `0x`-prefixed hex strings.
    pub fn serialize<S, const N: usize>(words: &[u32; N], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(words.iter().copied().map(format_word))
    }

    /// Deserializes `[u32; N]` from a sequence of exactly `N` hex strings.
    pub fn deserialize<'de, D, const N: usize>(deserializer: D) -> Result<[u32; N], D::Error>
    where
        D: Deserializer<'de>,
    {
        let texts = Vec::<String>::deserialize(deserializer)?;

        if texts.len() != N {
            return Err(D::Error::invalid_length(
                texts.len(),
                &format!("{N} hex words").as_str(),
            ));
        }

        let mut words = [0u32; N];
        for (word, text) in words.iter_mut().zip(&texts) {
            *word = parse_word(text)
                .map_err(|error| D::Error::custom(format!("invalid hex word '{text}': {error}")))?;
        }

        Ok(words)
    }
}
