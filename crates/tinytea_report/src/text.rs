/// Bytes rendered as quoted text for a quick look at decrypted output.
///
/// Printable ASCII is shown as is, zero bytes (padding) as `\0`, and any
/// other byte as `?`.
#[derive(Debug, Clone, Copy)]
pub struct TextPreview<'a>(pub &'a [u8]);

impl std::fmt::Display for TextPreview<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("\"")?;

        for &byte in self.0 {
            match byte {
                0 => f.write_str("\\0")?,
                32..=126 => write!(f, "{}", byte as char)?,
                _ => f.write_str("?")?,
            }
        }

        f.write_str("\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_preview_shows_padding_as_escaped_zero() {
        assert_eq!(TextPreview(b"Texto\0\0\0").to_string(), r#""Texto\0\0\0""#);
    }

    #[test]
    fn test_text_preview_masks_non_printable_bytes() {
        assert_eq!(TextPreview(&[b'a', 0x07, 0xC3, b'z']).to_string(), r#""a??z""#);
    }

    #[test]
    fn test_text_preview_keeps_printable_range_edges() {
        assert_eq!(TextPreview(b" ~").to_string(), r#"" ~""#);
        assert_eq!(TextPreview(&[31, 127]).to_string(), r#""??""#);
    }
}
