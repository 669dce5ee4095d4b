use std::io::{self, Read, Write};

/// Prompts for a menu option and reads it one keystroke at a time.
///
/// Every byte read is echoed to `output`, like a serial console would.
/// - A digit between `1` and `option_count` selects that option.
/// - Enter (`\r` or `\n`) or the end of `input` selects `default`.
/// - Anything else prints a notice and keeps reading.
///
/// `option_count` is at most 9, since options are single digits.
pub fn read_option<R: Read, W: Write>(
    input: R,
    mut output: W,
    option_count: usize,
    default: usize,
) -> io::Result<usize> {
    write!(output, "Select option (1-{option_count}): ")?;
    output.flush()?;

    for byte in input.bytes() {
        let byte = byte?;

        output.write_all(&[byte])?;

        match byte {
            b'1'..=b'9' if usize::from(byte - b'0') <= option_count => {
                writeln!(output, " - option selected!")?;
                return Ok(usize::from(byte - b'0'));
            }
            b'\r' | b'\n' => {
                writeln!(output, " - using default option ({default})")?;
                return Ok(default);
            }
            _ => {
                write!(output, " <- invalid. Use 1-{option_count}: ")?;
                output.flush()?;
            }
        }
    }

    writeln!(output, "\nInput closed - using default option ({default})")?;
    Ok(default)
}
