// ============================================================================
// Console Prompts
// Re-prompting input loop for the console shell
// ============================================================================

use std::io::{self, BufRead, Write};
use std::str::FromStr;

pub const NUMERATOR_FIELD: &str = "the most significant digits of the numerator";
pub const DENOMINATOR_FIELD: &str = "the most significant digits of the denominator";
pub const PRECISION_FIELD: &str = "the precision of the approximation";

/// True for a non-empty run of ASCII digits.
pub fn is_decimal_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Ask for `field` until the answer is a non-negative decimal integer that
/// parses as `T`.
///
/// Surrounding whitespace is ignored. Zero is accepted here; the core
/// rejects it with `InvalidInput`.
///
/// # Errors
/// I/O errors from `input`/`output`, and `UnexpectedEof` when input ends
/// before a valid answer.
pub fn prompt_integer<T, R, W>(input: &mut R, output: &mut W, field: &str) -> io::Result<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    write!(output, "Enter {}: ", field)?;
    output.flush()?;

    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input closed before {} was given", field),
            ));
        }

        let answer = line.trim();
        if is_decimal_digits(answer) {
            if let Ok(value) = answer.parse::<T>() {
                return Ok(value);
            }
        }

        write!(output, "Please, {} must be a positive integer, retry: ", field)?;
        output.flush()?;
    }
}
