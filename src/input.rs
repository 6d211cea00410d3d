//! Blocking validated console reads.
//!
//! Malformed input is never an error: every contract re-prompts until the
//! line parses and satisfies its constraint. The only failure is a closed
//! or broken stream.

use std::io::{BufRead, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("input stream closed")]
    Closed,
    #[error("console i/o failed")]
    Io(#[from] std::io::Error),
}

/// Read one line and parse the whole of it as an integer. Trailing garbage
/// after the digits rejects the line. `None` means re-prompt.
fn next_integer<R: BufRead>(input: &mut R) -> Result<Option<i64>, ConsoleError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ConsoleError::Closed);
    }
    Ok(line.trim().parse::<i64>().ok())
}

/// Re-prompt until any integer is entered.
pub fn read_integer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<i64, ConsoleError> {
    loop {
        write!(output, "Enter an integer: ")?;
        output.flush()?;
        if let Some(value) = next_integer(input)? {
            return Ok(value);
        }
    }
}

/// Re-prompt until an integer in `[lo, hi]` is entered. The prompt itself
/// states the bounds.
pub fn read_integer_in_range<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    lo: i64,
    hi: i64,
) -> Result<i64, ConsoleError> {
    loop {
        write!(output, "Enter a number between {lo} and {hi}: ")?;
        output.flush()?;
        if let Some(value) = next_integer(input)? {
            if (lo..=hi).contains(&value) {
                return Ok(value);
            }
        }
    }
}

/// Re-prompt until an integer from `choices` is entered, listing the valid
/// choices after an out-of-set rejection.
pub fn read_integer_from_set<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    choices: &[i64],
) -> Result<i64, ConsoleError> {
    loop {
        write!(output, "Enter an integer: ")?;
        output.flush()?;
        match next_integer(input)? {
            Some(value) if choices.contains(&value) => return Ok(value),
            Some(_) => {
                let listed = choices
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(output, "Error: The number must be one of: {listed}")?;
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn any_integer_skips_malformed_lines() {
        let mut input = Cursor::new("12abc\n\n3.5\n-5\n");
        let mut output = Vec::new();
        let value = read_integer(&mut input, &mut output).unwrap();
        assert_eq!(value, -5);
    }

    #[test]
    fn any_integer_accepts_surrounding_whitespace() {
        let mut input = Cursor::new("  42  \n");
        let mut output = Vec::new();
        assert_eq!(read_integer(&mut input, &mut output).unwrap(), 42);
    }

    #[test]
    fn ranged_rejects_out_of_bounds_and_garbage() {
        let mut input = Cursor::new("12abc\n\n-5\n11\n7\n");
        let mut output = Vec::new();
        let value = read_integer_in_range(&mut input, &mut output, 1, 10).unwrap();
        assert_eq!(value, 7);

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Enter a number between 1 and 10: "));
    }

    #[test]
    fn enumerated_lists_choices_on_rejection() {
        let mut input = Cursor::new("3\n1\n");
        let mut output = Vec::new();
        let value = read_integer_from_set(&mut input, &mut output, &[1, 2]).unwrap();
        assert_eq!(value, 1);

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Error: The number must be one of: 1, 2"));
    }

    #[test]
    fn closed_stream_is_the_only_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let err = read_integer(&mut input, &mut output).unwrap_err();
        assert!(matches!(err, ConsoleError::Closed));

        let mut input = Cursor::new("junk\n");
        let err = read_integer_in_range(&mut input, &mut output, 1, 2).unwrap_err();
        assert!(matches!(err, ConsoleError::Closed));
    }
}
