//! Bordered console prompts and selection lists.

use std::io::{BufRead, Write};

use crate::input::{self, ConsoleError};
use crate::rng::RandomSource;

/// Width of the rule between the corner markers.
pub const BORDER_WIDTH: usize = 80;

/// Owns the console streams and renders every prompt the game shows.
/// Numeric validation is delegated to [`crate::input`].
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// An 80-character rule with corner markers, padded above.
    pub fn border(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output)?;
        writeln!(self.output, "@{}@", "=".repeat(BORDER_WIDTH))?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output)?;
        Ok(())
    }

    pub fn line(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// A message boxed between two borders.
    pub fn banner(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.border()?;
        self.blank()?;
        self.line(text)?;
        self.border()?;
        Ok(())
    }

    fn list(&mut self, title: &str, options: &[&str]) -> Result<(), ConsoleError> {
        self.border()?;
        self.blank()?;
        if !title.is_empty() {
            self.line(title)?;
            self.blank()?;
        }
        for (i, option) in options.iter().enumerate() {
            self.line(&format!("{}: {option}", i + 1))?;
        }
        self.border()?;
        Ok(())
    }

    /// Present a 1-indexed list and return the validated selection.
    pub fn choose_one(&mut self, title: &str, options: &[&str]) -> Result<usize, ConsoleError> {
        self.list(title, options)?;
        let selection = input::read_integer_in_range(
            &mut self.input,
            &mut self.output,
            1,
            options.len() as i64,
        )?;
        Ok(selection as usize)
    }

    /// As [`choose_one`](Self::choose_one), but the final option is a
    /// "surprise me" entry: selecting it yields a uniform random pick among
    /// the other options, never the final index itself.
    pub fn choose_one_with_wildcard(
        &mut self,
        title: &str,
        options: &[&str],
        rng: &mut dyn RandomSource,
    ) -> Result<usize, ConsoleError> {
        let selection = self.choose_one(title, options)?;
        if selection == options.len() {
            return Ok(rng.uniform(1, options.len() as i64 - 1) as usize);
        }
        Ok(selection)
    }

    /// Fixed Yes(1)/No(2) prompt.
    pub fn confirm(&mut self, title: &str) -> Result<bool, ConsoleError> {
        self.border()?;
        self.blank()?;
        if !title.is_empty() {
            self.line(title)?;
            self.blank()?;
        }
        self.line("1: Yes")?;
        self.line("2: No")?;
        self.border()?;
        let selection = input::read_integer_in_range(&mut self.input, &mut self.output, 1, 2)?;
        Ok(selection == 1)
    }

    /// A boxed message followed by a ranged numeric read.
    pub fn prompt_integer(
        &mut self,
        title: &str,
        lo: i64,
        hi: i64,
    ) -> Result<i64, ConsoleError> {
        self.border()?;
        self.blank()?;
        self.line(title)?;
        self.border()?;
        input::read_integer_in_range(&mut self.input, &mut self.output, lo, hi)
    }

    /// An inline prompt (no border) followed by a ranged numeric read.
    pub fn ask(&mut self, prompt: &str, lo: i64, hi: i64) -> Result<i64, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        input::read_integer_in_range(&mut self.input, &mut self.output, lo, hi)
    }

    /// Read a full line of free text, stripped of its line terminator.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.border()?;
        self.blank()?;
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }
        self.border()?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
