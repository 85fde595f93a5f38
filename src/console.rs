//! Line-oriented prompt I/O.
//!
//! Generic over the reader and writer so sessions can be scripted in tests
//! with a `Cursor` and a `Vec<u8>`.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{BikeshareError, Result};

pub const SEPARATOR_WIDTH: usize = 40;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one answer, trimmed and lowercased.
    ///
    /// End of input is reported as `InputClosed` rather than an empty
    /// answer, so re-prompt loops cannot spin on a closed stdin.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BikeshareError::InputClosed);
        }
        Ok(line.trim().to_lowercase())
    }

    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    pub fn invalid_input(&mut self) -> Result<()> {
        self.say("\nInvalid input")
    }

    pub fn separator(&mut self) -> Result<()> {
        self.say("-".repeat(SEPARATOR_WIDTH))
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
