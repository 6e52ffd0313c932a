//! Line-oriented prompts for the interactive menu.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use anyhow::bail;
use rust_decimal::Decimal;

/// Prompt/answer I/O over any reader and writer.
///
/// Every answer is trimmed; a blank answer is `None`. End of input also reads
/// as `None` and marks the console closed.
pub struct Console<R, W> {
    input: R,
    out: W,
    closed: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            closed: false,
        }
    }

    /// True once the reader hit end of input.
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    pub fn prompt_string(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{prompt}: ")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.closed = true;
            return Ok(None);
        }
        let trimmed = line.trim();
        Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
    }

    pub fn prompt_int(&mut self, prompt: &str) -> anyhow::Result<Option<i64>> {
        let Some(input) = self.prompt_string(prompt)? else {
            return Ok(None);
        };
        match input.parse::<i64>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => bail!("{input} is not a valid number."),
        }
    }

    pub fn prompt_difficulty(&mut self, prompt: &str) -> anyhow::Result<Option<i32>> {
        let Some(input) = self.prompt_string(prompt)? else {
            return Ok(None);
        };
        match input.parse::<i32>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => bail!("{input} is not a valid number."),
        }
    }

    /// Decimal answer normalized to two fractional digits.
    pub fn prompt_decimal(&mut self, prompt: &str) -> anyhow::Result<Option<Decimal>> {
        self.prompt_string(prompt)?
            .map(|input| proj_core::hours::parse_hours(&input))
            .transpose()
            .map_err(anyhow::Error::from)
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }
}
