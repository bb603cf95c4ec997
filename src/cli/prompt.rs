use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;
use log::debug;

use crate::application::AppError;
use crate::domain::{parse_cents, parse_date, parse_non_negative_cents, Cents};

/// Reads validated values from a line-oriented input, re-prompting until
/// the input is valid.
///
/// Invalid input never escapes a reader: the error is written to the output
/// and the prompt is repeated. Only `EndOfInput` and I/O failures are returned.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write `label`, then read one line without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so they reach
    /// the validators as ordinary bad input.
    pub fn read_line(&mut self, label: &str) -> Result<String, AppError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(AppError::EndOfInput);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Free text with surrounding whitespace removed; may be empty.
    pub fn read_text(&mut self, label: &str) -> Result<String, AppError> {
        Ok(self.read_line(label)?.trim().to_string())
    }

    /// Keep asking until `parse` accepts the line.
    pub fn read_valid<T, E>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> Result<T, AppError>
    where
        E: Into<AppError>,
    {
        loop {
            let line = self.read_line(label)?;
            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    let err: AppError = err.into();
                    debug!("rejected input {:?}: {}", line, err);
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    /// A decimal amount in cents. With `positive`, negative numbers are rejected.
    pub fn read_number(&mut self, label: &str, positive: bool) -> Result<Cents, AppError> {
        let label = format!("{label}> ");
        if positive {
            self.read_valid(&label, parse_non_negative_cents)
        } else {
            self.read_valid(&label, parse_cents)
        }
    }

    /// One of a closed set of tokens, matched case-insensitively.
    pub fn read_choice<T>(&mut self, label: &str) -> Result<T, AppError>
    where
        T: FromStr,
        T::Err: Into<AppError>,
    {
        self.read_valid(&format!("{label}> "), str::parse::<T>)
    }

    pub fn read_date(&mut self, label: &str) -> Result<NaiveDate, AppError> {
        self.read_valid(&format!("{label} (YYYY-MM-DD)> "), parse_date)
    }
}
