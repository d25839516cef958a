//! Console menu for picking a download strategy.
//!
//! The loop is generic over its reader and writer so it can be driven from
//! stdin in the binary and from in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::Strategy;

pub const PROMPT: &str = "Select: -> ";
pub const INVALID_SELECTION_MESSAGE: &str = "Wrong input! This must be: 1 | 2 | 3";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("selection {0} is not one of 1 | 2 | 3")]
    OutOfRange(i64),
}

/// Parse a single menu line into a strategy.
pub fn parse_selection(input: &str) -> Result<Strategy, InputError> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    u32::try_from(value)
        .ok()
        .and_then(Strategy::from_selection)
        .ok_or(InputError::OutOfRange(value))
}

/// Show the menu and keep prompting until a valid strategy is entered.
///
/// Invalid lines, including ones that are not UTF-8, are reported on `output`
/// and never surface as errors. Running out of input before a valid selection yields `ErrorKind::UnexpectedEof`.
pub fn read_selection<R, W>(mut input: R, mut output: W) -> io::Result<Strategy>
where
    R: BufRead,
    W: Write,
{
    write_menu(&mut output)?;
    let mut line = Vec::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a download style was selected",
            ));
        }

        // Bytes that are not UTF-8 are just another wrong answer.
        match parse_selection(&String::from_utf8_lossy(&line)) {
            Ok(strategy) => return Ok(strategy),
            Err(_) => writeln!(output, "{INVALID_SELECTION_MESSAGE}")?,
        }
    }
}

fn write_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "Select Download Style")?;
    writeln!(output, "=====================")?;
    for strategy in Strategy::ALL {
        writeln!(output, "{} -> {}", strategy.selection(), strategy.label())?;
    }
    writeln!(output, "=====================")
}
