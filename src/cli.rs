use crate::generator::{self, PasswordError};
use rand::Rng;
use std::io::{BufRead, Write};
use thiserror::Error;

pub const PROMPT: &str = "Enter desired password length (minimum 8): ";

#[derive(Error, Debug)]
pub enum CliError {
    #[error("invalid number: '{0}'")]
    InvalidInput(String),
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type Result<T> = std::result::Result<T, CliError>;

/// Parses a requested length the way a user is likely to type it:
/// surrounding whitespace is ignored and a leading sign is allowed.
pub fn parse_length(line: &str) -> Result<i64> {
    let trimmed = line.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| CliError::InvalidInput(trimmed.to_string()))
}

/// Prompts on `output`, reads one line from `input` and returns a freshly
/// generated password.
pub fn run<I, O, R>(input: &mut I, output: &mut O, rng: &mut R) -> Result<String>
where
    I: BufRead + ?Sized,
    O: Write + ?Sized,
    R: Rng + ?Sized,
{
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let length = parse_length(&line).inspect_err(|err| {
        tracing::info!("rejected input: {err}");
    })?;

    generator::generate(rng, length).map_err(|err| {
        tracing::info!(length, "rejected length");
        CliError::from(err)
    })
}

/// Writes the line the user sees for the outcome of [`run`].
pub fn report<O: Write + ?Sized>(output: &mut O, outcome: &Result<String>) -> std::io::Result<()> {
    match outcome {
        Ok(password) => writeln!(output, "Generated password: {password}"),
        Err(err) => writeln!(output, "Error: {err}"),
    }
}
