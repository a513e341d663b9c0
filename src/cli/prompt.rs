//! Validating input prompts.
//!
//! Each reader re-prompts until the input is valid. End of input is
//! `Error::InputClosed`.

use crate::models::Movie;
use crate::{Error, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Print a prompt and read one line without its line ending.
pub fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InputClosed);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Read a non-empty line.
pub fn read_non_empty<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    loop {
        let line = read_line(input, output, prompt)?;
        if line.trim().is_empty() {
            writeln!(output, "{}", "Field is empty".red())?;
        } else {
            return Ok(line);
        }
    }
}

/// Read a rating in (0, 10].
pub fn read_rating<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<f64> {
    loop {
        let line = read_line(input, output, prompt)?;
        match parse_rating(&line) {
            Some(rating) => return Ok(rating),
            None => writeln!(output, "{}", "Expected a number (0.0 - 10.0)".red())?,
        }
    }
}

/// Read a rating in (0, 10], or `None` for a blank line.
pub fn read_optional_rating<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<f64>> {
    loop {
        let line = read_line(input, output, prompt)?;
        if line.trim().is_empty() {
            return Ok(None);
        }
        match parse_rating(&line) {
            Some(rating) => return Ok(Some(rating)),
            None => writeln!(output, "{}", "Expected a number (0.0 - 10.0)".red())?,
        }
    }
}

/// Read a four-digit year, or `None` for a blank line.
pub fn read_optional_year<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<u16>> {
    loop {
        let line = read_line(input, output, prompt)?;
        if line.trim().is_empty() {
            return Ok(None);
        }
        match parse_year(&line) {
            Some(year) => return Ok(Some(year)),
            None => writeln!(output, "{}", format!("'{}' is not a valid year", line.trim()).red())?,
        }
    }
}

/// Read a yes/no answer.
pub fn read_yes_no<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<bool> {
    loop {
        let line = read_line(input, output, prompt)?;
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "Please enter \"Y\" or \"N\"")?,
        }
    }
}

/// A finite rating in (0, 10].
pub fn parse_rating(text: &str) -> Option<f64> {
    let rating: f64 = text.trim().parse().ok()?;
    Movie::is_valid_rating(rating).then_some(rating)
}

/// Exactly four ASCII digits.
pub fn parse_year(text: &str) -> Option<u16> {
    let text = text.trim();
    if text.len() == 4 && text.bytes().all(|b| b.is_ascii_digit()) {
        text.parse().ok()
    } else {
        None
    }
}
