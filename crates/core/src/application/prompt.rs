// Validated input acquisition

use super::config::DirectionInput;
use super::constants::{DECREASE_WORDS, INCREASE_WORDS, INVALID_DIRECTION, INVALID_NUMBER};
use crate::domain::{parse_decimal, Direction};
use crate::error::{AppError, Result};
use crate::port::Console;
use tracing::debug;

/// Read one raw line; a closed input stream becomes `AppError::EndOfInput`
pub fn read_text(console: &mut dyn Console, prompt: &str) -> Result<String> {
    console.read_line(prompt)?.ok_or(AppError::EndOfInput)
}

/// Prompt until the user types a valid decimal number
///
/// There is no retry limit: every rejected line prints the validation
/// message and asks again.
pub fn read_number(console: &mut dyn Console, prompt: &str) -> Result<f64> {
    loop {
        let line = read_text(console, prompt)?;
        match parse_decimal(&line) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!(error = %e, "Rejected numeric input");
                console.write_line(INVALID_NUMBER)?;
            }
        }
    }
}

/// Interpret an increase/decrease answer; `None` when the mode rejects it
pub fn parse_direction(answer: &str, input: DirectionInput) -> Option<Direction> {
    let answer = answer.trim().to_lowercase();
    match input {
        DirectionInput::Letter => Some(if answer.starts_with('v') {
            Direction::Increase
        } else {
            Direction::Decrease
        }),
        DirectionInput::Explicit => {
            if INCREASE_WORDS.contains(&answer.as_str()) {
                Some(Direction::Increase)
            } else if DECREASE_WORDS.contains(&answer.as_str()) {
                Some(Direction::Decrease)
            } else {
                None
            }
        }
    }
}

/// Prompt for a direction (re-prompts only in explicit mode)
pub fn read_direction(
    console: &mut dyn Console,
    prompt: &str,
    input: DirectionInput,
) -> Result<Direction> {
    loop {
        let line = read_text(console, prompt)?;
        if let Some(direction) = parse_direction(&line, input) {
            return Ok(direction);
        }
        debug!(answer = %line.trim(), "Rejected direction input");
        console.write_line(INVALID_DIRECTION)?;
    }
}
