//! Request line parsing.
//!
//! Grammar: exactly four digits forming a permutation of `1..=4`, then one
//! algorithm selector (`d`, `u`, `g`, `a`). A lone `q` or `Q` quits.
//! Surrounding whitespace (including the trailing newline) is ignored.

use pancake_kernel::stack::pancake::Pancake;
use pancake_kernel::stack::state::{StackState, STACK_SIZE};
use pancake_search::Algorithm;
use thiserror::Error;

/// A parsed, valid search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub start: StackState,
    pub algorithm: Algorithm,
}

impl Request {
    /// The start stack with discs separated by spaces, e.g. `2 1 4 3`.
    #[must_use]
    pub fn spaced_start(&self) -> String {
        self.start
            .discs()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// What a line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLine {
    Quit,
    Request(Request),
}

/// Why a line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected {expected} characters, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("'{ch}' at position {position} is not a disc between 1 and {max}", max = STACK_SIZE)]
    BadDigit { ch: char, position: usize },
    #[error("'{ch}' is not an algorithm selector (d, u, g, a)")]
    BadSelector { ch: char },
    #[error("discs {digits} are not a permutation of 1..={max}", max = STACK_SIZE)]
    NotPermutation { digits: String },
}

/// Parse one input line.
///
/// # Errors
///
/// Returns an [`InputError`] describing the first problem found.
pub fn parse_line(line: &str) -> Result<InputLine, InputError> {
    let line = line.trim();
    if line == "q" || line == "Q" {
        return Ok(InputLine::Quit);
    }

    let chars: Vec<char> = line.chars().collect();
    let expected = STACK_SIZE + 1;
    if chars.len() != expected {
        return Err(InputError::WrongLength {
            expected,
            actual: chars.len(),
        });
    }

    let mut symbols = [0u8; STACK_SIZE];
    for (position, (&ch, slot)) in chars.iter().zip(symbols.iter_mut()).enumerate() {
        *slot = Pancake::from_digit(ch)
            .ok_or(InputError::BadDigit { ch, position })?
            .value();
    }

    let selector = chars[STACK_SIZE];
    let algorithm =
        Algorithm::from_selector(selector).ok_or(InputError::BadSelector { ch: selector })?;

    let start = StackState::new(&symbols).map_err(|_| InputError::NotPermutation {
        digits: chars[..STACK_SIZE].iter().collect(),
    })?;

    Ok(InputLine::Request(Request { start, algorithm }))
}
