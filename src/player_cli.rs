use std::io::{self, BufRead};

use crate::common::Coordinate;
use crate::player::Player;
use crate::ui::Console;

/// Why a line of input could not be read as a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Anything other than exactly two tokens.
    WrongTokenCount,
    /// A token that is not a plain unsigned number.
    NotANumber,
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::WrongTokenCount => write!(f, "Enter 2 coordinates!"),
            InputError::NotANumber => write!(f, "Enter numbers!"),
        }
    }
}

/// Parse `"row col"`, 1-indexed, into an internal 0-indexed coordinate.
/// Range checks are left to the grid.
pub fn parse_coord(input: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(InputError::WrongTokenCount);
    };
    let parse = |s: &str| -> Result<i32, InputError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::NotANumber);
        }
        s.parse::<i32>().map_err(|_| InputError::NotANumber)
    };
    Ok(Coordinate::new(parse(*row)? - 1, parse(*col)? - 1))
}

/// Human player reading targets from a line-oriented input source.
pub struct CliPlayer {
    input: Box<dyn BufRead>,
}

impl CliPlayer {
    pub fn new(input: Box<dyn BufRead>) -> Self {
        Self { input }
    }

    pub fn stdin() -> Self {
        Self::new(Box::new(io::stdin().lock()))
    }
}

impl Player for CliPlayer {
    fn name(&self) -> &str {
        "user"
    }

    fn choose_target(
        &mut self,
        _grid_size: usize,
        console: &mut Console,
    ) -> io::Result<Coordinate> {
        loop {
            console.prompt("Your move: ")?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed while waiting for a move",
                ));
            }
            match parse_coord(&line) {
                Ok(target) => return Ok(target),
                Err(e) => console.line(&e.to_string())?,
            }
        }
    }
}
