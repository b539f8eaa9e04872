//! Console output: banner, board pair, turn and victory lines.

use std::io::{self, Write};

use crate::board::Grid;
use crate::common::{GridError, ShotOutcome};

const GREEN: &str = "\x1b[92m";
const YELLOW: &str = "\x1b[93m";
const CYAN: &str = "\x1b[96m";
const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

const RULE: &str = "------------------------------";

/// Output collaborator. Everything the players see goes through here.
pub struct Console {
    out: Box<dyn Write>,
}

impl Console {
    pub fn new(out: Box<dyn Write>) -> Self {
        Self { out }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Discards all output, for headless matches.
    pub fn sink() -> Self {
        Self::new(Box::new(io::sink()))
    }

    /// Write one line and flush, so prompts show before blocking on input.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }

    /// Write a prompt without a newline.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    pub fn banner(&mut self) -> io::Result<()> {
        self.line(
            "
    ------------------------
          Welcome to
           SeaFight
    ------------------------
      shot input format: x y
      x - row number
      y - column number
    ------------------------
      legend:
      \"■\" - ship
      \"T\" - miss
      \"X\" - hit
      \".\" - around a sunk ship
    ",
        )
    }

    /// Both grids, the user's first. The computer's grid renders concealed.
    pub fn boards(&mut self, user: &Grid, computer: &Grid) -> io::Result<()> {
        self.line(RULE)?;
        self.line("User board:")?;
        self.line(&user.to_string())?;
        self.line(RULE)?;
        self.line("Computer board:")?;
        self.line(&computer.to_string())?;
        self.line(RULE)
    }

    pub fn turn(&mut self, user: bool) -> io::Result<()> {
        if user {
            self.line(&format!("{} User's move!{}", GREEN, RESET))
        } else {
            self.line(&format!("{} Computer's move!{}", YELLOW, RESET))
        }
    }

    pub fn shot(&mut self, outcome: ShotOutcome) -> io::Result<()> {
        self.line(&outcome.to_string())
    }

    pub fn rejected(&mut self, err: &GridError) -> io::Result<()> {
        self.line(&err.to_string())
    }

    pub fn victory(&mut self, user_won: bool) -> io::Result<()> {
        self.line(RULE)?;
        if user_won {
            self.line(&format!("{}✸✸✸ The user wins! ✸✸✸{}", CYAN, RESET))
        } else {
            self.line(&format!("{}✸✸✸ The computer wins! ✸✸✸{}", RED, RESET))
        }
    }
}
