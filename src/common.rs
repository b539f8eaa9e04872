//! Common types for SeaFight: coordinates, shot outcomes and grid errors.

use core::fmt;

/// A (row, col) position on a grid, 0-indexed.
///
/// Components are signed so that out-of-range input (e.g. a user typing `0`)
/// survives conversion and is rejected by the grid rather than by arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The coordinate shifted by `(dr, dc)`.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }

    /// Chebyshev distance, the number of king moves between two cells.
    pub fn chebyshev(self, other: Coordinate) -> i32 {
        (self.row - other.row)
            .abs()
            .max((self.col - other.col).abs())
    }
}

impl fmt::Display for Coordinate {
    // user-facing, 1-indexed
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

/// Result of a shot that landed on a legal, unused cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Hit a vessel that still has hit points left.
    Damaged,
    /// Took the last hit point of a vessel.
    Sunk,
    /// Open water.
    Miss,
}

impl ShotOutcome {
    /// Only a non-sinking hit keeps the turn with the shooter.
    pub fn retains_turn(self) -> bool {
        matches!(self, ShotOutcome::Damaged)
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Damaged => write!(f, "Ship damaged!"),
            ShotOutcome::Sunk => write!(f, "Ship sunk!"),
            ShotOutcome::Miss => write!(f, "Miss!"),
        }
    }
}

/// Errors returned by Grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Target lies outside the grid.
    OutOfBounds(Coordinate),
    /// Target was shot before, or lies in the revealed contour of a sunk vessel.
    AlreadyTargeted(Coordinate),
    /// Vessel would leave the grid, overlap or touch another vessel.
    WrongPlacement,
    /// The fleet generator ran out of placement attempts.
    UnableToPlaceFleet { attempts: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds(c) => write!(f, "Shot at {} is outside the board!", c),
            GridError::AlreadyTargeted(c) => write!(f, "Cell {} has already been targeted!", c),
            GridError::WrongPlacement => write!(f, "Cannot place a ship there"),
            GridError::UnableToPlaceFleet { attempts } => {
                write!(f, "Unable to place the fleet after {} attempts", attempts)
            }
        }
    }
}

impl std::error::Error for GridError {}
