//! Grid state: vessel placement with a one-cell contour, shot resolution and
//! text rendering.

use core::fmt;
use std::collections::HashSet;

use crate::common::{Coordinate, GridError, ShotOutcome};
use crate::ship::Vessel;

/// Render state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
    /// Contour of a sunk vessel, known to be empty.
    Buffer,
}

impl Cell {
    /// One-character symbol; concealed grids draw ships as empty water.
    pub fn symbol(self, visibility: Visibility) -> char {
        match self {
            Cell::Empty => '0',
            Cell::Ship if visibility == Visibility::Concealed => '0',
            Cell::Ship => '■',
            Cell::Hit => 'X',
            Cell::Miss => 'T',
            Cell::Buffer => '.',
        }
    }
}

/// Whether ship cells are drawn when the grid is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Revealed,
    Concealed,
}

/// One side's square grid.
///
/// `blocked` serves two phases. During fleet setup it holds every vessel cell
/// plus its contour so that vessels never touch. After
/// [`reset_targeting_state`](Grid::reset_targeting_state) it holds every cell
/// that was shot, plus the contours revealed around sunk vessels.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Cell>>,
    blocked: HashSet<Coordinate>,
    vessels: Vec<Vessel>,
    sunk: usize,
    visibility: Visibility,
}

impl Grid {
    /// Create an empty, revealed `size`×`size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![Cell::Empty; size]; size],
            blocked: HashSet::new(),
            vessels: Vec::new(),
            sunk: 0,
            visibility: Visibility::Revealed,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// Render state at `c`, or `None` outside the grid.
    pub fn cell(&self, c: Coordinate) -> Option<Cell> {
        if self.is_out_of_bounds(c) {
            return None;
        }
        Some(self.cells[c.row as usize][c.col as usize])
    }

    /// Whether `c` can no longer be targeted (or, during setup, occupied).
    pub fn is_blocked(&self, c: Coordinate) -> bool {
        self.blocked.contains(&c)
    }

    pub fn is_out_of_bounds(&self, c: Coordinate) -> bool {
        let size = self.size as i32;
        !((0..size).contains(&c.row) && (0..size).contains(&c.col))
    }

    fn set_cell(&mut self, c: Coordinate, cell: Cell) {
        self.cells[c.row as usize][c.col as usize] = cell;
    }

    /// Block the in-bounds, not yet blocked neighbours of every cell of
    /// `vessels[index]`, optionally marking them as buffer on the grid.
    fn compute_buffer(&mut self, index: usize, mark_visually: bool) {
        let cells: Vec<Coordinate> = self.vessels[index].cells().collect();
        for cell in cells {
            for dr in -1..=1 {
                for dc in -1..=1 {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let near = cell.offset(dr, dc);
                    if self.is_out_of_bounds(near) || self.blocked.contains(&near) {
                        continue;
                    }
                    if mark_visually {
                        self.set_cell(near, Cell::Buffer);
                    }
                    self.blocked.insert(near);
                }
            }
        }
    }

    /// Place a vessel. Nothing is mutated unless every cell is in bounds and
    /// outside existing vessels and their contours.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), GridError> {
        if vessel
            .cells()
            .any(|c| self.is_out_of_bounds(c) || self.blocked.contains(&c))
        {
            return Err(GridError::WrongPlacement);
        }
        let cells: Vec<Coordinate> = vessel.cells().collect();
        for c in cells {
            self.set_cell(c, Cell::Ship);
            self.blocked.insert(c);
        }
        self.vessels.push(vessel);
        self.compute_buffer(self.vessels.len() - 1, false);
        Ok(())
    }

    /// Forget the setup-time contours so that play starts with no blocked cells.
    pub fn reset_targeting_state(&mut self) {
        self.blocked.clear();
    }

    /// Resolve a shot at `target`.
    pub fn shoot(&mut self, target: Coordinate) -> Result<ShotOutcome, GridError> {
        if self.is_out_of_bounds(target) {
            return Err(GridError::OutOfBounds(target));
        }
        if !self.blocked.insert(target) {
            return Err(GridError::AlreadyTargeted(target));
        }

        let Some(index) = self.vessels.iter().position(|v| v.occupies(target)) else {
            self.set_cell(target, Cell::Miss);
            return Ok(ShotOutcome::Miss);
        };

        self.set_cell(target, Cell::Hit);
        if self.vessels[index].register_hit() {
            self.sunk += 1;
            self.compute_buffer(index, true);
            Ok(ShotOutcome::Sunk)
        } else {
            Ok(ShotOutcome::Damaged)
        }
    }

    /// Returns `true` once every placed vessel is sunk.
    pub fn is_defeated(&self) -> bool {
        self.sunk == self.vessels.len()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   |")?;
        for c in 1..=self.size {
            write!(f, " {} |", c)?;
        }
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "\n{:<2} |", r + 1)?;
            for cell in row {
                write!(f, " {} |", cell.symbol(self.visibility))?;
            }
        }
        Ok(())
    }
}
