//! Vessel definitions: a straight run of cells with a hit-point counter.

use crate::common::Coordinate;

/// Orientation of a vessel on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends towards higher column numbers.
    Horizontal,
    /// Extends towards higher row numbers.
    Vertical,
}

impl Orientation {
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A vessel anchored at `origin`. Placement validity is the grid's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vessel {
    origin: Coordinate,
    length: usize,
    orientation: Orientation,
    hit_points: usize,
}

impl Vessel {
    /// Create an undamaged vessel.
    pub fn new(origin: Coordinate, length: usize, orientation: Orientation) -> Self {
        Self {
            origin,
            length,
            orientation,
            hit_points: length,
        }
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Remaining hit points; zero means sunk.
    pub fn hit_points(&self) -> usize {
        self.hit_points
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_points == 0
    }

    /// Cells covered by the vessel, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (dr, dc) = self.orientation.step();
        (0..self.length as i32).map(move |i| self.origin.offset(dr * i, dc * i))
    }

    /// Whether `target` is one of the vessel's cells.
    pub fn occupies(&self, target: Coordinate) -> bool {
        self.cells().any(|c| c == target)
    }

    /// Take one hit. Returns `true` when this hit sank the vessel.
    pub(crate) fn register_hit(&mut self) -> bool {
        self.hit_points = self.hit_points.saturating_sub(1);
        self.hit_points == 0
    }
}
