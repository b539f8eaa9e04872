//! Random fleet generation.

use rand::Rng;

use crate::board::Grid;
use crate::common::{Coordinate, GridError};
use crate::config::{FLEET_LENGTHS, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Vessel};

/// One attempt at placing the standard fleet on a fresh `size`×`size` grid.
///
/// Origins are drawn from `0..=size` on both axes and every candidate goes
/// through full placement validation. At most [`MAX_PLACEMENT_ATTEMPTS`]
/// vessels are tried for the whole fleet.
pub fn try_random_fleet<R: Rng>(rng: &mut R, size: usize) -> Result<Grid, GridError> {
    let mut grid = Grid::new(size);
    let mut attempts = 0;
    for &length in FLEET_LENGTHS.iter() {
        loop {
            attempts += 1;
            if attempts > MAX_PLACEMENT_ATTEMPTS {
                return Err(GridError::UnableToPlaceFleet {
                    attempts: MAX_PLACEMENT_ATTEMPTS,
                });
            }
            let origin = Coordinate::new(
                rng.random_range(0..=size as i32),
                rng.random_range(0..=size as i32),
            );
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            match grid.place_vessel(Vessel::new(origin, length, orientation)) {
                Ok(()) => break,
                Err(GridError::WrongPlacement) => continue,
                Err(e) => return Err(e),
            }
        }
    }
    log::debug!("fleet placed after {} attempts", attempts);
    grid.reset_targeting_state();
    Ok(grid)
}

/// Place the standard fleet, starting over with an empty grid whenever an
/// attempt runs out of tries.
pub fn random_fleet<R: Rng>(rng: &mut R, size: usize) -> Grid {
    loop {
        match try_random_fleet(rng, size) {
            Ok(grid) => return grid,
            Err(e) => log::debug!("restarting fleet generation: {}", e),
        }
    }
}
