use std::io;

use crate::board::Grid;
use crate::common::{Coordinate, ShotOutcome};
use crate::ui::Console;

/// Source of shot targets. The controller never knows which kind it drives.
pub trait Player {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Choose the next target on an opponent grid of `grid_size`×`grid_size`.
    /// The result may be illegal; the grid decides.
    fn choose_target(&mut self, grid_size: usize, console: &mut Console)
        -> io::Result<Coordinate>;
}

/// A player together with the grid holding its own fleet.
pub struct Combatant {
    grid: Grid,
    player: Box<dyn Player>,
}

impl Combatant {
    pub fn new(grid: Grid, player: Box<dyn Player>) -> Self {
        Self { grid, player }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn name(&self) -> &str {
        self.player.name()
    }

    /// Shoot at `opponent` until a shot is accepted. Returns the outcome of
    /// that shot; rejected targets are reported and retried without using up
    /// the turn.
    pub fn take_turn(
        &mut self,
        opponent: &mut Grid,
        console: &mut Console,
    ) -> io::Result<ShotOutcome> {
        loop {
            let target = self.player.choose_target(opponent.size(), console)?;
            match opponent.shoot(target) {
                Ok(outcome) => {
                    log::debug!("{} shot {:?}: {:?}", self.name(), target, outcome);
                    console.shot(outcome)?;
                    return Ok(outcome);
                }
                Err(e) => {
                    log::debug!("{} shot rejected: {}", self.name(), e);
                    console.rejected(&e)?;
                }
            }
        }
    }
}
