use std::io;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::common::Coordinate;
use crate::player::Player;
use crate::ui::Console;

/// Computer player that shoots uniformly at random.
pub struct AiPlayer {
    rng: SmallRng,
}

impl AiPlayer {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    /// Reproducible player for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        "computer"
    }

    fn choose_target(
        &mut self,
        grid_size: usize,
        console: &mut Console,
    ) -> io::Result<Coordinate> {
        if grid_size == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "cannot target an empty grid",
            ));
        }
        let size = grid_size as i32;
        let target = Coordinate::new(
            self.rng.random_range(0..size),
            self.rng.random_range(0..size),
        );
        console.line(&format!("Computer's move: {}", target))?;
        Ok(target)
    }
}
