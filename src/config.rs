pub const DEFAULT_GRID_SIZE: usize = 6;

/// Vessel lengths of one fleet, placed in this order.
pub const FLEET_LENGTHS: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of vessel cells in the standard fleet.
pub const TOTAL_FLEET_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts allowed for a whole fleet before starting over.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Settings for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub grid_size: usize,
    /// Fixes both fleets and the computer's shots when set.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            seed: None,
        }
    }
}

impl MatchConfig {
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// The standard fleet is only known to fit from the default size upwards;
    /// smaller grids would make fleet generation retry forever.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.grid_size < DEFAULT_GRID_SIZE {
            anyhow::bail!(
                "grid size {} is too small, the fleet needs at least {}x{}",
                self.grid_size,
                DEFAULT_GRID_SIZE,
                DEFAULT_GRID_SIZE
            );
        }
        Ok(())
    }
}
