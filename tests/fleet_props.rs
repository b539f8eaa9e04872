use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seafight::{
    random_fleet, try_random_fleet, Cell, Coordinate, GridError, DEFAULT_GRID_SIZE, FLEET_LENGTHS,
    MAX_PLACEMENT_ATTEMPTS, TOTAL_FLEET_CELLS,
};

fn ship_cells(grid: &seafight::Grid) -> usize {
    let size = grid.size() as i32;
    (0..size)
        .flat_map(|r| (0..size).map(move |c| Coordinate::new(r, c)))
        .filter(|&c| grid.cell(c) == Some(Cell::Ship))
        .count()
}

#[test]
fn test_thousand_generations() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..1000 {
        let grid = random_fleet(&mut rng, DEFAULT_GRID_SIZE);
        assert_eq!(grid.vessels().len(), FLEET_LENGTHS.len());
        assert_eq!(ship_cells(&grid), TOTAL_FLEET_CELLS);
        assert_eq!(grid.sunk_count(), 0);
    }
}

#[test]
fn test_fleet_lengths_in_order() {
    let mut rng = SmallRng::seed_from_u64(99);
    let grid = random_fleet(&mut rng, DEFAULT_GRID_SIZE);
    let lengths: Vec<usize> = grid.vessels().iter().map(|v| v.length()).collect();
    assert_eq!(lengths, FLEET_LENGTHS.to_vec());
}

#[test]
fn test_impossible_grid_exhausts_attempts() {
    let mut rng = SmallRng::seed_from_u64(1);
    let err = try_random_fleet(&mut rng, 2).unwrap_err();
    assert_eq!(
        err,
        GridError::UnableToPlaceFleet {
            attempts: MAX_PLACEMENT_ATTEMPTS
        }
    );
}

#[test]
fn test_same_seed_same_fleet() {
    let a = random_fleet(&mut SmallRng::seed_from_u64(42), DEFAULT_GRID_SIZE);
    let b = random_fleet(&mut SmallRng::seed_from_u64(42), DEFAULT_GRID_SIZE);
    assert_eq!(a.vessels(), b.vessels());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_fleet_is_ready_for_play(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let grid = random_fleet(&mut rng, DEFAULT_GRID_SIZE);
        let size = grid.size() as i32;
        // setup contours are gone
        for r in 0..size {
            for c in 0..size {
                prop_assert!(!grid.is_blocked(Coordinate::new(r, c)));
            }
        }
        let vessels = grid.vessels();
        for (i, a) in vessels.iter().enumerate() {
            for cell in a.cells() {
                prop_assert!(!grid.is_out_of_bounds(cell));
            }
            for b in vessels.iter().skip(i + 1) {
                for ca in a.cells() {
                    for cb in b.cells() {
                        prop_assert!(ca.chebyshev(cb) > 1);
                    }
                }
            }
        }
    }
}
