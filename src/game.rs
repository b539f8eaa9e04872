use std::io;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::board::{Grid, Visibility};
use crate::common::ShotOutcome;
use crate::config::MatchConfig;
use crate::fleet::random_fleet;
use crate::player::{Combatant, Player};
use crate::ui::Console;

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchState {
    InProgress,
    UserWon,
    ComputerWon,
}

/// Which combatant a turn belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    User,
    Computer,
}

/// Final or intermediate numbers of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub state: MatchState,
    /// Accepted shots, including those that kept the turn.
    pub turns: usize,
    pub user_shots: usize,
    pub computer_shots: usize,
    /// Computer vessels sunk by the user.
    pub user_sunk: usize,
    /// User vessels sunk by the computer.
    pub computer_sunk: usize,
}

/// Owns both sides of one match and alternates their turns.
pub struct MatchController {
    user: Combatant,
    computer: Combatant,
    state: MatchState,
    // even: user, odd: computer
    turn: usize,
    user_shots: usize,
    computer_shots: usize,
}

impl MatchController {
    /// Generate a random fleet for each side and set up a fresh match.
    pub fn new(user: Box<dyn Player>, computer: Box<dyn Player>, config: &MatchConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        let user_grid = random_fleet(&mut rng, config.grid_size);
        let computer_grid = random_fleet(&mut rng, config.grid_size);
        Self::from_grids(user_grid, computer_grid, user, computer)
    }

    /// Set up a match on already populated grids. The computer's grid is
    /// concealed.
    pub fn from_grids(
        user_grid: Grid,
        mut computer_grid: Grid,
        user: Box<dyn Player>,
        computer: Box<dyn Player>,
    ) -> Self {
        computer_grid.set_visibility(Visibility::Concealed);
        Self {
            user: Combatant::new(user_grid, user),
            computer: Combatant::new(computer_grid, computer),
            state: MatchState::InProgress,
            turn: 0,
            user_shots: 0,
            computer_shots: 0,
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn user_grid(&self) -> &Grid {
        self.user.grid()
    }

    pub fn computer_grid(&self) -> &Grid {
        self.computer.grid()
    }

    /// Side that moves on the next [`step`](Self::step).
    pub fn next_side(&self) -> Side {
        if self.turn % 2 == 0 {
            Side::User
        } else {
            Side::Computer
        }
    }

    /// Play a single turn: one accepted shot by the side to move. A damaging
    /// shot keeps the turn with the shooter.
    pub fn step(&mut self, console: &mut Console) -> io::Result<MatchState> {
        if self.state != MatchState::InProgress {
            return Ok(self.state);
        }

        let side = self.next_side();
        let outcome = match side {
            Side::User => self.user.take_turn(self.computer.grid_mut(), console)?,
            Side::Computer => self.computer.take_turn(self.user.grid_mut(), console)?,
        };
        match side {
            Side::User => self.user_shots += 1,
            Side::Computer => self.computer_shots += 1,
        }

        if !outcome.retains_turn() {
            self.turn += 1;
        }
        if outcome == ShotOutcome::Sunk {
            log::info!("{:?} sank a vessel", side);
        }

        if self.computer.grid().is_defeated() {
            self.state = MatchState::UserWon;
        } else if self.user.grid().is_defeated() {
            self.state = MatchState::ComputerWon;
        }
        if self.state != MatchState::InProgress {
            log::info!("match over: {:?}", self.state);
        }
        Ok(self.state)
    }

    /// Play until one fleet is gone, rendering both boards before every turn.
    pub fn run(&mut self, console: &mut Console) -> io::Result<MatchState> {
        while self.state == MatchState::InProgress {
            console.boards(self.user.grid(), self.computer.grid())?;
            console.turn(self.next_side() == Side::User)?;
            self.step(console)?;
        }
        console.boards(self.user.grid(), self.computer.grid())?;
        console.victory(self.state == MatchState::UserWon)?;
        Ok(self.state)
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            state: self.state,
            turns: self.user_shots + self.computer_shots,
            user_shots: self.user_shots,
            computer_shots: self.computer_shots,
            user_sunk: self.computer.grid().sunk_count(),
            computer_sunk: self.user.grid().sunk_count(),
        }
    }
}
