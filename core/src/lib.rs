#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use controller::*;
pub use error::*;
pub use tile::*;
pub use types::*;
pub use view::*;

mod board;
mod controller;
mod error;
mod tile;
mod types;
mod view;

/// Side length of the standard board.
pub const DEFAULT_SIZE: Coord = 10;

/// Smallest board the standard layout fits on without pieces colliding.
pub const MIN_SIZE: Coord = 4;

pub const DEFAULT_TEAMS: Team = 2;

/// How far a piece (and its shot) can travel from its tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reach {
    /// One step in any of the eight queen directions.
    #[default]
    Adjacent,
    /// Any distance along a queen line, stopping before the first blocked tile.
    QueenLine,
}

impl Reach {
    pub const fn max_steps(self) -> usize {
        match self {
            Self::Adjacent => 1,
            Self::QueenLine => usize::MAX,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub teams: Team,
    pub reach: Reach,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, teams: Team, reach: Reach) -> Self {
        Self { size, teams, reach }
    }

    pub fn new(size: Coord, teams: Team) -> Self {
        let clamped_size = size.clamp(MIN_SIZE, Coord::MAX);
        if clamped_size != size {
            log::warn!("Board size {size} is too small, using {clamped_size}");
        }
        let clamped_teams = teams.max(1);
        if clamped_teams != teams {
            log::warn!("A game needs at least one team, using {clamped_teams}");
        }
        Self::new_unchecked(clamped_size, clamped_teams, Reach::default())
    }

    pub const fn with_reach(self, reach: Reach) -> Self {
        Self { reach, ..self }
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_SIZE, DEFAULT_TEAMS, Reach::Adjacent)
    }
}

/// Result of feeding one tile selection to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    NoChange,
    /// The board changed but the current phase is still in progress.
    ChangedIncomplete,
    /// The current phase (move or fire) finished.
    ChangedComplete,
}

impl SelectOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::ChangedIncomplete => true,
            Self::ChangedComplete => true,
        }
    }

    pub const fn is_complete(self) -> bool {
        matches!(self, Self::ChangedComplete)
    }
}
