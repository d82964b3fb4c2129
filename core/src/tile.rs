use serde::{Deserialize, Serialize};

use crate::*;

/// What a single grid cell currently holds.
///
/// The owning team travels inside the variant, so a state can never be set without its team.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileState {
    #[default]
    Empty,
    /// Empty tile that is a valid target for the piece being considered.
    Highlighted,
    Occupied(Team),
    /// Permanently disabled. Keeps the team that fired the shot.
    Burned(Team),
}

impl TileState {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn is_highlighted(self) -> bool {
        matches!(self, Self::Highlighted)
    }

    /// Tiles a piece or a shot can pass through.
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Empty | Self::Highlighted)
    }

    /// Team of the piece on this tile, present only while occupied.
    pub const fn team(self) -> Option<Team> {
        match self {
            Self::Occupied(team) => Some(team),
            _ => None,
        }
    }

    pub const fn burned_by(self) -> Option<Team> {
        match self {
            Self::Burned(team) => Some(team),
            _ => None,
        }
    }

    pub const fn is_occupied_by(self, team: Team) -> bool {
        matches!(self, Self::Occupied(owner) if owner == team)
    }
}

/// Stable identity of a tile, unique within one board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub CellCount);

impl TileId {
    /// Row-major id: `y * width + x`.
    pub const fn from_coords((x, y): Coord2, width: Coord) -> Self {
        Self(mult(y, width) + x as CellCount)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    coords: Coord2,
    id: TileId,
    state: TileState,
}

impl Tile {
    pub(crate) const fn new(coords: Coord2, width: Coord) -> Self {
        Self {
            coords,
            id: TileId::from_coords(coords, width),
            state: TileState::Empty,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn id(&self) -> TileId {
        self.id
    }

    pub const fn state(&self) -> TileState {
        self.state
    }

    pub const fn team(&self) -> Option<Team> {
        self.state.team()
    }

    pub(crate) fn set_state(&mut self, state: TileState) {
        self.state = state;
    }
}
