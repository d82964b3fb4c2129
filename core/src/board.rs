use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Tiles reachable from one origin. Inline storage covers the one-step case.
pub type Reachable = SmallVec<[Coord2; 8]>;

/// Starting position for a square board of side `size`.
///
/// On the default 10×10 board team 0 starts at (3,0), (6,0), (0,3), (9,3) and team 1 is the same layout
/// mirrored across the horizontal axis.
pub fn standard_layout(size: Coord) -> Result<[(Coord2, Team); 8]> {
    if size < MIN_SIZE {
        return Err(GameError::InvalidBoardSize(size));
    }
    let last = size - 1;
    let near = size / 3;
    let far = last - near;

    let home = [(near, 0), (far, 0), (0, near), (last, near)];
    let mirror = |(x, y): Coord2| (x, last - y);

    Ok([
        (home[0], 0),
        (home[1], 0),
        (home[2], 0),
        (home[3], 0),
        (mirror(home[0]), 1),
        (mirror(home[1]), 1),
        (mirror(home[2]), 1),
        (mirror(home[3]), 1),
    ])
}

/// The grid of tiles and the select/highlight/move/fire state machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    tiles: Array2<Tile>,
    reach: Reach,
    /// Piece waiting for a destination click, if any.
    considering: Option<Coord2>,
    /// Piece that just moved and still has to fire.
    shooter: Option<Coord2>,
}

impl Board {
    /// Board with the standard starting layout.
    pub fn new(config: &GameConfig) -> Result<Self> {
        Self::from_pieces(config.size, config.reach, &standard_layout(config.size)?)
    }

    pub fn empty(size: Coord, reach: Reach) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidBoardSize(size));
        }

        let side = usize::from(size);
        let tiles = Array2::from_shape_fn((side, side), |(x, y)| {
            // both indices are below `size`, which is a `Coord`
            Tile::new((x as Coord, y as Coord), size)
        });

        Ok(Self {
            tiles,
            reach,
            considering: None,
            shooter: None,
        })
    }

    pub fn from_pieces(size: Coord, reach: Reach, pieces: &[(Coord2, Team)]) -> Result<Self> {
        let mut board = Self::empty(size, reach)?;

        for &(coords, team) in pieces {
            let coords = board.validate_coords(coords)?;
            let tile = &mut board.tiles[coords.to_nd_index()];
            if !tile.state().is_empty() {
                return Err(GameError::OverlappingPieces(coords));
            }
            tile.set_state(TileState::Occupied(team));
        }

        Ok(board)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord {
        dim_bounds(&self.tiles).0
    }

    pub fn reach(&self) -> Reach {
        self.reach
    }

    /// Panics when `coords` is off the board; the input layer only passes in-bounds tiles. See [`Board::get`].
    pub fn tile_at(&self, coords: Coord2) -> Tile {
        self.tiles[coords.to_nd_index()]
    }

    pub fn get(&self, coords: Coord2) -> Option<&Tile> {
        self.tiles.get(coords.to_nd_index())
    }

    /// Same bounds contract as [`Board::tile_at`].
    pub fn state_at(&self, coords: Coord2) -> TileState {
        self.tile_at(coords).state()
    }

    pub fn considering(&self) -> Option<Coord2> {
        self.considering
    }

    pub fn shooter(&self) -> Option<Coord2> {
        self.shooter
    }

    pub fn iter_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn highlighted(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter_tiles()
            .filter(|tile| tile.state().is_highlighted())
            .map(Tile::coords)
    }

    pub fn pieces(&self, team: Team) -> impl Iterator<Item = Coord2> + '_ {
        self.iter_tiles()
            .filter(move |tile| tile.state().is_occupied_by(team))
            .map(Tile::coords)
    }

    /// Open tiles a piece at `origin` could move to (or shoot at) under the board's reach rule.
    pub fn reachable(&self, origin: Coord2) -> Reachable {
        let bounds = (self.size(), self.size());
        let max_steps = self.reach.max_steps();

        DIRECTIONS
            .iter()
            .flat_map(|&delta| {
                RayIter::new(origin, delta, bounds)
                    .take(max_steps)
                    .take_while(move |&pos| self.state_at(pos).is_open())
            })
            .collect()
    }

    /// Highlights the empty tiles reachable from `origin`, or reverts them to empty when `on` is false.
    ///
    /// Returns how many tiles changed.
    pub fn highlight_reachable(&mut self, origin: Coord2, on: bool) -> Result<usize> {
        let origin = self.validate_coords(origin)?;
        Ok(self.set_highlights(origin, on))
    }

    /// Feeds one tile selection by `team` into the state machine.
    pub fn select(
        &mut self,
        coords: Coord2,
        team: Team,
        is_move_phase: bool,
    ) -> Result<SelectOutcome> {
        use SelectOutcome::*;
        use TileState::*;

        let coords = self.validate_coords(coords)?;

        Ok(match self.state_at(coords) {
            Occupied(owner) if owner == team && self.can_consider(coords, is_move_phase) => {
                self.toggle_considering(coords)
            }
            Highlighted => match self.considering {
                Some(origin) if !self.state_at(origin).is_occupied_by(team) => NoChange,
                Some(origin) if !self.reachable(origin).contains(&coords) => NoChange,
                Some(origin) if is_move_phase => self.move_piece(origin, coords, team),
                Some(origin) if self.shooter == Some(origin) => self.burn(coords, team),
                _ => NoChange,
            },
            _ => NoChange,
        })
    }

    /// During the fire phase only the piece that just moved may aim.
    fn can_consider(&self, coords: Coord2, is_move_phase: bool) -> bool {
        is_move_phase || self.shooter == Some(coords)
    }

    fn toggle_considering(&mut self, coords: Coord2) -> SelectOutcome {
        if self.considering == Some(coords) {
            self.clear_considering();
            log::trace!("Deselected {coords:?}");
        } else {
            self.clear_considering();
            let highlighted = self.set_highlights(coords, true);
            self.considering = Some(coords);
            log::trace!("Considering {coords:?}, {highlighted} tiles in reach");
        }
        SelectOutcome::ChangedIncomplete
    }

    fn move_piece(&mut self, origin: Coord2, destination: Coord2, team: Team) -> SelectOutcome {
        self.clear_considering();
        self.tiles[destination.to_nd_index()].set_state(TileState::Occupied(team));
        self.tiles[origin.to_nd_index()].set_state(TileState::Empty);
        self.shooter = Some(destination);
        log::debug!("Team {team} moved {origin:?} -> {destination:?}");
        SelectOutcome::ChangedComplete
    }

    fn burn(&mut self, target: Coord2, team: Team) -> SelectOutcome {
        self.clear_considering();
        self.tiles[target.to_nd_index()].set_state(TileState::Burned(team));
        self.shooter = None;
        log::debug!("Team {team} burned {target:?}");
        SelectOutcome::ChangedComplete
    }

    fn clear_considering(&mut self) {
        if let Some(origin) = self.considering.take() {
            self.set_highlights(origin, false);
        }
    }

    fn set_highlights(&mut self, origin: Coord2, on: bool) -> usize {
        use TileState::*;

        let (from, to) = if on {
            (Empty, Highlighted)
        } else {
            (Highlighted, Empty)
        };

        let mut updated = 0;
        for pos in self.reachable(origin) {
            let tile = &mut self.tiles[pos.to_nd_index()];
            if tile.state() == from {
                tile.set_state(to);
                updated += 1;
            }
        }
        updated
    }
}
