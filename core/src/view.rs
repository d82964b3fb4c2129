use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord,
    pub tiles: Array2<TileState>,
    pub current_team: Team,
    pub phase: Phase,
    pub considering: Option<Coord2>,
}

impl BoardView {
    pub fn from_board(board: &Board, current_team: Team, phase: Phase) -> Self {
        let size = board.size();
        let mut tiles = Array2::from_elem((size, size).to_nd_index(), TileState::Empty);

        for tile in board.iter_tiles() {
            tiles[tile.coords().to_nd_index()] = tile.state();
        }

        Self {
            size,
            tiles,
            current_team,
            phase,
            considering: board.considering(),
        }
    }

    pub fn from_controller<R: Redraw>(game: &GameController<R>) -> Self {
        Self::from_board(game.board(), game.current_team(), game.phase())
    }

    /// Panics when `coords` is off the board, like [`Board::tile_at`].
    pub fn state_at(&self, coords: Coord2) -> TileState {
        self.tiles[coords.to_nd_index()]
    }
}

impl<R: Redraw> GameController<R> {
    pub fn view(&self) -> BoardView {
        BoardView::from_controller(self)
    }
}
