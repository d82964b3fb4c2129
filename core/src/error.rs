use thiserror::Error;

use crate::Coord2;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board size {0} is outside the supported range")]
    InvalidBoardSize(crate::Coord),
    #[error("More than one piece placed at {0:?}")]
    OverlappingPieces(Coord2),
}

pub type Result<T> = core::result::Result<T, GameError>;
