use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {rows}x{cols} board cannot hold {mines} mines")]
    InvalidConfiguration {
        rows: Coord,
        cols: Coord,
        mines: CellCount,
    },
    #[error("Coordinates {0:?} are out of bounds")]
    OutOfBounds(Coord2),
    #[error("Game already over, no new moves are accepted")]
    GameAlreadyOver,
    #[error("Mine layout does not fit the game configuration")]
    LayoutMismatch,
}

pub type Result<T> = core::result::Result<T, GameError>;
