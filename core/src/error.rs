use thiserror::Error;

use crate::{CellCount, Coord, Coordinate};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid configuration, a {rows}x{cols} board cannot hold {mines} mines")]
    InvalidConfiguration {
        rows: Coord,
        cols: Coord,
        mines: CellCount,
    },
    #[error("Coordinates {coords} are outside the {rows}x{cols} board")]
    OutOfBounds {
        coords: Coordinate,
        rows: Coord,
        cols: Coord,
    },
    #[error("Board cells do not match the declared size and mines")]
    InvalidBoardShape,
    #[error("Invalid coordinates {0:?}, expected \"row-col\"")]
    InvalidCoordinate(String),
    #[error("Unknown placement strategy {0:?}")]
    UnknownStrategy(String),
}

pub type Result<T> = core::result::Result<T, BoardError>;
