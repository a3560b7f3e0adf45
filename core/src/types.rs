use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Position of a cell on the board, compared by value.
///
/// Ordering is row-major, so ordered sets of coordinates iterate the board top to bottom and left to right.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: Coord,
    pub col: Coord,
}

impl Coordinate {
    pub const fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }

    pub const fn to_nd_index(self) -> [usize; 2] {
        [self.row as usize, self.col as usize]
    }

    pub const fn is_within(self, rows: Coord, cols: Coord) -> bool {
        self.row < rows && self.col < cols
    }

    /// Neighbors of this coordinate that fall inside a `rows` by `cols` grid.
    pub fn iter_neighbors(self, rows: Coord, cols: Coord) -> NeighborIter {
        NeighborIter::new(self, (rows, cols))
    }
}

impl From<(Coord, Coord)> for Coordinate {
    fn from((row, col): (Coord, Coord)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// Parses the `row-col` cell id form, `row,col` and `row col` are accepted too.
impl FromStr for Coordinate {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || BoardError::InvalidCoordinate(s.to_owned());

        let (row, col) = s
            .trim()
            .split_once(|c: char| c == '-' || c == ',' || c.is_whitespace())
            .ok_or_else(invalid)?;
        let row = row.trim().parse().map_err(|_| invalid())?;
        let col = col.trim().parse().map_err(|_| invalid())?;

        Ok(Self::new(row, col))
    }
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coordinate, delta: (i8, i8), bounds: (Coord, Coord)) -> Option<Coordinate> {
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let row = coords.row.checked_add_signed(d_row)?;
    if row >= rows {
        return None;
    }

    let col = coords.col.checked_add_signed(d_col)?;
    if col >= cols {
        return None;
    }

    Some(Coordinate::new(row, col))
}

/// Iterates the up-to-8 in-bounds neighbors of a cell, never wrapping around the edges.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coordinate,
    bounds: (Coord, Coord),
    index: u8,
}

impl NeighborIter {
    fn new(center: Coordinate, bounds: (Coord, Coord)) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
