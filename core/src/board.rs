use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// A fully computed board, owned by the caller for the duration of one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    cells: Array2<Cell>,
    config: GameConfig,
}

/// Unchecked serialized form of a [`Board`].
#[derive(Deserialize)]
struct BoardData {
    cells: Array2<Cell>,
    config: GameConfig,
}

impl TryFrom<BoardData> for Board {
    type Error = BoardError;

    /// Accepts the cells only if they match the declared config and the adjacency of their own mines.
    fn try_from(data: BoardData) -> Result<Self> {
        let (rows, cols) = data.cells.dim();
        if [rows, cols] != data.config.shape() {
            return Err(BoardError::InvalidBoardShape);
        }
        data.config.validate()?;

        let expected = Self::from_mine_mask(&data.cells.map(|cell| cell.is_mine()));
        let kinds_match = expected
            .cells
            .iter()
            .map(|cell| cell.kind())
            .eq(data.cells.iter().map(|cell| cell.kind()));
        if expected.config != data.config || !kinds_match {
            return Err(BoardError::InvalidBoardShape);
        }

        Ok(Self {
            cells: data.cells,
            config: data.config,
        })
    }
}

impl Board {
    /// Builds the cells for a mine mask, computing adjacency counts for every safe cell.
    ///
    /// The mask dimensions must fit in [`Coord`].
    pub(crate) fn from_mine_mask(mine_mask: &Array2<bool>) -> Self {
        let (rows, cols) = mine_mask.dim();
        let (rows, cols) = (rows as Coord, cols as Coord);
        let mut mines: CellCount = 0;

        let cells = Array2::from_shape_fn(mine_mask.dim(), |(row, col)| {
            if mine_mask[(row, col)] {
                mines += 1;
                return Cell::hidden(CellKind::Mine);
            }
            let adjacent = Coordinate::new(row as Coord, col as Coord)
                .iter_neighbors(rows, cols)
                .filter(|pos| mine_mask[pos.to_nd_index()])
                .count();
            Cell::hidden(CellKind::Empty(adjacent as u8))
        });

        Self {
            cells,
            config: GameConfig::new_unchecked(rows, cols, mines),
        }
    }

    /// Builds a board with mines at exactly the given coordinates, repeated coordinates count once.
    pub fn from_mine_coords(rows: Coord, cols: Coord, mine_coords: &[Coordinate]) -> Result<Self> {
        GameConfig::new(rows, cols, 0)?;

        let mut mine_mask: Array2<bool> = Array2::default([rows as usize, cols as usize]);
        for &coords in mine_coords {
            if !coords.is_within(rows, cols) {
                return Err(BoardError::OutOfBounds { coords, rows, cols });
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        let board = Self::from_mine_mask(&mine_mask);
        board.config.validate()?;
        Ok(board)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn rows(&self) -> Coord {
        self.config.rows
    }

    pub fn cols(&self) -> Coord {
        self.config.cols
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn total_cells(&self) -> CellCount {
        self.config.total_cells()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.config.safe_cells()
    }

    pub fn visible_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_visible()).count() as CellCount
    }

    pub fn contains(&self, coords: Coordinate) -> bool {
        coords.is_within(self.rows(), self.cols())
    }

    pub fn validate_coords(&self, coords: Coordinate) -> Result<Coordinate> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(BoardError::OutOfBounds {
                coords,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    pub fn cell_at(&self, coords: Coordinate) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| (Coordinate::new(row as Coord, col as Coord), cell))
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.iter()
            .filter(|(_, cell)| cell.is_mine())
            .map(|(coords, _)| coords)
    }

    pub fn iter_neighbors(&self, coords: Coordinate) -> NeighborIter {
        coords.iter_neighbors(self.rows(), self.cols())
    }

    /// Returns whether the cell was hidden before the call.
    pub(crate) fn mark_visible(&mut self, coords: Coordinate) -> bool {
        self.cells[coords.to_nd_index()].mark_visible()
    }
}

impl Index<Coordinate> for Board {
    type Output = Cell;

    fn index(&self, coords: Coordinate) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn coords(list: &[(Coord, Coord)]) -> Vec<Coordinate> {
        list.iter().copied().map(Coordinate::from).collect()
    }

    fn brute_force_count(board: &Board, at: Coordinate) -> u8 {
        let mut count = 0;
        for row in at.row.saturating_sub(1)..=at.row.saturating_add(1) {
            for col in at.col.saturating_sub(1)..=at.col.saturating_add(1) {
                let other = Coordinate::new(row, col);
                if other != at && board.contains(other) && board[other].is_mine() {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn single_corner_mine_counts() {
        let board = Board::from_mine_coords(3, 3, &coords(&[(0, 0)])).unwrap();

        assert_eq!(board[Coordinate::new(0, 0)].kind(), CellKind::Mine);
        for pos in [(0, 1), (1, 0), (1, 1)] {
            assert_eq!(board[Coordinate::from(pos)].kind(), CellKind::Empty(1), "at {pos:?}");
        }
        for pos in [(0, 2), (1, 2), (2, 0), (2, 1), (2, 2)] {
            assert_eq!(board[Coordinate::from(pos)].kind(), CellKind::Empty(0), "at {pos:?}");
        }
        assert_eq!(board.mine_count(), 1);
        assert_eq!(board.visible_count(), 0);
    }

    #[test]
    fn surrounded_cell_counts_eight() {
        let ring = coords(&[(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]);
        let board = Board::from_mine_coords(3, 3, &ring).unwrap();

        assert_eq!(board[Coordinate::new(1, 1)].adjacent_mines(), Some(8));
        assert_eq!(board.safe_cell_count(), 1);
    }

    #[test]
    fn counts_do_not_wrap_around_edges() {
        let board = Board::from_mine_coords(1, 4, &coords(&[(0, 3)])).unwrap();

        assert_eq!(board[Coordinate::new(0, 0)].adjacent_mines(), Some(0));
        assert_eq!(board[Coordinate::new(0, 2)].adjacent_mines(), Some(1));
    }

    #[test]
    fn duplicate_mine_coords_collapse() {
        let board = Board::from_mine_coords(2, 2, &coords(&[(1, 1), (1, 1)])).unwrap();

        assert_eq!(board.mine_count(), 1);
        assert_eq!(board.mine_coords().collect::<Vec<_>>(), coords(&[(1, 1)]));
    }

    #[test]
    fn rejects_out_of_bounds_mines() {
        let err = Board::from_mine_coords(2, 2, &coords(&[(2, 0)])).unwrap_err();

        assert_eq!(
            err,
            BoardError::OutOfBounds {
                coords: Coordinate::new(2, 0),
                rows: 2,
                cols: 2,
            }
        );
    }

    #[test]
    fn rejects_full_board() {
        let all = coords(&[(0, 0), (0, 1)]);
        assert!(matches!(
            Board::from_mine_coords(1, 2, &all),
            Err(BoardError::InvalidConfiguration { mines: 2, .. })
        ));
        assert!(Board::from_mine_coords(0, 2, &[]).is_err());
    }

    #[test]
    fn cell_at_checks_bounds() {
        let board = Board::from_mine_coords(2, 3, &[]).unwrap();

        assert!(board.cell_at(Coordinate::new(1, 2)).is_ok());
        assert!(board.cell_at(Coordinate::new(2, 0)).is_err());
        assert!(board.cell_at(Coordinate::new(0, 3)).is_err());
    }

    #[test]
    fn adjacency_matches_brute_force_on_seeded_board() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        let config = GameConfig::new(16, 30, 99).unwrap();
        let board = BoardGenerator::default()
            .generate_with_rng(config, &mut rng)
            .unwrap();

        for (pos, cell) in board.iter() {
            if let CellKind::Empty(count) = cell.kind() {
                assert_eq!(count, brute_force_count(&board, pos), "at {pos}");
            }
        }
    }

    #[test]
    fn iter_is_row_major() {
        let board = Board::from_mine_coords(2, 2, &[]).unwrap();
        let order: Vec<_> = board.iter().map(|(pos, _)| pos).collect();

        assert_eq!(order, coords(&[(0, 0), (0, 1), (1, 0), (1, 1)]));
    }

    #[test]
    fn serializes_with_serde() {
        let board = Board::from_mine_coords(2, 2, &coords(&[(0, 1)])).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, board);
    }

    #[test]
    fn deserialize_rejects_config_larger_than_cells() {
        let board = Board::from_mine_coords(2, 2, &coords(&[(0, 1)])).unwrap();
        let mut value = serde_json::to_value(&board).unwrap();
        value["config"]["rows"] = 5.into();
        value["config"]["cols"] = 5.into();

        let err = serde_json::from_value::<Board>(value).unwrap_err();

        assert!(err.to_string().contains("do not match"), "{err}");
    }

    #[test]
    fn deserialize_rejects_inconsistent_cells() {
        let board = Board::from_mine_coords(2, 2, &coords(&[(0, 1)])).unwrap();
        let json = serde_json::to_value(&board).unwrap();

        let mut wrong_count = json.clone();
        wrong_count["cells"]["data"][0]["kind"] = serde_json::json!({ "Empty": 7 });
        assert!(serde_json::from_value::<Board>(wrong_count).is_err());

        let mut wrong_mines = json;
        wrong_mines["config"]["mines"] = 2.into();
        assert!(serde_json::from_value::<Board>(wrong_mines).is_err());
    }

    #[test]
    fn deserialize_keeps_visibility() {
        let mut board = Board::from_mine_coords(3, 3, &coords(&[(0, 0)])).unwrap();
        board.reveal(Coordinate::new(1, 1)).unwrap();
        let json = serde_json::to_string(&board).unwrap();

        let restored: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.visible_count(), 1);
        assert!(restored[Coordinate::new(1, 1)].is_visible());
    }
}
