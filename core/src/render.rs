use core::fmt::{self, Write};

use crate::*;

/// Full board with every cell shown: `x` for mines, the adjacency digit otherwise.
#[derive(Copy, Clone, Debug)]
pub struct SolutionView<'a> {
    board: &'a Board,
}

/// Board as the player sees it: `#` hidden, `.` visible zero, digits, `*` a visible mine.
#[derive(Copy, Clone, Debug)]
pub struct PlayerView<'a> {
    board: &'a Board,
}

impl Board {
    pub fn solution(&self) -> SolutionView<'_> {
        SolutionView { board: self }
    }

    pub fn player_view(&self) -> PlayerView<'_> {
        PlayerView { board: self }
    }
}

fn digit(count: u8) -> char {
    char::from(b'0' + count)
}

fn write_grid(
    f: &mut fmt::Formatter<'_>,
    board: &Board,
    symbol: impl Fn(Cell) -> char,
) -> fmt::Result {
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if col > 0 {
                f.write_char(' ')?;
            }
            f.write_char(symbol(board[Coordinate::new(row, col)]))?;
        }
        f.write_char('\n')?;
    }
    Ok(())
}

impl fmt::Display for SolutionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.board, |cell| match cell.kind() {
            CellKind::Mine => 'x',
            CellKind::Empty(count) => digit(count),
        })
    }
}

impl fmt::Display for PlayerView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.board, |cell| match (cell.is_visible(), cell.kind()) {
            (false, _) => '#',
            (true, CellKind::Mine) => '*',
            (true, CellKind::Empty(0)) => '.',
            (true, CellKind::Empty(count)) => digit(count),
        })
    }
}
