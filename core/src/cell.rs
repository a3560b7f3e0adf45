use serde::{Deserialize, Serialize};

/// What a cell holds, fixed once the board is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Mine,
    /// Safe cell with the number of mines among its neighbors.
    Empty(u8),
}

impl CellKind {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Empty(count) => Some(count),
        }
    }
}

/// A board cell. Only visibility can change after generation and only from hidden to visible.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    kind: CellKind,
    visible: bool,
}

impl Cell {
    pub(crate) const fn hidden(kind: CellKind) -> Self {
        Self {
            kind,
            visible: false,
        }
    }

    pub const fn kind(self) -> CellKind {
        self.kind
    }

    pub const fn is_visible(self) -> bool {
        self.visible
    }

    pub const fn is_mine(self) -> bool {
        self.kind.is_mine()
    }

    pub const fn adjacent_mines(self) -> Option<u8> {
        self.kind.adjacent_mines()
    }

    /// Returns whether the cell was hidden before the call.
    pub(crate) fn mark_visible(&mut self) -> bool {
        !core::mem::replace(&mut self.visible, true)
    }
}
