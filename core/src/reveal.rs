use std::collections::{BTreeSet, VecDeque};
use serde::{Deserialize, Serialize};

use crate::*;

/// What a single reveal made visible.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealResult {
    /// Every cell made visible by the call; empty when the target was already visible.
    Safe(BTreeSet<Coordinate>),
    /// The target held a mine, it is now visible and nothing else changed.
    MineHit(Coordinate),
}

impl RevealResult {
    pub const fn is_mine_hit(&self) -> bool {
        matches!(self, Self::MineHit(_))
    }

    /// Whether this outcome could have caused an update to the board
    pub fn has_update(&self) -> bool {
        match self {
            Self::Safe(revealed) => !revealed.is_empty(),
            Self::MineHit(_) => true,
        }
    }

    pub fn revealed(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (flooded, hit) = match self {
            Self::Safe(revealed) => (Some(revealed), None),
            Self::MineHit(coords) => (None, Some(*coords)),
        };
        flooded.into_iter().flatten().copied().chain(hit)
    }

    pub fn revealed_count(&self) -> usize {
        match self {
            Self::Safe(revealed) => revealed.len(),
            Self::MineHit(_) => 1,
        }
    }
}

/// Reveals `start` and floods outwards across zero cells, stopping at numbered cells.
///
/// Fails without touching the board when `start` is out of bounds.
pub fn reveal(board: &mut Board, start: Coordinate) -> Result<RevealResult> {
    let start = board.validate_coords(start)?;
    let target = board[start];

    if target.is_visible() {
        log::debug!("Cell {} already visible", start);
        return Ok(RevealResult::Safe(BTreeSet::new()));
    }

    if target.is_mine() {
        board.mark_visible(start);
        log::debug!("Mine hit at {}", start);
        return Ok(RevealResult::MineHit(start));
    }

    let mut revealed = BTreeSet::new();
    // coordinates enter `visited` when queued so none is queued twice
    let mut visited = BTreeSet::from([start]);
    let mut to_visit = VecDeque::from([start]);

    while let Some(visit_coords) = to_visit.pop_front() {
        if !board.mark_visible(visit_coords) {
            continue;
        }
        revealed.insert(visit_coords);

        let adjacent_mines = board[visit_coords].adjacent_mines();
        log::trace!(
            "Flood revealed {}, adjacent mines: {:?}",
            visit_coords,
            adjacent_mines
        );

        // numbered cells bound the flood
        if adjacent_mines != Some(0) {
            continue;
        }
        for neighbor in board.iter_neighbors(visit_coords) {
            if !board[neighbor].is_visible() && visited.insert(neighbor) {
                to_visit.push_back(neighbor);
            }
        }
    }

    log::debug!("Revealed {} cells from {}", revealed.len(), start);
    Ok(RevealResult::Safe(revealed))
}

impl Board {
    /// See [`reveal`].
    pub fn reveal(&mut self, start: Coordinate) -> Result<RevealResult> {
        reveal(self, start)
    }
}
