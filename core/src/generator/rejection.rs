use ndarray::Array2;
use rand::Rng;

use crate::*;

/// Redraws until the candidate cell is free. A candidate is rejected only when that exact
/// coordinate already holds a mine; terminates because a valid config always leaves a free cell.
pub(super) fn place_mines<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Array2<bool> {
    let mut mines: Array2<bool> = Array2::default(config.shape());
    let mut mines_placed: CellCount = 0;
    let mut redraws: u64 = 0;

    while mines_placed < config.mines {
        let candidate = Coordinate::new(
            rng.random_range(0..config.rows),
            rng.random_range(0..config.cols),
        );
        let cell = &mut mines[candidate.to_nd_index()];
        if *cell {
            redraws += 1;
            continue;
        }
        *cell = true;
        mines_placed += 1;
        log::trace!("Placed mine at {}", candidate);
    }

    log::trace!("Rejection placement needed {} redraws", redraws);
    mines
}
