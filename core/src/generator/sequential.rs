use ndarray::Array2;
use rand::Rng;

use crate::*;

/// Single row-major pass over the grid. Each cell becomes a mine with probability
/// `mines_left / cells_left`, which forces a mine once the two are equal, so exactly
/// `config.mines` are placed.
pub(super) fn place_mines<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Array2<bool> {
    let mut mines_left = u32::from(config.mines);
    let mut cells_left = u32::from(config.total_cells());

    Array2::from_shape_fn(config.shape(), |(row, col)| {
        let place = mines_left > 0 && rng.random_ratio(mines_left, cells_left);
        cells_left -= 1;
        if place {
            mines_left -= 1;
            log::trace!("Placed mine at {}-{}", row, col);
        }
        place
    })
}
