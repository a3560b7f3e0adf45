use core::fmt;
use core::str::FromStr;
use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::*;

mod rejection;
mod sequential;

/// How mine coordinates are drawn. Both choose uniformly among all layouts with the requested mine count.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementStrategy {
    /// Draw random coordinates, redrawing whenever the target cell already holds a mine.
    #[default]
    Rejection,
    /// Walk the grid once, placing a mine with probability `mines left / cells left`.
    Sequential,
}

impl PlacementStrategy {
    pub const ALL: [Self; 2] = [Self::Rejection, Self::Sequential];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rejection => "rejection",
            Self::Sequential => "sequential",
        }
    }

    /// Places `config.mines` mines, `config` must already be validated.
    pub fn place_mines<R: Rng + ?Sized>(self, config: GameConfig, rng: &mut R) -> Array2<bool> {
        match self {
            Self::Rejection => rejection::place_mines(config, rng),
            Self::Sequential => sequential::place_mines(config, rng),
        }
    }
}

impl fmt::Display for PlacementStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlacementStrategy {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BoardError::UnknownStrategy(s.to_owned()))
    }
}

/// Produces fresh boards. Unseeded generators draw from the thread-local random source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardGenerator {
    strategy: PlacementStrategy,
    seed: Option<u64>,
}

impl BoardGenerator {
    pub fn new(strategy: PlacementStrategy) -> Self {
        Self {
            strategy,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn strategy(&self) -> PlacementStrategy {
        self.strategy
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn generate(&self, rows: Coord, cols: Coord, mines: CellCount) -> Result<Board> {
        self.generate_config(GameConfig::new(rows, cols, mines)?)
    }

    pub fn generate_config(&self, config: GameConfig) -> Result<Board> {
        match self.seed {
            Some(seed) => self.generate_with_rng(config, &mut SmallRng::seed_from_u64(seed)),
            None => self.generate_with_rng(config, &mut rand::rng()),
        }
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Board> {
        config.validate()?;

        let mine_mask = self.strategy.place_mines(config, rng);
        let board = Board::from_mine_mask(&mine_mask);

        // double check mine count
        if board.mine_count() != config.mines {
            log::warn!(
                "Generated board mine count mismatch, actual: {}, requested: {}",
                board.mine_count(),
                config.mines
            );
        }
        log::debug!(
            "Generated {}x{} board with {} mines using {} placement:\n{}",
            config.rows,
            config.cols,
            board.mine_count(),
            self.strategy,
            board.solution()
        );

        Ok(board)
    }
}

/// Generates a board with the default strategy and an unseeded random source.
pub fn generate(rows: Coord, cols: Coord, mines: CellCount) -> Result<Board> {
    BoardGenerator::default().generate(rows, cols, mines)
}
