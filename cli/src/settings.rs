use std::fs;
use std::path::Path;

use anyhow::Context;
use minefield_core::{BoardGenerator, CellCount, Coord, GameConfig, PlacementStrategy};
use serde::Deserialize;

const DEFAULT_ROWS: Coord = 10;
const DEFAULT_COLS: Coord = 10;
const DEFAULT_MINES: CellCount = 10;

/// Game settings from a TOML file or the command line, unset fields fall back to defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    pub rows: Option<Coord>,
    pub cols: Option<Coord>,
    pub mines: Option<CellCount>,
    pub seed: Option<u64>,
    pub strategy: Option<PlacementStrategy>,
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read settings from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Fields set in `overrides` win over the ones in `self`.
    pub fn merge(self, overrides: Settings) -> Settings {
        Settings {
            rows: overrides.rows.or(self.rows),
            cols: overrides.cols.or(self.cols),
            mines: overrides.mines.or(self.mines),
            seed: overrides.seed.or(self.seed),
            strategy: overrides.strategy.or(self.strategy),
        }
    }

    /// Unvalidated, the generator reports invalid combinations.
    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(
            self.rows.unwrap_or(DEFAULT_ROWS),
            self.cols.unwrap_or(DEFAULT_COLS),
            self.mines.unwrap_or(DEFAULT_MINES),
        )
    }

    pub fn generator(&self) -> BoardGenerator {
        let generator = BoardGenerator::new(self.strategy.unwrap_or_default());
        match self.seed {
            Some(seed) => generator.with_seed(seed),
            None => generator,
        }
    }
}
