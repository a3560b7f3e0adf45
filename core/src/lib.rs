pub use board::*;
pub use cell::*;
pub use config::*;
pub use error::*;
pub use generator::*;
pub use render::*;
pub use reveal::*;
pub use types::*;

mod board;
mod cell;
mod config;
mod error;
mod generator;
mod render;
mod reveal;
mod types;
