//! Biome system: the closed biome set, per-biome tables, and threshold
//! classification of a height field into a [`MacroGrid`].

mod classifier;
mod types;

pub use classifier::{BiomeClassifier, MacroCell, MacroGrid, TileView};
pub use types::{BiomeTable, BiomeType, DisplayColor};
