//! Threshold classification of a height field into biome-tagged cells.

use tracing::warn;

use super::{BiomeTable, BiomeType, DisplayColor};
use crate::error::{GenerationError, require_unit};
use crate::grid::{Dimensions, Grid};
use crate::heightmap::HeightField;

/// One classified grid cell. Immutable once produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MacroCell {
    pub x: u32,
    pub y: u32,
    /// Height copied from the height field.
    pub height: f64,
    pub biome: BiomeType,
}

/// Renderer-facing view of a cell: where it is, what it is, and how to paint it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileView {
    pub x: u32,
    pub y: u32,
    pub biome: BiomeType,
    pub color: DisplayColor,
}

/// The full `width x height` set of classified cells for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct MacroGrid {
    cells: Grid<MacroCell>,
}

impl MacroGrid {
    pub fn dimensions(&self) -> Dimensions {
        self.cells.dimensions()
    }

    /// Cell at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<&MacroCell> {
        self.cells.get(x, y)
    }

    /// Cells in visitation order (x outer, y inner).
    pub fn cells(&self) -> impl Iterator<Item = &MacroCell> {
        self.cells.values().iter()
    }

    /// Tile views for the renderer, one per cell.
    pub fn tiles(&self) -> impl Iterator<Item = TileView> + '_ {
        self.cells().map(|cell| TileView {
            x: cell.x,
            y: cell.y,
            biome: cell.biome,
            color: cell.biome.display_color(),
        })
    }

    /// Number of cells per biome.
    pub fn biome_counts(&self) -> BiomeTable<usize> {
        let mut counts = BiomeTable::default();
        for cell in self.cells() {
            counts[cell.biome] += 1;
        }
        counts
    }
}

/// Assigns biomes by comparing each height against two thresholds.
///
/// `height >= mountain` is Mountain, else `height >= river` is Forest, else
/// Water. The thresholds are not required to be ordered: when
/// `river >= mountain` the forest band disappears and cells go straight from
/// Water to Mountain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BiomeClassifier {
    mountain_threshold: f64,
    river_threshold: f64,
}

impl BiomeClassifier {
    /// Create a classifier; both thresholds must lie in `[0, 1]`.
    pub fn new(mountain_threshold: f64, river_threshold: f64) -> Result<Self, GenerationError> {
        require_unit("terrain.mountain_threshold", mountain_threshold)?;
        require_unit("terrain.river_threshold", river_threshold)?;
        Ok(Self {
            mountain_threshold,
            river_threshold,
        })
    }

    /// Returns `true` when no height can be classified as Forest.
    pub fn forest_band_empty(&self) -> bool {
        self.river_threshold >= self.mountain_threshold
    }

    /// Biome for a single height value.
    pub fn classify_height(&self, height: f64) -> BiomeType {
        if height >= self.mountain_threshold {
            BiomeType::Mountain
        } else if height >= self.river_threshold {
            BiomeType::Forest
        } else {
            BiomeType::Water
        }
    }

    /// Classify every cell of `height_field`.
    pub fn classify(&self, height_field: &HeightField) -> MacroGrid {
        if self.forest_band_empty() {
            warn!(
                mountain = self.mountain_threshold,
                river = self.river_threshold,
                "river threshold is not below mountain threshold; no forest will be generated"
            );
        }
        let cells = height_field.map(|x, y, &height| MacroCell {
            x,
            y,
            height,
            biome: self.classify_height(height),
        });
        MacroGrid { cells }
    }
}
