//! Renderers for the height field, biome map, and placement overlay.

use super::image::DebugImage;
use crate::biome::MacroGrid;
use crate::heightmap::HeightField;
use crate::scatter::PlacementRecord;

/// Marker color for cells that received a placement.
const PLACEMENT_MARKER: [u8; 4] = [240, 240, 240, 255];

/// Map a height in `[0, 1]` to an opaque gray pixel.
pub fn height_to_gray(height: f64) -> [u8; 4] {
    let v = (height.clamp(0.0, 1.0) * 255.0).round() as u8;
    [v, v, v, 255]
}

/// One pixel per cell, gray level proportional to height.
pub fn render_height_map(field: &HeightField) -> DebugImage {
    let dims = field.dimensions();
    let mut image = DebugImage::new(dims.width(), dims.height());
    for ((x, y), &h) in field.iter() {
        image.set_pixel(x, dims.height() - 1 - y, height_to_gray(h));
    }
    image
}

/// One pixel per cell in the biome's display color.
pub fn render_biome_map(grid: &MacroGrid) -> DebugImage {
    let dims = grid.dimensions();
    let mut image = DebugImage::new(dims.width(), dims.height());
    for tile in grid.tiles() {
        image.set_pixel(tile.x, dims.height() - 1 - tile.y, tile.color.to_rgba8());
    }
    image
}

/// Biome map with every cell that received a placement marked.
pub fn render_placements(grid: &MacroGrid, placements: &[PlacementRecord]) -> DebugImage {
    let dims = grid.dimensions();
    let mut image = render_biome_map(grid);
    for record in placements {
        let (x, y) = record.cell;
        image.set_pixel(x, dims.height() - 1 - y, PLACEMENT_MARKER);
    }
    image
}
