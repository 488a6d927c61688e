//! Debug visualization: 2D images of the height field and biome map, with
//! PNG export. Rows are flipped so world +y points up in the image.

mod export;
mod image;
mod renderers;

pub use self::export::{ExportError, write_png};
pub use self::image::DebugImage;
pub use renderers::{height_to_gray, render_biome_map, render_height_map, render_placements};
