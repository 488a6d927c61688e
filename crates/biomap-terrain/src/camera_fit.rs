//! Orthographic framing of a generated map for the host camera.

use glam::DVec2;

use crate::grid::MapExtents;

/// World units of margin around the map.
pub const DEFAULT_PADDING: f64 = 1.0;

/// Where to put an orthographic camera and how much to show.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrthoFit {
    /// Camera position in the map plane.
    pub center: DVec2,
    /// Half the visible height, in world units.
    pub ortho_size: f64,
}

/// Center on `extents` and pick the smallest half-height that shows the whole
/// map at the given `aspect` (width / height) plus `padding`.
///
/// Returns `None` for a non-positive or non-finite aspect.
pub fn fit_orthographic(extents: &MapExtents, aspect: f64, padding: f64) -> Option<OrthoFit> {
    if !(aspect.is_finite() && aspect > 0.0) {
        return None;
    }
    let size = extents.size();
    let by_height = size.y / 2.0 + padding;
    let by_width = (size.x / 2.0) / aspect + padding;
    Some(OrthoFit {
        center: extents.center(),
        ortho_size: by_height.max(by_width),
    })
}
