//! Grid dimensions, dense per-cell storage, and the grid-to-world transform.

use std::ops::Index;

use glam::DVec2;

use crate::error::GenerationError;

/// Immutable grid size for one generation run. Both sides are non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Create dimensions, rejecting zero-sized grids.
    pub fn new(width: u32, height: u32) -> Result<Self, GenerationError> {
        if width == 0 {
            return Err(GenerationError::invalid("grid.width", "must be positive"));
        }
        if height == 0 {
            return Err(GenerationError::invalid("grid.height", "must be positive"));
        }
        Ok(Self { width, height })
    }

    /// Number of cells along x.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of cells along y.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if `(x, y)` lies inside the grid.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Every cell coordinate in visitation order: x outer, y inner.
    ///
    /// All stages that consume the scatter RNG walk cells in this order.
    pub fn cells(self) -> impl Iterator<Item = (u32, u32)> {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| (x, y)))
    }
}

/// Dense per-cell storage laid out in [`Dimensions::cells`] order.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    dims: Dimensions,
    data: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid by evaluating `f` once per cell in visitation order.
    pub fn from_fn(dims: Dimensions, mut f: impl FnMut(u32, u32) -> T) -> Self {
        let data = dims.cells().map(|(x, y)| f(x, y)).collect();
        Self { dims, data }
    }

    #[inline]
    fn idx(&self, x: u32, y: u32) -> usize {
        x as usize * self.dims.height as usize + y as usize
    }

    /// Grid dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Value at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<&T> {
        self.dims.contains(x, y).then(|| &self.data[self.idx(x, y)])
    }

    /// Raw values in visitation order.
    pub fn values(&self) -> &[T] {
        &self.data
    }

    /// `((x, y), value)` pairs in visitation order.
    pub fn iter(&self) -> impl Iterator<Item = ((u32, u32), &T)> {
        self.dims.cells().zip(self.data.iter())
    }

    /// Build a new grid of the same size by mapping every value.
    pub fn map<U>(&self, mut f: impl FnMut(u32, u32, &T) -> U) -> Grid<U> {
        Grid {
            dims: self.dims,
            data: self.iter().map(|((x, y), v)| f(x, y, v)).collect(),
        }
    }
}

impl<T> Index<(u32, u32)> for Grid<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    fn index(&self, (x, y): (u32, u32)) -> &T {
        assert!(
            self.dims.contains(x, y),
            "cell ({x}, {y}) outside {}x{} grid",
            self.dims.width,
            self.dims.height
        );
        &self.data[self.idx(x, y)]
    }
}

/// World-space bounds spanned by the cell origins of a grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapExtents {
    /// World position of cell `(0, 0)`.
    pub min: DVec2,
    /// World position of cell `(width - 1, height - 1)`.
    pub max: DVec2,
}

impl MapExtents {
    /// Width and height of the extents.
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    /// Midpoint of the extents.
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }
}

/// Axis-aligned mapping from integer cell coordinates to world positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridTransform {
    cell_size: f64,
}

impl GridTransform {
    /// Transform placing cell `(0, 0)` at world `(0, 0)`.
    pub fn new(cell_size: f64) -> Result<Self, GenerationError> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(GenerationError::invalid(
                "grid.cell_size",
                format!("must be a positive finite number, got {cell_size}"),
            ));
        }
        Ok(Self { cell_size })
    }

    /// World position of the origin of cell `(x, y)`.
    pub fn cell_to_world(&self, x: u32, y: u32) -> DVec2 {
        DVec2::new(x as f64, y as f64) * self.cell_size
    }

    /// World extents covered by the cell origins of `dims`.
    pub fn extents(&self, dims: Dimensions) -> MapExtents {
        MapExtents {
            min: self.cell_to_world(0, 0),
            max: self.cell_to_world(dims.width - 1, dims.height - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(Dimensions::new(0, 5).unwrap_err().field(), "grid.width");
        assert_eq!(Dimensions::new(5, 0).unwrap_err().field(), "grid.height");
        assert!(Dimensions::new(1, 1).is_ok());
    }

    #[test]
    fn test_cells_visit_x_outer_y_inner() {
        let dims = Dimensions::new(2, 3).unwrap();
        let order: Vec<_> = dims.cells().collect();
        assert_eq!(
            order,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
        assert_eq!(dims.cell_count(), 6);
    }

    #[test]
    fn test_grid_indexing_matches_from_fn() {
        let dims = Dimensions::new(4, 3).unwrap();
        let grid = Grid::from_fn(dims, |x, y| x * 10 + y);
        for (x, y) in dims.cells() {
            assert_eq!(grid[(x, y)], x * 10 + y);
            assert_eq!(grid.get(x, y), Some(&(x * 10 + y)));
        }
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_grid_map_preserves_layout() {
        let dims = Dimensions::new(3, 2).unwrap();
        let grid = Grid::from_fn(dims, |x, y| (x, y));
        let mapped = grid.map(|x, y, &(gx, gy)| {
            assert_eq!((x, y), (gx, gy));
            gx + gy
        });
        assert_eq!(mapped[(2, 1)], 3);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds_panics() {
        let grid = Grid::from_fn(Dimensions::new(2, 2).unwrap(), |_, _| 0u8);
        let _ = grid[(2, 0)];
    }

    #[test]
    fn test_cell_to_world() {
        let transform = GridTransform::new(2.0).unwrap();
        assert_eq!(transform.cell_to_world(0, 0), DVec2::ZERO);
        assert_eq!(transform.cell_to_world(3, 1), DVec2::new(6.0, 2.0));
    }

    #[test]
    fn test_invalid_cell_size_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = GridTransform::new(bad).unwrap_err();
            assert_eq!(err.field(), "grid.cell_size");
        }
    }

    #[test]
    fn test_extents_span_cell_origins() {
        let dims = Dimensions::new(60, 35).unwrap();
        let extents = GridTransform::new(1.0).unwrap().extents(dims);
        assert_eq!(extents.size(), DVec2::new(59.0, 34.0));
        assert_eq!(extents.center(), DVec2::new(29.5, 17.0));
    }
}
