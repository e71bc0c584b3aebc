//! Grid layout derived from the icon edge length.
//!
//! Every quantity is a fixed fraction of the edge length `S`, so the icon
//! looks the same at any resolution:
//!
//! - padding: `0.12 * S` on all four sides
//! - cell: `(S - 2 * padding) / 4.3`
//! - gap: `0.08 * cell`
//! - corner radius: `0.18 * cell`, truncated to whole pixels
//!
//! Four cells plus three gaps do not fill the padded extent at the 4.3
//! divisor, which leaves a small extra margin on the right and bottom edges.
//! That margin is part of the icon's look and is kept as is.

/// Number of rows and columns in the grid.
pub const GRID_DIM: usize = 4;

pub const PADDING_FRACTION: f64 = 0.12;
pub const CELL_DIVISOR: f64 = 4.3;
pub const GAP_FRACTION: f64 = 0.08;
pub const RADIUS_FRACTION: f64 = 0.18;

/// Scalar geometry for one icon size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub size: u32,
    pub padding: f64,
    pub grid_extent: f64,
    pub cell: f64,
    pub gap: f64,
    /// Corner radius in whole pixels.
    pub radius: u32,
}

/// Floating-point bounding box of one cell. `(x1, y1)` is `(x0, y0)` plus
/// the cell size on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// Integer pixel bounds, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl GridLayout {
    pub fn for_size(size: u32) -> Self {
        let s = size as f64;
        let padding = s * PADDING_FRACTION;
        let grid_extent = s - padding * 2.0;
        let cell = grid_extent / CELL_DIVISOR;
        let gap = cell * GAP_FRACTION;
        // Truncation toward zero, not round-to-nearest: S=150 gives 4.77 -> 4.
        // `as` saturates at 0 for degenerate sizes.
        let radius = (cell * RADIUS_FRACTION) as u32;
        Self {
            size,
            padding,
            grid_extent,
            cell,
            gap,
            radius,
        }
    }

    /// Distance between the origins of two neighbouring cells.
    #[inline]
    pub fn step(&self) -> f64 {
        self.cell + self.gap
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> CellRect {
        let x0 = self.padding + col as f64 * self.step();
        let y0 = self.padding + row as f64 * self.step();
        CellRect {
            x0,
            y0,
            x1: x0 + self.cell,
            y1: y0 + self.cell,
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, CellRect)> + '_ {
        (0..GRID_DIM).flat_map(move |row| {
            (0..GRID_DIM).map(move |col| (row, col, self.cell_rect(row, col)))
        })
    }

    /// `(padding, gap, cell)` as fractions of the edge length.
    pub fn ratios(&self) -> (f64, f64, f64) {
        let s = self.size as f64;
        (self.padding / s, self.gap / s, self.cell / s)
    }
}

impl CellRect {
    /// Snap to the pixel grid, rounding half to even on every edge.
    pub fn to_pixels(&self) -> PixelRect {
        PixelRect {
            x0: self.x0.round_ties_even() as i64,
            y0: self.y0.round_ties_even() as i64,
            x1: self.x1.round_ties_even() as i64,
            y1: self.y1.round_ties_even() as i64,
        }
    }
}

impl PixelRect {
    #[inline]
    pub fn width(&self) -> i64 {
        self.x1 - self.x0 + 1
    }

    #[inline]
    pub fn height(&self) -> i64 {
        self.y1 - self.y0 + 1
    }

    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (self.x0..=self.x1).contains(&x) && (self.y0..=self.y1).contains(&y)
    }
}
