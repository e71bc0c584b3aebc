//! Fixed icon colors. One color per grid row, ordered by puzzle tier
//! (Easy, Medium, Hard, Tricky), plus the off-white canvas background.

use image::Rgba;

/// Canvas fill behind the grid.
pub const BACKGROUND: Rgba<u8> = Rgba([250, 250, 248, 255]);

/// Row colors, top to bottom.
pub const ROW_COLORS: [Rgba<u8>; 4] = [
    Rgba([249, 223, 109, 255]), // yellow
    Rgba([160, 195, 90, 255]),  // green
    Rgba([176, 196, 239, 255]), // blue
    Rgba([186, 129, 197, 255]), // purple
];

/// Color for a grid row. Column never affects color; rows past the
/// palette wrap around.
#[inline]
pub fn color_for_row(row: usize) -> Rgba<u8> {
    ROW_COLORS[row % ROW_COLORS.len()]
}
