//! Rounded-rectangle fill on an RGBA canvas.
//!
//! Built from imageproc primitives: two overlapping bands cover the straight
//! edges and four filled circles round the corners. Hard-edged (no
//! anti-aliasing) so every pixel is either the fill color or untouched.

use image::{Rgba, RgbaImage};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_filled_rect_mut},
    rect::Rect,
};

use crate::geometry::PixelRect;

/// Fill `rect` (inclusive bounds) with `color`, cutting each corner to a
/// quarter circle of `radius` pixels. Pixels outside the canvas are skipped.
pub fn fill_rounded_rect(canvas: &mut RgbaImage, rect: PixelRect, radius: u32, color: Rgba<u8>) {
    let (w, h) = (rect.width(), rect.height());
    if w <= 0 || h <= 0 {
        return;
    }
    // keep both corner circles inside the inclusive bounds
    let r = (radius as i64).min((w.min(h) - 1) / 2);

    // horizontal band, full width
    fill_band(canvas, rect.x0, rect.y0 + r, w, h - 2 * r, color);
    if r == 0 {
        return;
    }
    // vertical band, full height
    fill_band(canvas, rect.x0 + r, rect.y0, w - 2 * r, h, color);

    for (cx, cy) in [
        (rect.x0 + r, rect.y0 + r),
        (rect.x1 - r, rect.y0 + r),
        (rect.x0 + r, rect.y1 - r),
        (rect.x1 - r, rect.y1 - r),
    ] {
        draw_filled_circle_mut(canvas, (cx as i32, cy as i32), r as i32, color);
    }
}

/// `Rect::of_size` rejects empty sizes, so skip those here.
fn fill_band(canvas: &mut RgbaImage, x: i64, y: i64, w: i64, h: i64, color: Rgba<u8>) {
    if w > 0 && h > 0 {
        let band = Rect::at(x as i32, y as i32).of_size(w as u32, h as u32);
        draw_filled_rect_mut(canvas, band, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const FG: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn rect(x0: i64, y0: i64, x1: i64, y1: i64) -> PixelRect {
        PixelRect { x0, y0, x1, y1 }
    }

    fn count(canvas: &RgbaImage, c: Rgba<u8>) -> usize {
        canvas.pixels().filter(|p| **p == c).count()
    }

    #[test]
    fn zero_radius_fills_inclusive_rect() {
        let mut img = RgbaImage::from_pixel(16, 16, BG);
        fill_rounded_rect(&mut img, rect(2, 3, 5, 7), 0, FG);
        assert_eq!(count(&img, FG), 4 * 5);
        assert_eq!(*img.get_pixel(2, 3), FG);
        assert_eq!(*img.get_pixel(5, 7), FG);
        assert_eq!(*img.get_pixel(6, 7), BG);
    }

    #[test]
    fn corners_are_cut() {
        let mut img = RgbaImage::from_pixel(32, 32, BG);
        fill_rounded_rect(&mut img, rect(4, 4, 24, 24), 6, FG);
        for (x, y) in [(4, 4), (24, 4), (4, 24), (24, 24)] {
            assert_eq!(*img.get_pixel(x, y), BG, "corner ({x},{y}) filled");
        }
        // edge midpoints and the center stay filled
        for (x, y) in [(14, 4), (4, 14), (24, 14), (14, 24), (14, 14)] {
            assert_eq!(*img.get_pixel(x, y), FG, "({x},{y}) not filled");
        }
        let full = 21 * 21;
        assert!(count(&img, FG) < full);
    }

    #[test]
    fn corners_are_symmetric() {
        let mut img = RgbaImage::from_pixel(40, 40, BG);
        fill_rounded_rect(&mut img, rect(5, 5, 30, 30), 8, FG);
        for dy in 0..10u32 {
            for dx in 0..10u32 {
                let tl = *img.get_pixel(5 + dx, 5 + dy);
                assert_eq!(tl, *img.get_pixel(30 - dx, 5 + dy));
                assert_eq!(tl, *img.get_pixel(5 + dx, 30 - dy));
                assert_eq!(tl, *img.get_pixel(30 - dx, 30 - dy));
            }
        }
    }

    #[test]
    fn oversized_radius_is_clamped() {
        let mut img = RgbaImage::from_pixel(16, 16, BG);
        fill_rounded_rect(&mut img, rect(2, 2, 11, 11), 100, FG);
        assert_eq!(*img.get_pixel(7, 7), FG);
        assert_eq!(*img.get_pixel(2, 2), BG);
        assert_eq!(*img.get_pixel(7, 2), FG);
        assert_eq!(*img.get_pixel(11, 7), FG);
        // nothing spills past the inclusive bounds
        for i in 0..16 {
            assert_eq!(*img.get_pixel(12, i), BG);
            assert_eq!(*img.get_pixel(i, 12), BG);
            assert_eq!(*img.get_pixel(1, i), BG);
            assert_eq!(*img.get_pixel(i, 1), BG);
        }
    }

    #[test]
    fn clips_to_canvas() {
        let mut img = RgbaImage::from_pixel(8, 8, BG);
        fill_rounded_rect(&mut img, rect(-4, -4, 20, 20), 2, FG);
        assert_eq!(count(&img, FG), 64);
        fill_rounded_rect(&mut img, rect(30, 30, 40, 40), 2, BG);
        assert_eq!(count(&img, FG), 64);
    }

    #[test]
    fn empty_rect_is_noop() {
        let mut img = RgbaImage::from_pixel(8, 8, BG);
        fill_rounded_rect(&mut img, rect(5, 5, 4, 4), 1, FG);
        assert_eq!(count(&img, FG), 0);
    }
}
