//! Synthetic diagram rasters: white page, black strokes.
use image::{DynamicImage, GrayImage, Luma, RgbImage};

pub const PAPER: Luma<u8> = Luma([255]);
pub const INK: Luma<u8> = Luma([0]);

/// Blank white page.
pub fn blank_page(width: u32, height: u32) -> GrayImage {
    GrayImage::from_pixel(width, height, PAPER)
}

/// Fill the inclusive rectangle `[x0, x1] × [y0, y1]`, clipped to the page.
pub fn fill_block(img: &mut GrayImage, x0: i32, y0: i32, x1: i32, y1: i32) {
    let (w, h) = (img.width() as i32, img.height() as i32);
    for y in y0.max(0)..=y1.min(h - 1) {
        for x in x0.max(0)..=x1.min(w - 1) {
            img.put_pixel(x as u32, y as u32, INK);
        }
    }
}

/// Horizontal stroke from `x0` to `x1` inclusive, `thickness` rows starting at `y`.
pub fn hline(img: &mut GrayImage, x0: i32, x1: i32, y: i32, thickness: i32) {
    fill_block(img, x0, y, x1, y + thickness - 1);
}

/// Vertical stroke from `y0` to `y1` inclusive, `thickness` columns starting at `x`.
pub fn vline(img: &mut GrayImage, x: i32, y0: i32, y1: i32, thickness: i32) {
    fill_block(img, x, y0, x + thickness - 1, y1);
}

/// Filled arrowhead pointing down: base row `[x0, x1]` at `y`, narrowing by
/// one pixel per side each row until it closes.
pub fn arrowhead_down(img: &mut GrayImage, x0: i32, x1: i32, y: i32) {
    let (mut left, mut right, mut row) = (x0, x1, y);
    while left <= right {
        fill_block(img, left, row, right, row);
        left += 1;
        right -= 1;
        row += 1;
    }
}

/// Outlined box with the stroke drawn inside `[x0, x1] × [y0, y1]`.
pub fn outlined_box(img: &mut GrayImage, x0: i32, y0: i32, x1: i32, y1: i32, thickness: i32) {
    hline(img, x0, x1, y0, thickness);
    hline(img, x0, x1, y1 - thickness + 1, thickness);
    vline(img, x0, y0, y1, thickness);
    vline(img, x1 - thickness + 1, y0, y1, thickness);
}

/// Elbow connector: right along y = 50 from x = 20, down x = 119..120 to
/// y = 150, then an arrowhead whose base spans 113..=126 at y = 151.
pub fn elbow_arrow(img: &mut GrayImage) {
    hline(img, 20, 120, 50, 2);
    vline(img, 119, 50, 150, 2);
    arrowhead_down(img, 113, 126, 151);
}

pub fn to_rgb(img: GrayImage) -> RgbImage {
    DynamicImage::ImageLuma8(img).to_rgb8()
}
