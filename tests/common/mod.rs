pub mod fixtures;

use dashgrid::Color;
use image::RgbImage;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Color of the pixel at `(x, y)` in a decoded preview.
pub fn pixel(image: &RgbImage, x: u32, y: u32) -> Color {
    let [r, g, b] = image.get_pixel(x, y).0;
    Color::rgb(r, g, b)
}

/// Loose equality for lossy JPEG output.
pub fn roughly(actual: Color, expected: Color, tolerance: u8) -> bool {
    actual.r.abs_diff(expected.r) <= tolerance
        && actual.g.abs_diff(expected.g) <= tolerance
        && actual.b.abs_diff(expected.b) <= tolerance
}
