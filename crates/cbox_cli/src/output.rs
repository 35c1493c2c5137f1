//! Converting the accumulation buffer into an 8-bit image.

use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};

use cbox_renderer::{AccumulationBuffer, Color, Interval};

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to 8-bit sRGB-ish RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let channel = |c: f32| (255.0 * Interval::UNIT.clamp(linear_to_gamma(c))) as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}

/// Build a top-down image from the buffer, whose row 0 is the bottom row.
pub fn to_image(buffer: &AccumulationBuffer) -> RgbImage {
    let height = buffer.height();
    RgbImage::from_fn(buffer.width(), height, |x, y| {
        let pixel = buffer.index(x, height - 1 - y);
        Rgb(color_to_rgb(buffer.read(pixel)))
    })
}

/// Write the buffer's current mean as a PNG.
pub fn save_png(buffer: &AccumulationBuffer, path: &Path) -> Result<()> {
    to_image(buffer)
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-1.0), 0.0);
        assert!((linear_to_gamma(1.0) - 1.0).abs() < 0.0001);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_color_clamped() {
        assert_eq!(color_to_rgb(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb(Color::splat(4.0)), [255, 255, 255]);
        assert_eq!(color_to_rgb(Color::new(0.25, 0.0, 1.0)), [127, 0, 255]);
    }

    #[test]
    fn test_rows_flipped() {
        let mut buffer = AccumulationBuffer::new(2, 2);
        // Bottom-left pixel in buffer space
        let pixel = buffer.index(0, 0);
        buffer.accumulate(pixel, Color::ONE);

        let image = to_image(&buffer);
        assert_eq!(image.get_pixel(0, 1), &Rgb([255, 255, 255]));
        assert_eq!(image.get_pixel(0, 0), &Rgb([0, 0, 0]));
    }
}
