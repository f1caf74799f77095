use std::path::Path;

use anyhow::Context as _;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::error::{BackdropError, BackdropResult};
use crate::params::Canvas;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Scaled frame dimensions for a given canvas and width ratio.
///
/// Width is `floor(canvas.width * width_ratio)`; height follows from the
/// frame's own aspect ratio. A dimension that floors to zero is rejected so
/// degenerate canvas/ratio combinations surface before any pixel work.
pub fn scaled_size(
    canvas: Canvas,
    frame_width: u32,
    frame_height: u32,
    width_ratio: f64,
) -> BackdropResult<(u32, u32)> {
    let scaled_width = (f64::from(canvas.width) * width_ratio) as u32;
    if scaled_width == 0 {
        return Err(BackdropError::validation(
            "scaled frame width is zero (canvas too narrow for the width ratio)",
        ));
    }

    let scale = f64::from(scaled_width) / f64::from(frame_width);
    let scaled_height = (f64::from(frame_height) * scale) as u32;
    if scaled_height == 0 {
        return Err(BackdropError::validation(
            "scaled frame height is zero (frame too flat for the width ratio)",
        ));
    }

    Ok((scaled_width, scaled_height))
}

/// Paste position: horizontally centered, vertically at the placement ratio.
///
/// The bottom edge may land past the canvas for placement ratios near 1.0;
/// the overlay clips that overflow rather than failing.
pub fn paste_offsets(canvas: Canvas, scaled_width: u32, placement_ratio: f64) -> (i64, i64) {
    let x = (i64::from(canvas.width) - i64::from(scaled_width)) / 2;
    let y = (f64::from(canvas.height) * placement_ratio) as i64;
    (x, y)
}

/// Scale one extracted frame and paste it onto a fresh white canvas.
///
/// The frame's alpha channel acts as the paste mask; the saved result is an
/// opaque PNG of exactly the canvas dimensions.
pub fn composite_frame(
    canvas: Canvas,
    placement_ratio: f64,
    width_ratio: f64,
    frame_path: &Path,
    out_path: &Path,
) -> BackdropResult<()> {
    let frame = image::open(frame_path)
        .with_context(|| format!("open extracted frame '{}'", frame_path.display()))?
        .to_rgba8();

    let (scaled_width, scaled_height) =
        scaled_size(canvas, frame.width(), frame.height(), width_ratio)?;
    let resized = imageops::resize(&frame, scaled_width, scaled_height, FilterType::Lanczos3);

    let mut background = RgbaImage::from_pixel(canvas.width, canvas.height, BACKGROUND);
    let (x, y) = paste_offsets(canvas, scaled_width, placement_ratio);
    imageops::overlay(&mut background, &resized, x, y);

    DynamicImage::ImageRgba8(background)
        .to_rgb8()
        .save_with_format(out_path, ImageFormat::Png)
        .with_context(|| format!("write composited frame '{}'", out_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(width: u32, height: u32) -> Canvas {
        Canvas::new(width, height).unwrap()
    }

    #[test]
    fn scaled_size_preserves_aspect_ratio() {
        // 100x50 frame at half of a 800-wide canvas: 400 wide, 200 tall.
        assert_eq!(scaled_size(canvas(800, 600), 100, 50, 0.5).unwrap(), (400, 200));
        // Full-width ratio fills the canvas width exactly.
        assert_eq!(scaled_size(canvas(640, 480), 320, 240, 1.0).unwrap(), (640, 480));
    }

    #[test]
    fn scaled_size_floors_fractional_results() {
        // floor(101 * 0.5) = 50; scale 50/33; floor(7 * 50/33) = 10.
        assert_eq!(scaled_size(canvas(101, 100), 33, 7, 0.5).unwrap(), (50, 10));
    }

    #[test]
    fn scaled_size_rejects_zero_dimensions() {
        assert!(scaled_size(canvas(2, 100), 10, 10, 0.4).is_err());
        assert!(scaled_size(canvas(800, 600), 4000, 1, 0.5).is_err());
    }

    #[test]
    fn paste_offsets_center_horizontally() {
        assert_eq!(paste_offsets(canvas(800, 600), 400, 0.0), (200, 0));
        assert_eq!(paste_offsets(canvas(800, 600), 400, 0.5), (200, 300));
        // Odd leftover space floors.
        assert_eq!(paste_offsets(canvas(801, 600), 400, 1.0), (200, 600));
    }

    #[test]
    fn horizontal_offset_is_independent_of_placement_ratio() {
        let c = canvas(640, 480);
        let (x0, _) = paste_offsets(c, 100, 0.0);
        let (x1, _) = paste_offsets(c, 100, 1.0);
        assert_eq!(x0, x1);
    }
}
