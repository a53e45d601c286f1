//! Raster encoding of SVG drawings.

use crate::error::{Error, Result};
use crate::style::Color;
use resvg::tiny_skia::{self, Pixmap, Transform};
use resvg::usvg;

/// JPEG quality used for exports.
pub const JPEG_QUALITY: u8 = 98;

/// Rasterize an SVG drawing over an opaque background.
///
/// The output is `pixel_ratio` times the drawing's declared size.
pub fn rasterize(svg: &str, background: Color, pixel_ratio: f32) -> Result<Pixmap> {
    if !pixel_ratio.is_finite() || pixel_ratio <= 0.0 {
        return Err(Error::Export(format!("invalid pixel ratio {}", pixel_ratio)));
    }

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| Error::Export(format!("SVG could not be read: {}", e)))?;

    let size = tree.size();
    let width = (size.width() * pixel_ratio).ceil() as u32;
    let height = (size.height() * pixel_ratio).ceil() as u32;
    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
        Error::Export(format!("cannot allocate a {}x{} image", width, height))
    })?;

    pixmap.fill(tiny_skia::Color::from_rgba8(
        background.r,
        background.g,
        background.b,
        255,
    ));
    resvg::render(
        &tree,
        Transform::from_scale(pixel_ratio, pixel_ratio),
        &mut pixmap.as_mut(),
    );

    log::debug!("Rasterized {}x{} at {}x", width, height, pixel_ratio);
    Ok(pixmap)
}

/// Encode a pixmap as PNG.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>> {
    pixmap
        .encode_png()
        .map_err(|e| Error::Export(format!("PNG encoding failed: {}", e)))
}

/// Encode a pixmap as JPEG, dropping the alpha channel.
pub fn encode_jpeg(pixmap: &Pixmap) -> Result<Vec<u8>> {
    let mut rgb = Vec::with_capacity(pixmap.pixels().len() * 3);
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        rgb.extend_from_slice(&[color.red(), color.green(), color.blue()]);
    }

    let image = image::RgbImage::from_raw(pixmap.width(), pixmap.height(), rgb)
        .ok_or_else(|| Error::Export("pixel buffer size mismatch".to_string()))?;

    let mut data = Vec::new();
    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut data, JPEG_QUALITY)
        .encode_image(&image)
        .map_err(|e| Error::Export(format!("JPEG encoding failed: {}", e)))?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10"><rect x="10" width="10" height="10" fill="#034F80"/></svg>"##;

    #[test]
    fn test_rasterize_scales_and_fills_background() {
        let pixmap = rasterize(SQUARE, Color::rgb(0xEE, 0xED, 0xE9), 2.0).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (40, 20));

        let corner = pixmap.pixel(0, 0).unwrap();
        assert_eq!((corner.red(), corner.green(), corner.blue()), (0xEE, 0xED, 0xE9));
        assert_eq!(corner.alpha(), 255);

        let inside = pixmap.pixel(30, 10).unwrap();
        assert_eq!((inside.red(), inside.green(), inside.blue()), (0x03, 0x4F, 0x80));
    }

    #[test]
    fn test_rasterize_rejects_bad_ratio() {
        let white = Color::rgb(0xFF, 0xFF, 0xFF);
        assert!(matches!(rasterize(SQUARE, white, 0.0), Err(Error::Export(_))));
        assert!(matches!(rasterize(SQUARE, white, f32::NAN), Err(Error::Export(_))));
    }

    #[test]
    fn test_rasterize_rejects_malformed_svg() {
        let result = rasterize("<svg", Color::rgb(0, 0, 0), 1.0);
        assert!(matches!(result, Err(Error::Export(_))));
    }

    #[test]
    fn test_encoders_write_signatures() {
        let pixmap = rasterize(SQUARE, Color::rgb(0xFF, 0xFF, 0xFF), 1.0).unwrap();
        let png = encode_png(&pixmap).unwrap();
        assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
        let jpeg = encode_jpeg(&pixmap).unwrap();
        assert!(jpeg.starts_with(&[0xFF, 0xD8, 0xFF]));
    }
}
