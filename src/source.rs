use crate::{Error, Result};
use image::imageops::{resize, FilterType};
use image::{DynamicImage, ImageReader, RgbaImage};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A decoded source icon, normalized to 8-bit RGBA.
#[derive(Debug, Clone)]
pub struct SourceImage {
    path: PathBuf,
    pixels: RgbaImage,
}

impl SourceImage {
    /// Decodes the image at `path`. The format is guessed from the file contents
    /// and images without an alpha channel get a fully opaque one.
    pub fn open(path: impl AsRef<Path>) -> Result<SourceImage> {
        let path = path.as_ref();
        let decode_error = |source: image::ImageError| Error::Decode {
            path: path.to_owned(),
            source,
        };
        let image = ImageReader::open(path)
            .and_then(ImageReader::with_guessed_format)
            .map_err(|e| decode_error(e.into()))?
            .decode()
            .map_err(decode_error)?;
        Ok(SourceImage::from_dynamic(path, image))
    }

    /// Wraps an already decoded image. `path` is only used for diagnostics.
    pub fn from_dynamic(path: impl Into<PathBuf>, image: DynamicImage) -> SourceImage {
        let path = path.into();
        debug!(
            path = %path.display(),
            color = ?image.color(),
            width = image.width(),
            height = image.height(),
            "decoded source icon"
        );
        let pixels = match image {
            DynamicImage::ImageRgba8(rgba) => rgba,
            other => other.to_rgba8(),
        };
        if pixels.width() != pixels.height() {
            warn!(
                path = %path.display(),
                width = pixels.width(),
                height = pixels.height(),
                "source icon is not a square, resized assets will be stretched"
            );
        }
        SourceImage { path, pixels }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn as_rgba8(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Lanczos3 resample to a `size`×`size` square.
    pub fn resized(&self, size: u32) -> RgbaImage {
        resize(&self.pixels, size, size, FilterType::Lanczos3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba};

    #[test]
    fn rgb_sources_gain_an_opaque_alpha_channel() {
        let rgb = RgbImage::from_pixel(8, 8, Rgb([10, 20, 30]));
        let source = SourceImage::from_dynamic("rgb.png", DynamicImage::ImageRgb8(rgb));
        assert!(source.as_rgba8().pixels().all(|p| *p == Rgba([10, 20, 30, 255])));
    }

    #[test]
    fn grayscale_sources_are_expanded() {
        let gray = GrayImage::from_pixel(4, 4, Luma([200]));
        let source = SourceImage::from_dynamic("gray.png", DynamicImage::ImageLuma8(gray));
        assert_eq!(source.as_rgba8().get_pixel(0, 0), &Rgba([200, 200, 200, 255]));
    }

    #[test]
    fn rgba_sources_keep_their_transparency() {
        let rgba = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 0]));
        let source = SourceImage::from_dynamic("rgba.png", DynamicImage::ImageRgba8(rgba));
        assert_eq!(source.as_rgba8().get_pixel(3, 3)[3], 0);
    }

    #[test]
    fn resized_is_square_even_for_wide_sources() {
        let wide = RgbaImage::from_pixel(64, 32, Rgba([255, 0, 0, 255]));
        let source = SourceImage::from_dynamic("wide.png", DynamicImage::ImageRgba8(wide));
        let resized = source.resized(16);
        assert_eq!(resized.dimensions(), (16, 16));
    }

    #[test]
    fn downscaling_blends_across_hard_edges() {
        let half = RgbaImage::from_fn(64, 64, |x, _| {
            if x < 32 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 0])
            }
        });
        let source = SourceImage::from_dynamic("half.png", DynamicImage::ImageRgba8(half));
        let resized = source.resized(8);
        let edge = resized.get_pixel(3, 4)[3];
        let other_edge = resized.get_pixel(4, 4)[3];
        assert!(
            [edge, other_edge].iter().any(|&a| a > 0 && a < 255),
            "expected blended alpha at the edge, got {edge} and {other_edge}"
        );
    }

    #[test]
    fn accessors_describe_the_normalized_source() {
        let wide = RgbImage::from_pixel(40, 20, Rgb([0, 0, 0]));
        let source = SourceImage::from_dynamic("wide.png", DynamicImage::ImageRgb8(wide));
        assert_eq!(source.path(), Path::new("wide.png"));
        assert_eq!((source.width(), source.height()), (40, 20));
    }

    #[test]
    fn missing_files_fail_to_decode() {
        let err = SourceImage::open("does/not/exist.png").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }
}
