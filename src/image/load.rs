//! Image loading utilities.

use std::path::Path;

use image::{GenericImageView, RgbImage};

use crate::error::{Error, Result};

/// A decoded source image, already collapsed to 8-bit RGB.
#[derive(Debug, Clone)]
pub struct SourceImage {
    name: String,
    rgb: RgbImage,
}

impl SourceImage {
    /// Wrap an in-memory RGB image under the given display name.
    #[must_use]
    pub fn new(name: impl Into<String>, rgb: RgbImage) -> Self {
        Self {
            name: name.into(),
            rgb,
        }
    }

    /// Basename of the file this image was decoded from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Original `(width, height)` before normalization.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.rgb.dimensions()
    }

    /// Borrow the RGB pixel buffer.
    #[must_use]
    pub fn rgb(&self) -> &RgbImage {
        &self.rgb
    }
}

/// Load an image from disk and convert it to RGB.
///
/// Any color model is accepted: alpha is dropped, grayscale and palette
/// images are expanded to three channels.
///
/// # Errors
///
/// Returns [`Error::ImageDecode`] if the file cannot be opened or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<SourceImage> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| Error::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = img.dimensions();
    tracing::debug!("Decoded {} ({width}x{height}, {:?})", path.display(), img.color());

    Ok(SourceImage::new(source_name(path), img.to_rgb8()))
}

/// Basename of `path` with backslashes treated as separators.
///
/// Windows-style paths produce the same name on every platform.
#[must_use]
pub fn source_name(path: &Path) -> String {
    let text = path.to_string_lossy().replace('\\', "/");
    text.rsplit('/').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::{DynamicImage, Rgb, Rgba, RgbaImage};

    #[test]
    fn test_source_name_unix() {
        assert_eq!(source_name(Path::new("data/images/bus.jpg")), "bus.jpg");
    }

    #[test]
    fn test_source_name_windows() {
        assert_eq!(
            source_name(Path::new(r"c:\Users\me\Desktop\bus.jpg")),
            "bus.jpg"
        );
    }

    #[test]
    fn test_source_name_bare() {
        assert_eq!(source_name(Path::new("bus.jpg")), "bus.jpg");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_image("definitely/not/here.png").unwrap_err();
        assert!(matches!(err, Error::ImageDecode { .. }));
    }

    #[test]
    fn test_load_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgba.png");
        RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 40]))
            .save(&path)
            .unwrap();

        let source = load_image(&path).unwrap();
        assert_eq!(source.name(), "rgba.png");
        assert_eq!(source.dimensions(), (3, 2));
        assert_eq!(source.rgb().get_pixel(2, 1), &Rgb([10, 20, 30]));
    }

    #[test]
    fn test_load_expands_grayscale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        let mut gray = DynamicImage::new_luma8(2, 2);
        gray.as_mut_luma8().unwrap().fill(77);
        gray.save(&path).unwrap();

        let source = load_image(&path).unwrap();
        assert_eq!(source.rgb().get_pixel(0, 0), &Rgb([77, 77, 77]));
    }
}
