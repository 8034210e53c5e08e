//! Decode, normalize, flatten, render and write one image.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::header::{
    render_header, write_atomic, HeaderArtifact, DEFAULT_ARRAY_NAME, DEFAULT_GUARD,
    DEFAULT_VALUES_PER_LINE,
};
use crate::image::{load_image, normalize, SourceImage};

use super::TargetSize;

/// Configuration for header generation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Edge length of the square output image.
    pub size: TargetSize,

    /// Byte values per line of array data.
    pub values_per_line: usize,

    /// Include-guard token. Kept literal, never derived from the output name.
    pub guard: String,

    /// C identifier of the byte array.
    pub array_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: TargetSize::default(),
            values_per_line: DEFAULT_VALUES_PER_LINE,
            guard: DEFAULT_GUARD.to_string(),
            array_name: DEFAULT_ARRAY_NAME.to_string(),
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if self.values_per_line == 0 {
            return Err(Error::InvalidParameter {
                name: "values_per_line".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        for (name, value) in [("guard", &self.guard), ("array_name", &self.array_name)] {
            if !is_c_identifier(value) {
                return Err(Error::InvalidParameter {
                    name: name.to_string(),
                    reason: format!("{value:?} is not a valid C identifier"),
                });
            }
        }

        Ok(())
    }
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Basename of the source image.
    pub source_name: String,
    /// Source `(width, height)`.
    pub original_dims: (u32, u32),
    /// Edge length of the emitted image.
    pub size: u32,
    /// Number of bytes in the emitted array.
    pub array_len: usize,
    /// Header that was written.
    pub output_path: PathBuf,
}

impl fmt::Display for Summary {
    /// One-line confirmation, e.g. `Generated out.h (bus.jpg 810x1080 -> 64x64)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.original_dims;
        let size = self.size;
        write!(
            f,
            "Generated {} ({} {width}x{height} -> {size}x{size})",
            self.output_path.display(),
            self.source_name
        )
    }
}

/// Converts images into C headers with a fixed configuration.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this pipeline renders with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert the image at `input_path` into a header at `output_path`.
    ///
    /// The destination is replaced atomically; on error it is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImageDecode`] if the image cannot be read, or
    /// [`Error::Write`] if the header cannot be written.
    pub fn process<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<Summary> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        tracing::info!("Processing image: {}", input_path.display());
        let source = load_image(input_path)?;

        let text = self.render(&source);

        tracing::info!("Writing header to: {}", output_path.display());
        write_atomic(output_path, text.as_bytes())?;

        Ok(Summary {
            source_name: source.name().to_string(),
            original_dims: source.dimensions(),
            size: self.config.size.get(),
            array_len: self.config.size.array_len(),
            output_path: output_path.to_path_buf(),
        })
    }

    /// Render the header text for an already decoded image.
    #[must_use]
    pub fn render(&self, source: &SourceImage) -> String {
        let size = self.config.size.get();
        let (width, height) = source.dimensions();
        tracing::debug!("Resampling {width}x{height} -> {size}x{size}");

        let data = normalize(source.rgb(), size).flatten();
        debug_assert_eq!(data.len(), self.config.size.array_len());

        render_header(&HeaderArtifact {
            source_name: source.name(),
            original_dims: (width, height),
            size,
            guard: &self.config.guard,
            array_name: &self.config.array_name,
            values_per_line: self.config.values_per_line,
            data: &data,
        })
    }
}

/// Convert `image_path` into a header at `output_path` using the default
/// layout and a `size x size` target.
///
/// # Errors
///
/// Returns [`Error::InvalidSize`] if `size` is not positive, before any
/// file is touched. Otherwise fails as [`Pipeline::process`] does.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
    image_path: P,
    output_path: Q,
    size: i64,
) -> Result<Summary> {
    let config = Config {
        size: TargetSize::new(size)?,
        ..Config::default()
    };
    Pipeline::new(config)?.process(image_path, output_path)
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
