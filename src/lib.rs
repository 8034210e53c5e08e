//! # img2header
//!
//! Converts raster images into C headers for embedded inference targets.
//!
//! Any image `image` can decode is collapsed to RGB, resampled to a square
//! `size x size` grid with bilinear interpolation, and flattened row-major
//! with channels varying fastest. The bytes are emitted as a
//! `static const unsigned char` array alongside `IMG_WIDTH`, `IMG_HEIGHT`
//! and `IMG_CHANNELS` macros. The destination is replaced atomically, so a
//! failed run never leaves a truncated header behind.
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> img2header::Result<()> {
//! let summary = img2header::convert("bus.jpg", "test_image.h", 64)?;
//! assert_eq!(summary.array_len, 64 * 64 * 3);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod header;
pub mod image;
pub mod pipeline;

pub use error::{Error, Result};
pub use pipeline::{convert, Config, Pipeline, Summary, TargetSize};
