//! Image decoding, normalization and flattening.

mod load;
mod normalize;

pub use load::{load_image, source_name, SourceImage};
pub use normalize::{normalize, NormalizedImage};

/// Number of channels in RGB images.
pub const RGB_CHANNELS: usize = 3;

/// Default edge length of the normalized square image.
pub const DEFAULT_SIZE: u32 = 64;

/// Largest accepted edge length.
///
/// At 4096 the array holds 48 MiB and the rendered header is about four
/// times that.
pub const MAX_SIZE: u32 = 4096;
