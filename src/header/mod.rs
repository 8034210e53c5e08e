//! C header rendering and atomic output.

mod render;
mod write;

pub use render::{render_header, HeaderArtifact};
pub use write::write_atomic;

/// Include-guard token emitted when none is configured.
pub const DEFAULT_GUARD: &str = "TEST_IMAGE_H";

/// Array identifier emitted when none is configured.
pub const DEFAULT_ARRAY_NAME: &str = "TEST_IMAGE";

/// Byte values per line of array data.
pub const DEFAULT_VALUES_PER_LINE: usize = 24;
