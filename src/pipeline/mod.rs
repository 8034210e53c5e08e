//! Image-to-header conversion pipeline.

mod convert;
mod size;

pub use convert::{convert, Config, Pipeline, Summary};
pub use size::TargetSize;
