//! Conversion pipeline orchestration.
//!
//! Runs load, tonemap, face size resolution, projection and export in
//! order, reporting progress through a [`ProgressReporter`].

mod convert;
mod reporter;

pub use convert::{
    build_cubemap, convert_loaded, convert_panorama, ConversionSummary, ConvertError,
    ConvertOptions,
};
pub use reporter::{ConsoleReporter, ConversionStage, ProgressReporter, SilentReporter};
