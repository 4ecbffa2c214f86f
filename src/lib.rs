//! HDR panorama to skybox cubemap converter.
//!
//! This crate turns a floating-point equirectangular panorama into the six
//! 8-bit faces of a cubemap: exposure/gamma tonemapping followed by
//! nearest-neighbor resampling along each face pixel's view ray.

pub mod geometry;
pub mod panorama;
pub mod tonemap;
pub mod cubemap;
pub mod export;
pub mod pipeline;

pub use geometry::CubeFaceId;
pub use panorama::{load_panorama, LdrImage, Panorama};
pub use tonemap::{tonemap, ToneMapConfig};
pub use cubemap::{project_cubemap, resolve_face_size, Cubemap, CubemapFace};
pub use export::JpegExportOptions;
pub use pipeline::{
    convert_panorama, ConsoleReporter, ConversionSummary, ConvertError, ConvertOptions,
    ProgressReporter, SilentReporter,
};
