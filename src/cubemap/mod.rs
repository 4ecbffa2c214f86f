//! Cubemap construction from an equirectangular source.
//!
//! Face size selection and the per-face nearest-neighbor resampling.

mod face_size;
mod projector;

pub use face_size::{is_auto_face_size, resolve_face_size, FaceSizeError};
pub use projector::{project_cubemap, project_face, Cubemap, CubemapFace};
