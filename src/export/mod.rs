//! Export module for saving cubemap faces to disk.
//!
//! Faces are written as 8-bit RGB JPEGs named after the face.

mod jpeg;

pub use jpeg::{
    export_cubemap_jpeg, export_face_jpeg, face_path, JpegExportError, JpegExportOptions,
    DEFAULT_JPEG_QUALITY,
};
