//! JPEG export for cubemap faces.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::ImageEncoder;
use thiserror::Error;

use crate::cubemap::{Cubemap, CubemapFace};
use crate::geometry::CubeFaceId;

/// Default JPEG quality for skybox faces.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Errors that can occur during JPEG export.
#[derive(Error, Debug)]
pub enum JpegExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid JPEG quality {0} (expected 1-100)")]
    InvalidQuality(u8),
}

/// Options for JPEG export.
#[derive(Debug, Clone)]
pub struct JpegExportOptions {
    /// Encoder quality, 1-100.
    pub quality: u8,
}

impl Default for JpegExportOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Returns the output path for a face: `{output_dir}/{face_name}.jpg`.
pub fn face_path(output_dir: &Path, face: CubeFaceId) -> PathBuf {
    output_dir.join(format!("{}.jpg", face.name()))
}

/// Exports a single cube face as an RGB JPEG.
///
/// Pixels are written in the order they are stored (R, G, B).
pub fn export_face_jpeg(
    face: &CubemapFace,
    path: &Path,
    options: &JpegExportOptions,
) -> Result<(), JpegExportError> {
    if !(1..=100).contains(&options.quality) {
        return Err(JpegExportError::InvalidQuality(options.quality));
    }

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(writer, options.quality);
    encoder.write_image(
        face.as_bytes(),
        face.size,
        face.size,
        image::ExtendedColorType::Rgb8,
    )?;

    Ok(())
}

/// Exports all six faces of a cubemap as individual JPEG files.
///
/// The output directory is created if needed. Files are named after the
/// face (`right.jpg`, `left.jpg`, ...). `on_saved` is invoked after each
/// file is written. Writing stops at the first error; faces written before
/// it are left in place.
///
/// # Returns
/// The paths of the written files in face order.
pub fn export_cubemap_jpeg<F>(
    cubemap: &Cubemap,
    output_dir: &Path,
    options: &JpegExportOptions,
    mut on_saved: F,
) -> Result<Vec<PathBuf>, JpegExportError>
where
    F: FnMut(CubeFaceId, &Path),
{
    std::fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(cubemap.faces.len());
    for face in &cubemap.faces {
        let path = face_path(output_dir, face.id);
        export_face_jpeg(face, &path, options)?;
        on_saved(face.id, &path);
        written.push(path);
    }

    Ok(written)
}
