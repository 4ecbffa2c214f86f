//! Cubemap face resolution selection.

use thiserror::Error;

/// Errors that can occur while choosing the face size.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaceSizeError {
    #[error("Panorama height {height} is too small to derive a face size (need at least 2)")]
    Zero { height: u32 },
}

/// Chooses the edge length of each cubemap face.
///
/// An explicit, positive `requested` size is used as-is, so faces can be
/// up- or downscaled independently of the source. Otherwise the size is
/// `height / 2`, which covers 90 degrees of a full 360x180 panorama at
/// roughly the source's angular resolution. Odd heights round down.
///
/// # Errors
/// Returns [`FaceSizeError::Zero`] when the derived size would be 0.
pub fn resolve_face_size(height: u32, requested: Option<u32>) -> Result<u32, FaceSizeError> {
    match requested {
        Some(size) if size > 0 => Ok(size),
        _ => {
            let size = height / 2;
            if size == 0 {
                return Err(FaceSizeError::Zero { height });
            }
            Ok(size)
        }
    }
}

/// Returns true if [`resolve_face_size`] will derive the size from the panorama.
pub fn is_auto_face_size(requested: Option<u32>) -> bool {
    !matches!(requested, Some(size) if size > 0)
}
