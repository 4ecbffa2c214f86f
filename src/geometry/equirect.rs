//! Conversions between cubemap pixels, view directions and equirectangular
//! texture coordinates.

use std::f64::consts::{PI, TAU};

use glam::{DVec2, DVec3};

use super::face::CubeFaceId;

/// Maps a pixel index along one face axis to its face-local coordinate in [-1, 1].
///
/// Samples the pixel center, so index 0 of a face of size `n` maps to
/// `-1 + 1/n` rather than `-1`.
#[inline]
pub fn pixel_to_face_coord(index: u32, face_size: u32) -> f64 {
    ((index as f64 + 0.5) / face_size as f64) * 2.0 - 1.0
}

/// Returns the unit view direction through pixel `(row, col)` of a face.
pub fn face_pixel_direction(face: CubeFaceId, row: u32, col: u32, face_size: u32) -> DVec3 {
    let u = pixel_to_face_coord(col, face_size);
    let v = pixel_to_face_coord(row, face_size);
    face.direction(u, v).normalize()
}

/// Converts a unit direction to equirectangular texture coordinates.
///
/// `x` is in [0, 1] left to right with longitude 0 (the +Z axis) at 0.5,
/// `y` is in [0, 1] from the north pole (+Y) to the south pole.
///
/// ```
/// use glam::DVec3;
/// use skybox_cubemap::geometry::direction_to_equirect_uv;
///
/// let uv = direction_to_equirect_uv(DVec3::X);
/// assert!((uv.x - 0.75).abs() < 1e-12);
/// assert!((uv.y - 0.5).abs() < 1e-12);
/// ```
#[inline]
pub fn direction_to_equirect_uv(dir: DVec3) -> DVec2 {
    // asin is undefined past 1.0; normalized input can overshoot by an ulp.
    let y = dir.y.clamp(-1.0, 1.0);
    DVec2::new(0.5 + dir.x.atan2(dir.z) / TAU, 0.5 - y.asin() / PI)
}

/// Inverse of [`direction_to_equirect_uv`].
pub fn equirect_uv_to_direction(uv: DVec2) -> DVec3 {
    let lon = (uv.x - 0.5) * TAU;
    let lat = (0.5 - uv.y) * PI;
    let (slon, clon) = lon.sin_cos();
    let (slat, clat) = lat.sin_cos();
    DVec3::new(clat * slon, slat, clat * clon)
}

/// Nearest-neighbor pixel lookup for equirectangular texture coordinates.
///
/// Truncates `uv * (size - 1)` and clamps to the image bounds.
#[inline]
pub fn equirect_uv_to_pixel(uv: DVec2, width: u32, height: u32) -> (u32, u32) {
    let max_x = width.saturating_sub(1);
    let max_y = height.saturating_sub(1);
    let px = (uv.x * max_x as f64).floor().clamp(0.0, max_x as f64) as u32;
    let py = (uv.y * max_y as f64).floor().clamp(0.0, max_y as f64) as u32;
    (px, py)
}
