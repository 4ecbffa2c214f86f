//! Cubemap geometry.
//!
//! Provides the face enumeration and the mappings between cube face pixels,
//! view directions and equirectangular texture coordinates.

mod equirect;
mod face;

pub use equirect::{
    direction_to_equirect_uv, equirect_uv_to_direction, equirect_uv_to_pixel,
    face_pixel_direction, pixel_to_face_coord,
};
pub use face::CubeFaceId;
