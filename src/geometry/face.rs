//! Cubemap face identification and enumeration.

use glam::DVec3;

/// Identifies one of the six faces of a skybox cubemap.
///
/// The declaration order is the order faces are generated and written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CubeFaceId {
    /// +X face
    Right = 0,
    /// -X face
    Left = 1,
    /// +Y face
    Top = 2,
    /// -Y face
    Bottom = 3,
    /// +Z face
    Front = 4,
    /// -Z face
    Back = 5,
}

impl CubeFaceId {
    /// Returns all six cube faces in order.
    pub const fn all() -> [CubeFaceId; 6] {
        [
            CubeFaceId::Right,
            CubeFaceId::Left,
            CubeFaceId::Top,
            CubeFaceId::Bottom,
            CubeFaceId::Front,
            CubeFaceId::Back,
        ]
    }

    /// Returns the face index (0-5).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the face name used for output files (e.g. "right", "bottom").
    pub const fn name(self) -> &'static str {
        match self {
            CubeFaceId::Right => "right",
            CubeFaceId::Left => "left",
            CubeFaceId::Top => "top",
            CubeFaceId::Bottom => "bottom",
            CubeFaceId::Front => "front",
            CubeFaceId::Back => "back",
        }
    }

    /// Returns the outward normal of the face.
    pub const fn axis(self) -> DVec3 {
        match self {
            CubeFaceId::Right => DVec3::X,
            CubeFaceId::Left => DVec3::NEG_X,
            CubeFaceId::Top => DVec3::Y,
            CubeFaceId::Bottom => DVec3::NEG_Y,
            CubeFaceId::Front => DVec3::Z,
            CubeFaceId::Back => DVec3::NEG_Z,
        }
    }

    /// Maps face-local coordinates `u, v` in [-1, 1] to an (unnormalized)
    /// direction on the face plane.
    ///
    /// `u` grows with the pixel column and `v` with the pixel row. The
    /// handedness of this table fixes the cubemap layout expected by
    /// skybox consumers and must not change.
    pub fn direction(self, u: f64, v: f64) -> DVec3 {
        match self {
            CubeFaceId::Right => DVec3::new(1.0, -v, -u),
            CubeFaceId::Left => DVec3::new(-1.0, -v, u),
            CubeFaceId::Top => DVec3::new(u, 1.0, v),
            CubeFaceId::Bottom => DVec3::new(u, -1.0, -v),
            CubeFaceId::Front => DVec3::new(u, -v, 1.0),
            CubeFaceId::Back => DVec3::new(-u, -v, -1.0),
        }
    }
}

impl std::fmt::Display for CubeFaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
