//! Equirectangular to cubemap resampling.

use rayon::prelude::*;

use crate::geometry::{
    direction_to_equirect_uv, equirect_uv_to_pixel, face_pixel_direction, CubeFaceId,
};
use crate::panorama::LdrImage;

/// A single square cubemap face with 8-bit RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubemapFace {
    /// Which face of the cube this represents.
    pub id: CubeFaceId,
    /// Width and height in pixels.
    pub size: u32,
    /// RGB values stored in row-major order.
    pub pixels: Vec<[u8; 3]>,
}

impl CubemapFace {
    /// Returns the pixel at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[(y as usize) * (self.size as usize) + x as usize]
    }

    /// Returns the pixel data as a flat `RGBRGB...` byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// The six faces of a skybox, indexed by [`CubeFaceId::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cubemap {
    pub faces: [CubemapFace; 6],
}

impl Cubemap {
    /// Returns the edge length shared by all faces.
    pub fn face_size(&self) -> u32 {
        self.faces[0].size
    }

    /// Returns a reference to a specific face.
    pub fn face(&self, id: CubeFaceId) -> &CubemapFace {
        &self.faces[id.index()]
    }
}

/// Resamples one cube face from the equirectangular source.
///
/// Each output pixel takes the nearest source pixel along its view ray.
/// Rows are processed in parallel.
pub fn project_face(source: &LdrImage, id: CubeFaceId, face_size: u32) -> CubemapFace {
    let width = source.width();
    let height = source.height();
    let row_len = face_size as usize;
    let mut pixels = vec![[0u8; 3]; row_len * row_len];

    if row_len > 0 {
        pixels
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(row, line)| {
                for (col, out) in line.iter_mut().enumerate() {
                    let dir = face_pixel_direction(id, row as u32, col as u32, face_size);
                    let uv = direction_to_equirect_uv(dir);
                    let (px, py) = equirect_uv_to_pixel(uv, width, height);
                    *out = source.get(px, py);
                }
            });
    }

    CubemapFace {
        id,
        size: face_size,
        pixels,
    }
}

/// Resamples all six faces of the cubemap.
///
/// `face_size` should come from [`super::resolve_face_size`]; the source
/// must be non-empty.
pub fn project_cubemap(source: &LdrImage, face_size: u32) -> Cubemap {
    Cubemap {
        faces: CubeFaceId::all().map(|id| project_face(source, id, face_size)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panorama::Panorama;
    use crate::tonemap::{tonemap, ToneMapConfig};

    const RED: [f32; 3] = [1.0, 0.0, 0.0];

    #[test]
    fn test_constant_panorama_fills_every_face() {
        let pano = Panorama::filled(4, 2, RED);
        let ldr = tonemap(&pano, &ToneMapConfig::default());
        assert!(ldr.pixels().iter().all(|&p| p == [255, 0, 0]));

        for face_size in [1, 2, 5, 16] {
            let cubemap = project_cubemap(&ldr, face_size);
            assert_eq!(cubemap.face_size(), face_size);
            for face in &cubemap.faces {
                assert_eq!(face.pixels.len(), (face_size * face_size) as usize);
                assert!(
                    face.pixels.iter().all(|&p| p == [255, 0, 0]),
                    "Face {:?} at size {} has a non-red pixel",
                    face.id,
                    face_size
                );
            }
        }
    }

    #[test]
    fn test_faces_are_in_declaration_order() {
        let ldr = LdrImage::from_pixels(4, 2, vec![[1, 2, 3]; 8]).unwrap();
        let cubemap = project_cubemap(&ldr, 3);
        for id in CubeFaceId::all() {
            assert_eq!(cubemap.face(id).id, id);
        }
    }

    /// Paints a marker at the spherical location of each cardinal axis.
    fn marker_panorama() -> (Panorama, [(CubeFaceId, [f32; 3]); 6]) {
        let markers = [
            (CubeFaceId::Right, [1.0, 0.0, 0.0]),
            (CubeFaceId::Left, [0.0, 1.0, 0.0]),
            (CubeFaceId::Top, [0.0, 0.0, 1.0]),
            (CubeFaceId::Bottom, [1.0, 1.0, 0.0]),
            (CubeFaceId::Front, [0.0, 1.0, 1.0]),
            (CubeFaceId::Back, [1.0, 0.0, 1.0]),
        ];
        let color = |id: CubeFaceId| markers[id.index()].1;

        let (w, h) = (64, 32);
        let mut pano = Panorama::filled(w, h, [0.1, 0.1, 0.1]);

        // Poles occupy the whole first and last rows.
        for x in 0..w {
            pano.set(x, 0, color(CubeFaceId::Top));
            pano.set(x, h - 1, color(CubeFaceId::Bottom));
        }

        // Equator row is floor(0.5 * 31) = 15; longitudes at 0.25, 0.5, 0.75
        // of the width land on columns 15, 31 and 47.
        for y in 14..=16 {
            for dx in 0..3 {
                pano.set(14 + dx, y, color(CubeFaceId::Left));
                pano.set(30 + dx, y, color(CubeFaceId::Front));
                pano.set(46 + dx, y, color(CubeFaceId::Right));
            }
            // -Z lies on the seam, so both edges carry its marker.
            for x in [0, 1, w - 2, w - 1] {
                pano.set(x, y, color(CubeFaceId::Back));
            }
        }

        (pano, markers)
    }

    #[test]
    fn test_face_centers_sample_cardinal_markers() {
        let (pano, markers) = marker_panorama();
        let config = ToneMapConfig::default();
        let ldr = tonemap(&pano, &config);

        // Odd size so the center pixel looks exactly down the axis.
        let cubemap = project_cubemap(&ldr, 9);
        for (id, marker) in markers {
            let center = cubemap.face(id).get(4, 4);
            assert_eq!(
                center,
                config.map_pixel(marker),
                "Face {:?} center sampled the wrong marker",
                id
            );
        }
    }

    #[test]
    fn test_front_face_columns_follow_longitude() {
        // Encode the source column in the red channel.
        let (w, h) = (256u32, 128u32);
        let pixels: Vec<[u8; 3]> = (0..h)
            .flat_map(|_| (0..w).map(|x| [x as u8, 0, 0]))
            .collect();
        let ldr = LdrImage::from_pixels(w, h, pixels).unwrap();

        let face = project_face(&ldr, CubeFaceId::Front, 32);
        let mid_row = 16;
        let mut prev = 0u8;
        for col in 0..32 {
            let red = face.get(col, mid_row)[0];
            assert!(red >= prev, "Longitude should grow left to right on the front face");
            prev = red;
        }
        // The front face spans longitudes -45..45 degrees, i.e. a quarter of the width.
        let span = face.get(31, mid_row)[0] - face.get(0, mid_row)[0];
        assert!((60..=64).contains(&span), "span = {}", span);
    }

    #[test]
    fn test_top_face_samples_upper_half() {
        let (w, h) = (64u32, 32u32);
        let pixels: Vec<[u8; 3]> = (0..h)
            .flat_map(|y| (0..w).map(move |_| if y < h / 2 { [255, 255, 255] } else { [0, 0, 0] }))
            .collect();
        let ldr = LdrImage::from_pixels(w, h, pixels).unwrap();

        let top = project_face(&ldr, CubeFaceId::Top, 8);
        let bottom = project_face(&ldr, CubeFaceId::Bottom, 8);
        assert!(top.pixels.iter().all(|&p| p == [255, 255, 255]));
        assert!(bottom.pixels.iter().all(|&p| p == [0, 0, 0]));
    }

    #[test]
    fn test_face_bytes_are_interleaved() {
        let ldr = LdrImage::from_pixels(4, 2, vec![[9, 8, 7]; 8]).unwrap();
        let face = project_face(&ldr, CubeFaceId::Back, 2);
        assert_eq!(face.as_bytes(), &[9, 8, 7].repeat(4)[..]);
    }
}
