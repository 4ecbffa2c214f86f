//! In-memory HDR and LDR raster types.

/// An HDR equirectangular panorama with one RGB `f32` triple per pixel.
///
/// Pixels are stored in row-major order, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct Panorama {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 3]>,
}

impl Panorama {
    /// Wraps an existing pixel buffer.
    ///
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<[f32; 3]>) -> Option<Self> {
        if pixels.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Creates a panorama filled with a single color.
    pub fn filled(width: u32, height: u32, color: [f32; 3]) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns true when the panorama has the 2:1 equirectangular aspect.
    pub fn has_equirect_aspect(&self) -> bool {
        self.width as u64 == 2 * self.height as u64
    }

    pub fn pixels(&self) -> &[[f32; 3]] {
        &self.pixels
    }

    /// Returns the pixel at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> [f32; 3] {
        self.pixels[(y as usize) * (self.width as usize) + x as usize]
    }

    /// Sets the pixel at column `x`, row `y`.
    pub fn set(&mut self, x: u32, y: u32, color: [f32; 3]) {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.pixels[idx] = color;
    }
}

/// A tonemapped 8-bit RGB image, same layout as [`Panorama`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LdrImage {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl LdrImage {
    /// Wraps an existing pixel buffer.
    ///
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Option<Self> {
        if pixels.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wraps a buffer whose length the caller already guarantees.
    pub(crate) fn from_raw_parts(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Self {
        debug_assert_eq!(pixels.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    /// Returns the pixel at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[(y as usize) * (self.width as usize) + x as usize]
    }
}
