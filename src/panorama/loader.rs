//! Panorama loading from floating-point image files.
//!
//! OpenEXR files go through the `exr` decoder, which requires an RGB layer.
//! Everything else (Radiance `.hdr`, TIFF, ...) goes through `image` and is
//! widened to RGB `f32`.

use std::path::{Path, PathBuf};

use exr::prelude::{read_first_rgba_layer_from_file, RgbaChannels};
use thiserror::Error;

use super::raster::Panorama;

/// Errors that can occur while loading a panorama.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Input file not found: {0}")]
    NotFound(PathBuf),
    #[error("Image decoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("OpenEXR error: {0}")]
    Exr(#[from] exr::error::Error),
    #[error("Panorama has no pixels: {width}x{height}")]
    Empty { width: u32, height: u32 },
}

struct ExrPixels {
    width: usize,
    pixels: Vec<[f32; 3]>,
}

fn is_exr(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("exr"))
        .unwrap_or(false)
}

fn load_exr(path: &Path) -> Result<Panorama, LoadError> {
    // Alpha is optional here; a layer without R, G and B is rejected by the decoder.
    let decoded = read_first_rgba_layer_from_file(
        path,
        |resolution, _channels: &RgbaChannels| ExrPixels {
            width: resolution.width(),
            pixels: vec![[0.0; 3]; resolution.width() * resolution.height()],
        },
        |buffer: &mut ExrPixels, position, (r, g, b, _a): (f32, f32, f32, f32)| {
            let idx = position.y() * buffer.width + position.x();
            buffer.pixels[idx] = [r, g, b];
        },
    )?;

    let size = decoded.layer_data.size;
    let width = size.width() as u32;
    let height = size.height() as u32;
    log::debug!(
        "Decoded OpenEXR layer {}x{} from {}",
        width,
        height,
        path.display()
    );

    Panorama::from_pixels(width, height, decoded.layer_data.channel_data.pixels.pixels)
        .ok_or(LoadError::Empty { width, height })
}

fn load_generic(path: &Path) -> Result<Panorama, LoadError> {
    let decoded = image::open(path)?;
    log::debug!(
        "Decoded {:?} image from {}, widening to RGB f32",
        decoded.color(),
        path.display()
    );

    let rgb = decoded.to_rgb32f();
    let (width, height) = rgb.dimensions();
    let pixels = rgb.pixels().map(|p| p.0).collect();

    Panorama::from_pixels(width, height, pixels).ok_or(LoadError::Empty { width, height })
}

/// Loads an equirectangular panorama from disk.
///
/// The 2:1 aspect is not enforced; a mismatch only produces a warning.
///
/// # Errors
/// Returns an error if the file is missing, cannot be decoded, lacks RGB
/// channels, or has zero width or height.
pub fn load_panorama(path: &Path) -> Result<Panorama, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let panorama = if is_exr(path) {
        load_exr(path)?
    } else {
        load_generic(path)?
    };

    if panorama.width() == 0 || panorama.height() == 0 {
        return Err(LoadError::Empty {
            width: panorama.width(),
            height: panorama.height(),
        });
    }

    if !panorama.has_equirect_aspect() {
        log::warn!(
            "Panorama is {}x{}, expected a 2:1 equirectangular image",
            panorama.width(),
            panorama.height()
        );
    }

    Ok(panorama)
}
