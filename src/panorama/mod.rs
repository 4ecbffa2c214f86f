//! Equirectangular panorama data and loading.

mod raster;
mod loader;

pub use raster::{LdrImage, Panorama};
pub use loader::{load_panorama, LoadError};
