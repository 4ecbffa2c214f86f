//! HDR to LDR tonemapping.
//!
//! A fixed exposure + clamp + gamma curve. Negative values, values above the
//! white point and non-finite values are all absorbed by the clamp and the
//! saturating float-to-int conversion.

use rayon::prelude::*;

use crate::panorama::{LdrImage, Panorama};

/// Default exposure multiplier applied before clamping.
pub const DEFAULT_EXPOSURE: f32 = 1.5;
/// Default display gamma.
pub const DEFAULT_GAMMA: f64 = 2.2;

/// Tonemapping parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneMapConfig {
    /// Linear multiplier applied to every channel.
    pub exposure: f32,
    /// Display gamma; channels are raised to `1 / gamma`.
    pub gamma: f64,
}

impl Default for ToneMapConfig {
    fn default() -> Self {
        Self {
            exposure: DEFAULT_EXPOSURE,
            gamma: DEFAULT_GAMMA,
        }
    }
}

impl ToneMapConfig {
    /// Returns the gamma exponent `1 / gamma`, divided in `f64` and rounded
    /// once to `f32`.
    #[inline]
    pub fn exponent(&self) -> f32 {
        (1.0 / self.gamma) as f32
    }

    /// Tonemaps a single channel value.
    #[inline]
    pub fn map_channel(&self, value: f32) -> u8 {
        self.map_channel_with(value, self.exponent())
    }

    #[inline]
    fn map_channel_with(&self, value: f32, exponent: f32) -> u8 {
        let clamped = (value * self.exposure).clamp(0.0, 1.0);
        // `as u8` truncates; NaN becomes 0.
        (clamped.powf(exponent) * 255.0) as u8
    }

    /// Tonemaps an RGB triple.
    #[inline]
    pub fn map_pixel(&self, rgb: [f32; 3]) -> [u8; 3] {
        let exponent = self.exponent();
        [
            self.map_channel_with(rgb[0], exponent),
            self.map_channel_with(rgb[1], exponent),
            self.map_channel_with(rgb[2], exponent),
        ]
    }
}

/// Converts an HDR panorama to an 8-bit image of the same size.
///
/// Pixels are processed in parallel.
pub fn tonemap(panorama: &Panorama, config: &ToneMapConfig) -> LdrImage {
    let pixels: Vec<[u8; 3]> = panorama
        .pixels()
        .par_iter()
        .map(|&rgb| config.map_pixel(rgb))
        .collect();

    LdrImage::from_raw_parts(panorama.width(), panorama.height(), pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_reference_values() {
        let config = ToneMapConfig::default();
        assert_eq!(config.map_channel(0.0), 0);
        // 1.0 * 1.5 clamps to 1.0
        assert_eq!(config.map_channel(1.0), 255);
        assert_eq!(config.map_channel(100.0), 255);
        assert_eq!(config.map_channel(-3.0), 0);

        // 0.1 * 1.5 = 0.15, 0.15^(1/2.2) * 255 = 107.6...
        let expected = ((0.1_f32 * 1.5).powf((1.0_f64 / 2.2) as f32) * 255.0) as u8;
        assert_eq!(config.map_channel(0.1), expected);
        assert_eq!(expected, 107);
    }

    #[test]
    fn test_gamma_exponent_rounds_once() {
        let config = ToneMapConfig::default();
        assert_eq!(config.exponent(), (1.0_f64 / 2.2) as f32);
        assert_ne!(config.exponent(), 1.0_f32 / 2.2_f32);

        // Just below 1/255 after the curve; an f32-divided exponent rounds it up to 1.
        let linear = ToneMapConfig {
            exposure: 1.0,
            ..Default::default()
        };
        assert_eq!(linear.map_channel(5.07705e-6), 0);
        assert_eq!(
            (5.07705e-6_f32.powf(1.0_f32 / 2.2_f32) * 255.0) as u8,
            1,
            "input no longer separates the two exponents"
        );
    }

    #[test]
    fn test_non_finite_inputs_do_not_panic() {
        let config = ToneMapConfig::default();
        assert_eq!(config.map_channel(f32::INFINITY), 255);
        assert_eq!(config.map_channel(f32::NEG_INFINITY), 0);
        assert_eq!(config.map_channel(f32::NAN), 0);
    }

    #[test]
    fn test_monotonic() {
        let config = ToneMapConfig::default();
        let mut prev = 0u8;
        for i in 0..=1000 {
            let v = config.map_channel(i as f32 / 1000.0);
            assert!(v >= prev);
            prev = v;
        }
        assert_eq!(prev, 255);
    }

    #[test]
    fn test_random_inputs_stay_in_range() {
        let config = ToneMapConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let pixels: Vec<[f32; 3]> = (0..4096)
            .map(|_| {
                [
                    rng.gen_range(-1.0e6..1.0e6),
                    rng.gen_range(-2.0..2.0),
                    rng.gen_range(0.0..1.0),
                ]
            })
            .collect();
        let pano = Panorama::from_pixels(64, 64, pixels.clone()).unwrap();

        let ldr = tonemap(&pano, &config);
        assert_eq!((ldr.width(), ldr.height()), (64, 64));
        for (src, dst) in pixels.iter().zip(ldr.pixels()) {
            assert_eq!(*dst, config.map_pixel(*src));
            for (&s, &d) in src.iter().zip(dst.iter()) {
                if s <= 0.0 {
                    assert_eq!(d, 0);
                }
                if s * config.exposure >= 1.0 {
                    assert_eq!(d, 255);
                }
            }
        }
    }

    #[test]
    fn test_custom_exposure_and_gamma() {
        let config = ToneMapConfig {
            exposure: 1.0,
            gamma: 1.0,
        };
        assert_eq!(config.map_channel(0.5), 127);
        assert_eq!(config.map_pixel([1.0, 0.0, 0.25]), [255, 0, 63]);
    }
}
