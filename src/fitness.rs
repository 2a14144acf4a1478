//! Fitness oracles: scalar distance between two equally sized images.
//!
//! Lower is better and ties are not distinguished. Comparing images of
//! different dimensions fails with
//! [`TrimageError::SizeMismatch`](crate::error::TrimageError::SizeMismatch);
//! a driver should treat that as fatal.

use crate::error::Result;
use crate::image::PixelBuffer;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Compares a rendered candidate against the target.
pub trait FitnessOracle: Send + Sync {
    /// Returns a non-negative distance between `candidate` and `target`.
    fn compare(&self, candidate: &PixelBuffer, target: &PixelBuffer) -> Result<f64>;
}

/// Sum over all pixels and channels of the squared byte difference.
///
/// With the `parallel` feature the reduction runs on the rayon pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredError;

impl FitnessOracle for SquaredError {
    fn compare(&self, candidate: &PixelBuffer, target: &PixelBuffer) -> Result<f64> {
        candidate.ensure_same_size(target)?;
        Ok(squared_sum(candidate.data(), target.data()) as f64)
    }
}

#[cfg(feature = "parallel")]
fn squared_sum(a: &[u8], b: &[u8]) -> u64 {
    a.par_iter()
        .zip(b.par_iter())
        .map(|(&x, &y)| squared_diff(x, y))
        .sum()
}

#[cfg(not(feature = "parallel"))]
fn squared_sum(a: &[u8], b: &[u8]) -> u64 {
    a.iter().zip(b).map(|(&x, &y)| squared_diff(x, y)).sum()
}

fn squared_diff(x: u8, y: u8) -> u64 {
    let d = u64::from(x.abs_diff(y));
    d * d
}

/// Weighted squared distance in HSV space, per pixel:
/// `wh·Δh² + ws·Δs² + wv·Δv²` with all components in `[0, 1]`.
///
/// Hue is compared linearly (no wrap-around), matching a plain channel
/// distance on the HSV cube. With the `parallel` feature the per-pixel
/// sum runs on the rayon pool.
#[derive(Debug, Clone, Copy)]
pub struct HsvDistance {
    pub hue_weight: f64,
    pub saturation_weight: f64,
    pub value_weight: f64,
}

impl Default for HsvDistance {
    fn default() -> Self {
        Self {
            hue_weight: 1000.0,
            saturation_weight: 1000.0,
            value_weight: 1000.0,
        }
    }
}

impl FitnessOracle for HsvDistance {
    fn compare(&self, candidate: &PixelBuffer, target: &PixelBuffer) -> Result<f64> {
        candidate.ensure_same_size(target)?;
        Ok(self.weighted_sum(candidate.data(), target.data()))
    }
}

impl HsvDistance {
    fn pixel_distance(&self, a: &[u8], b: &[u8]) -> f64 {
        let (ah, as_, av) = rgb_to_hsv(a);
        let (bh, bs, bv) = rgb_to_hsv(b);
        self.hue_weight * (ah - bh).powi(2)
            + self.saturation_weight * (as_ - bs).powi(2)
            + self.value_weight * (av - bv).powi(2)
    }

    #[cfg(feature = "parallel")]
    fn weighted_sum(&self, a: &[u8], b: &[u8]) -> f64 {
        a.par_chunks_exact(3)
            .zip(b.par_chunks_exact(3))
            .map(|(x, y)| self.pixel_distance(x, y))
            .sum()
    }

    #[cfg(not(feature = "parallel"))]
    fn weighted_sum(&self, a: &[u8], b: &[u8]) -> f64 {
        a.chunks_exact(3)
            .zip(b.chunks_exact(3))
            .map(|(x, y)| self.pixel_distance(x, y))
            .sum()
    }
}

/// Converts an RGB byte triple to `(h, s, v)`, each in `[0, 1]`.
fn rgb_to_hsv(px: &[u8]) -> (f64, f64, f64) {
    let [r, g, b] = [px[0], px[1], px[2]].map(|c| f64::from(c) / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    if delta == 0.0 {
        return (0.0, 0.0, max);
    }

    let s = delta / max;
    let sector = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    let mut h = sector / 6.0;
    if h < 0.0 {
        h += 1.0;
    }
    (h, s, max)
}
