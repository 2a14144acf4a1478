//! PA configuration.

use crate::random::derive_seed;
use crate::sa::SaConfig;

/// Configuration for the [`ProgressiveAccumulator`](super::ProgressiveAccumulator).
///
/// # Examples
///
/// ```
/// use u_trimage::pa::PaConfig;
///
/// let config = PaConfig::default().with_max_triangles(1000).with_period(50);
/// assert_eq!(config.growth_interval(120), 62);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct PaConfig {
    /// Triangle count at which growth stops and refinement begins.
    pub max_triangles: usize,

    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// Base number of steps between growth events.
    pub period: usize,

    /// The interval stretches by `current_size / growth_divisor`.
    pub growth_divisor: usize,

    /// Mutations per refinement step; the k-th uses bandwidth `1/(k+1)`.
    pub mutations_per_step: usize,

    /// Every `forced_every`-th step pins its mutations to the newest
    /// triangle.
    pub forced_every: usize,

    /// Annealing bandwidth when the refinement phase begins.
    pub refine_bandwidth: f32,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for PaConfig {
    fn default() -> Self {
        Self {
            max_triangles: 1000,
            width: 64,
            height: 64,
            period: 100,
            growth_divisor: 10,
            mutations_per_step: 10,
            forced_every: 2,
            refine_bandwidth: 10.0,
            seed: None,
        }
    }
}

impl PaConfig {
    pub fn with_max_triangles(mut self, n: usize) -> Self {
        self.max_triangles = n;
        self
    }

    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    pub fn with_refine_bandwidth(mut self, bw: f32) -> Self {
        self.refine_bandwidth = bw;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Steps between growth events at the given size.
    pub fn growth_interval(&self, current_size: usize) -> usize {
        self.period + current_size / self.growth_divisor
    }

    /// Configuration of the embedded annealer.
    pub fn refine_config(&self) -> SaConfig {
        let config = SaConfig::default()
            .with_triangles(self.max_triangles)
            .with_canvas(self.width, self.height)
            .with_initial_bandwidth(self.refine_bandwidth);
        SaConfig {
            seed: derive_seed(self.seed, 1),
            ..config
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_triangles == 0 {
            return Err("max_triangles must be at least 1".into());
        }
        if self.width == 0 || self.height == 0 {
            return Err("canvas must be non-empty".into());
        }
        if self.period == 0 {
            return Err("period must be at least 1".into());
        }
        if self.growth_divisor == 0 {
            return Err("growth_divisor must be at least 1".into());
        }
        if self.mutations_per_step == 0 {
            return Err("mutations_per_step must be at least 1".into());
        }
        if self.forced_every == 0 {
            return Err("forced_every must be at least 1".into());
        }
        self.refine_config().validate()
    }
}
