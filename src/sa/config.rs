//! SA configuration and cooling schedule.

/// Configuration for the [`Annealer`](super::Annealer).
///
/// # Examples
///
/// ```
/// use u_trimage::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_triangles(50)
///     .with_cooling(0.98)
///     .with_initial_cut(20)
///     .with_seed(1);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.starting_bandwidth(), 50.0);
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Triangles per candidate.
    pub triangles: usize,

    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// Starting bandwidth. `None` starts from the triangle count.
    pub initial_bandwidth: Option<f32>,

    /// Geometric cooling factor in (0, 1): `bw_{k+1} = cooling * bw_k`.
    pub cooling: f32,

    /// Bandwidth under which the system reheats.
    pub reheat_threshold: f32,

    /// Bandwidth restored on reheat.
    pub reheat_bandwidth: f32,

    /// Initial cut: cooling triggers once fewer than one in `cut`
    /// iterations improved.
    pub initial_cut: usize,

    /// Iterations before cooling may trigger, as a multiple of the
    /// triangle count.
    pub min_iterations_factor: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            triangles: 50,
            width: 64,
            height: 64,
            initial_bandwidth: None,
            cooling: 0.97,
            reheat_threshold: 0.01,
            reheat_bandwidth: 4.0,
            initial_cut: 15,
            min_iterations_factor: 2,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_triangles(mut self, n: usize) -> Self {
        self.triangles = n;
        self
    }

    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_initial_bandwidth(mut self, bw: f32) -> Self {
        self.initial_bandwidth = Some(bw);
        self
    }

    pub fn with_cooling(mut self, factor: f32) -> Self {
        self.cooling = factor;
        self
    }

    pub fn with_reheat(mut self, threshold: f32, bandwidth: f32) -> Self {
        self.reheat_threshold = threshold;
        self.reheat_bandwidth = bandwidth;
        self
    }

    pub fn with_initial_cut(mut self, cut: usize) -> Self {
        self.initial_cut = cut;
        self
    }

    pub fn with_min_iterations_factor(mut self, factor: usize) -> Self {
        self.min_iterations_factor = factor;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Bandwidth at the start of the run.
    pub fn starting_bandwidth(&self) -> f32 {
        self.initial_bandwidth.unwrap_or(self.triangles as f32)
    }

    /// Iterations that must pass before each cooling check.
    pub fn min_iterations(&self) -> usize {
        self.min_iterations_factor * self.triangles
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.triangles == 0 {
            return Err("triangles must be at least 1".into());
        }
        if self.width == 0 || self.height == 0 {
            return Err("canvas must be non-empty".into());
        }
        let bw = self.starting_bandwidth();
        if bw.is_nan() || bw <= 0.0 {
            return Err(format!("initial bandwidth must be positive, got {bw}"));
        }
        if self.cooling.is_nan() || self.cooling <= 0.0 || self.cooling >= 1.0 {
            return Err(format!("cooling must be in (0, 1), got {}", self.cooling));
        }
        if self.reheat_threshold.is_nan() || self.reheat_threshold <= 0.0 {
            return Err("reheat_threshold must be positive".into());
        }
        if self.reheat_bandwidth.is_nan() || self.reheat_bandwidth <= self.reheat_threshold {
            return Err("reheat_bandwidth must exceed reheat_threshold".into());
        }
        if self.initial_cut == 0 {
            return Err("initial_cut must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.cooling - 0.97).abs() < 1e-7);
        assert_eq!(config.initial_cut, 15);
        assert_eq!(config.min_iterations(), 100);
        assert_eq!(config.starting_bandwidth(), 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explicit_bandwidth_overrides_size() {
        let config = SaConfig::default().with_triangles(1000).with_initial_bandwidth(10.0);
        assert_eq!(config.starting_bandwidth(), 10.0);
        assert_eq!(config.min_iterations(), 2000);
    }

    #[test]
    fn test_validate_bad_cooling() {
        assert!(SaConfig::default().with_cooling(1.0).validate().is_err());
        assert!(SaConfig::default().with_cooling(0.0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_reheat() {
        assert!(SaConfig::default().with_reheat(0.5, 0.1).validate().is_err());
        assert!(SaConfig::default().with_reheat(0.0, 4.0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_bandwidth() {
        assert!(SaConfig::default().with_initial_bandwidth(-1.0).validate().is_err());
    }

    #[test]
    fn test_validate_zero_cut() {
        assert!(SaConfig::default().with_initial_cut(0).validate().is_err());
    }
}
