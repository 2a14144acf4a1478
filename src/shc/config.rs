//! SHC configuration.

/// Configuration for the [`HillClimber`](super::HillClimber).
///
/// # Examples
///
/// ```
/// use u_trimage::shc::ShcConfig;
///
/// let config = ShcConfig::default()
///     .with_triangles(100)
///     .with_canvas(64, 48)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ShcConfig {
    /// Triangles per candidate.
    pub triangles: usize,

    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// Mutation bandwidth of the single per-step mutation.
    pub bandwidth: f32,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for ShcConfig {
    fn default() -> Self {
        Self {
            triangles: 100,
            width: 64,
            height: 64,
            bandwidth: 1.0,
            seed: None,
        }
    }
}

impl ShcConfig {
    pub fn with_triangles(mut self, n: usize) -> Self {
        self.triangles = n;
        self
    }

    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_bandwidth(mut self, bandwidth: f32) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.triangles == 0 {
            return Err("triangles must be at least 1".into());
        }
        if self.width == 0 || self.height == 0 {
            return Err("canvas must be non-empty".into());
        }
        if self.bandwidth.is_nan() || self.bandwidth <= 0.0 {
            return Err(format!("bandwidth must be positive, got {}", self.bandwidth));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShcConfig::default();
        assert_eq!(config.triangles, 100);
        assert!((config.bandwidth - 1.0).abs() < f32::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_triangles() {
        assert!(ShcConfig::default().with_triangles(0).validate().is_err());
    }

    #[test]
    fn test_validate_empty_canvas() {
        assert!(ShcConfig::default().with_canvas(0, 10).validate().is_err());
    }

    #[test]
    fn test_validate_bad_bandwidth() {
        assert!(ShcConfig::default().with_bandwidth(0.0).validate().is_err());
        assert!(ShcConfig::default().with_bandwidth(f32::NAN).validate().is_err());
    }
}
