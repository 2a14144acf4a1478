//! AHC configuration.

/// Configuration for the [`AdaptiveClimber`](super::AdaptiveClimber).
///
/// `population_size` counts the champion plus its children, so the
/// default of 7 gives λ = 6.
///
/// # Examples
///
/// ```
/// use u_trimage::ahc::AhcConfig;
///
/// let config = AhcConfig::default().with_triangles(200).with_population_size(9);
/// assert_eq!(config.children(), 8);
/// assert_eq!(config.initial_mutation_count(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct AhcConfig {
    /// Triangles per candidate.
    pub triangles: usize,

    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// Champion plus children per cycle.
    pub population_size: usize,

    /// Starting mutation bandwidth.
    pub initial_bandwidth: f32,

    /// Lower bound for the bandwidth when narrowing.
    pub min_bandwidth: f32,

    /// Factor applied to the bandwidth when narrowing.
    pub shrink: f32,

    /// Factor applied to the bandwidth when widening.
    pub grow: f32,

    /// Bandwidth above which an underperforming cycle resets instead of
    /// widening further.
    pub reset_bandwidth: f32,

    /// Mutation count restored on reset.
    pub reset_mutation_count: usize,

    /// When more than this many children have been produced, both the
    /// produced and improvement tallies are halved.
    pub drift_limit: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AhcConfig {
    fn default() -> Self {
        Self {
            triangles: 100,
            width: 64,
            height: 64,
            population_size: 7,
            initial_bandwidth: 1.0,
            min_bandwidth: 0.0001,
            shrink: 0.95,
            grow: 1.05,
            reset_bandwidth: 0.7,
            reset_mutation_count: 2,
            drift_limit: 1000,
            seed: None,
        }
    }
}

impl AhcConfig {
    pub fn with_triangles(mut self, n: usize) -> Self {
        self.triangles = n;
        self
    }

    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_initial_bandwidth(mut self, bw: f32) -> Self {
        self.initial_bandwidth = bw;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Children per cycle (λ).
    pub fn children(&self) -> usize {
        self.population_size.saturating_sub(1)
    }

    /// Mutations per child at the start of the run: one per ten
    /// triangles, never fewer than one.
    pub fn initial_mutation_count(&self) -> usize {
        (self.triangles / 10).max(1)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.triangles == 0 {
            return Err("triangles must be at least 1".into());
        }
        if self.width == 0 || self.height == 0 {
            return Err("canvas must be non-empty".into());
        }
        if self.population_size < 2 {
            return Err(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            ));
        }
        if self.min_bandwidth.is_nan() || self.min_bandwidth <= 0.0 {
            return Err("min_bandwidth must be positive".into());
        }
        if self.initial_bandwidth.is_nan() || self.initial_bandwidth < self.min_bandwidth {
            return Err("initial_bandwidth must be at least min_bandwidth".into());
        }
        if self.shrink.is_nan() || self.shrink <= 0.0 || self.shrink >= 1.0 {
            return Err(format!("shrink must be in (0, 1), got {}", self.shrink));
        }
        if self.grow.is_nan() || self.grow <= 1.0 {
            return Err(format!("grow must exceed 1, got {}", self.grow));
        }
        if self.reset_mutation_count == 0 {
            return Err("reset_mutation_count must be at least 1".into());
        }
        if self.drift_limit == 0 {
            return Err("drift_limit must be at least 1".into());
        }
        Ok(())
    }
}
