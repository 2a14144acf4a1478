//! GA configuration.
//!
//! [`GaConfig`] holds all parameters of the steady-state loop.

/// Configuration for the [`GeneticSearch`](super::GeneticSearch).
///
/// # Defaults
///
/// ```
/// use u_trimage::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 110);
/// assert_eq!(config.triangles, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_trimage::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_triangles(100)
///     .with_mutation_probability(0.75)
///     .with_mutation_bandwidth(0.1);
/// assert!((config.expected_mutations() - 3.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Individuals kept in the population.
    pub population_size: usize,

    /// Triangles per individual.
    pub triangles: usize,

    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// Probability of applying one more mutation to a child (0.0–1.0).
    ///
    /// Mutations repeat while a uniform draw stays below this value, so
    /// the expected count is `p / (1 - p)`.
    pub mutation_probability: f32,

    /// Bandwidth of every mutation.
    pub mutation_bandwidth: f32,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 110,
            triangles: 500,
            width: 64,
            height: 64,
            mutation_probability: 0.5,
            mutation_bandwidth: 0.2,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the triangle count per individual.
    pub fn with_triangles(mut self, n: usize) -> Self {
        self.triangles = n;
        self
    }

    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_probability(mut self, p: f32) -> Self {
        self.mutation_probability = p;
        self
    }

    /// Sets the mutation bandwidth.
    pub fn with_mutation_bandwidth(mut self, bw: f32) -> Self {
        self.mutation_bandwidth = bw;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Mean number of mutations per child.
    pub fn expected_mutations(&self) -> f32 {
        self.mutation_probability / (1.0 - self.mutation_probability)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            ));
        }
        if self.triangles == 0 {
            return Err("triangles must be at least 1".into());
        }
        if self.width == 0 || self.height == 0 {
            return Err("canvas must be non-empty".into());
        }
        if !(0.0..1.0).contains(&self.mutation_probability) {
            return Err(format!(
                "mutation_probability must be in [0, 1), got {}",
                self.mutation_probability
            ));
        }
        if self.mutation_bandwidth.is_nan() || self.mutation_bandwidth <= 0.0 {
            return Err(format!(
                "mutation_bandwidth must be positive, got {}",
                self.mutation_bandwidth
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert!((config.mutation_probability - 0.5).abs() < 1e-7);
        assert!((config.mutation_bandwidth - 0.2).abs() < 1e-7);
        assert!((config.expected_mutations() - 1.0).abs() < 1e-6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_population() {
        assert!(GaConfig::default().with_population_size(1).validate().is_err());
    }

    #[test]
    fn test_validate_probability() {
        assert!(GaConfig::default().with_mutation_probability(1.0).validate().is_err());
        assert!(GaConfig::default().with_mutation_probability(-0.1).validate().is_err());
        assert!(GaConfig::default().with_mutation_probability(0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_bandwidth() {
        assert!(GaConfig::default().with_mutation_bandwidth(0.0).validate().is_err());
    }

    #[test]
    fn test_builder_chainable() {
        let config = GaConfig::default()
            .with_population_size(12)
            .with_triangles(30)
            .with_canvas(32, 16)
            .with_seed(42);
        assert_eq!(config.population_size, 12);
        assert_eq!(config.triangles, 30);
        assert_eq!((config.width, config.height), (32, 16));
        assert_eq!(config.seed, Some(42));
    }
}
