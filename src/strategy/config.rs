//! Startup selection of a strategy.

use super::Strategy;
use crate::ahc::{AdaptiveClimber, AhcConfig};
use crate::error::Result;
use crate::ga::{GaConfig, GeneticSearch};
use crate::pa::{PaConfig, ProgressiveAccumulator};
use crate::sa::{Annealer, SaConfig};
use crate::shc::{HillClimber, ShcConfig};

/// One of the five strategies, with its configuration.
///
/// # Examples
///
/// ```
/// use u_trimage::sa::SaConfig;
/// use u_trimage::strategy::StrategyConfig;
///
/// let strategy = StrategyConfig::Annealing(SaConfig::default().with_seed(1))
///     .build()
///     .unwrap();
/// assert_eq!(strategy.name(), "sa");
/// ```
#[derive(Debug, Clone)]
pub enum StrategyConfig {
    HillClimb(ShcConfig),
    Adaptive(AhcConfig),
    Annealing(SaConfig),
    Progressive(PaConfig),
    Genetic(GaConfig),
}

impl StrategyConfig {
    /// Validates the configuration and constructs the strategy.
    pub fn build(self) -> Result<Box<dyn Strategy>> {
        let strategy: Box<dyn Strategy> = match self {
            StrategyConfig::HillClimb(c) => Box::new(HillClimber::new(c)?),
            StrategyConfig::Adaptive(c) => Box::new(AdaptiveClimber::new(c)?),
            StrategyConfig::Annealing(c) => Box::new(Annealer::new(c)?),
            StrategyConfig::Progressive(c) => Box::new(ProgressiveAccumulator::new(c)?),
            StrategyConfig::Genetic(c) => Box::new(GeneticSearch::new(c)?),
        };
        Ok(strategy)
    }

    /// Validates without constructing.
    pub fn validate(&self) -> std::result::Result<(), String> {
        match self {
            StrategyConfig::HillClimb(c) => c.validate(),
            StrategyConfig::Adaptive(c) => c.validate(),
            StrategyConfig::Annealing(c) => c.validate(),
            StrategyConfig::Progressive(c) => c.validate(),
            StrategyConfig::Genetic(c) => c.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrimageError;

    #[test]
    fn test_build_each_kind() {
        let configs = [
            (StrategyConfig::HillClimb(ShcConfig::default()), "shc"),
            (StrategyConfig::Adaptive(AhcConfig::default()), "ahc"),
            (StrategyConfig::Annealing(SaConfig::default()), "sa"),
            (StrategyConfig::Progressive(PaConfig::default()), "pa"),
            (StrategyConfig::Genetic(GaConfig::default()), "ga"),
        ];
        for (config, name) in configs {
            assert!(config.validate().is_ok());
            let strategy = config.build().unwrap();
            assert_eq!(strategy.name(), name);
            assert!(strategy.current_best().is_none());
        }
    }

    #[test]
    fn test_build_rejects_invalid() {
        let config = StrategyConfig::Genetic(GaConfig::default().with_population_size(0));
        assert!(config.validate().is_err());
        assert!(matches!(config.build(), Err(TrimageError::InvalidConfig(_))));
    }

    #[test]
    fn test_boxed_strategy_round_trip() {
        let mut strategy = StrategyConfig::HillClimb(ShcConfig::default().with_triangles(3).with_seed(1))
            .build()
            .unwrap();
        let c = strategy.produce_candidate();
        assert_eq!(c.len(), 3);
        strategy.report_result(c, 1.0);
        assert_eq!(strategy.current_best().unwrap().error(), Some(1.0));
    }
}
