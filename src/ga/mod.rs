//! Steady-state Genetic Algorithm (GA) over triangle images.
//!
//! One child per step: two parents drawn uniformly with replacement,
//! one-point crossover on the triangle list, then a geometric number of
//! mutations. The child competes for a place in a population that is
//! kept sorted by error, so slot 0 is always the champion.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Syswerda (1991), "A Study of Reproduction in Generational and Steady-State Genetic Algorithms"
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod strategy;

pub use config::GaConfig;
pub use strategy::GeneticSearch;
