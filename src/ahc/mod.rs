//! Adaptive (1+λ) Hill Climber (AHC).
//!
//! Each cycle mutates the champion into λ children and keeps the best of
//! the champion and its children. Mutation width and mutation count are
//! tuned jointly by a success-rate rule in the spirit of Rechenberg's
//! 1/5 rule, with the target rate `1/λ`.
//!
//! # References
//!
//! - Rechenberg (1973), *Evolutionsstrategie*
//! - Beyer & Schwefel (2002), "Evolution strategies – A comprehensive introduction"

mod config;
mod strategy;

pub use config::AhcConfig;
pub use strategy::AdaptiveClimber;
