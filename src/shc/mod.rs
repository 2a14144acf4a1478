//! Stochastic Hill Climber (SHC).
//!
//! Strict greedy ascent: each step copies the champion, redraws one gene
//! and keeps the copy only if it is strictly better.

mod config;
mod strategy;

pub use config::ShcConfig;
pub use strategy::HillClimber;
