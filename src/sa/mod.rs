//! Simulated Annealing (SA) over triangle images.
//!
//! The "temperature" is the mutation bandwidth: each step applies
//! `floor(bw) + 1` mutations of width `bw`. Acceptance is strictly greedy;
//! the annealing lives entirely in the schedule. When the improvement
//! rate drops below `1/cut` the bandwidth cools geometrically, and once
//! it falls under a threshold the system reheats and `cut` grows so the
//! next descent cools more slowly.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Ingber (1989), "Very Fast Simulated Re-Annealing"

mod config;
mod strategy;

pub use config::SaConfig;
pub use strategy::Annealer;
