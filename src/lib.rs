//! Metaheuristic search engine for approximating raster images with
//! semi-transparent triangles.
//!
//! Provides interchangeable stochastic strategies that all speak the same
//! produce/report protocol ([`strategy::Strategy`]):
//!
//! - **Stochastic Hill Climber ([`shc`])**: single-gene greedy ascent.
//! - **Adaptive Hill Climber ([`ahc`])**: (1+λ) scheme that tunes mutation
//!   width and count with a success-rate rule.
//! - **Simulated Annealing ([`sa`])**: greedy acceptance under a
//!   cool/reheat bandwidth schedule.
//! - **Progressive Accumulator ([`pa`])**: grows the image triangle by
//!   triangle, then hands over to annealing.
//! - **Genetic Algorithm ([`ga`])**: steady-state GA with one-point
//!   crossover and elitist sorted insertion.
//!
//! # Architecture
//!
//! The strategies own candidate generation, mutation and acceptance. They
//! never rasterize or score: a driver renders each produced
//! [`model::Candidate`] with a [`render::Renderer`], scores it with a
//! [`fitness::FitnessOracle`] and reports the error back. [`driver::Driver`]
//! is a reference implementation of that loop; the reference renderer and
//! oracles exist so the engine is usable (and testable) on its own.

pub mod ahc;
pub mod driver;
pub mod error;
pub mod fitness;
pub mod ga;
pub mod image;
pub mod model;
pub mod pa;
pub mod random;
pub mod render;
pub mod sa;
pub mod shc;
pub mod strategy;

pub use error::{Result, TrimageError};
