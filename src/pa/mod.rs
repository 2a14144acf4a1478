//! Progressive Accumulator (PA).
//!
//! Grows the image one triangle at a time, starting from a single
//! triangle. Between growth steps the newest triangle is refined with a
//! burst of shrinking-width mutations. Once the target size is reached
//! the champion is handed to an embedded [`Annealer`](crate::sa::Annealer)
//! for the rest of the run.

mod config;
mod strategy;

pub use config::PaConfig;
pub use strategy::{Phase, ProgressiveAccumulator};
