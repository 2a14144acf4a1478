//! Candidate model: triangles, triangle images and their operators.
//!
//! A [`Candidate`] is an ordered list of semi-transparent [`Triangle`]s
//! plus the metadata a strategy needs to rank it (generation id,
//! lifecycle state, error). Candidates are never cloned: [`Candidate::copy`]
//! issues a new generation, and ownership moves between the driver and
//! the strategy on every produce/report round trip.
//!
//! # Submodules
//!
//! - [`operators`]: gene mutation and the per-call image mutation primitive

mod candidate;
mod generation;
pub mod operators;
mod triangle;

pub use candidate::{Candidate, CandidateState};
pub use generation::next_generation;
pub use triangle::{Triangle, GENE_COUNT};

#[cfg(test)]
pub(crate) use candidate::live_candidates;
