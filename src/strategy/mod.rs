//! The uniform strategy contract.
//!
//! Every search strategy is a state machine driven one candidate at a
//! time:
//!
//! 1. [`Strategy::produce_candidate`] hands out an unevaluated candidate
//!    (ownership moves to the caller),
//! 2. the caller renders it and scores it against the target,
//! 3. [`Strategy::report_result`] gives the candidate back together with
//!    its error. The strategy either keeps it (champion or population
//!    slot) or drops it.
//!
//! At most one candidate is in flight per strategy. Strategies hold no
//! locks and never call back into the driver.

mod config;
mod event;

pub use config::StrategyConfig;
pub use event::{EventDetail, ReportOutcome, SearchEvent};

use crate::model::Candidate;

/// A stochastic search over triangle images.
pub trait Strategy: Send {
    /// Short identifier used in log records.
    fn name(&self) -> &'static str;

    /// Produces the next candidate to evaluate.
    fn produce_candidate(&mut self) -> Candidate;

    /// Returns an evaluated candidate to the strategy.
    ///
    /// `error` is the fitness oracle's distance for `candidate`; lower is
    /// better. Rejected candidates are dropped before this returns.
    fn report_result(&mut self, candidate: Candidate, error: f64) -> ReportOutcome;

    /// The best candidate retained so far, if any has been reported.
    fn current_best(&self) -> Option<&Candidate>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn produce_candidate(&mut self) -> Candidate {
        (**self).produce_candidate()
    }

    fn report_result(&mut self, candidate: Candidate, error: f64) -> ReportOutcome {
        (**self).report_result(candidate, error)
    }

    fn current_best(&self) -> Option<&Candidate> {
        (**self).current_best()
    }
}
