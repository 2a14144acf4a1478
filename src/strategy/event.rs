//! Acceptance records emitted by strategies.

use crate::model::Candidate;
use std::fmt;

/// Strategy-specific context attached to a [`SearchEvent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventDetail {
    /// Plain greedy acceptance.
    None,
    /// Annealing bandwidth at acceptance time.
    Bandwidth(f32),
    /// Adaptive hill climber parameters at acceptance time.
    Adaptive { bandwidth: f32, mutation_count: usize },
    /// Triangle count while growing.
    Size(usize),
    /// Population size of the genetic algorithm.
    Population(usize),
}

/// A new champion was accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchEvent {
    pub strategy: &'static str,
    pub generation: u64,
    pub error: f64,
    pub detail: EventDetail,
}

impl SearchEvent {
    pub(crate) fn new(strategy: &'static str, champion: &Candidate, detail: EventDetail) -> Self {
        Self {
            strategy,
            generation: champion.generation(),
            error: champion.fitness(),
            detail,
        }
    }

    /// Logs the event at `info` and wraps it as an accepted outcome.
    pub(crate) fn emit(self) -> ReportOutcome {
        log::info!("{self}");
        ReportOutcome::Accepted(self)
    }
}

impl fmt::Display for SearchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} generation={} error={}", self.strategy, self.generation, self.error)?;
        match self.detail {
            EventDetail::None => Ok(()),
            EventDetail::Bandwidth(bw) => write!(f, " bandwidth={bw}"),
            EventDetail::Adaptive {
                bandwidth,
                mutation_count,
            } => write!(f, " bandwidth={bandwidth} mutations={mutation_count}"),
            EventDetail::Size(n) => write!(f, " size={n}"),
            EventDetail::Population(n) => write!(f, " population={n}"),
        }
    }
}

/// What a strategy did with a reported candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    /// The candidate became the new champion.
    Accepted(SearchEvent),
    /// The very first candidate, kept unconditionally.
    Seeded,
    /// Kept in a population without becoming the champion.
    Kept,
    /// Held until the current cycle completes.
    Buffered,
    /// Dropped.
    Rejected,
}

impl ReportOutcome {
    /// The acceptance record, if a new champion was accepted.
    pub fn event(&self) -> Option<&SearchEvent> {
        match self {
            ReportOutcome::Accepted(event) => Some(event),
            _ => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, ReportOutcome::Accepted(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let event = SearchEvent {
            strategy: "sa",
            generation: 12,
            error: 340.0,
            detail: EventDetail::Bandwidth(0.5),
        };
        assert_eq!(event.to_string(), "sa generation=12 error=340 bandwidth=0.5");

        let event = SearchEvent {
            detail: EventDetail::Adaptive {
                bandwidth: 0.7,
                mutation_count: 2,
            },
            ..event
        };
        assert!(event.to_string().ends_with("bandwidth=0.7 mutations=2"));
    }

    #[test]
    fn test_outcome_accessors() {
        let event = SearchEvent {
            strategy: "shc",
            generation: 1,
            error: 1.0,
            detail: EventDetail::None,
        };
        let outcome = ReportOutcome::Accepted(event.clone());
        assert!(outcome.is_accepted());
        assert_eq!(outcome.event(), Some(&event));
        assert!(!ReportOutcome::Rejected.is_accepted());
        assert_eq!(ReportOutcome::Seeded.event(), None);
    }
}
