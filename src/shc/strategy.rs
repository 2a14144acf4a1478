//! SHC state machine.

use super::config::ShcConfig;
use crate::error::{Result, TrimageError};
use crate::model::operators::mutate_triangle_image;
use crate::model::{next_generation, Candidate};
use crate::random::{create_rng, SearchRng};
use crate::strategy::{EventDetail, ReportOutcome, SearchEvent, Strategy};

/// Single-champion greedy hill climber.
pub struct HillClimber {
    config: ShcConfig,
    rng: SearchRng,
    champion: Option<Candidate>,
}

impl HillClimber {
    pub fn new(config: ShcConfig) -> Result<Self> {
        config.validate().map_err(TrimageError::InvalidConfig)?;
        Ok(Self {
            rng: create_rng(config.seed),
            config,
            champion: None,
        })
    }
}

impl Strategy for HillClimber {
    fn name(&self) -> &'static str {
        "shc"
    }

    fn produce_candidate(&mut self) -> Candidate {
        let Some(champion) = &self.champion else {
            return Candidate::random(
                self.config.triangles,
                next_generation(),
                self.config.width,
                self.config.height,
                &mut self.rng,
            );
        };

        let mut next = Candidate::copy(champion, next_generation());
        mutate_triangle_image(&mut next, self.config.bandwidth, None, &mut self.rng);
        next
    }

    fn report_result(&mut self, mut candidate: Candidate, error: f64) -> ReportOutcome {
        candidate.evaluate(error);

        match &self.champion {
            None => {
                self.champion = Some(candidate);
                ReportOutcome::Seeded
            }
            Some(champion) if error < champion.fitness() => {
                let event = SearchEvent::new(self.name(), &candidate, EventDetail::None);
                self.champion = Some(candidate);
                event.emit()
            }
            Some(_) => ReportOutcome::Rejected,
        }
    }

    fn current_best(&self) -> Option<&Candidate> {
        self.champion.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{live_candidates, CandidateState, Triangle};

    fn climber() -> HillClimber {
        HillClimber::new(ShcConfig::default().with_triangles(5).with_canvas(8, 8).with_seed(42))
            .unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            HillClimber::new(ShcConfig::default().with_triangles(0)),
            Err(TrimageError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_first_candidate_is_random_and_seeds() {
        let mut shc = climber();
        assert!(shc.current_best().is_none());

        let first = shc.produce_candidate();
        assert_eq!(first.len(), 5);
        assert_eq!(first.state(), CandidateState::Pending);
        let generation = first.generation();

        assert_eq!(shc.report_result(first, 100.0), ReportOutcome::Seeded);
        let best = shc.current_best().unwrap();
        assert_eq!(best.generation(), generation);
        assert_eq!(best.error(), Some(100.0));
        assert_eq!(best.state(), CandidateState::Evaluated);
    }

    #[test]
    fn test_child_differs_in_at_most_one_gene() {
        let mut shc = climber();
        let first = shc.produce_candidate();
        shc.report_result(first, 100.0);

        let parent: Vec<f32> = shc.current_best().unwrap().triangles().iter().flat_map(Triangle::genes).collect();
        for _ in 0..20 {
            let child = shc.produce_candidate();
            let genes: Vec<f32> = child.triangles().iter().flat_map(Triangle::genes).collect();
            assert!(genes.iter().zip(&parent).filter(|(a, b)| a != b).count() <= 1);
            assert!(child.generation() > shc.current_best().unwrap().generation());
        }
    }

    #[test]
    fn test_strictly_better_only() {
        let mut shc = climber();
        let first = shc.produce_candidate();
        shc.report_result(first, 100.0);

        let equal = shc.produce_candidate();
        assert_eq!(shc.report_result(equal, 100.0), ReportOutcome::Rejected);

        let worse = shc.produce_candidate();
        assert_eq!(shc.report_result(worse, 150.0), ReportOutcome::Rejected);

        let better = shc.produce_candidate();
        let generation = better.generation();
        let outcome = shc.report_result(better, 80.0);
        let event = outcome.event().unwrap();
        assert_eq!(event.generation, generation);
        assert_eq!(event.error, 80.0);
        assert_eq!(event.strategy, "shc");
        assert_eq!(shc.current_best().unwrap().error(), Some(80.0));
    }

    #[test]
    fn test_single_candidate_retained() {
        let base = live_candidates();
        let mut shc = climber();
        for step in 0..30 {
            let c = shc.produce_candidate();
            shc.report_result(c, 1000.0 - (step % 7) as f64);
            assert_eq!(live_candidates(), base + 1);
        }
        drop(shc);
        assert_eq!(live_candidates(), base);
    }
}
