//! SA state machine.

use super::config::SaConfig;
use crate::error::{Result, TrimageError};
use crate::model::operators::mutate_triangle_image;
use crate::model::{next_generation, Candidate};
use crate::random::{create_rng, SearchRng};
use crate::strategy::{EventDetail, ReportOutcome, SearchEvent, Strategy};

/// Greedy annealer with an adaptive cool/reheat bandwidth schedule.
pub struct Annealer {
    config: SaConfig,
    rng: SearchRng,
    champion: Option<Candidate>,
    bandwidth: f32,
    cut: usize,
    iterations: usize,
    improvements: usize,
}

impl Annealer {
    pub fn new(config: SaConfig) -> Result<Self> {
        config.validate().map_err(TrimageError::InvalidConfig)?;
        Ok(Self {
            rng: create_rng(config.seed),
            bandwidth: config.starting_bandwidth(),
            cut: config.initial_cut,
            iterations: 0,
            improvements: 0,
            champion: None,
            config,
        })
    }

    /// Current mutation bandwidth.
    pub fn bandwidth(&self) -> f32 {
        self.bandwidth
    }

    /// Current cut: cooling triggers when fewer than `1/cut` of recent
    /// iterations improved.
    pub fn cut(&self) -> usize {
        self.cut
    }

    /// Installs an already evaluated champion, replacing any existing one.
    ///
    /// Used by the progressive accumulator when it hands its grown
    /// candidate over for refinement.
    pub(crate) fn seed_champion(&mut self, champion: Candidate) {
        debug_assert!(champion.error().is_some(), "seeded champion must be evaluated");
        self.champion = Some(champion);
    }

    /// Cools once the improvement rate over the current window falls
    /// below `1/cut`; reheats when the bandwidth gets too narrow.
    fn update_schedule(&mut self) {
        if self.iterations < self.config.min_iterations()
            || self.improvements * self.cut >= self.iterations
        {
            return;
        }

        self.iterations = 0;
        self.improvements = 0;
        self.bandwidth *= self.config.cooling;

        if self.bandwidth < self.config.reheat_threshold {
            self.bandwidth = self.config.reheat_bandwidth;
            self.cut += 1;
            log::debug!("sa reheat: bandwidth={} cut={}", self.bandwidth, self.cut);
        } else {
            log::trace!("sa cool: bandwidth={}", self.bandwidth);
        }
    }
}

impl Strategy for Annealer {
    fn name(&self) -> &'static str {
        "sa"
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
        let mutations = self.bandwidth as usize + 1;
        for _ in 0..mutations {
            mutate_triangle_image(&mut next, self.bandwidth, None, &mut self.rng);
        }

        self.update_schedule();
        next
    }

    fn report_result(&mut self, mut candidate: Candidate, error: f64) -> ReportOutcome {
        candidate.evaluate(error);
        self.iterations += 1;

        match &self.champion {
            None => {
                self.champion = Some(candidate);
                ReportOutcome::Seeded
            }
            Some(champion) if error < champion.fitness() => {
                self.improvements += 1;
                let detail = EventDetail::Bandwidth(self.bandwidth);
                let event = SearchEvent::new(self.name(), &candidate, detail);
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
