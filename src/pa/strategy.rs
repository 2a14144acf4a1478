//! PA state machine.

use super::config::PaConfig;
use crate::error::{Result, TrimageError};
use crate::model::operators::mutate_triangle_image;
use crate::model::{next_generation, Candidate};
use crate::random::{create_rng, SearchRng};
use crate::sa::Annealer;
use crate::strategy::{EventDetail, ReportOutcome, SearchEvent, Strategy};

/// Which half of the run the accumulator is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Adding triangles one at a time.
    Growing,
    /// Target size reached; the embedded annealer owns the champion.
    Refining,
}

/// Grow-then-anneal strategy.
pub struct ProgressiveAccumulator {
    config: PaConfig,
    rng: SearchRng,
    phase: Phase,
    champion: Option<Candidate>,
    current_size: usize,
    iterations: usize,
    force_accept: bool,
    refiner: Annealer,
}

impl ProgressiveAccumulator {
    pub fn new(config: PaConfig) -> Result<Self> {
        config.validate().map_err(TrimageError::InvalidConfig)?;
        let refiner = Annealer::new(config.refine_config())?;
        // A one-triangle target has nothing to grow.
        let phase = if config.max_triangles == 1 {
            Phase::Refining
        } else {
            Phase::Growing
        };
        Ok(Self {
            rng: create_rng(config.seed),
            phase,
            champion: None,
            current_size: 1,
            iterations: 0,
            force_accept: false,
            refiner,
            config,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Triangles in the candidates currently being produced.
    pub fn current_size(&self) -> usize {
        self.current_size
    }

    /// The embedded annealer.
    pub fn refiner(&self) -> &Annealer {
        &self.refiner
    }

    /// One-way hand-off of the grown champion to the annealer.
    fn begin_refinement(&mut self) {
        if let Some(champion) = self.champion.take() {
            log::debug!(
                "pa refinement: generation={} error={} size={}",
                champion.generation(),
                champion.fitness(),
                self.current_size
            );
            self.refiner.seed_champion(champion);
        }
        self.phase = Phase::Refining;
    }
}

impl Strategy for ProgressiveAccumulator {
    fn name(&self) -> &'static str {
        "pa"
    }

    fn produce_candidate(&mut self) -> Candidate {
        if self.phase == Phase::Refining {
            return self.refiner.produce_candidate();
        }

        let Some(champion) = &self.champion else {
            return Candidate::random(
                self.current_size,
                next_generation(),
                self.config.width,
                self.config.height,
                &mut self.rng,
            );
        };

        if self.iterations >= self.config.growth_interval(self.current_size) {
            self.iterations = 0;
            self.current_size += 1;
            self.force_accept = true;
            log::debug!("pa grow: size={}", self.current_size);
            return Candidate::expand(champion, next_generation(), 1, &mut self.rng);
        }

        let mut next = Candidate::copy(champion, next_generation());
        let forced = (self.iterations % self.config.forced_every == 0).then(|| next.len() - 1);
        for k in 0..self.config.mutations_per_step {
            let bandwidth = 1.0 / (k as f32 + 1.0);
            mutate_triangle_image(&mut next, bandwidth, forced, &mut self.rng);
        }
        next
    }

    fn report_result(&mut self, mut candidate: Candidate, error: f64) -> ReportOutcome {
        if self.phase == Phase::Refining {
            return self.refiner.report_result(candidate, error);
        }

        candidate.evaluate(error);
        self.iterations += 1;

        let outcome = match &self.champion {
            None => {
                self.champion = Some(candidate);
                ReportOutcome::Seeded
            }
            Some(champion) if error < champion.fitness() || self.force_accept => {
                self.force_accept = false;
                let detail = EventDetail::Size(self.current_size);
                let event = SearchEvent::new(self.name(), &candidate, detail);
                self.champion = Some(candidate);
                event.emit()
            }
            Some(_) => ReportOutcome::Rejected,
        };

        if self.current_size >= self.config.max_triangles && !self.force_accept {
            self.begin_refinement();
        }
        outcome
    }

    fn current_best(&self) -> Option<&Candidate> {
        match self.phase {
            Phase::Growing => self.champion.as_ref(),
            Phase::Refining => self.refiner.current_best(),
        }
    }
}
