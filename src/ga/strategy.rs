//! GA steady-state loop.

use super::config::GaConfig;
use crate::error::{Result, TrimageError};
use crate::model::operators::mutate_triangle_image;
use crate::model::{next_generation, Candidate};
use crate::random::{create_rng, SearchRng};
use crate::strategy::{EventDetail, ReportOutcome, SearchEvent, Strategy};
use rand::Rng;
use std::cmp::Ordering;

/// Steady-state GA with elitist sorted insertion.
pub struct GeneticSearch {
    config: GaConfig,
    rng: SearchRng,
    population: Vec<Candidate>,
}

impl GeneticSearch {
    pub fn new(config: GaConfig) -> Result<Self> {
        config.validate().map_err(TrimageError::InvalidConfig)?;
        Ok(Self {
            rng: create_rng(config.seed),
            population: Vec::with_capacity(config.population_size),
            config,
        })
    }

    /// The population; sorted ascending by error once full.
    pub fn population(&self) -> &[Candidate] {
        &self.population
    }

    fn is_full(&self) -> bool {
        self.population.len() >= self.config.population_size
    }

    /// Scans the population in order, swapping the incoming individual in
    /// wherever it beats the occupant. The displaced occupant carries on
    /// down the scan; whatever is left over at the end is dropped.
    fn insert(&mut self, candidate: Candidate) -> ReportOutcome {
        let mut outcome = ReportOutcome::Rejected;
        let mut incoming = candidate;

        for (slot, occupant) in self.population.iter_mut().enumerate() {
            if incoming.fitness() < occupant.fitness() {
                outcome = if slot == 0 {
                    let detail = EventDetail::Population(self.config.population_size);
                    ReportOutcome::Accepted(SearchEvent::new("ga", &incoming, detail))
                } else if outcome == ReportOutcome::Rejected {
                    ReportOutcome::Kept
                } else {
                    outcome
                };
                std::mem::swap(occupant, &mut incoming);
            }
        }

        match outcome {
            ReportOutcome::Accepted(event) => event.emit(),
            other => other,
        }
    }
}

impl Strategy for GeneticSearch {
    fn name(&self) -> &'static str {
        "ga"
    }

    fn produce_candidate(&mut self) -> Candidate {
        if !self.is_full() {
            return Candidate::random(
                self.config.triangles,
                next_generation(),
                self.config.width,
                self.config.height,
                &mut self.rng,
            );
        }

        // Selection (uniform, with replacement)
        let n = self.population.len();
        let mother = &self.population[self.rng.random_range(0..n)];
        let father = &self.population[self.rng.random_range(0..n)];

        // Reproduction (one-point crossover)
        let point = self.rng.random_range(0..=self.config.triangles);
        let mut child = Candidate::cross(mother, father, point, next_generation());

        // Mutation (geometric count)
        while self.rng.random::<f32>() < self.config.mutation_probability {
            mutate_triangle_image(&mut child, self.config.mutation_bandwidth, None, &mut self.rng);
        }
        child
    }

    fn report_result(&mut self, mut candidate: Candidate, error: f64) -> ReportOutcome {
        candidate.evaluate(error);

        if !self.is_full() {
            self.population.push(candidate);
            if self.is_full() {
                self.population.sort_by(|a, b| {
                    a.fitness()
                        .partial_cmp(&b.fitness())
                        .unwrap_or(Ordering::Equal)
                });
            }
            return ReportOutcome::Seeded;
        }

        self.insert(candidate)
    }

    fn current_best(&self) -> Option<&Candidate> {
        if self.is_full() {
            self.population.first()
        } else {
            self.population
                .iter()
                .min_by(|a, b| a.fitness().partial_cmp(&b.fitness()).unwrap_or(Ordering::Equal))
        }
    }
}
