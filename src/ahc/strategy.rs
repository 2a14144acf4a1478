//! AHC state machine.

use super::config::AhcConfig;
use crate::error::{Result, TrimageError};
use crate::model::operators::mutate_triangle_image;
use crate::model::{next_generation, Candidate};
use crate::random::{create_rng, SearchRng};
use crate::strategy::{EventDetail, ReportOutcome, SearchEvent, Strategy};
use std::cmp::Ordering;

/// (1+λ) hill climber with self-adapting mutation width and count.
pub struct AdaptiveClimber {
    config: AhcConfig,
    rng: SearchRng,
    champion: Option<Candidate>,
    children: Vec<Candidate>,
    bandwidth: f32,
    mutation_count: usize,
    improvements: usize,
    produced: usize,
    last_error: f64,
    last_cycle: Vec<f64>,
}

impl AdaptiveClimber {
    pub fn new(config: AhcConfig) -> Result<Self> {
        config.validate().map_err(TrimageError::InvalidConfig)?;
        Ok(Self {
            rng: create_rng(config.seed),
            champion: None,
            children: Vec::with_capacity(config.children()),
            bandwidth: config.initial_bandwidth,
            mutation_count: config.initial_mutation_count(),
            improvements: 0,
            produced: 0,
            last_error: f64::INFINITY,
            last_cycle: Vec::with_capacity(config.population_size),
            config,
        })
    }

    /// Current mutation bandwidth.
    pub fn bandwidth(&self) -> f32 {
        self.bandwidth
    }

    /// Mutations applied to each child.
    pub fn mutation_count(&self) -> usize {
        self.mutation_count
    }

    /// Errors of the last completed cycle (champion and children), in the
    /// ascending order used to pick the next champion.
    pub fn last_cycle_errors(&self) -> &[f64] {
        &self.last_cycle
    }

    /// Ranks the champion together with its children, keeps the best and
    /// drops the rest.
    fn complete_cycle(&mut self) -> ReportOutcome {
        let mut pool: Vec<Candidate> = Vec::with_capacity(self.config.population_size);
        pool.extend(self.champion.take());
        pool.append(&mut self.children);

        // Stable: on ties the incumbent (pushed first) stays ahead.
        pool.sort_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(Ordering::Equal)
        });

        self.last_cycle.clear();
        self.last_cycle.extend(pool.iter().map(Candidate::fitness));
        self.improvements += pool.iter().filter(|c| c.fitness() < self.last_error).count();
        self.produced += self.config.children();

        let mut ranked = pool.into_iter();
        let Some(best) = ranked.next() else {
            return ReportOutcome::Rejected;
        };
        drop(ranked);

        let outcome = if best.fitness() < self.last_error {
            let detail = EventDetail::Adaptive {
                bandwidth: self.bandwidth,
                mutation_count: self.mutation_count,
            };
            SearchEvent::new(self.name(), &best, detail).emit()
        } else {
            ReportOutcome::Rejected
        };

        self.last_error = best.fitness();
        self.champion = Some(best);
        self.adapt();
        outcome
    }

    /// Success-rate rule. `deficit > 0` means more than `1/λ` of recent
    /// children improved on the prior best.
    fn adapt(&mut self) {
        if self.produced > self.config.drift_limit {
            self.produced /= 2;
            self.improvements /= 2;
        }

        let lambda = self.config.children();
        let deficit = (self.improvements * lambda) as i64 - self.produced as i64;

        if deficit <= 0 {
            if self.mutation_count > 1 {
                self.mutation_count -= 1;
            } else {
                self.bandwidth = (self.bandwidth * self.config.shrink).max(self.config.min_bandwidth);
            }
        } else if self.bandwidth > self.config.reset_bandwidth {
            self.bandwidth = self.config.reset_bandwidth;
            self.mutation_count = self.config.reset_mutation_count;
        } else {
            self.bandwidth *= self.config.grow;
        }

        log::debug!(
            "ahc adapt: deficit={deficit} bandwidth={} mutations={}",
            self.bandwidth,
            self.mutation_count
        );
    }
}

impl Strategy for AdaptiveClimber {
    fn name(&self) -> &'static str {
        "ahc"
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
        for _ in 0..self.mutation_count {
            mutate_triangle_image(&mut next, self.bandwidth, None, &mut self.rng);
        }
        next
    }

    fn report_result(&mut self, mut candidate: Candidate, error: f64) -> ReportOutcome {
        candidate.evaluate(error);

        if self.champion.is_none() {
            self.last_error = error;
            self.champion = Some(candidate);
            return ReportOutcome::Seeded;
        }

        self.children.push(candidate);
        if self.children.len() < self.config.children() {
            return ReportOutcome::Buffered;
        }
        self.complete_cycle()
    }

    fn current_best(&self) -> Option<&Candidate> {
        self.champion.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::live_candidates;

    fn climber(triangles: usize) -> AdaptiveClimber {
        AdaptiveClimber::new(
            AhcConfig::default()
                .with_triangles(triangles)
                .with_canvas(4, 4)
                .with_seed(21),
        )
        .unwrap()
    }

    /// Runs one full cycle where child `i` scores `error(i)`.
    fn run_cycle(ahc: &mut AdaptiveClimber, error: impl Fn(usize) -> f64) -> ReportOutcome {
        let mut outcome = ReportOutcome::Rejected;
        for i in 0..6 {
            let c = ahc.produce_candidate();
            outcome = ahc.report_result(c, error(i));
        }
        outcome
    }

    #[test]
    fn test_parameters_fixed_mid_cycle() {
        let mut ahc = climber(30);
        let seed = ahc.produce_candidate();
        assert_eq!(ahc.report_result(seed, 100.0), ReportOutcome::Seeded);

        let initial = (ahc.bandwidth(), ahc.mutation_count());
        for i in 0..5 {
            let c = ahc.produce_candidate();
            assert_eq!(ahc.report_result(c, 90.0 - i as f64), ReportOutcome::Buffered);
            assert_eq!((ahc.bandwidth(), ahc.mutation_count()), initial);
        }
        let c = ahc.produce_candidate();
        assert!(ahc.report_result(c, 200.0).is_accepted());
        assert_ne!((ahc.bandwidth(), ahc.mutation_count()), initial);
    }

    #[test]
    fn test_cycle_sorted_and_best_kept() {
        let mut ahc = climber(30);
        let seed = ahc.produce_candidate();
        ahc.report_result(seed, 50.0);

        let errors = [70.0, 30.0, 90.0, 30.0, 10.0, 60.0];
        let outcome = run_cycle(&mut ahc, |i| errors[i]);

        let cycle = ahc.last_cycle_errors();
        assert_eq!(cycle.len(), 7);
        assert!(cycle.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(cycle[0], 10.0);
        assert_eq!(outcome.event().unwrap().error, 10.0);
        assert_eq!(ahc.current_best().unwrap().error(), Some(10.0));
    }

    #[test]
    fn test_no_improvement_narrows() {
        let mut ahc = climber(30);
        assert_eq!(ahc.mutation_count(), 3);
        let seed = ahc.produce_candidate();
        ahc.report_result(seed, 100.0);

        assert_eq!(run_cycle(&mut ahc, |_| 200.0), ReportOutcome::Rejected);
        assert_eq!(ahc.mutation_count(), 2);
        run_cycle(&mut ahc, |_| 200.0);
        assert_eq!(ahc.mutation_count(), 1);
        assert_eq!(ahc.bandwidth(), 1.0);
        run_cycle(&mut ahc, |_| 200.0);
        assert_eq!(ahc.mutation_count(), 1);
        assert!((ahc.bandwidth() - 0.95).abs() < 1e-6);
        assert_eq!(ahc.current_best().unwrap().error(), Some(100.0));
    }

    #[test]
    fn test_frequent_improvement_resets_then_widens() {
        let mut ahc = climber(30);
        let seed = ahc.produce_candidate();
        ahc.report_result(seed, 1000.0);

        run_cycle(&mut ahc, |i| 900.0 - i as f64);
        assert!((ahc.bandwidth() - 0.7).abs() < 1e-6);
        assert_eq!(ahc.mutation_count(), 2);

        run_cycle(&mut ahc, |i| 800.0 - i as f64);
        assert!((ahc.bandwidth() - 0.735).abs() < 1e-6);
        assert_eq!(ahc.mutation_count(), 2);
    }

    #[test]
    fn test_bandwidth_floor() {
        let mut ahc = AdaptiveClimber::new(
            AhcConfig::default()
                .with_triangles(5)
                .with_canvas(4, 4)
                .with_initial_bandwidth(0.0001),
        )
        .unwrap();
        let seed = ahc.produce_candidate();
        ahc.report_result(seed, 1.0);
        for _ in 0..5 {
            run_cycle(&mut ahc, |_| 2.0);
        }
        assert_eq!(ahc.bandwidth(), 0.0001);
    }

    #[test]
    fn test_population_bounded() {
        let base = live_candidates();
        let mut ahc = climber(10);
        for step in 0..70 {
            let c = ahc.produce_candidate();
            ahc.report_result(c, 500.0 - (step % 11) as f64);
            assert!(live_candidates() <= base + 7);
        }
        // 70 reports = seed + 11 full cycles + 3 buffered children.
        assert_eq!(live_candidates(), base + 1 + 3);
    }
}
