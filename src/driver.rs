//! Reference driver loop.
//!
//! [`Driver`] wires a strategy to a [`Renderer`] and a [`FitnessOracle`]:
//! produce → render → compare → report, one candidate in flight at a
//! time. Embedders with their own scheduling (an idle callback, a worker
//! thread) can call [`Driver::step`] themselves instead of [`Driver::run`].

use crate::error::{Result, TrimageError};
use crate::fitness::FitnessOracle;
use crate::image::PixelBuffer;
use crate::model::Candidate;
use crate::render::Renderer;
use crate::strategy::{ReportOutcome, SearchEvent, Strategy};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Loop limits for [`Driver::run`].
///
/// # Examples
///
/// ```
/// use u_trimage::driver::DriverConfig;
///
/// let config = DriverConfig::default()
///     .with_max_steps(5_000)
///     .with_time_limit_ms(2_000)
///     .with_history_interval(50);
/// assert_eq!(config.max_steps, 5_000);
/// ```
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Produce/report cycles to run. 0 = until cancelled or timed out.
    pub max_steps: usize,

    /// Optional wall-clock limit in milliseconds, checked before each step.
    pub time_limit_ms: Option<u64>,

    /// Best error is sampled into the history every this many steps.
    pub history_interval: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            max_steps: 10_000,
            time_limit_ms: None,
            history_interval: 100,
        }
    }
}

impl DriverConfig {
    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n.max(1);
        self
    }
}

/// Result of a [`Driver::run`].
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Produce/report cycles completed.
    pub steps: usize,

    /// Every champion acceptance, in order.
    pub events: Vec<SearchEvent>,

    /// Error of the strategy's best candidate at the end of the run.
    pub best_error: Option<f64>,

    /// Generation of that candidate.
    pub best_generation: Option<u64>,

    /// Whether the run stopped on the cancellation flag.
    pub cancelled: bool,

    /// Whether the run stopped on the time limit.
    pub timed_out: bool,

    /// Best error sampled at regular intervals.
    pub error_history: Vec<f64>,
}

/// Renders and scores candidates against a fixed target image.
pub struct Driver<R, O> {
    target: PixelBuffer,
    renderer: R,
    oracle: O,
}

impl<R: Renderer, O: FitnessOracle> Driver<R, O> {
    pub fn new(target: PixelBuffer, renderer: R, oracle: O) -> Self {
        Self {
            target,
            renderer,
            oracle,
        }
    }

    pub fn target(&self) -> &PixelBuffer {
        &self.target
    }

    /// Scores an already rendered candidate.
    pub fn score(&self, candidate: &Candidate) -> Result<f64> {
        let pixels = candidate
            .pixels()
            .ok_or(TrimageError::Unrendered(candidate.generation()))?;
        self.oracle.compare(pixels, &self.target)
    }

    /// Renders `candidate`, attaches the pixels and scores it.
    pub fn evaluate(&self, candidate: &mut Candidate) -> Result<f64> {
        let pixels = self
            .renderer
            .render(candidate.triangles(), candidate.width(), candidate.height());
        candidate.attach_render(pixels);
        self.score(candidate)
    }

    /// One produce → render → compare → report cycle.
    pub fn step<S: Strategy + ?Sized>(&self, strategy: &mut S) -> Result<ReportOutcome> {
        let mut candidate = strategy.produce_candidate();
        let error = self.evaluate(&mut candidate)?;
        Ok(strategy.report_result(candidate, error))
    }

    /// Runs until the step budget or time limit is exhausted.
    pub fn run<S: Strategy + ?Sized>(&self, strategy: &mut S, config: &DriverConfig) -> Result<RunSummary> {
        self.run_with_cancel(strategy, config, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the loop stops
    /// before the next step and returns what it has.
    pub fn run_with_cancel<S: Strategy + ?Sized>(
        &self,
        strategy: &mut S,
        config: &DriverConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RunSummary> {
        let start = Instant::now();
        let history_interval = config.history_interval.max(1);

        let mut steps = 0usize;
        let mut events = Vec::new();
        let mut error_history = Vec::new();
        let mut cancelled = false;
        let mut timed_out = false;

        log::debug!(
            "driver start: strategy={} target={}x{}",
            strategy.name(),
            self.target.width(),
            self.target.height()
        );

        while config.max_steps == 0 || steps < config.max_steps {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if let Some(limit) = config.time_limit_ms {
                if start.elapsed().as_millis() >= u128::from(limit) {
                    timed_out = true;
                    break;
                }
            }

            if let ReportOutcome::Accepted(event) = self.step(strategy)? {
                events.push(event);
            }
            steps += 1;

            if steps.is_multiple_of(history_interval) {
                error_history.extend(strategy.current_best().map(Candidate::fitness));
            }
        }

        let best = strategy.current_best();
        let best_error = best.map(Candidate::fitness);
        if let Some(error) = best_error {
            if error_history.last() != Some(&error) {
                error_history.push(error);
            }
        }

        log::debug!(
            "driver stop: strategy={} steps={steps} accepted={} best={best_error:?}",
            strategy.name(),
            events.len()
        );

        Ok(RunSummary {
            steps,
            events,
            best_error,
            best_generation: best.map(Candidate::generation),
            cancelled,
            timed_out,
            error_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
