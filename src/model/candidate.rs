//! Triangle images and their construction primitives.

use super::triangle::Triangle;
use crate::image::PixelBuffer;
use rand::Rng;

/// Lifecycle of a [`Candidate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CandidateState {
    /// Triangles are set, nothing rendered yet. May move straight to
    /// `Evaluated` when the error is computed without pixels.
    Pending,
    /// The renderer attached a pixel buffer; error still unknown.
    Rendered,
    /// A strategy recorded the error in `report_result`.
    Evaluated,
}

/// A triangle-list image plus search metadata.
///
/// Deliberately not `Clone`: a candidate has exactly one owner at a time,
/// and the only way to duplicate one is [`Candidate::copy`], which issues
/// a new generation id.
#[derive(Debug)]
pub struct Candidate {
    triangles: Vec<Triangle>,
    generation: u64,
    state: CandidateState,
    error: Option<f64>,
    width: u32,
    height: u32,
    pixels: Option<PixelBuffer>,
}

impl Candidate {
    /// Allocates a candidate of `size` zeroed triangles for a
    /// `width x height` canvas. No pixel buffer is attached yet.
    pub fn new(size: usize, generation: u64, width: u32, height: u32) -> Self {
        Self::from_triangles(vec![Triangle::default(); size], generation, width, height)
    }

    /// A candidate whose every gene is an independent draw from `[0, 1)`.
    pub fn random<R: Rng>(size: usize, generation: u64, width: u32, height: u32, rng: &mut R) -> Self {
        let triangles = (0..size).map(|_| Triangle::random(rng)).collect();
        Self::from_triangles(triangles, generation, width, height)
    }

    /// Deep copy of `source`'s triangles under a new generation id.
    pub fn copy(source: &Candidate, generation: u64) -> Self {
        Self::from_triangles(source.triangles.clone(), generation, source.width, source.height)
    }

    /// One-point crossover: the first `point` triangles come from `a`,
    /// the rest from `b`.
    ///
    /// # Panics
    /// Panics if the parents hold different triangle counts or if
    /// `point > a.len()`.
    pub fn cross(a: &Candidate, b: &Candidate, point: usize, generation: u64) -> Self {
        assert_eq!(
            a.len(),
            b.len(),
            "crossover parents must have equal triangle counts"
        );
        assert!(point <= a.len(), "crossover point {point} beyond {} triangles", a.len());

        let mut triangles = Vec::with_capacity(a.len());
        triangles.extend_from_slice(&a.triangles[..point]);
        triangles.extend_from_slice(&b.triangles[point..]);
        Self::from_triangles(triangles, generation, a.width, a.height)
    }

    /// Copies `source` and appends `extra` freshly randomised triangles.
    pub fn expand<R: Rng>(source: &Candidate, generation: u64, extra: usize, rng: &mut R) -> Self {
        let mut triangles = Vec::with_capacity(source.len() + extra);
        triangles.extend_from_slice(&source.triangles);
        triangles.extend((0..extra).map(|_| Triangle::random(rng)));
        Self::from_triangles(triangles, generation, source.width, source.height)
    }

    fn from_triangles(triangles: Vec<Triangle>, generation: u64, width: u32, height: u32) -> Self {
        #[cfg(test)]
        LIVE.with(|live| live.set(live.get() + 1));

        Self {
            triangles,
            generation,
            state: CandidateState::Pending,
            error: None,
            width,
            height,
            pixels: None,
        }
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn triangles_mut(&mut self) -> &mut [Triangle] {
        &mut self.triangles
    }

    /// Number of triangles.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> CandidateState {
        self.state
    }

    /// The recorded error, once evaluated.
    pub fn error(&self) -> Option<f64> {
        self.error
    }

    /// The recorded error, or `f64::INFINITY` (the worst fitness) if the
    /// candidate has not been evaluated.
    pub fn fitness(&self) -> f64 {
        self.error.unwrap_or(f64::INFINITY)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The rendered pixels, available from `Rendered` until the candidate
    /// is dropped.
    pub fn pixels(&self) -> Option<&PixelBuffer> {
        self.pixels.as_ref()
    }

    /// Stores the renderer's output and moves the candidate to `Rendered`.
    ///
    /// Returns a reference to the stored buffer so the caller can hand it
    /// straight to a fitness oracle.
    pub fn attach_render(&mut self, pixels: PixelBuffer) -> &PixelBuffer {
        if self.state == CandidateState::Pending {
            self.state = CandidateState::Rendered;
        }
        self.pixels.insert(pixels)
    }

    /// Records the error and moves the candidate to `Evaluated`.
    ///
    /// `Rendered` is optional: a driver whose oracle scores triangles
    /// without pixels may report a `Pending` candidate directly. A
    /// candidate that holds pixels must have reached `Rendered` first.
    pub(crate) fn evaluate(&mut self, error: f64) {
        debug_assert!(
            self.state != CandidateState::Evaluated,
            "candidate {} evaluated twice",
            self.generation
        );
        debug_assert!(
            self.state == CandidateState::Rendered || self.pixels.is_none(),
            "candidate {} holds pixels but was never marked rendered",
            self.generation
        );
        self.error = Some(error);
        self.state = CandidateState::Evaluated;
    }
}

#[cfg(test)]
thread_local! {
    static LIVE: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

#[cfg(test)]
impl Drop for Candidate {
    fn drop(&mut self) {
        LIVE.with(|live| live.set(live.get() - 1));
    }
}

/// Candidates alive on the current test thread.
#[cfg(test)]
pub(crate) fn live_candidates() -> usize {
    LIVE.with(|live| live.get())
}
