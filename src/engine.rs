//! Generic band-by-band scan engine.
//!
//! The engine owns the only live frontier and walks the layers once, top to
//! bottom, in bands of `band_height` layers:
//! 1. each band is summarised by the problem as the frontier passes over it;
//! 2. band summaries are folded left to right with
//!    [`LayeredScan::merge_summary`].
//!
//! Because the fold runs in layer order and the merge is associative, the
//! result does not depend on the band height.
//!
//! The engine is completely generic over implementations of [`LayeredScan`].

use crate::blocks::BandSummary;
use crate::builder::default_band_height;
use crate::traits::LayeredScan;

/// Scan engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use uniform_rect::{BinaryMatrix, EvaluationMode, ScanEngine};
/// use uniform_rect::problems::uniform_block::UniformBlockProblem;
///
/// let matrix = BinaryMatrix::from_rows(&[vec![1, 1, 0], vec![1, 1, 1], vec![0, 1, 0]]).unwrap();
/// let engine = ScanEngine::new(UniformBlockProblem::new(&matrix, EvaluationMode::Ones));
/// let best = engine.run();
/// assert_eq!(best.area(), 4);
/// ```
pub struct ScanEngine<P: LayeredScan> {
    problem: P,
    band_height: usize,
}

impl<P: LayeredScan> ScanEngine<P> {
    /// Create a new engine with a heuristic band height (≈ √T).
    pub fn new(problem: P) -> Self {
        let b = default_band_height(problem.num_layers());
        Self::with_band_height(problem, b)
    }

    /// Create a new engine with an explicit band height.
    ///
    /// # Panics
    /// Panics if `band_height == 0`.
    pub fn with_band_height(problem: P, band_height: usize) -> Self {
        assert!(band_height > 0, "band_height must be positive");
        Self {
            problem,
            band_height,
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn band_height(&self) -> usize {
        self.band_height
    }

    pub fn into_problem(self) -> P {
        self.problem
    }

    fn num_bands(&self) -> usize {
        self.problem.num_layers().div_ceil(self.band_height)
    }

    fn band_bounds(&self, k: usize) -> (usize, usize) {
        let t = self.problem.num_layers();
        let start = k * self.band_height;
        (start, (start + self.band_height).min(t))
    }

    /// Walk every band and keep its summary.
    ///
    /// Returns the bands covering `[0, T)` in order.
    pub fn summarize_bands(&self) -> Vec<BandSummary<P::Summary>> {
        let num_bands = self.num_bands();
        let mut bands = Vec::with_capacity(num_bands);
        let mut frontier = self.problem.init_frontier();

        for k in 0..num_bands {
            let (start, end) = self.band_bounds(k);
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("summarize_band", band = k, start, end);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            let summary = self.problem.summarize_block(start, end, &mut frontier);
            bands.push(BandSummary {
                start,
                end,
                summary,
            });
        }

        bands
    }

    /// Run the full scan and return the merged summary of all layers.
    ///
    /// Band summaries are folded as soon as they are produced; nothing but
    /// the frontier and the running summary is kept.
    pub fn run(&self) -> P::Summary {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "scan_run",
            layers = self.problem.num_layers(),
            band_height = self.band_height
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut frontier = self.problem.init_frontier();
        let mut acc = self.problem.empty_summary();
        for k in 0..self.num_bands() {
            let (start, end) = self.band_bounds(k);
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("summarize_band", band = k, start, end);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            let sigma = self.problem.summarize_block(start, end, &mut frontier);
            acc = self.problem.merge_summary(&acc, &sigma);
        }
        acc
    }

    /// Like [`run`](Self::run), but also hands back every band summary.
    pub fn run_with_bands(&self) -> (P::Summary, Vec<BandSummary<P::Summary>>) {
        let bands = self.summarize_bands();
        let merged = bands.iter().fold(self.problem.empty_summary(), |acc, b| {
            self.problem.merge_summary(&acc, &b.summary)
        });
        (merged, bands)
    }
}
