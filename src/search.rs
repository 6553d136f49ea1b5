//! Entry points: validate, normalise, scan, reduce, reconstruct.
//!
//! Two execution paths share the validator, the scanner and the fold:
//! - [`Search::run`] copies the rows into a [`BinaryMatrix`] and drives
//!   [`UniformBlockProblem`] through the [`ScanEngine`](crate::ScanEngine) with a private
//!   histogram frontier. The caller's rows are only read.
//! - [`Search::run_in_place`] complements and accumulates the caller's rows
//!   directly, then restores them through drop guards.
//!
//! Both report the same rectangle for the same input.

use crate::builder::ScanEngineBuilder;
use crate::error::{MatrixError, Result};
use crate::histogram::HistogramRows;
use crate::matrix::{validate, BinaryMatrix, Cell};
use crate::mode::{EvaluationMode, NormalizedRows};
use crate::problems::uniform_block::UniformBlockProblem;
use crate::rect::{BestCandidate, UniformRectangle};
use crate::scanner::HistogramScanner;

/// Largest rectangle of `mode`-valued cells, or `None` when no such cell
/// exists.
///
/// ```
/// use uniform_rect::{find_largest_uniform_rectangle, EvaluationMode};
///
/// let rows = vec![vec![1, 0], vec![1, 1]];
/// let r = find_largest_uniform_rectangle(&rows, EvaluationMode::Ones).unwrap().unwrap();
/// assert_eq!((r.row, r.column, r.width, r.height, r.area), (0, 0, 1, 2, 2));
/// ```
pub fn find_largest_uniform_rectangle<R: AsRef<[Cell]>>(
    rows: &[R],
    mode: EvaluationMode,
) -> Result<Option<UniformRectangle>> {
    Search::new(mode).run(rows)
}

/// Same result as [`find_largest_uniform_rectangle`], computed by rewriting
/// `rows` in place. The rows hold their original values again on return,
/// including when the scan unwinds.
pub fn find_largest_uniform_rectangle_in_place<R>(
    rows: &mut [R],
    mode: EvaluationMode,
) -> Result<Option<UniformRectangle>>
where
    R: AsRef<[Cell]> + AsMut<[Cell]>,
{
    Search::new(mode).run_in_place(rows)
}

/// Parse `token` as an [`EvaluationMode`] first, then search.
///
/// Unknown tokens are rejected with
/// [`MatrixError::InvalidMode`](crate::MatrixError::InvalidMode) before the
/// matrix is looked at.
pub fn find_with_mode_token<R: AsRef<[Cell]>>(
    rows: &[R],
    token: &str,
) -> Result<Option<UniformRectangle>> {
    let mode = token.parse::<EvaluationMode>()?;
    find_largest_uniform_rectangle(rows, mode)
}

/// A configured search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Search {
    mode: EvaluationMode,
    band_height: Option<usize>,
}

impl Search {
    pub fn new(mode: EvaluationMode) -> Self {
        Self {
            mode,
            band_height: None,
        }
    }

    /// Rows per band in the engine. `None` picks `ceil(sqrt(rows))`.
    ///
    /// Only affects how the scan is chunked, never the result.
    ///
    /// # Panics
    /// [`run`](Self::run) panics if this is `Some(0)`.
    pub fn with_band_height(mut self, band_height: Option<usize>) -> Self {
        self.band_height = band_height;
        self
    }

    pub fn mode(&self) -> EvaluationMode {
        self.mode
    }

    /// Scratch-frontier search; `rows` is only read.
    pub fn run<R: AsRef<[Cell]>>(&self, rows: &[R]) -> Result<Option<UniformRectangle>> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("uniform_rect_search", mode = %self.mode, rows = rows.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let matrix = BinaryMatrix::from_rows(rows).inspect_err(trace_rejection)?;
        let engine = ScanEngineBuilder::new(UniformBlockProblem::new(&matrix, self.mode))
            .band_height(self.band_height)
            .build();
        let best = engine.run();
        Ok(report(&best))
    }

    /// In-place search over the caller's rows.
    ///
    /// The band height does not apply here: every row is scanned directly
    /// while the rows hold their histogram form.
    pub fn run_in_place<R>(&self, rows: &mut [R]) -> Result<Option<UniformRectangle>>
    where
        R: AsRef<[Cell]> + AsMut<[Cell]>,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("uniform_rect_search_in_place", mode = %self.mode, rows = rows.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (_, columns) = validate(&*rows).inspect_err(trace_rejection)?;

        // Drop order restores the histogram first, then the complement.
        let mut normalized = NormalizedRows::new(rows, self.mode);
        let histogram = HistogramRows::new(&mut normalized[..]);

        let mut scanner = HistogramScanner::with_capacity(columns);
        let mut best = BestCandidate::NONE;
        for (i, row) in histogram.iter().enumerate() {
            if let Some(candidate) = scanner.scan(i, row.as_ref()) {
                best.offer(candidate);
            }
        }
        Ok(report(&best))
    }
}

fn report(best: &BestCandidate) -> Option<UniformRectangle> {
    let rect = best.to_rectangle();
    #[cfg(feature = "tracing")]
    trace_outcome(rect.as_ref());
    rect
}

fn trace_rejection(_err: &MatrixError) {
    #[cfg(feature = "tracing")]
    tracing::debug!(error = %_err, "rejected matrix");
}

#[cfg(feature = "tracing")]
fn trace_outcome(rect: Option<&UniformRectangle>) {
    match rect {
        Some(r) => tracing::debug!(
            row = r.row,
            column = r.column,
            width = r.width,
            height = r.height,
            area = r.area,
            "largest uniform rectangle"
        ),
        None => tracing::debug!("no target cell present"),
    }
}
