//! Largest uniform block as a layered scan.
//!
//! Layers are matrix rows. The frontier at layer `i` is the column-height
//! histogram after rows `0..i` have been folded in, plus a reusable
//! monotonic stack. A band of rows summarises to the best candidate any of
//! its rows produced.
//!
//! The matrix itself is never written to: normalisation for the mode is
//! applied cell by cell while the histogram advances.

use crate::histogram::accumulate_row;
use crate::matrix::BinaryMatrix;
use crate::mode::EvaluationMode;
use crate::rect::BestCandidate;
use crate::scanner::HistogramScanner;
use crate::traits::LayeredScan;

#[derive(Clone, Copy)]
pub struct UniformBlockProblem<'a> {
    pub matrix: &'a BinaryMatrix,
    pub mode: EvaluationMode,
}

/// Column heights for the rows consumed so far.
#[derive(Clone, Debug)]
pub struct HistogramFrontier {
    pub heights: Vec<usize>,
    scanner: HistogramScanner,
}

impl HistogramFrontier {
    fn new(columns: usize) -> Self {
        Self {
            heights: vec![0; columns],
            scanner: HistogramScanner::with_capacity(columns),
        }
    }
}

impl<'a> UniformBlockProblem<'a> {
    pub fn new(matrix: &'a BinaryMatrix, mode: EvaluationMode) -> Self {
        Self { matrix, mode }
    }
}

impl LayeredScan for UniformBlockProblem<'_> {
    type Frontier = HistogramFrontier;
    type Summary = BestCandidate;

    fn num_layers(&self) -> usize {
        self.matrix.rows()
    }

    fn init_frontier(&self) -> Self::Frontier {
        HistogramFrontier::new(self.matrix.columns())
    }

    fn forward_step(&self, layer: usize, frontier: &mut Self::Frontier) {
        accumulate_row(&mut frontier.heights, self.matrix.row(layer), self.mode);
    }

    fn summarize_block(&self, a: usize, b: usize, frontier: &mut Self::Frontier) -> Self::Summary {
        let mut best = BestCandidate::NONE;
        for layer in a..b {
            self.forward_step(layer, frontier);
            if let Some(candidate) = frontier.scanner.scan(layer, &frontier.heights) {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    row = layer,
                    area = candidate.area,
                    width = candidate.width,
                    column_end = candidate.column_end,
                    "row candidate"
                );
                best.offer(candidate);
            }
        }
        best
    }

    fn empty_summary(&self) -> Self::Summary {
        BestCandidate::NONE
    }

    fn merge_summary(&self, earlier: &Self::Summary, later: &Self::Summary) -> Self::Summary {
        earlier.merge(*later)
    }
}
