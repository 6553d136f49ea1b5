//! Largest rectangle in a histogram, via a monotonic stack.
//!
//! One left-to-right pass keeps a stack of column indices whose heights are
//! non-decreasing from bottom to top. When a lower bar arrives, every taller
//! bar on the stack has found its right limit; popping it yields the widest
//! rectangle that bar's height can span. A virtual zero-height column after
//! the last one flushes whatever is left.
//!
//! The best rectangle of the row is only replaced by a strictly larger area,
//! so the first maximal rectangle in pop order is the one reported.

use crate::matrix::Cell;
use crate::rect::RectangleCandidate;

/// A histogram bar height.
///
/// Implemented for the scratch frontier (`usize`) and for rows rewritten in
/// place (`Cell`), whose values are non-negative once validated.
pub trait Height: Copy {
    fn height(self) -> usize;
}

impl Height for usize {
    #[inline]
    fn height(self) -> usize {
        self
    }
}

impl Height for Cell {
    #[inline]
    fn height(self) -> usize {
        usize::try_from(self).unwrap_or(0)
    }
}

/// Reusable scanner; keeps its stack allocation between rows.
#[derive(Debug, Default, Clone)]
pub struct HistogramScanner {
    stack: Vec<usize>,
}

impl HistogramScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scanner pre-sized for histograms of `columns` bars.
    pub fn with_capacity(columns: usize) -> Self {
        Self {
            stack: Vec::with_capacity(columns),
        }
    }

    /// Best rectangle on `histogram`, tagged with matrix row `row`.
    ///
    /// Returns `None` when every bar has height zero.
    pub fn scan<H: Height>(&mut self, row: usize, histogram: &[H]) -> Option<RectangleCandidate> {
        let n = histogram.len();
        let stack = &mut self.stack;
        stack.clear();

        let mut best: Option<RectangleCandidate> = None;
        for i in 0..=n {
            let flushing = i == n;
            let current = if flushing { 0 } else { histogram[i].height() };

            while let Some(&top) = stack.last() {
                let top_height = histogram[top].height();
                if !flushing && current >= top_height {
                    break;
                }
                stack.pop();
                let width = match stack.last() {
                    Some(&left) => i - left - 1,
                    None => i,
                };
                let area = top_height * width;
                if area > best.map_or(0, |b| b.area) {
                    best = Some(RectangleCandidate {
                        area,
                        row,
                        column_end: i - 1,
                        width,
                    });
                }
            }

            if !flushing {
                stack.push(i);
            }
        }
        best
    }
}

/// One-shot convenience over [`HistogramScanner::scan`].
pub fn largest_rectangle<H: Height>(row: usize, histogram: &[H]) -> Option<RectangleCandidate> {
    HistogramScanner::with_capacity(histogram.len()).scan(row, histogram)
}
