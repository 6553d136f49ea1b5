//! Band-level summaries produced by the engine.
//!
//! A band is a contiguous run of layers `[start, end)`; its summary is
//! whatever [`LayeredScan::Summary`](crate::traits::LayeredScan::Summary)
//! the problem reduces those layers to.

use core::ops::Range;

/// Summary for the band of layers `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandSummary<S> {
    /// First layer of the band.
    pub start: usize,
    /// One past the last layer.
    pub end: usize,
    pub summary: S,
}

impl<S> BandSummary<S> {
    /// Number of layers covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Layer indices covered by the band.
    #[inline]
    pub fn layers(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether `layer` falls inside the band.
    #[inline]
    pub fn covers(&self, layer: usize) -> bool {
        self.layers().contains(&layer)
    }
}
