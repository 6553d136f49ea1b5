//! Engine configuration.
//!
//! [`ScanEngineBuilder`] collects the optional band height a caller asked
//! for and falls back to [`default_band_height`] for the problem's row count.

use crate::traits::LayeredScan;
use crate::ScanEngine;

/// Band height used when none is configured: `ceil(sqrt(T))`, at least 1.
///
/// Keeps the number of band summaries and the length of each band balanced.
#[inline]
pub fn default_band_height(num_layers: usize) -> usize {
    if num_layers <= 1 {
        1
    } else {
        (num_layers as f64).sqrt().ceil() as usize
    }
}

pub struct ScanEngineBuilder<P: LayeredScan> {
    problem: P,
    band_height: Option<usize>,
}

impl<P: LayeredScan> ScanEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            band_height: None,
        }
    }

    /// Rows per band; `None` keeps whatever was configured before.
    pub fn band_height(mut self, band_height: Option<usize>) -> Self {
        self.band_height = band_height.or(self.band_height);
        self
    }

    /// # Panics
    /// Panics if a band height of zero was configured.
    pub fn build(self) -> ScanEngine<P> {
        let b = self
            .band_height
            .unwrap_or_else(|| default_band_height(self.problem.num_layers()));
        ScanEngine::with_band_height(self.problem, b)
    }
}
