//! Core trait for scans that walk a matrix one layer (row) at a time.
//!
//! To plug a row-wise search into [`ScanEngine`](crate::engine::ScanEngine),
//! implement [`LayeredScan`] for a struct that captures the instance.
//!
//! The contract:
//! - Layers are `0..T`, consumed strictly in order.
//! - A frontier holds everything carried from one layer to the next (for
//!   the rectangle search, the column-height histogram). It is advanced in
//!   place, so only one frontier is ever live.
//! - A band of layers `[a, b)` reduces to a summary; summaries of adjacent
//!   bands compose with an associative merge.

/// A layered scan instance.
///
/// Semantics:
/// - `init_frontier()` is the state before layer 0.
/// - `forward_step(i, f)` folds layer `i` into `f`.
/// - `summarize_block(a, b, f)` advances `f` across `[a, b)` and reduces
///   the band to a summary.
/// - `merge_summary(earlier, later)` composes adjacent bands, with
///   `empty_summary()` as its identity.
pub trait LayeredScan {
    /// State carried between consecutive layers.
    type Frontier;

    /// Reduction of a band of layers.
    ///
    /// Should be small (a candidate, a count) and support an associative
    /// merge via [`merge_summary`](Self::merge_summary).
    type Summary: Clone;

    /// Number of layers `T`.
    fn num_layers(&self) -> usize;

    /// Frontier before any layer has been consumed.
    fn init_frontier(&self) -> Self::Frontier;

    /// Fold layer `layer` into `frontier`.
    ///
    /// Must only depend on the incoming frontier and fixed instance data.
    fn forward_step(&self, layer: usize, frontier: &mut Self::Frontier);

    /// Advance `frontier` over layers `[a, b)` and summarise them.
    ///
    /// On return `frontier` is the frontier after layer `b - 1`.
    fn summarize_block(&self, a: usize, b: usize, frontier: &mut Self::Frontier) -> Self::Summary;

    /// Summary of an empty band; identity of [`merge_summary`](Self::merge_summary).
    fn empty_summary(&self) -> Self::Summary;

    /// Given Σ[a,b) and Σ[b,c), return Σ[a,c).
    ///
    /// Must be associative. Order matters: `earlier` covers the lower layers.
    fn merge_summary(&self, earlier: &Self::Summary, later: &Self::Summary) -> Self::Summary;
}
