//! Largest uniform rectangle in a binary matrix.
//!
//! Given a rectangular matrix of 0s and 1s and a target value, this crate
//! finds the axis-aligned sub-block of maximal area whose cells all hold the
//! target, and reports its top-left corner, width, height and area.
//!
//! ## Core idea
//! 1. Normalise for the mode, so the search always looks for runs of 1.
//! 2. Sweep the rows top to bottom, keeping per column the length of the run
//!    of 1s ending at the current row. Each row becomes a histogram.
//! 3. Find the largest rectangle under each histogram with a monotonic
//!    stack, and keep the first strictly-largest one across rows.
//!
//! Total work is O(rows × columns), with one row of histogram live at a time.
//!
//! ## Quick start
//! ```
//! use uniform_rect::{find_largest_uniform_rectangle, EvaluationMode};
//!
//! let rows = vec![vec![1, 1, 0], vec![1, 1, 1], vec![0, 1, 0]];
//! let found = find_largest_uniform_rectangle(&rows, EvaluationMode::Ones).unwrap();
//! let r = found.expect("matrix has ones");
//! assert_eq!((r.row, r.column, r.width, r.height, r.area), (0, 0, 2, 2, 4));
//!
//! let none = find_largest_uniform_rectangle(&[vec![0, 0]], EvaluationMode::Ones).unwrap();
//! assert!(none.is_none());
//! ```
//!
//! ## Layout
//! - [`matrix`] validates input; [`mode`] normalises it.
//! - [`histogram`] and [`scanner`] are the two halves of the row sweep.
//! - [`engine`] drives any [`LayeredScan`] band by band;
//!   [`problems::uniform_block`] is the rectangle search expressed that way.
//! - [`search`] ties it together, with an in-place variant that rewrites and
//!   then restores the caller's rows.
//! - `request` (feature `serde`) is the JSON contract of a serving layer.

pub mod blocks;
pub mod builder;
pub mod engine;
pub mod error;
pub mod histogram;
pub mod matrix;
pub mod mode;
pub mod problems;
pub mod rect;
#[cfg(feature = "serde")]
pub mod request;
pub mod scanner;
pub mod search;
pub mod traits;

pub use crate::builder::ScanEngineBuilder;
pub use crate::engine::ScanEngine;
pub use crate::error::{MatrixError, Result};
pub use crate::matrix::{BinaryMatrix, Cell};
pub use crate::mode::EvaluationMode;
pub use crate::rect::{BestCandidate, RectangleCandidate, UniformRectangle};
pub use crate::search::{
    find_largest_uniform_rectangle, find_largest_uniform_rectangle_in_place,
    find_with_mode_token, Search,
};
pub use crate::traits::LayeredScan;
