//! Evaluation mode and the complementing normaliser.
//!
//! The scanner only ever looks for runs of 1. Searching for 0-blocks is done
//! by complementing every cell first (`v -> 1 - v`); the complement is its own
//! inverse, so the same operation restores the input afterwards.

use core::fmt;
use core::ops::{Deref, DerefMut};
use core::str::FromStr;

use crate::error::MatrixError;
use crate::matrix::Cell;

/// Which cell value the search targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum EvaluationMode {
    /// Largest block of 1s.
    Ones,
    /// Largest block of 0s.
    Zeroes,
}

impl EvaluationMode {
    /// Every recognised mode, in token order.
    pub const ALL: [EvaluationMode; 2] = [EvaluationMode::Ones, EvaluationMode::Zeroes];

    /// Wire token for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            EvaluationMode::Ones => "ONES",
            EvaluationMode::Zeroes => "ZEROES",
        }
    }

    /// Cell value the search is looking for.
    #[inline]
    pub fn target(self) -> u8 {
        match self {
            EvaluationMode::Ones => 1,
            EvaluationMode::Zeroes => 0,
        }
    }

    /// Map a binary cell into "is part of a target run" space.
    #[inline]
    pub fn normalize_cell(self, v: u8) -> u8 {
        match self {
            EvaluationMode::Ones => v,
            EvaluationMode::Zeroes => 1 - v,
        }
    }

    /// Complement every cell in place when targeting 0s; no-op otherwise.
    ///
    /// Expects binary cells. Applying it twice restores the input.
    pub fn normalize_in_place<R: AsMut<[Cell]>>(self, rows: &mut [R]) {
        if self == EvaluationMode::Ones {
            return;
        }
        for row in rows.iter_mut() {
            for v in row.as_mut() {
                *v = (*v - 1).abs();
            }
        }
    }

    /// Undo [`normalize_in_place`](Self::normalize_in_place).
    #[inline]
    pub fn denormalize_in_place<R: AsMut<[Cell]>>(self, rows: &mut [R]) {
        self.normalize_in_place(rows);
    }
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvaluationMode {
    type Err = MatrixError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        EvaluationMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == token)
            .ok_or_else(|| MatrixError::invalid_mode(token))
    }
}

/// Rows normalised for a mode for as long as the guard lives.
///
/// Dropping the guard applies the complement again, so the caller's rows are
/// restored on every exit path, unwinding included.
pub struct NormalizedRows<'a, R: AsMut<[Cell]>> {
    rows: &'a mut [R],
    mode: EvaluationMode,
}

impl<'a, R: AsMut<[Cell]>> NormalizedRows<'a, R> {
    pub fn new(rows: &'a mut [R], mode: EvaluationMode) -> Self {
        mode.normalize_in_place(rows);
        Self { rows, mode }
    }

    pub fn mode(&self) -> EvaluationMode {
        self.mode
    }
}

impl<R: AsMut<[Cell]>> Deref for NormalizedRows<'_, R> {
    type Target = [R];

    fn deref(&self) -> &Self::Target {
        &*self.rows
    }
}

impl<R: AsMut<[Cell]>> DerefMut for NormalizedRows<'_, R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.rows
    }
}

impl<R: AsMut<[Cell]>> Drop for NormalizedRows<'_, R> {
    fn drop(&mut self) {
        self.mode.denormalize_in_place(&mut *self.rows);
    }
}
