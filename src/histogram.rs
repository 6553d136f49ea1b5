//! Row histogram engine.
//!
//! Turns the 2-D search into a sequence of 1-D ones: after row `i` has been
//! folded in, `heights[j]` is the length of the unbroken run of 1s ending at
//! row `i` in column `j`.
//!
//! Two forms are provided:
//! - [`accumulate_row`] advances a scratch frontier owned by the caller, one
//!   row at a time. This is what the layered engine uses.
//! - [`accumulate_in_place`] / [`restore_in_place`] overwrite the rows
//!   themselves, top to bottom and then bottom to top.
//!   [`HistogramRows`] ties the reverse pass to a guard's `Drop`.

use core::ops::{Deref, DerefMut};

use crate::matrix::Cell;
use crate::mode::EvaluationMode;

/// Fold one binary row into the running column heights.
///
/// Cells are normalised for `mode` on the fly, so a run continues exactly
/// where the cell holds the target value.
///
/// # Panics
/// Panics if `heights` and `row` differ in length.
#[inline]
pub fn accumulate_row(heights: &mut [usize], row: &[u8], mode: EvaluationMode) {
    assert_eq!(heights.len(), row.len(), "row width mismatch");
    for (h, &cell) in heights.iter_mut().zip(row) {
        *h = if mode.normalize_cell(cell) == 1 {
            *h + 1
        } else {
            0
        };
    }
}

/// Forward pass: overwrite each cell with the run length ending at it.
///
/// Row 0 is left as is, since a run of length one equals its own cell value.
pub fn accumulate_in_place<R: AsMut<[Cell]>>(rows: &mut [R]) {
    for i in 1..rows.len() {
        let (above, below) = rows.split_at_mut(i);
        let prev = above[i - 1].as_mut();
        for (cell, &up) in below[0].as_mut().iter_mut().zip(prev.iter()) {
            if *cell == 1 {
                *cell += up;
            }
        }
    }
}

/// Reverse pass: undo [`accumulate_in_place`], bottom row first.
pub fn restore_in_place<R: AsMut<[Cell]>>(rows: &mut [R]) {
    for i in (1..rows.len()).rev() {
        let (above, below) = rows.split_at_mut(i);
        let prev = above[i - 1].as_mut();
        for (cell, &up) in below[0].as_mut().iter_mut().zip(prev.iter()) {
            if *cell != 0 {
                *cell -= up;
            }
        }
    }
}

/// Rows holding their histogram form for as long as the guard lives.
///
/// Construction runs the forward pass; dropping runs the reverse pass, so
/// the rows go back to binary form on every exit path.
pub struct HistogramRows<'a, R: AsMut<[Cell]>> {
    rows: &'a mut [R],
}

impl<'a, R: AsMut<[Cell]>> HistogramRows<'a, R> {
    pub fn new(rows: &'a mut [R]) -> Self {
        accumulate_in_place(rows);
        Self { rows }
    }
}

impl<R: AsMut<[Cell]>> Deref for HistogramRows<'_, R> {
    type Target = [R];

    fn deref(&self) -> &Self::Target {
        &*self.rows
    }
}

impl<R: AsMut<[Cell]>> DerefMut for HistogramRows<'_, R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.rows
    }
}

impl<R: AsMut<[Cell]>> Drop for HistogramRows<'_, R> {
    fn drop(&mut self) {
        restore_in_place(&mut *self.rows);
    }
}
