//! Example: largest all-ones and all-zeroes blocks of a small grid.
//!
//! Run with:
//! `cargo run --example uniform_block`

use uniform_rect::{find_largest_uniform_rectangle, EvaluationMode, UniformRectangle};

fn main() {
    let grid = vec![
        vec![1, 0, 0, 0, 0, 1],
        vec![0, 1, 1, 1, 0, 0],
        vec![0, 1, 1, 1, 0, 0],
        vec![0, 0, 0, 1, 0, 0],
    ];

    for mode in EvaluationMode::ALL {
        match find_largest_uniform_rectangle(&grid, mode) {
            Ok(Some(rect)) => {
                println!(
                    "{mode}: {}x{} at (row {}, column {}), area {}",
                    rect.width, rect.height, rect.row, rect.column, rect.area
                );
                print!("{}", render(&grid, &rect));
            }
            Ok(None) => println!("{mode}: no uniform rectangle"),
            Err(err) => println!("{mode}: {err}"),
        }
    }
}

/// Draw the grid with the winning block marked by `#`.
fn render(grid: &[Vec<i64>], rect: &UniformRectangle) -> String {
    let mut out = String::new();
    for (i, row) in grid.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            if rect.contains(i, j) {
                out.push('#');
            } else {
                out.push(if v == 1 { '1' } else { '.' });
            }
        }
        out.push('\n');
    }
    out
}
