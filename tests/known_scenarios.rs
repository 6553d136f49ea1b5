use uniform_rect::{
    find_largest_uniform_rectangle, find_largest_uniform_rectangle_in_place,
    find_with_mode_token, EvaluationMode, MatrixError,
};

use EvaluationMode::{Ones, Zeroes};

/// `(row, column, width, height)` of the reported rectangle.
fn located(rows: &[Vec<i64>], mode: EvaluationMode) -> Option<(usize, usize, usize, usize)> {
    let scratch = find_largest_uniform_rectangle(rows, mode).unwrap();
    let mut copy = rows.to_vec();
    let in_place = find_largest_uniform_rectangle_in_place(&mut copy, mode).unwrap();
    assert_eq!(scratch, in_place);
    assert_eq!(copy, rows);
    scratch.map(|r| {
        assert_eq!(r.area, r.width * r.height);
        (r.row, r.column, r.width, r.height)
    })
}

#[test]
fn one_by_two() {
    assert_eq!(located(&[vec![1, 0]], Ones), Some((0, 0, 1, 1)));
}

#[test]
fn diagonal_picks_first_cell() {
    let rows = vec![vec![1, 0], vec![0, 1]];
    assert_eq!(located(&rows, Ones), Some((0, 0, 1, 1)));
}

#[test]
fn l_shape_both_modes() {
    let rows = vec![vec![1, 0], vec![1, 1]];
    assert_eq!(located(&rows, Ones), Some((0, 0, 1, 2)));
    assert_eq!(located(&rows, Zeroes), Some((0, 1, 1, 1)));
}

#[test]
fn three_by_three() {
    let rows = vec![vec![1, 1, 0], vec![1, 1, 1], vec![0, 1, 0]];
    assert_eq!(located(&rows, Ones), Some((0, 0, 2, 2)));
}

#[test]
fn five_by_four() {
    let rows = vec![
        vec![1, 0, 0, 1],
        vec![1, 1, 1, 0],
        vec![1, 1, 1, 1],
        vec![1, 1, 1, 0],
        vec![1, 1, 1, 1],
    ];
    assert_eq!(located(&rows, Ones), Some((1, 0, 3, 4)));
}

#[test]
fn tall_column_pair() {
    let rows = vec![
        vec![1, 0, 0, 1, 1, 1],
        vec![0, 0, 0, 1, 1, 0],
        vec![0, 0, 0, 1, 1, 0],
        vec![0, 0, 0, 1, 1, 0],
    ];
    assert_eq!(located(&rows, Ones), Some((0, 3, 2, 4)));
}

#[test]
fn centre_block_and_zero_strip() {
    let rows = vec![
        vec![1, 0, 0, 0, 0, 1],
        vec![0, 1, 1, 1, 0, 0],
        vec![0, 1, 1, 1, 0, 0],
        vec![0, 0, 0, 1, 0, 0],
    ];
    assert_eq!(located(&rows, Ones), Some((1, 1, 3, 2)));
    assert_eq!(located(&rows, Zeroes), Some((1, 4, 2, 3)));
}

#[test]
fn right_edge_block() {
    let rows = vec![
        vec![0, 1, 1, 1, 1, 0],
        vec![1, 0, 0, 0, 1, 1],
        vec![1, 0, 0, 0, 1, 1],
        vec![1, 1, 1, 0, 1, 1],
    ];
    assert_eq!(located(&rows, Ones), Some((1, 4, 2, 3)));
}

#[test]
fn missing_target_is_absent() {
    let ones = vec![vec![1, 1], vec![1, 1]];
    assert_eq!(located(&ones, Zeroes), None);
    assert_eq!(located(&ones, Ones), Some((0, 0, 2, 2)));
}

#[test]
fn value_out_of_range_is_rejected() {
    let rows = vec![vec![1, 0], vec![5, 1]];
    assert_eq!(
        find_largest_uniform_rectangle(&rows, Ones),
        Err(MatrixError::InvalidValue {
            row: 1,
            column: 0,
            value: 5
        })
    );
}

#[test]
fn ragged_rows_are_rejected() {
    let rows = vec![vec![1, 0, 1], vec![1, 1], vec![0, 1, 7]];
    assert_eq!(
        find_largest_uniform_rectangle(&rows, Zeroes),
        Err(MatrixError::InvalidShape {
            row: 1,
            expected: 3,
            found: 2
        })
    );
}

#[test]
fn mode_tokens_are_exact() {
    let rows = vec![vec![0, 1]];
    assert!(find_with_mode_token(&rows, "ZEROES").unwrap().is_some());
    for bad in ["ones", "ZEROS", "", " ONES"] {
        assert!(matches!(
            find_with_mode_token(&rows, bad),
            Err(MatrixError::InvalidMode { .. })
        ));
    }
}
