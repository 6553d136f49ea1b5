use proptest::prelude::*;
use uniform_rect::{
    find_largest_uniform_rectangle, EvaluationMode, Search, UniformRectangle,
};

fn binary_matrix() -> impl Strategy<Value = Vec<Vec<i64>>> {
    (1usize..8, 1usize..8).prop_flat_map(|(r, c)| {
        prop::collection::vec(prop::collection::vec(0i64..=1, c), r)
    })
}

fn mode() -> impl Strategy<Value = EvaluationMode> {
    prop_oneof![Just(EvaluationMode::Ones), Just(EvaluationMode::Zeroes)]
}

fn uniform(rows: &[Vec<i64>], target: i64, r0: usize, c0: usize, h: usize, w: usize) -> bool {
    rows[r0..r0 + h]
        .iter()
        .all(|row| row[c0..c0 + w].iter().all(|&v| v == target))
}

/// Largest uniform area by trying every rectangle.
fn brute_force_area(rows: &[Vec<i64>], target: i64) -> usize {
    let (n, m) = (rows.len(), rows[0].len());
    let mut best = 0;
    for r0 in 0..n {
        for c0 in 0..m {
            for h in 1..=n - r0 {
                for w in 1..=m - c0 {
                    if h * w > best && uniform(rows, target, r0, c0, h, w) {
                        best = h * w;
                    }
                }
            }
        }
    }
    best
}

/// Lowest bottom row of any uniform rectangle with area `area`.
fn earliest_bottom_row(rows: &[Vec<i64>], target: i64, area: usize) -> Option<usize> {
    let (n, m) = (rows.len(), rows[0].len());
    (0..n).find(|&bottom| {
        (0..=bottom).any(|top| {
            let h = bottom - top + 1;
            area % h == 0
                && area / h <= m
                && (0..=m - area / h).any(|c0| uniform(rows, target, top, c0, h, area / h))
        })
    })
}

fn target(mode: EvaluationMode) -> i64 {
    match mode {
        EvaluationMode::Ones => 1,
        EvaluationMode::Zeroes => 0,
    }
}

fn check_inside(rows: &[Vec<i64>], mode: EvaluationMode, r: &UniformRectangle) -> bool {
    r.row + r.height <= rows.len()
        && r.column + r.width <= rows[0].len()
        && r.width >= 1
        && r.height >= 1
        && uniform(rows, target(mode), r.row, r.column, r.height, r.width)
}

proptest! {
    #[test]
    fn result_is_uniform_and_maximal(rows in binary_matrix(), mode in mode()) {
        let found = find_largest_uniform_rectangle(&rows, mode).unwrap();
        let best = brute_force_area(&rows, target(mode));
        match found {
            Some(r) => {
                prop_assert!(check_inside(&rows, mode, &r));
                prop_assert_eq!(r.area, r.width * r.height);
                prop_assert_eq!(r.area, best);
            }
            None => prop_assert_eq!(best, 0),
        }
    }

    #[test]
    fn earliest_bottom_row_wins_ties(rows in binary_matrix(), mode in mode()) {
        if let Some(r) = find_largest_uniform_rectangle(&rows, mode).unwrap() {
            let bottom = r.row + r.height - 1;
            prop_assert_eq!(Some(bottom), earliest_bottom_row(&rows, target(mode), r.area));
        }
    }

    #[test]
    fn absent_iff_no_target_cell(rows in binary_matrix(), mode in mode()) {
        let has_target = rows.iter().flatten().any(|&v| v == target(mode));
        let found = find_largest_uniform_rectangle(&rows, mode).unwrap();
        prop_assert_eq!(found.is_some(), has_target);
    }

    #[test]
    fn repeated_searches_agree(rows in binary_matrix(), mode in mode()) {
        let search = Search::new(mode);
        let first = search.run(&rows).unwrap();
        let second = search.run(&rows).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn modes_are_complements(rows in binary_matrix()) {
        let flipped: Vec<Vec<i64>> = rows
            .iter()
            .map(|row| row.iter().map(|&v| 1 - v).collect())
            .collect();
        prop_assert_eq!(
            find_largest_uniform_rectangle(&rows, EvaluationMode::Ones).unwrap(),
            find_largest_uniform_rectangle(&flipped, EvaluationMode::Zeroes).unwrap()
        );
    }
}
