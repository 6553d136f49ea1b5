use proptest::prelude::*;
use uniform_rect::histogram::{accumulate_in_place, restore_in_place, HistogramRows};
use uniform_rect::mode::NormalizedRows;
use uniform_rect::{
    find_largest_uniform_rectangle_in_place, EvaluationMode, MatrixError, Search,
};

fn binary_matrix() -> impl Strategy<Value = Vec<Vec<i64>>> {
    (1usize..10, 0usize..10).prop_flat_map(|(r, c)| {
        prop::collection::vec(prop::collection::vec(0i64..=1, c), r)
    })
}

proptest! {
    #[test]
    fn complement_is_an_involution(rows in binary_matrix()) {
        let mut scratch = rows.clone();
        EvaluationMode::Zeroes.normalize_in_place(&mut scratch);
        if !rows.is_empty() && !rows[0].is_empty() {
            prop_assert_ne!(&scratch, &rows);
        }
        EvaluationMode::Zeroes.denormalize_in_place(&mut scratch);
        prop_assert_eq!(scratch, rows);
    }

    #[test]
    fn ones_mode_leaves_rows_alone(rows in binary_matrix()) {
        let mut scratch = rows.clone();
        EvaluationMode::Ones.normalize_in_place(&mut scratch);
        prop_assert_eq!(scratch, rows);
    }

    #[test]
    fn forward_then_reverse_is_identity(rows in binary_matrix()) {
        let mut scratch = rows.clone();
        accumulate_in_place(&mut scratch);
        for (i, row) in scratch.iter().enumerate() {
            prop_assert!(row.iter().all(|&h| h >= 0 && h as usize <= i + 1));
        }
        restore_in_place(&mut scratch);
        prop_assert_eq!(scratch, rows);
    }

    #[test]
    fn in_place_search_restores_rows(rows in binary_matrix()) {
        for mode in EvaluationMode::ALL {
            let mut scratch = rows.clone();
            let in_place = find_largest_uniform_rectangle_in_place(&mut scratch, mode).unwrap();
            prop_assert_eq!(&scratch, &rows);
            prop_assert_eq!(in_place, Search::new(mode).run(&rows).unwrap());
        }
    }
}

#[test]
fn rowless_input_is_rejected_untouched() {
    let mut rows: Vec<Vec<i64>> = Vec::new();
    assert_eq!(
        find_largest_uniform_rectangle_in_place(&mut rows, EvaluationMode::Zeroes),
        Err(MatrixError::no_rows())
    );
    assert!(rows.is_empty());
}

#[test]
fn nested_guards_restore_on_unwind() {
    let rows = vec![vec![0, 1, 1], vec![0, 0, 1], vec![1, 0, 0]];
    let mut scratch = rows.clone();
    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let mut normalized = NormalizedRows::new(&mut scratch, EvaluationMode::Zeroes);
        let hist = HistogramRows::new(&mut normalized[..]);
        assert_eq!(hist[1], vec![2, 1, 0]);
        panic!("scan aborted");
    }));
    assert!(outcome.is_err());
    assert_eq!(scratch, rows);
}

#[test]
fn arrays_work_as_rows() {
    let original: [[i64; 3]; 2] = [[1, 1, 0], [1, 1, 0]];
    let mut rows = original;
    let r = find_largest_uniform_rectangle_in_place(&mut rows, EvaluationMode::Ones)
        .unwrap()
        .unwrap();
    assert_eq!(rows, original);
    assert_eq!((r.row, r.column, r.width, r.height), (0, 0, 2, 2));
}
