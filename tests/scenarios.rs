//! End-to-end lookups and removals through the typed table.

use tuple_index::{Constraint, IndexedTable, RowIndex, TypedTable, Value};

fn create_grid() -> TypedTable<(i64, i64, String)> {
    let mut table = TypedTable::new();
    for i in 0..10 {
        for j in 0..10 {
            table.insert((i, j, format!("{i}{j}"))).unwrap();
        }
    }
    table
}

#[test]
fn test_grid_lookups() {
    let mut table = create_grid();

    let hits = table.find_by_column::<0>(3).unwrap();
    assert_eq!(hits.len(), 10);
    assert!(hits.iter().all(|(a, _, _)| *a == 3));

    let hits = table.find_by_columns::<0, 1>(3, 4).unwrap();
    assert_eq!(hits, vec![(3, 4, "34".to_string())]);

    for i in 0..10 {
        let hits = table.find_by_column::<1>(i).unwrap();
        assert_eq!(hits.len(), 10);
        assert!(hits.iter().all(|(_, b, _)| *b == i));
    }

    for i in 0..10 {
        for j in 0..10 {
            let hits = table.find_by_columns::<0, 1>(i, j).unwrap();
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].2, format!("{i}{j}"));
        }
    }
}

#[test]
fn test_absent_value_with_declared_composite_index() {
    let mut table: TypedTable<(i64, Option<i64>, String)> = TypedTable::new();
    table.add_index(&[true, true, false]).unwrap();

    table.insert((1, None, "hello world".to_string())).unwrap();

    let hits = table.find_by_columns::<0, 1>(1, None).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].2, "hello world");
}

#[test]
fn test_absent_value_matches_both_encodings() {
    let mut table: IndexedTable<Value> = IndexedTable::new(3);
    table
        .insert(vec![Some(Value::Int(1)), None, Some(Value::from("x"))])
        .unwrap();
    table
        .insert(vec![Some(Value::Int(1)), Some(Value::Int(2)), Some(Value::from("y"))])
        .unwrap();

    let unconstrained = table
        .find(vec![Constraint::Eq(Value::Int(1)), Constraint::Any, Constraint::Any])
        .unwrap();
    let explicit_absent = table
        .find(vec![Constraint::Eq(Value::Int(1)), None::<Value>.into(), Constraint::Any])
        .unwrap();

    assert_eq!(unconstrained.len(), 2);
    assert_eq!(explicit_absent.len(), 2);
}

#[test]
fn test_grid_remove_all_matching() {
    let mut table = create_grid();

    // materialize the indexes the checks below use, so removal must keep
    // them in sync rather than rebuild them
    table.find_by_column::<1>(0).unwrap();
    table.find_by_columns::<0, 1>(0, 0).unwrap();

    let removed = table.remove_all_matching_column::<0>(2).unwrap();
    assert_eq!(removed, 10);
    assert_eq!(table.len(), 90);

    assert!(table.find_by_column::<0>(2).unwrap().is_empty());
    for j in 0..10 {
        let hits = table.find_by_column::<1>(j).unwrap();
        assert_eq!(hits.len(), 9);
        assert!(hits.iter().all(|(a, b, _)| *a != 2 && *b == j));
        assert!(table.find_by_columns::<0, 1>(2, j).unwrap().is_empty());
    }

    for i in (0..10).filter(|&i| i != 2) {
        assert_eq!(table.find_by_column::<0>(i).unwrap().len(), 10);
        for j in 0..10 {
            assert_eq!(table.find_by_columns::<0, 1>(i, j).unwrap().len(), 1);
        }
    }

    for index in table.inner().indexes() {
        assert_eq!(index.len(), 90, "index {:?}", index.columns());
    }
}

#[test]
fn test_lazy_and_declared_indexes_agree() {
    let mut lazy = create_grid();

    let mut declared: TypedTable<(i64, i64, String)> = TypedTable::new();
    declared.add_index(&[false, true, false]).unwrap();
    declared.add_index(&[true, true, false]).unwrap();
    for i in 0..10 {
        for j in 0..10 {
            declared.insert((i, j, format!("{i}{j}"))).unwrap();
        }
    }

    for v in 0..10 {
        let mut a = lazy.find_by_column::<1>(v).unwrap();
        let mut b = declared.find_by_column::<1>(v).unwrap();
        a.sort();
        b.sort();
        assert_eq!(a, b);

        assert_eq!(
            lazy.find_by_columns::<0, 1>(v, 9 - v).unwrap(),
            declared.find_by_columns::<0, 1>(v, 9 - v).unwrap()
        );
    }
}
