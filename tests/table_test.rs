use numcsv::*;

#[test]
fn test_from_rows_rejects_ragged_rows() {
    let err = Table::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0]]).unwrap_err();
    assert!(matches!(
        err,
        NumCsvError::FieldCount { line: 3, expected: 2, found: 1 }
    ));
}

#[test]
fn test_accessors() {
    let mut t = Table::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    assert_eq!(t.dims(), (2, 3));
    assert_eq!(t.get(1, 2), 6.0);
    assert_eq!(t[(0, 1)], 2.0);
    assert_eq!(t.row(1), &[4.0, 5.0, 6.0]);
    assert_eq!(t.column(0), vec![1.0, 4.0]);
    assert_eq!(t.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    t.set(0, 0, -1.0);
    assert_eq!(t.to_rows()[0], vec![-1.0, 2.0, 3.0]);
    assert_eq!(t.into_vec().len(), 6);
}

#[test]
fn test_empty_tables() {
    let t = Table::from_rows(vec![]).unwrap();
    assert_eq!(t.dims(), (0, 0));
    assert!(t.is_empty());
    assert_eq!(t, Table::default());

    let z = Table::zeros(3, 0);
    assert_eq!(z.rows_iter().count(), 3);
    assert!(z.rows_iter().all(|row| row.is_empty()));
}

#[test]
#[should_panic]
fn test_out_of_bounds_panics() {
    Table::zeros(2, 2).get(2, 0);
}

#[test]
fn test_dataset_serializes_to_json() {
    let dataset = Dataset::new(
        Some(vec!["a".to_string()]),
        Table::from_rows(vec![vec![1.5], vec![2.0]]).unwrap(),
    );
    let json = serde_json::to_value(&dataset).unwrap();
    assert_eq!(json["heading"][0], "a");
    assert_eq!(json["table"]["rows"], 2);
    assert_eq!(json["table"]["cols"], 1);
    assert_eq!(json["table"]["data"][0], 1.5);
}
