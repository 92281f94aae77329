use crate::clean::{Table, clean_table, coerce_float, coerce_int, normalize_value};

fn table(header: &[&str], rows: &[&[&str]]) -> Table {
    Table {
        header: header.iter().map(|s| s.to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect(),
    }
}

#[test]
fn normalize_trims_and_collapses_missing() {
    assert_eq!("x", normalize_value(" x "));
    assert_eq!("0", normalize_value("0"));
    assert_eq!("", normalize_value("  "));
    assert_eq!("", normalize_value("NA"));
    assert_eq!("", normalize_value(" n/a "));
    assert_eq!("", normalize_value("None"));
    assert_eq!("NONE", normalize_value("NONE"));
}

#[test]
fn int_coercion() {
    assert_eq!("7", coerce_int("7"));
    assert_eq!("7", coerce_int("007"));
    assert_eq!("-3", coerce_int("-3"));
    assert_eq!("", coerce_int("7.5"));
    assert_eq!("", coerce_int("abc"));
}

#[test]
fn float_coercion() {
    assert_eq!("3.5", coerce_float("3.50"));
    assert_eq!("2", coerce_float("2"));
    assert_eq!("-0.25", coerce_float("-0.25"));
    assert_eq!("", coerce_float("1,5"));
    assert_eq!("", coerce_float("abc"));
}

#[test]
fn full_row_dedup_happens_after_normalization() {
    let input = table(
        &["user_id", "note"],
        &[&[" u1 ", "hello"], &["u1", " hello "], &["u2", "hello"]],
    );
    let cleaned = clean_table(input, &[]).unwrap();
    assert_eq!(
        vec![vec!["u1", "hello"], vec!["u2", "hello"]],
        cleaned.rows
    );
}

#[test]
fn keyed_dedup_keeps_first_occurrence() {
    let input = table(
        &["user_id", "note"],
        &[&["u1", "first"], &["u1", "second"], &["u2", "third"]],
    );
    let cleaned = clean_table(input, &["user_id".to_string()]).unwrap();
    assert_eq!(
        vec![vec!["u1", "first"], vec!["u2", "third"]],
        cleaned.rows
    );
}

#[test]
fn unknown_dedup_column_is_an_error() {
    let input = table(&["user_id"], &[&["u1"]]);
    let result = clean_table(input, &["nope".to_string()]);
    assert!(result.is_err());
}

#[test]
fn schema_columns_are_coerced() {
    let input = table(
        &["qty", "price", "note"],
        &[&[" 007 ", "3.50", "keep"], &["x", "oops", "keep2"]],
    );
    let cleaned = clean_table(input, &[]).unwrap();
    assert_eq!(
        vec![vec!["7", "3.5", "keep"], vec!["", "", "keep2"]],
        cleaned.rows
    );
}

#[test]
fn all_empty_columns_are_dropped() {
    let input = table(
        &["user_id", "junk", "note"],
        &[&["u1", "NA", "a"], &["u2", "  ", "b"]],
    );
    let cleaned = clean_table(input, &[]).unwrap();
    assert_eq!(vec!["user_id", "note"], cleaned.header);
    assert_eq!(vec![vec!["u1", "a"], vec!["u2", "b"]], cleaned.rows);
}

#[test]
fn empty_table_loses_all_columns() {
    let input = table(&["a", "b"], &[]);
    let cleaned = clean_table(input, &[]).unwrap();
    assert!(cleaned.header.is_empty());
    assert!(cleaned.rows.is_empty());
}
