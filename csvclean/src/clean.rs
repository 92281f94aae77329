use std::collections::HashSet;

/// Values treated as "missing" after trimming.
const MISSING_TOKENS: [&str; 7] = ["", "NA", "N/A", "na", "n/a", "Na", "None"];

/// Columns with a known numeric schema.
const INT_COLUMN: &str = "qty";
const FLOAT_COLUMN: &str = "price";

/// A parsed delimited file: one header row plus data rows, all cells
/// as strings. Every row has exactly `header.len()` cells.
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    #[error("unknown dedup column: `{0}`")]
    UnknownColumn(String),
}

/// trim, then collapse missing-value spellings to the empty string
pub fn normalize_value(value: &str) -> String {
    let trimmed = value.trim();
    if MISSING_TOKENS.contains(&trimmed) {
        String::new()
    } else {
        trimmed.to_string()
    }
}

/// re-render as a canonical integer, or empty when unparseable
pub fn coerce_int(value: &str) -> String {
    match value.parse::<i64>() {
        Ok(parsed) => parsed.to_string(),
        Err(_) => String::new(),
    }
}

/// re-render as a canonical decimal, or empty when unparseable
pub fn coerce_float(value: &str) -> String {
    match value.parse::<f64>() {
        Ok(parsed) => parsed.to_string(),
        Err(_) => String::new(),
    }
}

fn clean_cell(column: &str, value: &str) -> String {
    let normalized = normalize_value(value);
    if normalized.is_empty() {
        return normalized;
    }
    match column {
        INT_COLUMN => coerce_int(&normalized),
        FLOAT_COLUMN => coerce_float(&normalized),
        _ => normalized,
    }
}

/// Keep the first occurrence of every distinct key. The key is the
/// projection onto `key_indices`, or the whole row when empty.
fn deduplicate(rows: Vec<Vec<String>>, key_indices: &[usize]) -> Vec<Vec<String>> {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    for row in rows {
        let key: Vec<String> = if key_indices.is_empty() {
            row.clone()
        } else {
            key_indices.iter().map(|&i| row[i].clone()).collect()
        };
        if seen.insert(key) {
            kept.push(row);
        }
    }
    kept
}

/// Drop every column that is empty in all rows. A table with no rows
/// loses all its columns.
fn drop_empty_columns(table: Table) -> Table {
    let keep: Vec<usize> = (0..table.header.len())
        .filter(|&col| table.rows.iter().any(|row| !row[col].is_empty()))
        .collect();

    let header = keep.iter().map(|&col| table.header[col].clone()).collect();
    let rows = table
        .rows
        .into_iter()
        .map(|mut row| {
            let mut pruned = Vec::with_capacity(keep.len());
            for &col in &keep {
                pruned.push(std::mem::take(&mut row[col]));
            }
            pruned
        })
        .collect();
    Table { header, rows }
}

fn key_indices(header: &[String], dedup_cols: &[String]) -> Result<Vec<usize>, CleanError> {
    dedup_cols
        .iter()
        .map(|name| {
            header
                .iter()
                .position(|col| col == name)
                .ok_or_else(|| CleanError::UnknownColumn(name.clone()))
        })
        .collect()
}

/// The full cleaning pipeline: normalize every cell, coerce the two
/// schema columns, drop duplicate rows, then prune all-empty columns.
pub fn clean_table(table: Table, dedup_cols: &[String]) -> Result<Table, CleanError> {
    let indices = key_indices(&table.header, dedup_cols)?;

    let rows: Vec<Vec<String>> = table
        .rows
        .into_iter()
        .map(|row| {
            table
                .header
                .iter()
                .zip(row)
                .map(|(column, value)| clean_cell(column, &value))
                .collect()
        })
        .collect();

    let rows = deduplicate(rows, &indices);
    Ok(drop_empty_columns(Table {
        header: table.header,
        rows,
    }))
}
