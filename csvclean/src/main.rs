mod clean;
#[cfg(test)]
mod tests;

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;

use crate::clean::{CleanError, Table, clean_table};

#[derive(Parser, Debug)]
#[command(about = "Clean a delimited file: trim, normalize, dedup")]
struct Args {
    /// path to the raw csv
    #[arg(long)]
    input: PathBuf,
    /// path the cleaned csv is written to
    #[arg(long)]
    output: PathBuf,
    /// columns forming the deduplication key.
    /// Whole rows are compared when not given.
    #[arg(long, num_args = 0..)]
    dedup_cols: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: csv::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: csv::Error },
    #[error(transparent)]
    Clean(#[from] CleanError),
}

fn read_table(path: &Path) -> Result<Table, csv::Error> {
    let mut reader = csv::Reader::from_path(path)?;
    let header = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(Table { header, rows })
}

fn write_table(path: &Path, table: &Table) -> Result<(), csv::Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&table.header)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn run(args: &Args) -> Result<(usize, usize), CliError> {
    let table = read_table(&args.input).map_err(|source| CliError::Read {
        path: args.input.clone(),
        source,
    })?;
    let table = clean_table(table, &args.dedup_cols)?;
    write_table(&args.output, &table).map_err(|source| CliError::Write {
        path: args.output.clone(),
        source,
    })?;
    Ok((table.rows.len(), table.header.len()))
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok((rows, cols)) => {
            println!(
                "Saved {} | rows={rows} | cols={cols}",
                args.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
