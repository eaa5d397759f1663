//! Output sinks: console table, JSON dump and the per-destination CSV file.
//!
//! Distances are shown with 1 decimal, durations with 2, both with `,`
//! thousands separators.

use crate::distance::DistanceRecord;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const CSV_HEADER: [&str; 6] = [
    "City1",
    "City2",
    "Distance_km",
    "Distance_mi",
    "Duration_min",
    "Duration_hr",
];

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Format with a fixed number of decimals and `,` between thousands groups.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// One display/CSV row, in [`CSV_HEADER`] order.
pub fn format_row(record: &DistanceRecord) -> [String; 6] {
    [
        record.origin.clone(),
        record.destination.clone(),
        group_thousands(record.distance_km, 1),
        group_thousands(record.distance_mi, 1),
        group_thousands(record.duration_min, 2),
        group_thousands(record.duration_hr, 2),
    ]
}

fn console_line(fields: &[&str]) -> String {
    format!(
        "{:<28} {:<24} {:>12} {:>12} {:>13} {:>12}",
        fields[0], fields[1], fields[2], fields[3], fields[4], fields[5]
    )
}

/// Header plus one line per record, in the given order.
pub fn write_console<W: Write>(mut out: W, records: &[DistanceRecord]) -> io::Result<()> {
    writeln!(out, "{}", console_line(&CSV_HEADER))?;
    for record in records {
        let row = format_row(record);
        let fields: Vec<&str> = row.iter().map(String::as_str).collect();
        writeln!(out, "{}", console_line(&fields))?;
    }
    Ok(())
}

pub fn write_json<W: Write>(mut out: W, records: &[DistanceRecord]) -> Result<(), OutputError> {
    serde_json::to_writer_pretty(&mut out, records)?;
    writeln!(out)?;
    Ok(())
}

/// Write the CSV header and the formatted rows, sorted lexicographically.
pub fn write_csv<W: Write>(out: W, records: &[DistanceRecord]) -> Result<(), OutputError> {
    let mut rows: Vec<[String; 6]> = records.iter().map(format_row).collect();
    rows.sort();

    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADER)?;
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// `"San Jose, CA"` → `San_Jose.csv`.
pub fn csv_file_name(destination: &str) -> String {
    let stem: String = destination
        .split(',')
        .next()
        .unwrap_or("")
        .trim()
        .chars()
        .map(|c| if c == ' ' || c == '/' || c == '\\' { '_' } else { c })
        .collect();
    if stem.is_empty() {
        "destination.csv".to_string()
    } else {
        format!("{}.csv", stem)
    }
}

/// Write `<dir>/<destination stem>.csv`, creating `dir` if needed.
pub fn write_csv_file(dir: &Path, destination: &str, records: &[DistanceRecord]) -> Result<PathBuf, OutputError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(csv_file_name(destination));
    let file = fs::File::create(&path)?;
    write_csv(io::BufWriter::new(file), records)?;
    Ok(path)
}
