use crate::config::LoadOptions;
use crate::error::{EngineError, Result};
use crate::record::{Gender, Record};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, trace};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

/// Columns per row: year, name, frequency, gender.
pub const FIELD_COUNT: usize = 4;

/// Load every record of a delimited file.
///
/// # Errors
/// Returns `FileRead` if the file cannot be opened, and a parse error for the
/// first malformed row. Nothing is recovered: a bad row fails the whole load.
pub fn load_records(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let records = read_records(BufReader::new(file), options)?;
    debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse records from any reader.
///
/// # Errors
/// See [`load_records`].
pub fn read_records<R: Read>(reader: R, options: &LoadOptions) -> Result<Vec<Record>> {
    let trim = if options.trim { Trim::All } else { Trim::None };
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_headers)
        // Field counts are checked per row so the error can name the line.
        .flexible(true)
        .trim(trim)
        .from_reader(reader);

    if options.has_headers {
        trace!("header: {:?}", reader.headers().map_err(row_error)?);
    }

    let mut records = Vec::new();
    for row in reader.records() {
        records.push(parse_row(&row.map_err(row_error)?)?);
    }
    Ok(records)
}

/// Undecodable bytes are a malformed row, so they keep the line number.
fn row_error(err: csv::Error) -> EngineError {
    let line = match err.kind() {
        csv::ErrorKind::Utf8 { pos: Some(pos), .. } => Some(pos.line()),
        _ => None,
    };
    match line {
        Some(line) => EngineError::InvalidUtf8 { line },
        None => EngineError::Csv(err),
    }
}

fn parse_row(row: &StringRecord) -> Result<Record> {
    let line = row.position().map_or(0, csv::Position::line);

    if row.len() != FIELD_COUNT {
        return Err(EngineError::FieldCount {
            line,
            expected: FIELD_COUNT,
            found: row.len(),
        });
    }

    let year = parse_int(&row[0], "year", line)?;
    let frequency = parse_int(&row[2], "frequency", line)?;
    let gender = Gender::from_str(&row[3]).map_err(|_| EngineError::UnknownGender {
        line,
        value: row[3].to_string(),
    })?;

    Ok(Record::new(year, &row[1], frequency, gender))
}

fn parse_int<T: FromStr>(value: &str, field: &'static str, line: u64) -> Result<T> {
    value.parse().map_err(|_| EngineError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}
