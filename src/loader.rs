// CSV loading: one OfferRecord per data row, header row names the fields.
use crate::model::{LoadError, OfferRecord};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Reads the whole file into a record sequence, preserving row order.
/// Any load failure aborts the run; there is no partial result.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<OfferRecord>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound(path.display().to_string()),
        _ => LoadError::Io(e.to_string()),
    })?;

    let mut rdr = csv::Reader::from_reader(BufReader::new(file));
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let fields: HashMap<String, String> = result.map_err(map_csv_error)?;
        records.push(OfferRecord::new(fields));
    }
    Ok(records)
}

fn map_csv_error(e: csv::Error) -> LoadError {
    let line = e.position().map(|p| p.line()).unwrap_or(0);
    match e.kind() {
        csv::ErrorKind::Utf8 { .. } => LoadError::DecodeError { line },
        csv::ErrorKind::UnequalLengths { pos, expected_len, len } => LoadError::MalformedRow {
            line: pos.as_ref().map(|p| p.line()).unwrap_or(line),
            expected: *expected_len,
            got: *len,
        },
        _ => LoadError::Io(e.to_string()),
    }
}
