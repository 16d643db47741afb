// Core structs: OfferRecord, MatchList, LoadError
use std::collections::HashMap;
use thiserror::Error;

/// One row of ticket-offer data, keyed by the CSV header fields.
#[derive(Debug, Clone, Default)]
pub struct OfferRecord {
    fields: HashMap<String, String>,
}

impl OfferRecord {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Field lookup; a field absent from the row reads as the empty string.
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }
}

/// Ordered subset of records satisfying the active predicate.
/// Order is input file order, no dedup, no sort.
pub type MatchList = Vec<OfferRecord>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {0}")]
    FileNotFound(String),
    #[error("input is not valid UTF-8 (line {line})")]
    DecodeError { line: u64 },
    #[error("row at line {line} has {got} columns, expected {expected}")]
    MalformedRow { line: u64, expected: u64, got: u64 },
    #[error("read error: {0}")]
    Io(String),
}
