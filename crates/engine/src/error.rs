use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: field '{field}' is not an integer: '{value}'")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("Line {line}: unknown gender label '{value}'")]
    UnknownGender { line: u64, value: String },

    #[error("Line {line}: row is not valid UTF-8")]
    InvalidUtf8 { line: u64 },
}

impl EngineError {
    /// Whether this error was raised by a malformed row rather than by I/O.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::FieldCount { .. }
                | Self::InvalidNumber { .. }
                | Self::UnknownGender { .. }
                | Self::InvalidUtf8 { .. }
        )
    }

    /// 1-based line of the offending row, when known.
    #[must_use]
    pub const fn line(&self) -> Option<u64> {
        match self {
            Self::FieldCount { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::UnknownGender { line, .. }
            | Self::InvalidUtf8 { line } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
