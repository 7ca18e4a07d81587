use std::fmt;

/// Result type for covlap-ingest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading a holdings file.
///
/// All of these are structural: a file that cannot be opened, parsed as
/// CSV, or that lacks required columns aborts the run before any
/// per-package processing. Malformed values inside individual rows are
/// not errors at this layer; they degrade during normalization instead.
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// CSV parsing failed
    Csv(csv::Error),

    /// The holdings file lacks one or more required columns
    MissingColumns(Vec<String>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::MissingColumns(columns) => write!(
                f,
                "Holdings file is missing required columns: {}",
                columns.join(", ")
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::MissingColumns(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}
