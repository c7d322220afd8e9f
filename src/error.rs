use thiserror::Error;

/// Convenience result type for loading a [`crate::types::TaxiPark`].
pub type TaxiParkResult<T> = Result<T, TaxiParkError>;

/// Error type returned by ingestion functions.
///
/// Queries never fail; only building a dataset from text can.
#[derive(Debug, Error)]
pub enum TaxiParkError {
    /// Underlying I/O error raised by a caller-supplied reader.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON decoding error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not have the expected shape (empty input, missing columns, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A cell could not be parsed into the type its column requires.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// A trip carries values outside their valid domain (e.g. a negative cost).
    #[error("invalid trip at row {row}: {message}")]
    InvalidTrip { row: usize, message: String },

    /// A trip references a driver or passenger missing from the dataset roster.
    ///
    /// Only raised when strict reference checking is enabled.
    #[error("trip references unknown {kind} '{id}'")]
    UnknownReference { kind: &'static str, id: String },
}
