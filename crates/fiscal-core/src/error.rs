use thiserror::Error;

#[derive(Debug, Error)]
pub enum FiscalError {
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unknown client: {0}")]
    UnknownClient(String),

    #[error("No financial data for period {month} in fiscal year {year}")]
    MissingPeriod { year: i32, month: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FiscalError {
    fn from(e: serde_json::Error) -> Self {
        FiscalError::SerializationError(e.to_string())
    }
}
