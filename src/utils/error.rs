use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("no records to convert")]
    EmptyInput,

    #[error("unsupported value for field '{field}': {kind} is not a scalar")]
    UnsupportedValue { field: String, kind: &'static str },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Google API returned {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("Customer '{customer_id}' returned no data")]
    NoData { customer_id: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
