use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimeDiffError {
    #[error("The count must not be zero")]
    ZeroCountError,

    #[error("The unit '{unit}' is not supported")]
    UnsupportedUnitError { unit: String },

    #[error("Date/time parsing failed: {0}")]
    ParseError(#[from] chrono::ParseError),

    #[error("Timestamp {timestamp} cannot be represented as a date/time")]
    TimestampRangeError { timestamp: i64 },

    #[error("Message lookup failed: {0}")]
    MessageLookupError(#[from] LookupError),
}

/// Failures signalled by a `MessageLookup` collaborator. The formatter
/// never recovers from these; they surface to the caller unchanged.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("No message registered for key '{key}' in domain '{domain}'")]
    MissingKeyError { key: String, domain: String },

    #[error("No message catalog registered for locale '{locale}'")]
    MissingLocaleError { locale: String },

    #[error("Lookup failed: {message}")]
    CustomError { message: String },
}

pub type Result<T> = std::result::Result<T, TimeDiffError>;
