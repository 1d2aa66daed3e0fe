use thiserror::Error;

/// Rejected configuration. Raised before any partial result is produced.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("value must be a positive integer")]
    InvalidSplitValue,

    #[error("customValidationPattern is required when validationMode is custom_regex")]
    MissingPattern,

    #[error("customValidationPattern is not a valid regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Failure to obtain an outcome from the execution host.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The worker ran the request and reported a failure.
    #[error("{0}")]
    Failed(String),

    #[error("execution context is unavailable")]
    Unavailable,

    #[error("malformed response from execution context: {0}")]
    MalformedResponse(String),

    #[error("could not encode request: {0}")]
    Encode(#[from] serde_json::Error),
}
