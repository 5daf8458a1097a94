//! Error types for data source evaluation.

use thiserror::Error;

/// Errors that can occur while evaluating a data source read.
#[derive(Error, Debug)]
pub enum DataSourceError {
    /// The requested data source is not registered
    #[error("Data source not found: {0}")]
    NotFound(String),

    /// A required argument was empty or unspecified
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The environment variable and its default were both empty while
    /// `fail_if_empty` was set
    #[error("The environment variable '{0}' value was empty")]
    EnvEmpty(String),

    /// A required schema field was not supplied
    #[error("Missing required field: {0}")]
    MissingOption(String),

    /// A supplied field is not declared in the schema
    #[error("Unknown field: {0}")]
    UnknownOption(String),

    /// A supplied field value has the wrong type or an invalid form
    #[error("Invalid field '{option}': {message}")]
    InvalidOption {
        /// Field name
        option: String,
        /// What was wrong with the value
        message: String,
    },
}

/// Result type for data source operations
pub type DataSourceResult<T> = Result<T, DataSourceError>;
