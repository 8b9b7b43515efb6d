//! Error types for saludo

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SaludoError>;

#[derive(Debug, Error)]
pub enum SaludoError {
    /// Text that is neither an integer nor a float
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// Int operand of a float sum that has no finite float value
    #[error("int too large to convert to float: {0}")]
    IntTooLarge(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
