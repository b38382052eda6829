//! Errors raised by the filter library.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("unknown filter field: {0}")]
    UnknownField(String),

    #[error("invalid filter configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

pub type FilterResult<T> = Result<T, FilterError>;
