/**
* filename : error
* author : HAMA
* date: 2025. 6. 2.
* description:
**/

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlertError {
    #[error("Empty series")]
    EmptySeries,

    #[error("Insufficient data: need at least {required} bars, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Missing field `{field}` at bar {index}")]
    MissingField { index: usize, field: &'static str },

    #[error("Unordered series: bar {index} is not after its predecessor")]
    UnorderedSeries { index: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unknown ticker: {0}")]
    UnknownTicker(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl AlertError {
    /// 해당 티커의 이번 주기만 건너뛰면 되는 데이터 오류인지 확인
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            AlertError::EmptySeries
                | AlertError::InsufficientData { .. }
                | AlertError::MissingField { .. }
                | AlertError::UnorderedSeries { .. }
        )
    }
}

impl From<config::ConfigError> for AlertError {
    fn from(e: config::ConfigError) -> Self {
        AlertError::ConfigError(e.to_string())
    }
}

impl From<csv::Error> for AlertError {
    fn from(e: csv::Error) -> Self {
        AlertError::ParseError(e.to_string())
    }
}
