// Domain Error Types

use thiserror::Error;

/// Reason a formula has no numeric answer (zero denominator or factor)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndefinedResult {
    #[error("percentage of a zero total is undefined")]
    ZeroTotal,

    #[error("total from a zero percentage is undefined")]
    ZeroPercentage,

    #[error("change factor is zero, original value is undefined")]
    ZeroFactor,

    #[error("percentage change from a zero old value is undefined")]
    ZeroOldValue,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid number: {input:?}")]
    InvalidNumber { input: String },

    #[error("Invalid percent list entry: {token:?}")]
    InvalidPercentList { token: String },
}

pub type Result<T> = std::result::Result<T, DomainError>;
