//! Единый тип ошибок публичного API.
//!
//! Текст сообщения входит в контракт: `Display` отдаёт ровно его.

use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ViivakoodiError {
    #[error("{0}")]
    InvalidIban(&'static str),

    #[error("{0}")]
    InvalidReference(&'static str),

    #[error("{0}")]
    InvalidEuroAmount(&'static str),

    #[error("{0}")]
    InvalidDueDate(&'static str),

    #[error("{0}")]
    InvalidSymbol(&'static str),

    #[error("{0}")]
    InvalidLength(&'static str),

    #[error("{0}")]
    InvalidDigits(&'static str),
}

impl ViivakoodiError {
    /// Короткое имя вида ошибки (для логов и CLI).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidIban(_) => "InvalidIBAN",
            Self::InvalidReference(_) => "InvalidReference",
            Self::InvalidEuroAmount(_) => "InvalidEuroAmount",
            Self::InvalidDueDate(_) => "InvalidDueDate",
            Self::InvalidSymbol(_) => "InvalidSymbol",
            Self::InvalidLength(_) => "InvalidLength",
            Self::InvalidDigits(_) => "InvalidDigits",
        }
    }
}

pub type Result<T> = std::result::Result<T, ViivakoodiError>;
