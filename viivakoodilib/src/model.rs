//! Доменные модели: версия символа, входные значения и результат разбора.

use crate::error::{Result, ViivakoodiError};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const INVALID_SYMBOL: &str = "Invalid symbol version. Must be 4 or 5.";

/// Версия символа: цифра в колонке 0, выбирает раскладку поля ссылки.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SymbolVersion {
    /// Финская (национальная) ссылка.
    #[serde(rename = "4")]
    V4,
    /// Международная RF-ссылка.
    #[serde(rename = "5")]
    V5,
}

impl SymbolVersion {
    pub const fn as_char(self) -> char {
        match self {
            Self::V4 => '4',
            Self::V5 => '5',
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V4 => "4",
            Self::V5 => "5",
        }
    }
}

impl fmt::Display for SymbolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<char> for SymbolVersion {
    type Error = ViivakoodiError;

    fn try_from(c: char) -> Result<Self> {
        match c {
            '4' => Ok(Self::V4),
            '5' => Ok(Self::V5),
            _ => Err(ViivakoodiError::InvalidSymbol(INVALID_SYMBOL)),
        }
    }
}

impl FromStr for SymbolVersion {
    type Err = ViivakoodiError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(ViivakoodiError::InvalidSymbol(INVALID_SYMBOL)),
        }
    }
}

/// Значение поля с заранее неизвестным типом (JSON, аргументы CLI).
///
/// Валидаторы решают, какие варианты допустимы для конкретного поля.
/// Из JSON приходят только числа и строки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    /// Целые больше `i64::MAX` (20-значные ссылки).
    Unsigned(u64),
    Float(f64),
    Text(String),
    #[serde(skip_deserializing)]
    Decimal(Decimal),
    #[serde(skip_deserializing)]
    Date(NaiveDate),
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or(Value::Unsigned(v), Value::Integer)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

/// Запрос на кодирование в «сыром» виде.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub iban: Value,
    pub reference: Value,
    pub euro_amount: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Value>,
}

/// Результат разбора кода.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeconstructResult {
    pub symbol: SymbolVersion,
    pub iban: String,
    pub reference: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub euro_amount: Decimal,
    pub due_date: Option<NaiveDate>,
}
