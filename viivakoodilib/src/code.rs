//! `Code`: проверенная строка из 54 цифр.

use crate::{
    error::{Result, ViivakoodiError},
    layout,
    model::SymbolVersion,
    symbol,
};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

const INVALID_LENGTH: &str = "Invalid length of virtuaaliviivakoodi. Must be 54 characters.";
pub(crate) const INVALID_DIGITS: &str = "Invalid virtuaaliviivakoodi. Must contain only digits.";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    digits: String,
    symbol: SymbolVersion,
}

impl Code {
    /// Проверки идут строго по порядку: длина, символ в колонке 0, цифры.
    pub fn parse(s: &str) -> Result<Self> {
        validate_length(s)?;
        let symbol = symbol::detect_from_code(s)?;
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ViivakoodiError::InvalidDigits(INVALID_DIGITS));
        }
        Ok(Self {
            digits: s.to_string(),
            symbol,
        })
    }

    /// Сборка из уже нормализованных частей: ширина и цифры гарантированы валидаторами.
    pub(crate) fn assemble(symbol: SymbolVersion, parts: &[&str]) -> Self {
        let mut digits = String::with_capacity(layout::CODE_LEN);
        digits.push(symbol.as_char());
        for p in parts {
            digits.push_str(p);
        }
        debug_assert_eq!(digits.len(), layout::CODE_LEN, "normalized fields overflow the layout");
        debug_assert!(digits.bytes().all(|b| b.is_ascii_digit()), "non-digit in {digits}");
        Self { digits, symbol }
    }

    pub fn symbol(&self) -> SymbolVersion {
        self.symbol
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Содержимое колонок; после `parse` строка ASCII, срез байтов безопасен.
    pub fn column(&self, range: Range<usize>) -> &str {
        &self.digits[range]
    }
}

/// Валидатор длины (только для разбора).
pub fn validate_length(s: &str) -> Result<()> {
    if s.chars().count() != layout::CODE_LEN {
        return Err(ViivakoodiError::InvalidLength(INVALID_LENGTH));
    }
    Ok(())
}

impl FromStr for Code {
    type Err = ViivakoodiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl PartialEq<str> for Code {
    fn eq(&self, other: &str) -> bool {
        self.digits == other
    }
}

impl PartialEq<&str> for Code {
    fn eq(&self, other: &&str) -> bool {
        self.digits == *other
    }
}
