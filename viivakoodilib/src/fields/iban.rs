//! IBAN: только финский, `FI` + 16 цифр. Контрольную сумму не проверяем.

use super::strip_whitespace;
use crate::{
    code::Code,
    error::{Result, ViivakoodiError},
    layout,
    model::Value,
    traits::{Deconstruct, Normalize},
};
use regex::Regex;
use std::sync::LazyLock;

static FI_IBAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^FI[0-9]{16}$").expect("FI IBAN pattern is valid"));

const COUNTRY: &str = "FI";

/// Проверенный IBAN в компактной форме (без пробелов).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iban(String);

impl Iban {
    pub fn validate(value: &Value) -> Result<Self> {
        let Value::Text(raw) = value else {
            return Err(ViivakoodiError::InvalidIban("IBAN must be string"));
        };
        let iban = strip_whitespace(raw);
        if !iban.starts_with(COUNTRY) {
            return Err(ViivakoodiError::InvalidIban("IBAN must be Finnish"));
        }
        if !FI_IBAN.is_match(&iban) {
            return Err(ViivakoodiError::InvalidIban("Invalid IBAN"));
        }
        Ok(Self(iban))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Normalize for Iban {
    fn normalize(&self) -> String {
        self.0[COUNTRY.len()..].to_string()
    }
}

impl Deconstruct for Iban {
    fn deconstruct(code: &Code) -> Result<Self> {
        Ok(Self(format!("{COUNTRY}{}", code.column(layout::IBAN_DIGITS))))
    }
}
