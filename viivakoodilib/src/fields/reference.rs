//! Платёжная ссылка: национальная (4–20 цифр) или RF (`RF` + 2 цифры проверки + хвост).
//!
//! Контрольные цифры не пересчитываются, проверяется только формат.

use super::strip_whitespace;
use crate::{
    code::Code,
    error::{Result, ViivakoodiError},
    layout,
    model::{SymbolVersion, Value},
    symbol,
    traits::{Deconstruct, Normalize},
};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static FI_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4,20}$").expect("FI reference pattern is valid"));
static RF_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^RF[0-9]{3,23}$").expect("RF reference pattern is valid"));

const NOT_TEXT_OR_INTEGER: &str = "Invalid reference. Must be string or integer.";
const BAD_FORMAT: &str = "Invalid reference. Must use Finnish or RF reference formats.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    Domestic(String),
    Creditor { check: String, tail: String },
}

impl Reference {
    pub fn validate(value: &Value) -> Result<Self> {
        let text = match value {
            Value::Text(s) => strip_whitespace(s),
            Value::Integer(i) => i.to_string(),
            Value::Unsigned(u) => u.to_string(),
            _ => return Err(ViivakoodiError::InvalidReference(NOT_TEXT_OR_INTEGER)),
        };

        match symbol::detect_from_reference(&text) {
            SymbolVersion::V4 if FI_REFERENCE.is_match(&text) => Ok(Self::Domestic(text)),
            SymbolVersion::V5 if RF_REFERENCE.is_match(&text) => Ok(Self::Creditor {
                check: text[2..4].to_string(),
                tail: text[4..].to_string(),
            }),
            _ => Err(ViivakoodiError::InvalidReference(BAD_FORMAT)),
        }
    }

    pub fn symbol(&self) -> SymbolVersion {
        match self {
            Self::Domestic(_) => SymbolVersion::V4,
            Self::Creditor { .. } => SymbolVersion::V5,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domestic(s) => f.write_str(s),
            Self::Creditor { check, tail } => write!(f, "RF{check}{tail}"),
        }
    }
}

impl Normalize for Reference {
    fn normalize(&self) -> String {
        match self {
            Self::Domestic(s) => format!("{s:0>width$}", width = layout::REFERENCE.len()),
            Self::Creditor { check, tail } => {
                format!("{check}{tail:0>width$}", width = layout::REFERENCE_RF_TAIL.len())
            }
        }
    }
}

impl Deconstruct for Reference {
    fn deconstruct(code: &Code) -> Result<Self> {
        let reference = match code.symbol() {
            SymbolVersion::V4 => Self::Domestic(
                code.column(layout::REFERENCE_FIN)
                    .trim_start_matches('0')
                    .to_string(),
            ),
            SymbolVersion::V5 => Self::Creditor {
                check: code.column(layout::REFERENCE_RF_HEAD).to_string(),
                tail: code
                    .column(layout::REFERENCE_RF_TAIL)
                    .trim_start_matches('0')
                    .to_string(),
            },
        };
        Ok(reference)
    }
}
