//! Срок оплаты: `YYMMDD`, отсутствие кодируется как `000000`.
//!
//! При разборе год всегда 20YY: двухзначный год другого века не выражает.

use crate::{
    code::Code,
    error::{Result, ViivakoodiError},
    layout,
    model::Value,
    traits::{Deconstruct, Normalize},
};
use chrono::NaiveDate;

const NOT_A_DATE: &str = "Due date must be date object";
const BAD_CODE_DATE: &str = "Invalid due date. Must be a valid YYMMDD date.";

const NO_DATE: &str = "000000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueDate(Option<NaiveDate>);

impl DueDate {
    /// Текст принимается в ISO-виде `YYYY-MM-DD`.
    pub fn validate(value: Option<&Value>) -> Result<Self> {
        let date = match value {
            None => None,
            Some(Value::Date(d)) => Some(*d),
            Some(Value::Text(s)) => Some(
                NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                    .map_err(|_| ViivakoodiError::InvalidDueDate(NOT_A_DATE))?,
            ),
            Some(_) => return Err(ViivakoodiError::InvalidDueDate(NOT_A_DATE)),
        };
        Ok(Self(date))
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }
}

impl Normalize for DueDate {
    fn normalize(&self) -> String {
        match self.0 {
            Some(d) => d.format("%y%m%d").to_string(),
            None => NO_DATE.to_string(),
        }
    }
}

impl Deconstruct for DueDate {
    fn deconstruct(code: &Code) -> Result<Self> {
        let yymmdd = code.column(layout::DUE_DATE);
        if yymmdd == NO_DATE {
            return Ok(Self(None));
        }
        // %y отдал бы 1969–1999 для 69–99, поэтому век подставляем сами
        NaiveDate::parse_from_str(&format!("20{yymmdd}"), "%Y%m%d")
            .map(|d| Self(Some(d)))
            .map_err(|_| ViivakoodiError::InvalidDueDate(BAD_CODE_DATE))
    }
}
