//! Сумма в евро: 6 цифр евро + 2 цифры центов.
//!
//! Внутри всегда `Decimal`. `f64` принимается только на входе и переводится
//! через кратчайшее десятичное представление.

use crate::{
    code::{Code, INVALID_DIGITS},
    error::{Result, ViivakoodiError},
    layout,
    model::Value,
    traits::{Deconstruct, Normalize},
};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

const NOT_NUMERIC: &str = "Euro amount must be float, integer or decimal value";
const NEGATIVE: &str = "Invalid euro amount. Amount must be positive.";
const TOO_LARGE: &str = "Invalid euro amount. Max value is 999999.99";

/// 999999.99
const MAX_AMOUNT: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, 2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EuroAmount(Decimal);

impl EuroAmount {
    /// Центы округляются до двух знаков по правилу half-up.
    pub fn validate(value: &Value) -> Result<Self> {
        let mut amount = match value {
            Value::Integer(i) => Decimal::from(*i),
            Value::Decimal(d) => *d,
            Value::Float(f) => from_float(*f)?,
            Value::Unsigned(u) => Decimal::from(*u),
            Value::Text(_) | Value::Date(_) => {
                return Err(ViivakoodiError::InvalidEuroAmount(NOT_NUMERIC))
            }
        };

        if amount < Decimal::ZERO {
            return Err(ViivakoodiError::InvalidEuroAmount(NEGATIVE));
        }
        if amount > MAX_AMOUNT {
            return Err(ViivakoodiError::InvalidEuroAmount(TOO_LARGE));
        }

        // "-0" из float/текста
        amount.set_sign_positive(true);
        Ok(Self(amount.round_dp_with_strategy(
            2,
            RoundingStrategy::MidpointAwayFromZero,
        )))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

fn from_float(f: f64) -> Result<Decimal> {
    if !f.is_finite() {
        return Err(ViivakoodiError::InvalidEuroAmount(NOT_NUMERIC));
    }
    if f < 0.0 {
        return Err(ViivakoodiError::InvalidEuroAmount(NEGATIVE));
    }
    if f > 999_999.99 {
        return Err(ViivakoodiError::InvalidEuroAmount(TOO_LARGE));
    }
    Decimal::from_str(&f.to_string()).map_err(|_| ViivakoodiError::InvalidEuroAmount(NOT_NUMERIC))
}

impl Normalize for EuroAmount {
    fn normalize(&self) -> String {
        let mut cents = self.0;
        cents.rescale(2);
        let total = cents.mantissa();
        format!("{:06}{:02}", total / 100, total % 100)
    }
}

impl Deconstruct for EuroAmount {
    fn deconstruct(code: &Code) -> Result<Self> {
        let euros = code.column(layout::AMOUNT_EUROS);
        let cents = code.column(layout::AMOUNT_CENTS);
        Decimal::from_str_exact(&format!("{euros}.{cents}"))
            .map(Self)
            .map_err(|_| ViivakoodiError::InvalidDigits(INVALID_DIGITS))
    }
}
