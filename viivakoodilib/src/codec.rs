//! Кодирование и разбор кода целиком.

use crate::{
    code::Code,
    error::Result,
    fields::{amount::EuroAmount, due_date::DueDate, iban::Iban, reference::Reference},
    model::{DeconstructResult, Payment, Value},
    traits::{Deconstruct, Normalize},
};
use chrono::NaiveDate;

/// Собирает virtuaaliviivakoodi по руководству Pankkiviivakoodi-opas.
///
/// Поля проверяются в порядке IBAN, ссылка, сумма, срок; первая ошибка
/// возвращается как есть.
///
/// ```
/// use chrono::NaiveDate;
///
/// let code = viivakoodilib::encode(
///     "FI49 5000 9420 0287 30",
///     "12 34561",
///     124.12,
///     NaiveDate::from_ymd_opt(2022, 2, 2),
/// )
/// .unwrap();
/// assert_eq!(code, "449500094200287300001241200000000000000001234561220202");
/// ```
pub fn encode(
    iban: impl Into<Value>,
    reference: impl Into<Value>,
    euro_amount: impl Into<Value>,
    due_date: Option<NaiveDate>,
) -> Result<Code> {
    let due_date = due_date.map(Value::Date);
    encode_fields(
        &iban.into(),
        &reference.into(),
        &euro_amount.into(),
        due_date.as_ref(),
    )
}

/// То же, что [`encode`], для запроса из JSON.
pub fn encode_payment(payment: &Payment) -> Result<Code> {
    encode_fields(
        &payment.iban,
        &payment.reference,
        &payment.euro_amount,
        payment.due_date.as_ref(),
    )
}

fn encode_fields(
    iban: &Value,
    reference: &Value,
    euro_amount: &Value,
    due_date: Option<&Value>,
) -> Result<Code> {
    let validated = Iban::validate(iban).and_then(|iban| {
        let reference = Reference::validate(reference)?;
        let amount = EuroAmount::validate(euro_amount)?;
        let due_date = DueDate::validate(due_date)?;
        Ok((iban, reference, amount, due_date))
    });
    let (iban, reference, amount, due_date) = validated.inspect_err(|e| {
        tracing::debug!(kind = e.kind(), error = %e, "virtuaaliviivakoodi input rejected");
    })?;

    let symbol = reference.symbol();
    let code = Code::assemble(
        symbol,
        &[
            iban.normalize().as_str(),
            amount.normalize().as_str(),
            reference.normalize().as_str(),
            due_date.normalize().as_str(),
        ],
    );
    tracing::debug!(%symbol, "virtuaaliviivakoodi encoded");
    tracing::trace!(code = %code);
    Ok(code)
}

/// Разбирает код обратно на поля.
///
/// Длина проверяется первой, затем символ в колонке 0, до чтения прочих колонок.
pub fn decode(code: &str) -> Result<DeconstructResult> {
    let result = Code::parse(code).and_then(|code| deconstruct(&code));
    match &result {
        Ok(r) => tracing::debug!(symbol = %r.symbol, "virtuaaliviivakoodi decoded"),
        Err(e) => tracing::debug!(kind = e.kind(), error = %e, "virtuaaliviivakoodi rejected"),
    }
    result
}

/// Разбор уже проверенного кода.
pub fn deconstruct(code: &Code) -> Result<DeconstructResult> {
    let reference = Reference::deconstruct(code)?;
    Ok(DeconstructResult {
        symbol: code.symbol(),
        iban: Iban::deconstruct(code)?.into_string(),
        reference: reference.to_string(),
        euro_amount: EuroAmount::deconstruct(code)?.value(),
        due_date: DueDate::deconstruct(code)?.date(),
    })
}
