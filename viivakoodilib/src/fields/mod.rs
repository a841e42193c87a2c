//! Поля кода. Каждое поле валидирует «сырое» значение в свой тип
//! и реализует [`Normalize`](crate::traits::Normalize) /
//! [`Deconstruct`](crate::traits::Deconstruct).

pub mod amount;
pub mod due_date;
pub mod iban;
pub mod reference;

/// Убирает все пробельные символы, включая внутренние.
pub(crate) fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
