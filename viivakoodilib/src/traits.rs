//! Унифицированные трэйты поля: запись в колонки и чтение из них.

use crate::{code::Code, error::Result};

/// Поле → строка фиксированной ширины для своих колонок.
pub trait Normalize {
    fn normalize(&self) -> String;
}

/// Колонки кода → значение поля.
pub trait Deconstruct: Sized {
    fn deconstruct(code: &Code) -> Result<Self>;
}
