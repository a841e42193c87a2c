//! Таблица колонок virtuaaliviivakoodi (полуоткрытые диапазоны).

use std::ops::Range;

pub const CODE_LEN: usize = 54;

pub const SYMBOL: Range<usize> = 0..1;
pub const IBAN_DIGITS: Range<usize> = 1..17;
pub const AMOUNT_EUROS: Range<usize> = 17..23;
pub const AMOUNT_CENTS: Range<usize> = 23..25;
/// Версия 4: колонки 25..28 заняты ведущими нулями того же поля.
pub const REFERENCE_FIN: Range<usize> = 28..48;
pub const REFERENCE_RF_HEAD: Range<usize> = 25..27;
pub const REFERENCE_RF_TAIL: Range<usize> = 27..48;
pub const DUE_DATE: Range<usize> = 48..54;

/// Всё поле ссылки целиком, независимо от версии.
pub const REFERENCE: Range<usize> = 25..48;
