//! Определение версии символа.

use crate::{error::Result, layout, model::SymbolVersion};

const RF_PREFIX: &str = "RF";

/// По ссылке (без пробелов): `RF…` даёт версию 5, иначе 4.
pub fn detect_from_reference(reference: &str) -> SymbolVersion {
    if reference.starts_with(RF_PREFIX) {
        SymbolVersion::V5
    } else {
        SymbolVersion::V4
    }
}

/// По колонке 0 кода.
pub fn detect_from_code(code: &str) -> Result<SymbolVersion> {
    let digit = code.get(layout::SYMBOL).unwrap_or_default();
    digit.parse()
}
