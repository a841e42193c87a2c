//! viivakoodilib — кодирование и разбор финского виртуального штрихкода
//! (virtuaaliviivakoodi, 54 цифры: IBAN, сумма, ссылка, срок оплаты).

pub mod code;
pub mod codec;
pub mod error;
pub mod fields;
pub mod layout;
pub mod model;
pub mod symbol;
pub mod traits;

pub use code::Code;
pub use codec::{decode, deconstruct, encode, encode_payment};
pub use error::{Result, ViivakoodiError};
pub use model::{DeconstructResult, Payment, SymbolVersion, Value};
