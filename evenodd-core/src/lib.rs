pub mod error;
pub mod parity;
pub mod validate;

pub use error::{Error, Result};
pub use parity::{is_even, ParityResult};
pub use validate::{validate, ValidInput};
