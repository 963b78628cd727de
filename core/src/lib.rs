//! Kleene's three-valued propositional logic.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_in_result)]

pub mod connective;
pub mod error;
pub mod table;
pub mod value;

pub use connective::{Connective, Operand};
pub use error::Error;
pub use table::{Row, TruthTable};
pub use value::{DOMAIN, Ternary};
