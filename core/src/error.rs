use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An operand that is not `True`, `False` or `Unknown`. Carries a
    /// rendering of the rejected input.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}
