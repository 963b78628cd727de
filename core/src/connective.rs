//! Checked connectives.
//!
//! Every function here validates its arguments, left to right, before
//! evaluating. Anything that is not one of the three truth values is
//! rejected with [`Error::InvalidValue`]; nothing is coerced.

use std::fmt;

use crate::error::Error;
use crate::value::Ternary;

/// Input that can be validated into a [`Ternary`].
pub trait Operand {
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if the input does not denote `True`,
    /// `False` or `Unknown`.
    fn to_ternary(self) -> Result<Ternary, Error>;
}

impl Operand for Ternary {
    fn to_ternary(self) -> Result<Ternary, Error> {
        Ok(self)
    }
}

impl Operand for bool {
    fn to_ternary(self) -> Result<Ternary, Error> {
        Ok(Ternary::from(self))
    }
}

impl Operand for Option<bool> {
    fn to_ternary(self) -> Result<Ternary, Error> {
        Ok(Ternary::from(self))
    }
}

impl Operand for u8 {
    fn to_ternary(self) -> Result<Ternary, Error> {
        Ternary::try_from(self)
    }
}

impl Operand for char {
    fn to_ternary(self) -> Result<Ternary, Error> {
        Ternary::try_from(self)
    }
}

impl Operand for &str {
    fn to_ternary(self) -> Result<Ternary, Error> {
        self.parse()
    }
}

fn check(x: impl Operand) -> Result<Ternary, Error> {
    x.to_ternary()
        .inspect_err(|err| tracing::debug!(%err, "rejected operand"))
}

/// # Errors
///
/// Returns [`Error::InvalidValue`] if `x` is not a truth value.
pub fn not(x: impl Operand) -> Result<Ternary, Error> {
    Ok(!check(x)?)
}

/// `True` if `x` is `Unknown`, `False` otherwise. Never `Unknown`.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] if `x` is not a truth value.
pub fn is_unknown(x: impl Operand) -> Result<Ternary, Error> {
    Ok(Ternary::from(check(x)?.is_unknown()))
}

/// # Errors
///
/// Returns [`Error::InvalidValue`] if either operand is not a truth value.
pub fn and(x: impl Operand, y: impl Operand) -> Result<Ternary, Error> {
    Connective::And.apply(x, y)
}

/// # Errors
///
/// Returns [`Error::InvalidValue`] if either operand is not a truth value.
pub fn or(x: impl Operand, y: impl Operand) -> Result<Ternary, Error> {
    Connective::Or.apply(x, y)
}

/// # Errors
///
/// Returns [`Error::InvalidValue`] if either operand is not a truth value.
pub fn xor(x: impl Operand, y: impl Operand) -> Result<Ternary, Error> {
    Connective::Xor.apply(x, y)
}

/// Implication `x → y`.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] if either operand is not a truth value.
pub fn then(x: impl Operand, y: impl Operand) -> Result<Ternary, Error> {
    Connective::Then.apply(x, y)
}

/// # Errors
///
/// Returns [`Error::InvalidValue`] if either operand is not a truth value.
pub fn eq(x: impl Operand, y: impl Operand) -> Result<Ternary, Error> {
    Connective::Eq.apply(x, y)
}

/// Conjunction of every item; `True` when empty.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] for the first item that is not a truth
/// value.
pub fn all<I>(values: I) -> Result<Ternary, Error>
where
    I: IntoIterator,
    I::Item: Operand,
{
    values
        .into_iter()
        .try_fold(Ternary::True, |acc, x| Ok(acc & check(x)?))
}

/// Disjunction of every item; `False` when empty.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] for the first item that is not a truth
/// value.
pub fn any<I>(values: I) -> Result<Ternary, Error>
where
    I: IntoIterator,
    I::Item: Operand,
{
    values
        .into_iter()
        .try_fold(Ternary::False, |acc, x| Ok(acc | check(x)?))
}

/// The binary connectives, in truth table column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum::EnumIter))]
pub enum Connective {
    And,
    Or,
    Xor,
    Then,
    Eq,
}

impl Connective {
    pub const ALL: [Connective; 5] = [
        Connective::And,
        Connective::Or,
        Connective::Xor,
        Connective::Then,
        Connective::Eq,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Connective::And => "and",
            Connective::Or => "or",
            Connective::Xor => "xor",
            Connective::Then => "then",
            Connective::Eq => "eq",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Connective::And => "∧",
            Connective::Or => "∨",
            Connective::Xor => "⊕",
            Connective::Then => "→",
            Connective::Eq => "≡",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Connective::ALL.into_iter().find(|c| c.name() == name)
    }

    #[must_use]
    pub fn eval(self, x: Ternary, y: Ternary) -> Ternary {
        match self {
            Connective::And => x.and(y),
            Connective::Or => x.or(y),
            Connective::Xor => x.xor(y),
            Connective::Then => x.implies(y),
            Connective::Eq => x.equiv(y),
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if either operand is not a truth
    /// value.
    pub fn apply(self, x: impl Operand, y: impl Operand) -> Result<Ternary, Error> {
        let x = check(x)?;
        let y = check(y)?;
        Ok(self.eval(x, y))
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
