//! Kleene's three-valued logic: the scalar truth value.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A single Kleene truth value.
///
/// Uses `#[repr(u8)]` with discriminants encoding `(neg_bit << 1) | pos_bit`:
///
/// | pos | neg | bits   | variant   |
/// |-----|-----|--------|-----------|
/// | 0   | 0   | `0b00` | `Unknown` |
/// | 1   | 0   | `0b01` | `True`    |
/// | 0   | 1   | `0b10` | `False`   |
///
/// The fourth pattern, `0b11`, is not a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum::EnumIter))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[repr(u8)]
pub enum Ternary {
    Unknown = 0b00, // pos=0, neg=0
    True = 0b01,    // pos=1, neg=0
    False = 0b10,   // pos=0, neg=1
}

/// The ordered domain truth tables are laid out over.
pub const DOMAIN: [Ternary; 3] = [Ternary::True, Ternary::Unknown, Ternary::False];

const FROM_BITS: [Option<Ternary>; 4] = [
    Some(Ternary::Unknown), // 0b00: pos=0, neg=0
    Some(Ternary::True),    // 0b01: pos=1, neg=0
    Some(Ternary::False),   // 0b10: pos=0, neg=1
    None,                   // 0b11: pos=1, neg=1
];

impl Ternary {
    /// Decodes the `(neg_bit << 1) | pos_bit` encoding.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        let i = bits as usize;
        if i < FROM_BITS.len() { FROM_BITS[i] } else { None }
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    #[inline]
    #[must_use]
    pub const fn is_known(self) -> bool {
        self as u8 != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_unknown(self) -> bool {
        !self.is_known()
    }

    #[must_use]
    pub const fn to_bool(self) -> Option<bool> {
        match self {
            Ternary::True => Some(true),
            Ternary::False => Some(false),
            Ternary::Unknown => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Ternary::True => "true",
            Ternary::False => "false",
            Ternary::Unknown => "unknown",
        }
    }

    const fn as_letter(self) -> &'static str {
        match self {
            Ternary::True => "T",
            Ternary::False => "F",
            Ternary::Unknown => "U",
        }
    }

    /// Conjunction: `False` dominates `Unknown`, which dominates `True`.
    #[must_use]
    pub fn and(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Ternary::True, b) => b,
            (Ternary::False, _) | (Ternary::Unknown, Ternary::False) => Ternary::False,
            (Ternary::Unknown, _) => Ternary::Unknown,
        }
    }

    /// Disjunction: `True` dominates `Unknown`, which dominates `False`.
    #[must_use]
    pub fn or(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Ternary::False, b) => b,
            (Ternary::True, _) | (Ternary::Unknown, Ternary::True) => Ternary::True,
            (Ternary::Unknown, _) => Ternary::Unknown,
        }
    }

    /// Equivalence. Unknown on either side is never resolved, not even
    /// against itself.
    #[doc(alias = "eq")]
    #[must_use]
    pub fn equiv(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Ternary::Unknown, _) | (_, Ternary::Unknown) => Ternary::Unknown,
            (a, b) => Ternary::from(a == b),
        }
    }

    /// Exclusive or, derived as `(x | y) & !(x ≡ y)`.
    #[must_use]
    pub fn xor(self, rhs: Self) -> Self {
        self.or(rhs).and(!self.equiv(rhs))
    }

    /// Material implication with Kleene propagation.
    ///
    /// | x \ y     | `True` | `Unknown` | `False`   |
    /// |-----------|--------|-----------|-----------|
    /// | `True`    | `True` | `Unknown` | `False`   |
    /// | `Unknown` | `True` | `Unknown` | `Unknown` |
    /// | `False`   | `True` | `True`    | `True`    |
    #[doc(alias = "then")]
    #[must_use]
    pub fn implies(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Ternary::False, _) | (_, Ternary::True) => Ternary::True,
            (Ternary::True, Ternary::False) => Ternary::False,
            (Ternary::Unknown | Ternary::True, _) => Ternary::Unknown,
        }
    }
}

impl std::ops::Not for Ternary {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Ternary::True => Ternary::False,
            Ternary::False => Ternary::True,
            Ternary::Unknown => Ternary::Unknown,
        }
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $inherent:ident) => {
        impl std::ops::$trait for Ternary {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Ternary::$inherent(self, rhs)
            }
        }

        impl std::ops::$assign_trait for Ternary {
            fn $assign_method(&mut self, rhs: Self) {
                *self = Ternary::$inherent(*self, rhs);
            }
        }
    };
}

impl_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, and);
impl_binop!(BitOr, bitor, BitOrAssign, bitor_assign, or);
impl_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, xor);

impl From<bool> for Ternary {
    fn from(b: bool) -> Self {
        if b { Ternary::True } else { Ternary::False }
    }
}

impl From<Option<bool>> for Ternary {
    fn from(b: Option<bool>) -> Self {
        b.map_or(Ternary::Unknown, Ternary::from)
    }
}

impl From<Ternary> for Option<bool> {
    fn from(t: Ternary) -> Self {
        t.to_bool()
    }
}

impl From<Ternary> for String {
    fn from(t: Ternary) -> Self {
        t.as_str().to_owned()
    }
}

impl TryFrom<u8> for Ternary {
    type Error = Error;

    fn try_from(bits: u8) -> Result<Self, Error> {
        Ternary::from_bits(bits).ok_or_else(|| Error::InvalidValue(format!("{bits:#04b}")))
    }
}

impl TryFrom<char> for Ternary {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Error> {
        match c.to_ascii_lowercase() {
            't' | '1' => Ok(Ternary::True),
            'f' | '0' => Ok(Ternary::False),
            'u' | '?' => Ok(Ternary::Unknown),
            _ => Err(Error::InvalidValue(format!("{c:?}"))),
        }
    }
}

impl FromStr for Ternary {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ternary::try_from(c).map_err(|_| Error::InvalidValue(format!("{s:?}")));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "true" => Ok(Ternary::True),
            "false" => Ok(Ternary::False),
            "unknown" => Ok(Ternary::Unknown),
            _ => Err(Error::InvalidValue(format!("{s:?}"))),
        }
    }
}

impl TryFrom<String> for Ternary {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Error> {
        s.parse()
    }
}

/// Prints `true`, `false` or `unknown`; the alternate form prints `T`, `F`
/// or `U`. Width and alignment are honored.
impl fmt::Display for Ternary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.pad(self.as_letter())
        } else {
            f.pad(self.as_str())
        }
    }
}
