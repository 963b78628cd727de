//! Truth tables over the ordered domain.

use std::fmt;

use crate::connective::Connective;
use crate::value::{DOMAIN, Ternary};


/// One `(x, y)` combination and the result of every [`Connective`] on it,
/// in [`Connective::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub x: Ternary,
    pub y: Ternary,
    pub results: [Ternary; Connective::ALL.len()],
}

impl Row {
    #[must_use]
    pub fn new(x: Ternary, y: Ternary) -> Self {
        Self {
            x,
            y,
            results: Connective::ALL.map(|c| c.eval(x, y)),
        }
    }

    #[must_use]
    pub fn get(&self, connective: Connective) -> Ternary {
        self.results[connective as usize]
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Row {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(2 + self.results.len()))?;
        map.serialize_entry("x", &self.x)?;
        map.serialize_entry("y", &self.y)?;
        for (c, v) in Connective::ALL.iter().zip(&self.results) {
            map.serialize_entry(c.name(), v)?;
        }
        map.end()
    }
}

/// Every connective applied to every pair in `DOMAIN × DOMAIN`, in row
/// order TT, TU, TF, UT, UU, UF, FT, FU, FF.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TruthTable {
    rows: Vec<Row>,
}

impl TruthTable {
    #[must_use]
    pub fn new() -> Self {
        let rows = DOMAIN
            .iter()
            .flat_map(|&x| DOMAIN.iter().map(move |&y| Row::new(x, y)))
            .collect();
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The results of one connective, top to bottom.
    #[must_use]
    pub fn column(&self, connective: Connective) -> Vec<Ternary> {
        self.rows.iter().map(|row| row.get(connective)).collect()
    }
}

impl Default for TruthTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders one line per row with values as `T`, `U`, `F`, each column
/// right-aligned under its connective's name.
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x  y")?;
        for c in Connective::ALL {
            write!(f, "  {c}")?;
        }
        for row in &self.rows {
            write!(f, "\n{:#}  {:#}", row.x, row.y)?;
            for (c, v) in Connective::ALL.iter().zip(&row.results) {
                write!(f, "  {v:>#width$}", width = c.name().len())?;
            }
        }
        Ok(())
    }
}
