//! Conversion declarations and the pairwise-closed factor table
//!
//! A table is built once from a sparse list of declared conversions and is
//! immutable afterwards. Construction eagerly derives every transitive,
//! reverse, and identity factor, so the table is fully pairwise-populated
//! within each connected component: lookups are a double map access, never a
//! path search. The cost is O(component size) work per declared edge.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::UnitError;

/// A single declared conversion: `1 from = factor to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub from: String,
    pub factor: f64,
    pub to: String,
}

impl Conversion {
    pub fn new(from: impl Into<String>, factor: f64, to: impl Into<String>) -> Self {
        Conversion {
            from: from.into(),
            factor,
            to: to.into(),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1 {} = {} {}", self.from, self.factor, self.to)
    }
}

/// A complete pairwise conversion table derived from sparse declarations.
///
/// Serializes as its declaration list; deserializing rebuilds the matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "Vec<Conversion>", into = "Vec<Conversion>")]
pub struct ConversionTable {
    conversions: Vec<Conversion>,
    matrix: HashMap<String, HashMap<String, f64>>,
}

impl ConversionTable {
    /// Build the closed table from declarations, processed in input order.
    ///
    /// Declarations are not validated: a redundant declaration is a no-op
    /// (first write wins), and a declaration between two unknown units
    /// starts a new component.
    pub fn new<I>(conversions: I) -> Self
    where
        I: IntoIterator<Item = Conversion>,
    {
        let conversions: Vec<Conversion> = conversions.into_iter().collect();
        let mut matrix = HashMap::new();
        for c in &conversions {
            Self::set(&mut matrix, &c.from, &c.to, c.factor);
        }
        ConversionTable {
            conversions,
            matrix,
        }
    }

    /// Record `1 from = factor to` and everything that follows from it.
    ///
    /// Worklist form of the recursive closure step. Each task `(a, b, f)`
    /// means "record 1 a = f b":
    /// - a pair already recorded is skipped, which both makes redundant
    ///   declarations no-ops and bounds the loop (at most units² insertions);
    /// - a new unit gets a fresh row;
    /// - otherwise `b` inherits a factor to every unit `a` already reaches
    ///   (1 a = f b and 1 a = g other give 1 b = g/f other), and only then
    ///   is `a -> b` itself recorded;
    /// - every insertion queues the reverse factor and both identities.
    fn set(matrix: &mut HashMap<String, HashMap<String, f64>>, from: &str, to: &str, factor: f64) {
        let mut pending = vec![(from.to_string(), to.to_string(), factor)];

        while let Some((a, b, f)) = pending.pop() {
            match matrix.entry(a.clone()) {
                Entry::Occupied(mut entry) => {
                    let row = entry.get_mut();
                    if row.contains_key(&b) {
                        continue;
                    }
                    for (other, &g) in row.iter() {
                        pending.push((b.clone(), other.clone(), g / f));
                    }
                    row.insert(b.clone(), f);
                }
                Entry::Vacant(entry) => {
                    entry.insert(HashMap::from([(b.clone(), f)]));
                }
            }

            pending.push((b.clone(), a.clone(), 1.0 / f));
            pending.push((b.clone(), b, 1.0));
            pending.push((a.clone(), a, 1.0));
        }
    }

    /// Multiplier turning an amount in `from` into an amount in `to`.
    ///
    /// Never defaults: an absent unit is `UnknownUnit`, two known units in
    /// disjoint components are `NoConversionPath`.
    pub fn factor(&self, from: &str, to: &str) -> Result<f64, UnitError> {
        let row = self
            .matrix
            .get(from)
            .ok_or_else(|| UnitError::UnknownUnit(from.to_string()))?;
        match row.get(to) {
            Some(&f) => Ok(f),
            None if self.matrix.contains_key(to) => Err(UnitError::NoConversionPath {
                from: from.to_string(),
                to: to.to_string(),
            }),
            None => Err(UnitError::UnknownUnit(to.to_string())),
        }
    }

    /// Whether `unit` appeared in any declaration.
    pub fn contains(&self, unit: &str) -> bool {
        self.matrix.contains_key(unit)
    }

    /// All known unit names, in no particular order.
    pub fn units(&self) -> impl Iterator<Item = &str> {
        self.matrix.keys().map(|s| s.as_str())
    }

    /// Number of known units.
    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// The declarations this table was built from, in input order.
    pub fn conversions(&self) -> &[Conversion] {
        &self.conversions
    }
}

impl From<Vec<Conversion>> for ConversionTable {
    fn from(conversions: Vec<Conversion>) -> Self {
        ConversionTable::new(conversions)
    }
}

impl From<ConversionTable> for Vec<Conversion> {
    fn from(table: ConversionTable) -> Self {
        table.conversions
    }
}
