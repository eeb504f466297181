//! Unit family - a table paired with a default unit
//!
//! Saves call sites from repeating the table handle (and usually the unit)
//! at every construction.

use std::sync::Arc;

use crate::{ConversionTable, Quantity};

/// A conversion table bound to a default unit.
#[derive(Debug, Clone)]
pub struct UnitFamily {
    table: Arc<ConversionTable>,
    default_unit: String,
}

impl UnitFamily {
    pub fn new(table: Arc<ConversionTable>, default_unit: impl Into<String>) -> Self {
        UnitFamily {
            table,
            default_unit: default_unit.into(),
        }
    }

    /// A quantity in the default unit.
    pub fn value(&self, amount: f64) -> Quantity {
        Quantity::new(amount, self.default_unit.clone(), &self.table)
    }

    /// A quantity in an explicit unit of this family.
    pub fn value_in(&self, amount: f64, unit: &str) -> Quantity {
        Quantity::new(amount, unit, &self.table)
    }

    /// Zero in the default unit.
    pub fn zero(&self) -> Quantity {
        self.value(0.0)
    }

    /// One in the default unit.
    pub fn identity(&self) -> Quantity {
        self.value(1.0)
    }

    pub fn table(&self) -> &Arc<ConversionTable> {
        &self.table
    }

    pub fn default_unit(&self) -> &str {
        &self.default_unit
    }
}
