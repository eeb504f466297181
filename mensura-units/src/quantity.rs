//! Quantity type - an amount tagged with a unit name
//!
//! A quantity pairs an `f64` amount with a unit name and a shared handle to
//! the table that gives the name meaning. Every operation returns a new
//! quantity; nothing mutates the receiver or the table.

use std::fmt;
use std::sync::Arc;

use mensura_core::{approx_eq, Scalar};

use crate::{ConversionTable, Operand, UnitError};

/// A numeric amount tagged with a unit, interpreted against a shared
/// conversion table.
#[derive(Debug, Clone)]
pub struct Quantity {
    /// The numeric amount
    pub amount: f64,
    /// The unit-name key
    pub unit: String,
    table: Arc<ConversionTable>,
}

impl Quantity {
    /// Create a new quantity. Performs no validation; see [`Quantity::valid`].
    pub fn new(amount: f64, unit: impl Into<String>, table: &Arc<ConversionTable>) -> Self {
        Quantity {
            amount,
            unit: unit.into(),
            table: Arc::clone(table),
        }
    }

    /// The table this quantity's unit is interpreted against.
    pub fn table(&self) -> &Arc<ConversionTable> {
        &self.table
    }

    /// Advisory check: the amount is finite and the unit is known to the
    /// table. Construction does not enforce this; callers that care check
    /// it explicitly.
    pub fn valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Like [`Quantity::valid`], but says which precondition failed.
    pub fn validate(&self) -> Result<(), UnitError> {
        if !self.amount.is_finite() {
            return Err(UnitError::InvalidAmount(self.amount));
        }
        if !self.table.contains(&self.unit) {
            return Err(UnitError::UnknownUnit(self.unit.clone()));
        }
        Ok(())
    }

    /// The amount expressed in `to`, without wrapping it in a new quantity.
    pub fn get(&self, to: &str) -> Result<f64, UnitError> {
        Ok(self.amount * self.table.factor(&self.unit, to)?)
    }

    /// This quantity expressed in `to`.
    pub fn to(&self, to: &str) -> Result<Quantity, UnitError> {
        Ok(Quantity {
            amount: self.get(to)?,
            unit: to.to_string(),
            table: Arc::clone(&self.table),
        })
    }

    /// Same unit and table, different amount.
    pub fn with_amount(&self, amount: f64) -> Quantity {
        Quantity {
            amount,
            unit: self.unit.clone(),
            table: Arc::clone(&self.table),
        }
    }

    /// The amount negated, unit unchanged.
    pub fn negate(&self) -> Quantity {
        self.with_amount(-self.amount)
    }

    /// Tolerance-based equality: `other` converted into this unit must match
    /// the amount within epsilon. Requires a same-family quantity operand.
    pub fn eq(&self, other: impl Into<Operand>) -> Result<bool, UnitError> {
        let other = self.expect_same_family(other.into())?;
        Ok(approx_eq(self.amount, other.get(&self.unit)?))
    }

    /// Strict greater-than after converting `other` into this unit.
    /// Requires a same-family quantity operand.
    pub fn gt(&self, other: impl Into<Operand>) -> Result<bool, UnitError> {
        let other = self.expect_same_family(other.into())?;
        Ok(self.amount > other.get(&self.unit)?)
    }

    /// Sum, expressed in this quantity's unit. Requires a same-family
    /// quantity operand: `a.add(b)` and `b.add(a)` are equal amounts in
    /// different units.
    pub fn add(&self, other: impl Into<Operand>) -> Result<Quantity, UnitError> {
        let other = self.expect_same_family(other.into())?;
        Ok(self.with_amount(self.amount + other.get(&self.unit)?))
    }

    /// Difference, expressed in this quantity's unit. Requires a
    /// same-family quantity operand.
    pub fn sub(&self, other: impl Into<Operand>) -> Result<Quantity, UnitError> {
        let other = self.expect_same_family(other.into())?;
        Ok(self.with_amount(self.amount - other.get(&self.unit)?))
    }

    /// Amount scaled by a plain scalar, unit unchanged. A quantity operand
    /// is rejected: multiplying two quantities would change the dimension.
    pub fn mul(&self, other: impl Into<Operand>) -> Result<Quantity, UnitError> {
        let k = expect_scalar(other.into())?;
        Ok(self.with_amount(self.amount * k.as_f64()))
    }

    /// Amount divided by a plain scalar, unit unchanged.
    pub fn div(&self, other: impl Into<Operand>) -> Result<Quantity, UnitError> {
        let k = expect_scalar(other.into())?;
        Ok(self.with_amount(self.amount / k.as_f64()))
    }

    /// Amount raised to a plain scalar power, unit unchanged.
    ///
    /// The unit tag deliberately does not change: squaring `5 foot` gives
    /// `25 foot`, not an area. Tables model a single dimension and carry no
    /// exponent tracking.
    pub fn pow(&self, other: impl Into<Operand>) -> Result<Quantity, UnitError> {
        let k = expect_scalar(other.into())?;
        let amount = match k {
            Scalar::Int(n) => self.amount.powi(n as i32),
            Scalar::Float(x) => self.amount.powf(x),
        };
        Ok(self.with_amount(amount))
    }

    /// Unwrap a quantity operand sharing this quantity's table.
    fn expect_same_family(&self, operand: Operand) -> Result<Quantity, UnitError> {
        match operand {
            Operand::Quantity(q) if Arc::ptr_eq(&self.table, &q.table) => Ok(q),
            Operand::Quantity(_) => Err(UnitError::InvalidOperand {
                expected: "Quantity sharing this conversion table",
                got: "Quantity from a different table",
            }),
            other => Err(UnitError::InvalidOperand {
                expected: "Quantity sharing this conversion table",
                got: other.type_name(),
            }),
        }
    }
}

/// Unwrap a plain-scalar operand.
fn expect_scalar(operand: Operand) -> Result<Scalar, UnitError> {
    match operand {
        Operand::Scalar(s) => Ok(s),
        other => Err(UnitError::InvalidOperand {
            expected: "Scalar",
            got: other.type_name(),
        }),
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}
