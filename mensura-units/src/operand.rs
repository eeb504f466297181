//! Operand kinds accepted by quantity operations
//!
//! Each binary operation on a quantity accepts exactly one operand kind:
//! comparison and addition want another quantity, scaling wants a plain
//! scalar. `Operand` carries either, and the operation rejects the wrong
//! kind up front with `InvalidOperand`.

use mensura_core::Scalar;

use crate::Quantity;

/// An argument to a quantity operation: a plain scalar or another quantity.
#[derive(Debug, Clone)]
pub enum Operand {
    Scalar(Scalar),
    Quantity(Quantity),
}

impl Operand {
    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Operand::Scalar(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_quantity(&self) -> Option<&Quantity> {
        match self {
            Operand::Quantity(q) => Some(q),
            _ => None,
        }
    }

    /// Type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "Scalar",
            Operand::Quantity(_) => "Quantity",
        }
    }
}

impl From<Scalar> for Operand {
    fn from(s: Scalar) -> Self {
        Operand::Scalar(s)
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Scalar(Scalar::Int(n))
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Operand::Scalar(Scalar::Int(n as i64))
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Scalar(Scalar::Float(x))
    }
}

impl From<Quantity> for Operand {
    fn from(q: Quantity) -> Self {
        Operand::Quantity(q)
    }
}

impl From<&Quantity> for Operand {
    fn from(q: &Quantity) -> Self {
        Operand::Quantity(q.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Conversion, ConversionTable};
    use std::sync::Arc;

    #[test]
    fn test_scalar_accessors() {
        let op = Operand::from(2.5);
        assert_eq!(op.as_scalar(), Some(Scalar::Float(2.5)));
        assert!(op.as_quantity().is_none());
        assert_eq!(op.type_name(), "Scalar");
    }

    #[test]
    fn test_quantity_accessors() {
        let table = Arc::new(ConversionTable::new([Conversion::new(
            "foot", 0.3048, "meter",
        )]));
        let op = Operand::from(Quantity::new(1.0, "foot", &table));
        assert!(op.as_scalar().is_none());
        assert_eq!(op.as_quantity().unwrap().unit, "foot");
        assert_eq!(op.type_name(), "Quantity");
    }

    #[test]
    fn test_int_operand_keeps_kind() {
        let op = Operand::from(3);
        assert_eq!(op.as_scalar().unwrap().as_i64(), Some(3));
    }
}
