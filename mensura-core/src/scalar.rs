//! The plain-number operand kind
//!
//! Unit-aware operations distinguish two kinds of operand: another quantity,
//! or a plain number. `Scalar` is the plain-number kind, keeping the
//! integer/float distinction the caller supplied while converting to `f64`
//! at the point of arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A plain numeric operand: an integer or a 64-bit float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    /// The value as an `f64`. Lossy for integers beyond 2^53.
    pub fn as_f64(&self) -> f64 {
        match self {
            Scalar::Int(n) => *n as f64,
            Scalar::Float(x) => *x,
        }
    }

    /// The value as an `i64`, if it was supplied as an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(n) => Some(*n),
            Scalar::Float(_) => None,
        }
    }

    /// Integers are always finite; floats may be NaN or infinite.
    pub fn is_finite(&self) -> bool {
        match self {
            Scalar::Int(_) => true,
            Scalar::Float(x) => x.is_finite(),
        }
    }

    /// Type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Int(_) => "Int",
            Scalar::Float(_) => "Float",
        }
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Int(n as i64)
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Scalar::Float(x)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(x) => write!(f, "{}", x),
        }
    }
}
