//! Error type for table lookups and quantity operations

use thiserror::Error;

/// Errors raised by conversion-table lookups and quantity operations.
///
/// All errors are raised immediately at the operation that detects them;
/// nothing is retried or silently recovered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    /// A unit key with no entry in the conversion table.
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Both units are known but sit in disjoint declared components.
    #[error("no conversion path from '{from}' to '{to}'")]
    NoConversionPath { from: String, to: String },

    /// An operation received an operand of the wrong kind.
    #[error("invalid operand: expected {expected}, got {got}")]
    InvalidOperand {
        expected: &'static str,
        got: &'static str,
    },

    /// An amount that is not a finite number.
    #[error("invalid amount: {0}")]
    InvalidAmount(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            format!("{}", UnitError::UnknownUnit("furlong".into())),
            "unknown unit: furlong"
        );
        assert_eq!(
            format!(
                "{}",
                UnitError::NoConversionPath {
                    from: "foot".into(),
                    to: "gram".into()
                }
            ),
            "no conversion path from 'foot' to 'gram'"
        );
        assert_eq!(
            format!(
                "{}",
                UnitError::InvalidOperand {
                    expected: "Scalar",
                    got: "Quantity"
                }
            ),
            "invalid operand: expected Scalar, got Quantity"
        );
    }
}
