//! Quantity guard at the value-object boundary.

use pantryplan_core::{DomainError, DomainResult};

const INVALID_NUMBER_MESSAGE: &str = "Quantity must be a valid number";
const NON_POSITIVE_MESSAGE: &str = "Quantity must be greater than zero";

/// Validate a quantity: finite and strictly positive.
///
/// The increment/decrement path deliberately bypasses this guard — driving a
/// quantity to zero or below removes the item rather than failing.
pub fn validate_quantity(value: f64) -> DomainResult<f64> {
    if !value.is_finite() {
        return Err(DomainError::validation(INVALID_NUMBER_MESSAGE));
    }

    if value <= 0.0 {
        return Err(DomainError::validation(NON_POSITIVE_MESSAGE));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantryplan_core::ErrorCode;

    #[test]
    fn accepts_positive_finite_values() {
        assert_eq!(validate_quantity(1.0).unwrap(), 1.0);
        assert_eq!(validate_quantity(0.5).unwrap(), 0.5);
        assert_eq!(validate_quantity(12.0).unwrap(), 12.0);
    }

    #[test]
    fn rejects_non_finite_values() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = validate_quantity(value).unwrap_err();
            assert_eq!(err.code(), ErrorCode::ValidationError);
            assert_eq!(err.to_string(), INVALID_NUMBER_MESSAGE);
        }
    }

    #[test]
    fn rejects_zero_and_negative_values() {
        for value in [0.0, -0.25, -3.0] {
            let err = validate_quantity(value).unwrap_err();
            assert_eq!(err.code(), ErrorCode::ValidationError);
            assert_eq!(err.to_string(), NON_POSITIVE_MESSAGE);
        }
    }
}
