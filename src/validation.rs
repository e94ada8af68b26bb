// Validation utilities module
// Provides custom validation functions for domain-specific rules

use validator::ValidationError;

/// Highest accepted exact tip, in cents ($5000).
pub const MAX_EXACT_TIP_CENTS: i64 = 500_000;

/// Validates that a tip percent is between 0 and 100 inclusive
pub fn validate_tip_percent(percent: i64) -> Result<(), ValidationError> {
    if (0..=100).contains(&percent) {
        Ok(())
    } else {
        Err(ValidationError::new("tip_percent_out_of_range"))
    }
}

/// Validates that an exact tip in cents is non-negative and under the ceiling
pub fn validate_exact_tip_cents(cents: i64) -> Result<(), ValidationError> {
    if (0..=MAX_EXACT_TIP_CENTS).contains(&cents) {
        Ok(())
    } else {
        Err(ValidationError::new("exact_tip_out_of_range"))
    }
}

/// Validates that a line item quantity is at least 1
pub fn validate_quantity(quantity: u32) -> Result<(), ValidationError> {
    if quantity >= 1 {
        Ok(())
    } else {
        Err(ValidationError::new("quantity_must_be_positive"))
    }
}

/// Validates that a discount percent is between 0 and 100 inclusive
pub fn validate_discount_percent(percent: i64) -> Result<(), ValidationError> {
    if (0..=100).contains(&percent) {
        Ok(())
    } else {
        Err(ValidationError::new("discount_percent_out_of_range"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_percent_bounds() {
        assert!(validate_tip_percent(0).is_ok());
        assert!(validate_tip_percent(100).is_ok());
        assert!(validate_tip_percent(-1).is_err());
        assert!(validate_tip_percent(101).is_err());
    }

    #[test]
    fn test_exact_tip_bounds() {
        assert!(validate_exact_tip_cents(0).is_ok());
        assert!(validate_exact_tip_cents(MAX_EXACT_TIP_CENTS).is_ok());
        assert!(validate_exact_tip_cents(-5).is_err());
        assert!(validate_exact_tip_cents(MAX_EXACT_TIP_CENTS + 1).is_err());
    }

    #[test]
    fn test_quantity_bounds() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());
    }

    #[test]
    fn test_discount_percent_bounds() {
        assert!(validate_discount_percent(20).is_ok());
        assert!(validate_discount_percent(101).is_err());
    }
}
