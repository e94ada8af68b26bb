use crate::money::Money;

/// Error types for bill operations
#[derive(Debug, thiserror::Error)]
pub enum BillError {
    /// Two line items with differing name or unit price cannot be merged.
    /// Carries both candidates' conflicting fields so the caller can report
    /// exactly what disagreed.
    #[error(
        "cannot merge line item '{left_name}' at {left_unit_price} \
         with '{right_name}' at {right_unit_price}"
    )]
    MergeConflict {
        left_name: String,
        left_unit_price: Money,
        right_name: String,
        right_unit_price: Money,
    },
}

/// Result type alias for bill operations
pub type BillResult<T> = Result<T, BillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_conflict_display() {
        let error = BillError::MergeConflict {
            left_name: "IPA".to_string(),
            left_unit_price: Money::from_cents(750),
            right_name: "Stout".to_string(),
            right_unit_price: Money::from_cents(800),
        };
        assert_eq!(
            error.to_string(),
            "cannot merge line item 'IPA' at 7.50 with 'Stout' at 8.00"
        );
    }
}
