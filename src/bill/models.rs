use crate::bill::error::{BillError, BillResult};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One ordered product on a tab.
///
/// Constructed fresh from each upstream payload and never edited in place;
/// the only mutation is quantity accumulation through [`LineItem::merge`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Opaque order-system reference, when the upstream supplies one.
    #[serde(default)]
    pub identifier: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub quantity: u32,
    pub unit_price: Money,
}

impl LineItem {
    /// Total price for the line: unit price times quantity.
    pub fn total_price(&self) -> Money {
        self.unit_price * i64::from(self.quantity)
    }

    /// Two line items are mergeable iff their name and unit price match.
    pub fn can_merge(&self, other: &LineItem) -> bool {
        self.name == other.name && self.unit_price == other.unit_price
    }

    /// Fold another line into this one by combining quantities.
    ///
    /// # Returns
    /// `Err(BillError::MergeConflict)` when name or unit price differ.
    pub fn merge(&mut self, other: &LineItem) -> BillResult<()> {
        if !self.can_merge(other) {
            return Err(BillError::MergeConflict {
                left_name: self.name.clone(),
                left_unit_price: self.unit_price,
                right_name: other.name.clone(),
                right_unit_price: other.unit_price,
            });
        }
        self.quantity += other.quantity;
        Ok(())
    }
}

/// Aggregate figures reported by the upstream order system.
///
/// These are carried as-is rather than re-derived from line items, so the
/// engine tolerates server-side tax and discount logic it does not
/// replicate. Every field missing from the input decodes as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillTotals {
    pub sub_total: Money,
    pub tax: Money,
    pub approximate_tax: Money,
    pub service_charges: Money,
    pub other_charges: Money,
    pub due: Money,
    pub total: Money,
    /// Count of comped items excluded from the payable bill.
    pub free_drinks_count: u32,
    /// Money value of the comped items.
    pub free_drinks_price: Money,
}

/// The bill aggregate: merged line items, upstream totals, and the
/// currently selected discount/gratuity parameters.
///
/// Monetary breakdown fields are computed on read, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub items: Vec<LineItem>,
    pub totals: BillTotals,
    pub gratuity_percent: i64,
    #[serde(default)]
    pub exact_gratuity: Option<Money>,
    pub discount_percent: i64,
}

impl Bill {
    /// Tax shown on the bill: the upstream approximate tax figure.
    pub fn tax_price(&self) -> Money {
        self.totals.approximate_tax
    }

    /// The gratuity amount. A positive exact gratuity wins over the
    /// percentage; otherwise the percentage is taken of the subtotal plus
    /// the comped-drinks value (tips are earned on comped items too).
    pub fn gratuity_price(&self) -> Money {
        match self.exact_gratuity {
            Some(exact) if exact > Money::ZERO => exact,
            _ => (self.totals.sub_total + self.totals.free_drinks_price)
                .percent(self.gratuity_percent),
        }
    }

    /// The discount amount: `discount_percent` of the subtotal.
    pub fn discount_price(&self) -> Money {
        self.totals.sub_total.percent(self.discount_percent)
    }

    /// Grand total: subtotal minus discount, plus gratuity and tax.
    pub fn total_price(&self) -> Money {
        self.totals.sub_total - self.discount_price() + self.gratuity_price() + self.tax_price()
    }

    /// A bill with no items or a zero subtotal is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() || self.totals.sub_total.is_zero()
    }
}

impl Default for Bill {
    fn default() -> Self {
        Bill {
            items: Vec::new(),
            totals: BillTotals::default(),
            gratuity_percent: 0,
            exact_gratuity: None,
            discount_percent: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: u32, unit_cents: i64) -> LineItem {
        LineItem {
            identifier: None,
            name: name.to_string(),
            description: None,
            quantity,
            unit_price: Money::from_cents(unit_cents),
        }
    }

    #[test]
    fn test_line_item_total_price() {
        assert_eq!(item("IPA", 3, 750).total_price(), Money::from_cents(2250));
    }

    #[test]
    fn test_can_merge_same_name_and_price() {
        assert!(item("IPA", 1, 750).can_merge(&item("IPA", 4, 750)));
    }

    #[test]
    fn test_cannot_merge_different_price() {
        // Same name at a different price (happy-hour vs full) stays separate
        assert!(!item("IPA", 1, 750).can_merge(&item("IPA", 1, 500)));
    }

    #[test]
    fn test_cannot_merge_different_name() {
        assert!(!item("IPA", 1, 750).can_merge(&item("Stout", 1, 750)));
    }

    #[test]
    fn test_merge_combines_quantities() {
        let mut a = item("IPA", 2, 750);
        a.merge(&item("IPA", 3, 750)).unwrap();
        assert_eq!(a.quantity, 5);
        assert_eq!(a.total_price(), Money::from_cents(3750));
    }

    #[test]
    fn test_merge_conflict_reports_both_sides() {
        let mut a = item("IPA", 2, 750);
        let err = a.merge(&item("Stout", 1, 800)).unwrap_err();
        match err {
            BillError::MergeConflict {
                left_name,
                left_unit_price,
                right_name,
                right_unit_price,
            } => {
                assert_eq!(left_name, "IPA");
                assert_eq!(left_unit_price, Money::from_cents(750));
                assert_eq!(right_name, "Stout");
                assert_eq!(right_unit_price, Money::from_cents(800));
            }
        }
        // Failed merge must leave the receiver untouched
        assert_eq!(a.quantity, 2);
    }

    #[test]
    fn test_totals_missing_fields_default_to_zero() {
        let totals: BillTotals = serde_json::from_str(r#"{"sub_total": 2000}"#).unwrap();
        assert_eq!(totals.sub_total, Money::from_cents(2000));
        assert_eq!(totals.tax, Money::ZERO);
        assert_eq!(totals.approximate_tax, Money::ZERO);
        assert_eq!(totals.free_drinks_count, 0);
        assert_eq!(totals.free_drinks_price, Money::ZERO);
    }

    #[test]
    fn test_gratuity_price_exact_overrides_percent() {
        let bill = Bill {
            totals: BillTotals {
                sub_total: Money::from_cents(2000),
                ..BillTotals::default()
            },
            gratuity_percent: 18,
            exact_gratuity: Some(Money::from_cents(500)),
            ..Bill::default()
        };
        assert_eq!(bill.gratuity_price(), Money::from_cents(500));
    }

    #[test]
    fn test_gratuity_price_zero_exact_falls_back_to_percent() {
        let bill = Bill {
            totals: BillTotals {
                sub_total: Money::from_cents(2000),
                ..BillTotals::default()
            },
            gratuity_percent: 18,
            exact_gratuity: Some(Money::ZERO),
            ..Bill::default()
        };
        assert_eq!(bill.gratuity_price(), Money::from_cents(360));
    }

    #[test]
    fn test_gratuity_includes_free_drinks_in_base() {
        let bill = Bill {
            totals: BillTotals {
                sub_total: Money::from_cents(1500),
                free_drinks_price: Money::from_cents(500),
                ..BillTotals::default()
            },
            gratuity_percent: 20,
            ..Bill::default()
        };
        // 20% of (1500 + 500)
        assert_eq!(bill.gratuity_price(), Money::from_cents(400));
    }

    #[test]
    fn test_discount_price_rounds_half_up() {
        let bill = Bill {
            totals: BillTotals {
                sub_total: Money::from_cents(999),
                ..BillTotals::default()
            },
            discount_percent: 10,
            ..Bill::default()
        };
        assert_eq!(bill.discount_price(), Money::from_cents(100));
    }

    #[test]
    fn test_total_price_breakdown() {
        let bill = Bill {
            items: vec![item("Old Fashioned", 2, 1000)],
            totals: BillTotals {
                sub_total: Money::from_cents(2000),
                approximate_tax: Money::from_cents(150),
                ..BillTotals::default()
            },
            gratuity_percent: 18,
            discount_percent: 20,
            ..Bill::default()
        };
        assert_eq!(bill.discount_price(), Money::from_cents(400));
        assert_eq!(bill.gratuity_price(), Money::from_cents(360));
        assert_eq!(bill.total_price(), Money::from_cents(2110));
    }

    #[test]
    fn test_empty_bill_is_safe() {
        let bill = Bill::default();
        assert!(bill.is_empty());
        assert_eq!(bill.gratuity_price(), Money::ZERO);
        assert_eq!(bill.total_price(), Money::ZERO);
    }

    #[test]
    fn test_items_without_subtotal_is_still_empty() {
        let bill = Bill {
            items: vec![item("Water", 1, 0)],
            ..Bill::default()
        };
        assert!(bill.is_empty());
    }
}
