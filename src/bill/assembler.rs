use crate::bill::models::{Bill, BillTotals, LineItem};
use crate::money::Money;

/// Service for turning raw upstream payload fields into a [`Bill`] aggregate
pub struct BillAssembler;

impl BillAssembler {
    /// Fold raw line items into merged form.
    ///
    /// Items are accumulated left to right: an incoming item either merges
    /// into the first accumulated item it is mergeable with, or is appended.
    /// Order of first appearance is preserved.
    ///
    /// Merge eligibility is checked before merging, so the fold itself
    /// cannot fail.
    pub fn merge_items(raw_items: Vec<LineItem>) -> Vec<LineItem> {
        let mut merged: Vec<LineItem> = Vec::with_capacity(raw_items.len());
        for item in raw_items {
            match merged.iter_mut().find(|existing| existing.can_merge(&item)) {
                Some(existing) => existing.quantity += item.quantity,
                None => merged.push(item),
            }
        }
        merged
    }

    /// Build a [`Bill`] from a raw item list, an upstream totals snapshot,
    /// and the selected discount/gratuity parameters.
    ///
    /// Pure and deterministic; no hidden state and no failure path.
    pub fn assemble(
        raw_items: Vec<LineItem>,
        totals: BillTotals,
        discount_percent: i64,
        gratuity_percent: i64,
        exact_gratuity: Option<Money>,
    ) -> Bill {
        let items = Self::merge_items(raw_items);
        tracing::debug!(
            item_count = items.len(),
            sub_total = totals.sub_total.cents(),
            "assembled bill"
        );
        Bill {
            items,
            totals,
            gratuity_percent,
            exact_gratuity,
            discount_percent,
        }
    }
}
