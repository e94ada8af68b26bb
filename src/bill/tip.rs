use crate::bill::models::Bill;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A tip selection: either a percentage of the tip base or an exact amount.
///
/// Cross-kind values never compare equal, even when they would price out
/// to the same gratuity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tip {
    Percent(i64),
    Exact(Money),
}

/// Floor and ceiling for an acceptable tip, resolved from configuration.
///
/// Only the floor is ever clamped onto a bill. The ceiling is an input
/// validation bound; see [`crate::validation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipPolicy {
    pub minimum: Money,
    pub maximum: Money,
}

impl Default for TipPolicy {
    fn default() -> Self {
        TipPolicy {
            minimum: Money::ZERO,
            maximum: Money::from_cents(500_000),
        }
    }
}

impl TipPolicy {
    /// Whether a computed gratuity amount sits inside the allowed band.
    pub fn permits(&self, gratuity: Money) -> bool {
        gratuity >= self.minimum && gratuity <= self.maximum
    }
}

/// Request DTO for a tip change coming from the presentation layer.
///
/// Exactly one of the two fields is expected; `exact_cents` wins when both
/// are present, matching the exact-over-percent rule on the bill itself.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TipRequest {
    #[validate(range(min = 0, max = 100, message = "Tip percent must be between 0 and 100"))]
    pub percent: Option<i64>,
    #[validate(range(min = 0, max = 500_000, message = "Tip amount is out of range"))]
    pub exact_cents: Option<i64>,
}

impl TipRequest {
    pub fn into_tip(self) -> Option<Tip> {
        match (self.exact_cents, self.percent) {
            (Some(cents), _) => Some(Tip::Exact(Money::from_cents(cents))),
            (None, Some(percent)) => Some(Tip::Percent(percent)),
            (None, None) => None,
        }
    }
}

/// Service for applying a tip selection to a bill
pub struct TipCalculator;

impl TipCalculator {
    /// Apply a tip to a bill, returning the adjusted bill.
    ///
    /// The prior gratuity is backed out of the running total before the new
    /// one is computed and added, so applying the same tip twice leaves the
    /// total unchanged.
    ///
    /// # Arguments
    /// * `policy` - Floor/ceiling band; only the floor is clamped
    /// * `bill` - The current bill state
    /// * `tip` - The newly selected tip
    pub fn apply(policy: &TipPolicy, bill: &Bill, tip: Tip) -> Bill {
        let mut next = bill.clone();

        // Back the previous gratuity contribution out of the running total.
        next.totals.total -= bill.gratuity_price();
        next.gratuity_percent = 0;
        next.exact_gratuity = Some(Money::ZERO);

        // Tips are earned on comped drinks as well as the payable subtotal.
        let base_for_tip = next.totals.sub_total + next.totals.free_drinks_price;

        match tip {
            Tip::Percent(percent) => {
                next.exact_gratuity = None;
                next.gratuity_percent = percent;
            }
            Tip::Exact(amount) => {
                next.exact_gratuity = Some(amount);
                // Truncating division; an empty bill's tip percent is 0.
                next.gratuity_percent = amount.ratio_percent_of(base_for_tip);
            }
        }

        // Floor clamp only. The ceiling is enforced at the input layer and
        // deliberately not clamped here. Clamp on the raw selected amount:
        // gratuity_price() treats a non-positive exact gratuity as percent-
        // based and would mask a stored negative amount.
        let selected_gratuity = match next.exact_gratuity {
            Some(exact) => exact,
            None => next.gratuity_price(),
        };
        if selected_gratuity < policy.minimum {
            tracing::debug!(
                gratuity = selected_gratuity.cents(),
                floor = policy.minimum.cents(),
                "tip below floor, clamping"
            );
            next.exact_gratuity = Some(policy.minimum);
            next.gratuity_percent = policy.minimum.ratio_percent_of(base_for_tip);
        }

        next.totals.total += next.gratuity_price();
        next
    }
}
