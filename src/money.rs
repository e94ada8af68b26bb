// Integer-cents money type
//
// All bill arithmetic runs on i64 minor units (cents) to keep results exact.
// Conversion to a decimal major-unit value happens only at the display edge.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A monetary amount in minor currency units (cents).
///
/// Signed so that refunds and undo-style adjustments (subtracting a prior
/// gratuity from a running total) stay representable.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Create a Money value from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// The raw amount in cents.
    pub const fn cents(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Take a percentage of this amount, rounding half away from zero on
    /// the cents boundary: `(cents * percent + 50) / 100`.
    ///
    /// # Arguments
    /// * `percent` - Whole-number percentage (e.g. 18 for 18%)
    ///
    /// # Returns
    /// The rounded percentage amount as Money
    pub fn percent(self, percent: i64) -> Money {
        let scaled = self.0 * percent;
        let rounded = if scaled >= 0 {
            (scaled + 50) / 100
        } else {
            (scaled - 50) / 100
        };
        Money(rounded)
    }

    /// Express this amount as a whole percent of `base`, truncating toward
    /// zero: `cents * 100 / base`.
    ///
    /// Truncation (not half-up rounding) is deliberate: the percent shown
    /// after an exact tip selection truncates, while money amounts round.
    /// Returns 0 when `base` is zero; an empty bill's tip percent is 0.
    pub fn ratio_percent_of(self, base: Money) -> i64 {
        if base.0 == 0 {
            return 0;
        }
        self.0 * 100 / base.0
    }

    /// Convert to a decimal in major units for display (e.g. 1099 -> 10.99).
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, rhs: i64) -> Money {
        Money(self.0 * rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}
