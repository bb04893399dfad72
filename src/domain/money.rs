use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// An amount of game currency.
///
/// Wraps `rust_decimal::Decimal` so balances may carry fractional credits while
/// payouts stay exact (`25 * 0.3` is `7.5`, never `7.4999…`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credits(pub Decimal);

impl Credits {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Truncates toward zero.
    pub fn floor(self) -> Self {
        Self(self.0.trunc())
    }

    /// Whole credits available for betting.
    pub fn whole(&self) -> u32 {
        use rust_decimal::prelude::ToPrimitive;
        if self.0 <= Decimal::ZERO {
            return 0;
        }
        self.0.trunc().to_u32().unwrap_or(u32::MAX)
    }

    /// `bet * factor`, truncated toward zero.
    pub fn scaled_bet(bet: u32, factor: Decimal) -> Self {
        Self(Decimal::from(bet) * factor).floor()
    }
}

impl From<u32> for Credits {
    fn from(value: u32) -> Self {
        Self(Decimal::from(value))
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Add for Credits {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Credits {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Credits {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Credits {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
