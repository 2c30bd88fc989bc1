//! Integer price and quantity types
//!
//! All prices and quantities in the engine are non-negative integers;
//! newtypes keep them from being mixed up in matching arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// Price of a limit-family order, in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Create a price from a raw tick count
    pub fn from_u64(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw tick count
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order quantity (remaining unfilled amount)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    /// Zero quantity
    pub fn zero() -> Self {
        Self(0)
    }

    /// Create a quantity from a raw unit count
    pub fn from_u64(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw unit count
    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// Check whether the quantity is zero
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The smaller of two quantities (fill size of a match event)
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 + rhs.0)
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Quantity) {
        self.0 += rhs.0;
    }
}

impl Sub for Quantity {
    type Output = Quantity;

    fn sub(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 - rhs.0)
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, rhs: Quantity) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Executed value of one or more fills: quantity times resting price
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notional(u64);

impl Notional {
    /// Zero notional (no fills)
    pub fn zero() -> Self {
        Self(0)
    }

    /// Get the raw value
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl AddAssign for Notional {
    fn add_assign(&mut self, rhs: Notional) {
        self.0 += rhs.0;
    }
}

impl Mul<Price> for Quantity {
    type Output = Notional;

    fn mul(self, rhs: Price) -> Notional {
        Notional(self.0 * rhs.0)
    }
}

impl fmt::Display for Notional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


// ── Property-Based Tests ────────────────────────────────────────────
