// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Chips amount type.
use serde::{Deserialize, Serialize};
use std::{fmt, iter, ops};

/// Chips amount.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Chips(u32);

impl Chips {
    /// The zero chips.
    pub const ZERO: Chips = Chips(0);

    /// The largest amount.
    pub const MAX: Chips = Chips(u32::MAX);

    /// Creates chips with the given value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The integer amount.
    pub fn amount(&self) -> u32 {
        self.0
    }

    /// Checks if there are no chips.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds chips, returns `None` on overflow.
    pub fn checked_add(self, rhs: Chips) -> Option<Chips> {
        self.0.checked_add(rhs.0).map(Chips)
    }
}

impl From<u32> for Chips {
    fn from(val: u32) -> Self {
        Chips(val)
    }
}

impl From<Chips> for u32 {
    fn from(val: Chips) -> Self {
        val.0
    }
}

impl ops::Add for Chips {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl ops::AddAssign for Chips {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl ops::Sub<Chips> for Chips {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl ops::SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl ops::Div<u32> for Chips {
    type Output = Self;

    fn div(self, rhs: u32) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl ops::Rem<u32> for Chips {
    type Output = Self;

    fn rem(self, rhs: u32) -> Self::Output {
        Self(self.0 % rhs)
    }
}

impl iter::Sum for Chips {
    fn sum<I: Iterator<Item = Chips>>(iter: I) -> Self {
        iter.fold(Chips::ZERO, |acc, c| acc + c)
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self.0;
        if amount >= 1_000_000_000 {
            write!(
                f,
                "{},{:03},{:03},{:03}",
                amount / 1_000_000_000,
                amount % 1_000_000_000 / 1_000_000,
                amount % 1_000_000 / 1_000,
                amount % 1000
            )
        } else if amount >= 1_000_000 {
            write!(
                f,
                "{},{:03},{:03}",
                amount / 1_000_000,
                amount % 1_000_000 / 1_000,
                amount % 1000
            )
        } else if amount >= 1_000 {
            write!(f, "{},{:03}", amount / 1000, amount % 1000)
        } else {
            write!(f, "{}", amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chips_formatting() {
        assert_eq!(Chips(5).to_string(), "5");
        assert_eq!(Chips(1_000).to_string(), "1,000");
        assert_eq!(Chips(12_345).to_string(), "12,345");
        assert_eq!(Chips(1_234_567).to_string(), "1,234,567");
        assert_eq!(Chips(1_000_000_000).to_string(), "1,000,000,000");
        assert_eq!(Chips::MAX.to_string(), "4,294,967,295");
    }

    #[test]
    fn chips_arithmetic() {
        let mut c = Chips::new(20);
        c -= Chips::new(25);
        assert!(c.is_zero());

        assert_eq!(Chips::new(101) / 2, Chips::new(50));
        assert_eq!(Chips::new(101) % 2, Chips::new(1));

        let total: Chips = [5, 10, 15].into_iter().map(Chips::new).sum();
        assert_eq!(total, Chips::new(30));

        assert_eq!(Chips::MAX.checked_add(Chips::new(1)), None);
        assert_eq!(
            Chips::new(1).checked_add(Chips::new(2)),
            Some(Chips::new(3))
        );
    }
}
