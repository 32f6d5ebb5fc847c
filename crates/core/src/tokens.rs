// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player tokens.
use serde::{Deserialize, Serialize};
use std::{fmt, ops};

/// Tokens amount.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tokens(u32);

impl Tokens {
    /// The zero tokens.
    pub const ZERO: Tokens = Tokens(0);

    /// The balance given to a new player.
    pub const STARTING: Tokens = Tokens(100);

    /// The tokens added when a player runs out of tokens and asks for more.
    pub const REFILL: Tokens = Tokens(10);

    /// The cost of a hand.
    pub const WAGER: Tokens = Tokens(1);

    /// Creates tokens with the given value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The integer amount.
    pub fn amount(&self) -> u32 {
        self.0
    }

    /// Checks if there are no tokens.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for Tokens {
    fn from(val: u32) -> Self {
        Tokens(val)
    }
}

impl From<Tokens> for u32 {
    fn from(val: Tokens) -> Self {
        val.0
    }
}

impl ops::Add for Tokens {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Tokens(self.0.saturating_add(rhs.0))
    }
}

impl ops::AddAssign for Tokens {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl ops::Sub for Tokens {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl ops::SubAssign for Tokens {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl ops::Mul<u32> for Tokens {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0.saturating_mul(rhs))
    }
}

impl fmt::Display for Tokens {
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
