// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A five cards hand.
use serde::{Deserialize, Serialize};
use std::{fmt, ops};

use vpoker_cards::{Card, HAND_SIZE, ParseCardError};

/// Errors creating a hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandError {
    /// The hand doesn't have five cards.
    #[error("a hand needs 5 cards, got {0}")]
    WrongSize(usize),
    /// The same card appears twice.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A card could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseCardError),
}

/// A hand of five distinct cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    /// Creates a hand from a slice of cards.
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::WrongSize(cards.len()))?;

        for (idx, card) in cards.iter().enumerate() {
            if cards[idx + 1..].contains(card) {
                return Err(HandError::DuplicateCard(*card));
            }
        }

        Ok(Self(cards))
    }

    /// Parses a hand from whitespace separated cards, e.g. `"AS KD 10H 3C 3S"`.
    pub fn parse(s: &str) -> Result<Self, HandError> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Self::new(&cards)
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Self::new(cards)
    }
}

impl ops::Index<usize> for Hand {
    type Output = Card;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}
