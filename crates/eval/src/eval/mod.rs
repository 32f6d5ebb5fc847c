// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jacks or Better hand evaluator.
//!
//! The evaluator counts ranks and suits of a five cards hand and matches the
//! categories from the best to the worst, the first matching category is the
//! hand value. An ace can play low in the A-2-3-4-5 straight.
use serde::{Deserialize, Serialize};
use std::fmt;

use vpoker_cards::{HAND_SIZE, Rank};

use crate::hand::Hand;

/// A video poker hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// Nothing that pays.
    NoWin = 0,
    /// A pair of jacks, queens, kings or aces.
    JacksOrBetter,
    /// Two pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight of the same suit.
    StraightFlush,
    /// A ten to ace straight flush.
    RoyalFlush,
}

/// The pay table from the best to the worst hand.
pub const PAY_TABLE: [(HandCategory, u32); 10] = [
    (HandCategory::RoyalFlush, 250),
    (HandCategory::StraightFlush, 50),
    (HandCategory::FourOfAKind, 25),
    (HandCategory::FullHouse, 9),
    (HandCategory::Flush, 6),
    (HandCategory::Straight, 4),
    (HandCategory::ThreeOfAKind, 3),
    (HandCategory::TwoPair, 2),
    (HandCategory::JacksOrBetter, 1),
    (HandCategory::NoWin, 0),
];

impl HandCategory {
    /// The display name of this category.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::RoyalFlush => "Royal Flush",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::JacksOrBetter => "Jacks or Better",
            HandCategory::NoWin => "No Win",
        }
    }

    /// The payout multiplier for a one token wager.
    pub fn multiplier(&self) -> u32 {
        match self {
            HandCategory::RoyalFlush => 250,
            HandCategory::StraightFlush => 50,
            HandCategory::FourOfAKind => 25,
            HandCategory::FullHouse => 9,
            HandCategory::Flush => 6,
            HandCategory::Straight => 4,
            HandCategory::ThreeOfAKind => 3,
            HandCategory::TwoPair => 2,
            HandCategory::JacksOrBetter => 1,
            HandCategory::NoWin => 0,
        }
    }

    /// Checks if this category pays.
    pub fn is_win(&self) -> bool {
        self.multiplier() > 0
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Evaluates a hand and returns its category.
pub fn evaluate_hand(hand: &Hand) -> HandCategory {
    let cards = hand.cards();

    let mut rank_counts = [0u8; Rank::COUNT as usize];
    for card in cards {
        rank_counts[card.rank().index() as usize] += 1;
    }

    let suit = cards[0].suit();
    let is_flush = cards.iter().all(|c| c.suit() == suit);

    // Rank multiplicities from the largest, i.e. [3, 2] for a full house.
    let mut counts = rank_counts
        .iter()
        .copied()
        .filter(|&n| n > 0)
        .collect::<Vec<_>>();
    counts.sort_unstable_by(|a, b| b.cmp(a));

    let is_straight = counts.len() == HAND_SIZE && {
        let low = rank_counts.iter().position(|&n| n > 0).unwrap_or(0);
        let high = rank_counts.iter().rposition(|&n| n > 0).unwrap_or(0);
        high - low == 4 || is_wheel(&rank_counts)
    };

    let is_royal = rank_counts[Rank::Ten as usize..].iter().all(|&n| n == 1);

    let high_pair = [Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]
        .iter()
        .any(|r| rank_counts[*r as usize] == 2);

    match (is_flush, is_straight, counts.as_slice()) {
        (true, true, _) if is_royal => HandCategory::RoyalFlush,
        (true, true, _) => HandCategory::StraightFlush,
        (_, _, [4, ..]) => HandCategory::FourOfAKind,
        (_, _, [3, 2]) => HandCategory::FullHouse,
        (true, _, _) => HandCategory::Flush,
        (_, true, _) => HandCategory::Straight,
        (_, _, [3, ..]) => HandCategory::ThreeOfAKind,
        (_, _, [2, 2, ..]) => HandCategory::TwoPair,
        _ if high_pair => HandCategory::JacksOrBetter,
        _ => HandCategory::NoWin,
    }
}

/// Checks for the ace low straight A-2-3-4-5.
fn is_wheel(rank_counts: &[u8]) -> bool {
    [Rank::Ace, Rank::Deuce, Rank::Trey, Rank::Four, Rank::Five]
        .iter()
        .all(|r| rank_counts[*r as usize] == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vpoker_cards::Deck;

    fn eval(s: &str) -> HandCategory {
        evaluate_hand(&Hand::parse(s).unwrap())
    }

    #[test]
    fn royal_flush() {
        assert_eq!(eval("10S JS QS KS AS"), HandCategory::RoyalFlush);
        assert_eq!(eval("AH KH QH JH 10H"), HandCategory::RoyalFlush);
        assert_eq!(HandCategory::RoyalFlush.multiplier(), 250);
    }

    #[test]
    fn straight_flush() {
        assert_eq!(eval("9D 10D JD QD KD"), HandCategory::StraightFlush);
        assert_eq!(eval("2C 3C 4C 5C 6C"), HandCategory::StraightFlush);

        // The ace low straight flush is not a royal flush.
        assert_eq!(eval("AS 2S 3S 4S 5S"), HandCategory::StraightFlush);
    }

    #[test]
    fn four_of_a_kind() {
        assert_eq!(eval("7S 7H 7D 7C 2S"), HandCategory::FourOfAKind);
        assert_eq!(eval("AS 3H 3D 3C 3S"), HandCategory::FourOfAKind);
    }

    #[test]
    fn full_house() {
        assert_eq!(eval("KS KH KD 4C 4S"), HandCategory::FullHouse);
        assert_eq!(eval("2S 2H AD AC AS"), HandCategory::FullHouse);
    }

    #[test]
    fn flush() {
        assert_eq!(eval("2H 7H 9H JH KH"), HandCategory::Flush);

        // A-K-Q-J-9 suited is not a straight.
        assert_eq!(eval("AH KH QH JH 9H"), HandCategory::Flush);
    }

    #[test]
    fn straight() {
        assert_eq!(eval("5S 6H 7D 8C 9S"), HandCategory::Straight);
        assert_eq!(eval("10S JH QD KC AS"), HandCategory::Straight);
        assert_eq!(eval("AS 2H 3D 4C 5S"), HandCategory::Straight);
        assert_eq!(eval("5S 4H 3D 2C AS"), HandCategory::Straight);

        // No wrap around straights.
        assert_eq!(eval("QS KH AD 2C 3S"), HandCategory::NoWin);
        assert_eq!(eval("KS AH 2D 3C 4S"), HandCategory::NoWin);
    }

    #[test]
    fn three_of_a_kind() {
        assert_eq!(eval("9S 9H 9D 4C 2S"), HandCategory::ThreeOfAKind);
        assert_eq!(eval("2S 2H 2D AC KS"), HandCategory::ThreeOfAKind);
    }

    #[test]
    fn two_pair() {
        assert_eq!(eval("9S 9H 4D 4C 2S"), HandCategory::TwoPair);
        assert_eq!(eval("AS AH KD KC 2S"), HandCategory::TwoPair);
        assert_eq!(eval("2S 2H 3D 3C 4S"), HandCategory::TwoPair);
    }

    #[test]
    fn jacks_or_better() {
        assert_eq!(eval("JS JH 4D 7C 2S"), HandCategory::JacksOrBetter);
        assert_eq!(eval("QS QH 4D 7C 2S"), HandCategory::JacksOrBetter);
        assert_eq!(eval("KS KH 4D 7C 2S"), HandCategory::JacksOrBetter);
        assert_eq!(eval("AS 4D AH 7C 2S"), HandCategory::JacksOrBetter);
    }

    #[test]
    fn no_win() {
        assert_eq!(eval("10S 10H 4D 7C 2S"), HandCategory::NoWin);
        assert_eq!(eval("2S 2H 4D 7C 9S"), HandCategory::NoWin);
        assert_eq!(eval("2S 5H 8D JC KS"), HandCategory::NoWin);
        assert_eq!(eval("AS KH QD JC 9S"), HandCategory::NoWin);
        assert!(!HandCategory::NoWin.is_win());
    }

    #[test]
    fn pay_table() {
        for (category, multiplier) in PAY_TABLE {
            assert_eq!(category.multiplier(), multiplier);
        }

        // Pay table is sorted from the best to the worst hand.
        assert!(PAY_TABLE.windows(2).all(|w| w[0].0 > w[1].0));
        assert!(PAY_TABLE.windows(2).all(|w| w[0].1 > w[1].1));
    }

    #[test]
    fn category_names() {
        assert_eq!(HandCategory::JacksOrBetter.to_string(), "Jacks or Better");
        assert_eq!(HandCategory::FourOfAKind.to_string(), "Four of a Kind");
        assert_eq!(HandCategory::NoWin.to_string(), "No Win");
    }

    #[test]
    fn all_hands() {
        let mut counts = [0usize; PAY_TABLE.len()];

        Deck::default().for_each_hand(|cards| {
            let hand = Hand::new(cards).unwrap();
            counts[evaluate_hand(&hand) as usize] += 1;
        });

        assert_eq!(counts[HandCategory::RoyalFlush as usize], 4);
        assert_eq!(counts[HandCategory::StraightFlush as usize], 36);
        assert_eq!(counts[HandCategory::FourOfAKind as usize], 624);
        assert_eq!(counts[HandCategory::FullHouse as usize], 3_744);
        assert_eq!(counts[HandCategory::Flush as usize], 5_108);
        assert_eq!(counts[HandCategory::Straight as usize], 10_200);
        assert_eq!(counts[HandCategory::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandCategory::TwoPair as usize], 123_552);
        assert_eq!(counts[HandCategory::JacksOrBetter as usize], 337_920);
        assert_eq!(counts[HandCategory::NoWin as usize], 2_062_860);
        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
    }
}
