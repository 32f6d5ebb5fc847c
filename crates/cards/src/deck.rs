// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and deck definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The number of cards in a video poker hand.
pub const HAND_SIZE: usize = 5;

/// A playing card.
///
/// A card is stored as its position in a new deck, `suit * 13 + rank`, with
/// suits in the order spades, hearts, diamonds, clubs and ranks from deuce to
/// ace, so that the card id is in the range `0..52`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(suit as u8 * Rank::COUNT + rank as u8)
    }

    /// This card unique id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::ALL[(self.0 % Rank::COUNT) as usize]
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        Suit::ALL[(self.0 / Rank::COUNT) as usize]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Error returned when parsing a card from text fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCardError {
    /// The text is empty or has no suit.
    #[error("card '{0}' is too short")]
    TooShort(String),
    /// The rank part is not a valid rank.
    #[error("invalid rank in card '{0}'")]
    InvalidRank(String),
    /// The suit part is not a valid suit.
    #[error("invalid suit in card '{0}'")]
    InvalidSuit(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a card from a rank followed by a suit, e.g. `AS`, `10h`, `Td`,
    /// or `Q♣`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars
            .next_back()
            .ok_or_else(|| ParseCardError::TooShort(s.to_string()))?;
        let rank = chars.as_str();
        if rank.is_empty() {
            return Err(ParseCardError::TooShort(s.to_string()));
        }

        let rank = match rank.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(s.to_string())),
        };

        let suit = match suit.to_ascii_uppercase() {
            'S' | '♠' => Suit::Spades,
            'H' | '♥' => Suit::Hearts,
            'D' | '♦' => Suit::Diamonds,
            'C' | '♣' => Suit::Clubs,
            _ => return Err(ParseCardError::InvalidSuit(s.to_string())),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: u8 = 13;

    const ALL: [Rank; Self::COUNT as usize] = [
        Rank::Deuce,
        Rank::Trey,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// The rank index, deuce is 0 and ace is 12.
    pub fn index(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };

        f.write_str(rank)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spades = 0,
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
}

impl Suit {
    const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }

    /// Checks if this is a red suit.
    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        };

        write!(f, "{suit}")
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns None if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals a hand from the deck, returns None if there are not enough cards.
    pub fn deal_hand(&mut self) -> Option<[Card; HAND_SIZE]> {
        if self.cards.len() < HAND_SIZE {
            return None;
        }

        let start = self.cards.len() - HAND_SIZE;
        let mut hand = [Card::new(Rank::Deuce, Suit::Spades); HAND_SIZE];
        hand.copy_from_slice(&self.cards[start..]);
        self.cards.truncate(start);
        hand.reverse();
        Some(hand)
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if a card is in the deck.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each 5-cards hand in the deck.
    pub fn for_each_hand<F>(&self, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        let n = self.cards.len();
        if n < HAND_SIZE {
            return;
        }

        let mut h = [Card::new(Rank::Deuce, Suit::Spades); HAND_SIZE];

        for c1 in 0..n {
            h[0] = self.cards[c1];

            for c2 in (c1 + 1)..n {
                h[1] = self.cards[c2];

                for c3 in (c2 + 1)..n {
                    h[2] = self.cards[c3];

                    for c4 in (c3 + 1)..n {
                        h[3] = self.cards[c4];

                        for c5 in (c4 + 1)..n {
                            h[4] = self.cards[c5];
                            f(&h);
                        }
                    }
                }
            }
        }
    }
}

impl Default for Deck {
    /// A new deck with cards in suit then rank order.
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            assert_eq!(Card::new(card.rank(), card.suit()), card);
            assert!(card.id() < Deck::SIZE as u8);
            cards.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);

        assert_eq!(Card::new(Rank::Deuce, Suit::Spades).id(), 0);
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).id(), 12);
        assert_eq!(Card::new(Rank::Deuce, Suit::Hearts).id(), 13);
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).id(), 51);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "K♦");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5♠");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "J♣");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "10♥");

        assert_eq!(format!("{c:?}"), "Card(10♥)");
    }

    #[test]
    fn card_from_str() {
        let ks = Card::new(Rank::King, Suit::Spades);
        assert_eq!("KS".parse::<Card>(), Ok(ks));
        assert_eq!("ks".parse::<Card>(), Ok(ks));
        assert_eq!("K♠".parse::<Card>(), Ok(ks));

        let th = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!("10H".parse::<Card>(), Ok(th));
        assert_eq!("Th".parse::<Card>(), Ok(th));
        assert_eq!(" 10♥ ".parse::<Card>(), Ok(th));

        // Every card round trips through its display string.
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }

        assert!(matches!("".parse::<Card>(), Err(ParseCardError::TooShort(_))));
        assert!(matches!("S".parse::<Card>(), Err(ParseCardError::TooShort(_))));
        assert!(matches!("1S".parse::<Card>(), Err(ParseCardError::InvalidRank(_))));
        assert!(matches!("AX".parse::<Card>(), Err(ParseCardError::InvalidSuit(_))));
    }

    #[test]
    fn red_suits() {
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Spades.is_red());
        assert!(!Suit::Clubs.is_red());
    }

    #[test]
    fn deck_deal() {
        let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        assert_eq!(deck.count(), Deck::SIZE);

        let hand = deck.deal_hand().unwrap();
        assert_eq!(deck.count(), Deck::SIZE - HAND_SIZE);

        // Dealt cards are no longer in the deck.
        let dealt = hand.iter().copied().collect::<HashSet<_>>();
        assert_eq!(dealt.len(), HAND_SIZE);
        assert!(hand.iter().all(|c| !deck.contains(*c)));

        while deck.count() > 3 {
            deck.deal().unwrap();
        }

        assert!(deck.deal_hand().is_none());
        assert_eq!(deck.count(), 3);

        while deck.deal().is_some() {}
        assert!(deck.is_empty());
    }

    #[test]
    fn deck_deal_hand_order() {
        // Dealing a hand takes cards from the top like dealing one card at a time.
        let mut d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        let mut d2 = d1.clone();

        let hand = d1.deal_hand().unwrap();
        let cards = (0..HAND_SIZE).map(|_| d2.deal().unwrap()).collect::<Vec<_>>();
        assert_eq!(hand.as_slice(), cards.as_slice());
    }

    #[test]
    fn deck_shuffle_is_seeded() {
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(1));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(1));
        let c1 = d1.into_iter().collect::<Vec<_>>();
        let c2 = d2.into_iter().collect::<Vec<_>>();
        assert_eq!(c1, c2);

        let d3 = Deck::default().into_iter().collect::<Vec<_>>();
        assert_ne!(c1, d3);
    }

    #[test]
    fn deck_for_each_hand() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut count = 0;
        deck.for_each_hand(|cards| {
            assert_eq!(cards.len(), HAND_SIZE);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);

        let mut hands = HashSet::default();
        deck.for_each_hand(|cards| {
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_118_760);
    }
}
