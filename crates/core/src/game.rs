// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Video poker game state.
//!
//! A [Game] moves between three phases:
//!
//! ```text
//!   Idle --deal--> Dealt --draw--> Drawn
//!                    ^               |
//!                    +-----deal------+
//! ```
//!
//! A deal costs [Tokens::WAGER], holds can only be toggled in the dealt phase,
//! and a draw replaces the cards that are not held, evaluates the final hand and
//! credits the payout.
use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};
use vpoker_eval::{Card, Deck, HAND_SIZE, Hand, HandCategory, HandError, evaluate_hand};

use crate::{leaderboard::Score, tokens::Tokens};

/// Game errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The player has no tokens to play a hand.
    #[error("You're out of tokens. Request 10 more to keep playing.")]
    OutOfTokens,
    /// A hand has been dealt and must be drawn first.
    #[error("a hand is in progress")]
    HandInProgress,
    /// There is no dealt hand to draw or hold.
    #[error("no hand has been dealt")]
    NoHand,
    /// The player still has tokens.
    #[error("tokens can be requested only when the balance is zero")]
    HasTokens,
    /// Invalid card position.
    #[error("invalid card position {0}")]
    InvalidCard(usize),
    /// The deck has run out of cards.
    #[error("the deck is empty")]
    EmptyDeck,
    /// The final hand is invalid.
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// The game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No hand has been played yet.
    Idle,
    /// A hand has been dealt, the player can hold cards and draw.
    Dealt,
    /// The hand has been drawn and scored.
    Drawn,
}

/// The result of a drawn hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The final hand.
    pub hand: Hand,
    /// The final hand category.
    pub category: HandCategory,
    /// The tokens paid for the hand.
    pub payout: Tokens,
}

impl RoundResult {
    /// The leaderboard score for this round.
    pub fn score(&self) -> Score {
        if self.payout > Tokens::ZERO {
            Score::WIN
        } else {
            Score::LOSS
        }
    }

    /// The message shown to the player for this result.
    pub fn message(&self) -> String {
        let payout = self.payout.amount();
        if payout > 0 {
            let plural = if payout > 1 { "s" } else { "" };
            format!("{} – You win {payout} token{plural}!", self.category.name())
        } else {
            "No win – Better luck next time!".to_string()
        }
    }
}

/// A player game.
#[derive(Debug)]
pub struct Game<R = StdRng> {
    player: String,
    tokens: Tokens,
    phase: Phase,
    deck: Deck,
    cards: Option<[Card; HAND_SIZE]>,
    held: [bool; HAND_SIZE],
    message: String,
    last_result: Option<RoundResult>,
    rng: R,
}

impl Game<StdRng> {
    /// Creates a game for a player with the given tokens balance.
    pub fn new(player: impl Into<String>, tokens: Tokens) -> Self {
        Self::with_rng(player, tokens, StdRng::from_os_rng())
    }
}

impl<R: Rng> Game<R> {
    /// Creates a game that uses the given random generator to shuffle.
    pub fn with_rng(player: impl Into<String>, tokens: Tokens, rng: R) -> Self {
        Self {
            player: player.into(),
            tokens,
            phase: Phase::Idle,
            deck: Deck::default(),
            cards: None,
            held: [false; HAND_SIZE],
            message: String::new(),
            last_result: None,
            rng,
        }
    }

    /// Deals a new hand for one token.
    pub fn deal(&mut self) -> Result<(), GameError> {
        if self.phase == Phase::Dealt {
            return Err(GameError::HandInProgress);
        }

        if self.tokens.is_zero() {
            self.message = GameError::OutOfTokens.to_string();
            return Err(GameError::OutOfTokens);
        }

        let mut deck = Deck::new_and_shuffled(&mut self.rng);
        let cards = deck.deal_hand().ok_or(GameError::EmptyDeck)?;

        self.deck = deck;
        self.cards = Some(cards);
        self.held = [false; HAND_SIZE];
        self.phase = Phase::Dealt;
        self.last_result = None;
        self.tokens -= Tokens::WAGER;
        self.message = "Click cards to hold, then click Draw.".to_string();

        debug!("{} dealt {:?} tokens {}", self.player, cards, self.tokens);

        Ok(())
    }

    /// Toggles the hold flag for the card at the given position.
    ///
    /// Returns the new hold flag, outside the dealt phase this is a no-op that
    /// returns false.
    pub fn toggle_hold(&mut self, index: usize) -> Result<bool, GameError> {
        if index >= HAND_SIZE {
            return Err(GameError::InvalidCard(index));
        }

        if self.phase != Phase::Dealt {
            return Ok(false);
        }

        self.held[index] = !self.held[index];
        Ok(self.held[index])
    }

    /// Replaces the cards that are not held, scores the final hand and credits
    /// the payout.
    pub fn draw(&mut self) -> Result<RoundResult, GameError> {
        let dealt = match (self.phase, self.cards) {
            (Phase::Dealt, Some(cards)) => cards,
            _ => return Err(GameError::NoHand),
        };

        let mut cards = dealt;
        for (card, held) in cards.iter_mut().zip(self.held) {
            if !held {
                *card = self.deck.deal().ok_or(GameError::EmptyDeck)?;
            }
        }

        let hand = Hand::new(&cards)?;
        let category = evaluate_hand(&hand);
        let result = RoundResult {
            hand,
            category,
            payout: Tokens::WAGER * category.multiplier(),
        };

        self.cards = Some(cards);
        self.held = [false; HAND_SIZE];
        self.phase = Phase::Drawn;
        self.tokens += result.payout;
        self.message = result.message();
        self.last_result = Some(result);

        debug!(
            "{} drew {} {} payout {} tokens {}",
            self.player, hand, category, result.payout, self.tokens
        );

        Ok(result)
    }

    /// Adds [Tokens::REFILL] tokens to a player that has run out of tokens.
    pub fn request_tokens(&mut self) -> Result<Tokens, GameError> {
        if self.phase == Phase::Dealt {
            return Err(GameError::HandInProgress);
        }

        if !self.tokens.is_zero() {
            return Err(GameError::HasTokens);
        }

        self.tokens += Tokens::REFILL;
        self.message = "You've received 10 more tokens.".to_string();
        Ok(self.tokens)
    }

    /// The player name.
    pub fn player(&self) -> &str {
        &self.player
    }

    /// The player tokens.
    pub fn tokens(&self) -> Tokens {
        self.tokens
    }

    /// The game phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The cards on screen, if any.
    pub fn cards(&self) -> Option<&[Card; HAND_SIZE]> {
        self.cards.as_ref()
    }

    /// The hold flags for the dealt cards.
    pub fn held(&self) -> &[bool; HAND_SIZE] {
        &self.held
    }

    /// The last message for the player.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The result of the last drawn hand.
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Checks if the player can request more tokens.
    pub fn can_request_tokens(&self) -> bool {
        self.tokens.is_zero() && self.phase != Phase::Dealt
    }
}
