// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Leaderboard types.
use serde::{Deserialize, Serialize};
use std::{fmt, ops};

/// A score increment submitted after a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Number of won rounds.
    pub wins: u32,
    /// Number of lost rounds.
    pub losses: u32,
    /// Number of tied rounds, video poker has no ties so this is always zero
    /// for scores produced by a game.
    pub ties: u32,
}

impl Score {
    /// A single won round.
    pub const WIN: Score = Score {
        wins: 1,
        losses: 0,
        ties: 0,
    };

    /// A single lost round.
    pub const LOSS: Score = Score {
        wins: 0,
        losses: 1,
        ties: 0,
    };
}

impl ops::AddAssign for Score {
    fn add_assign(&mut self, rhs: Self) {
        self.wins = self.wins.saturating_add(rhs.wins);
        self.losses = self.losses.saturating_add(rhs.losses);
        self.ties = self.ties.saturating_add(rhs.ties);
    }
}

/// A player cumulative leaderboard record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// The player name.
    pub name: String,
    /// Total won rounds.
    pub wins: u32,
    /// Total lost rounds.
    pub losses: u32,
    /// Total tied rounds.
    pub ties: u32,
}

impl LeaderboardEntry {
    /// Creates an entry for a player from a first score.
    pub fn new(name: impl Into<String>, score: Score) -> Self {
        Self {
            name: name.into(),
            wins: score.wins,
            losses: score.losses,
            ties: score.ties,
        }
    }

    /// Adds a score to this entry.
    pub fn add(&mut self, score: Score) {
        let mut total = self.score();
        total += score;
        self.wins = total.wins;
        self.losses = total.losses;
        self.ties = total.ties;
    }

    /// This entry totals as a score.
    pub fn score(&self) -> Score {
        Score {
            wins: self.wins,
            losses: self.losses,
            ties: self.ties,
        }
    }

    /// Wins minus losses, used for ranking.
    pub fn net(&self) -> i64 {
        i64::from(self.wins) - i64::from(self.losses)
    }
}

impl fmt::Display for LeaderboardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}W / {}L / {}T",
            self.name, self.wins, self.losses, self.ties
        )
    }
}

/// Sorts entries by net wins from the highest, entries with the same net wins
/// keep their order.
pub fn sort_leaderboard(entries: &mut [LeaderboardEntry]) {
    entries.sort_by_key(|e| std::cmp::Reverse(e.net()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, wins: u32, losses: u32) -> LeaderboardEntry {
        LeaderboardEntry::new(
            name,
            Score {
                wins,
                losses,
                ties: 0,
            },
        )
    }

    #[test]
    fn entry_add_score() {
        let mut e = LeaderboardEntry::new("alice", Score::WIN);
        e.add(Score::LOSS);
        e.add(Score::LOSS);
        e.add(Score::WIN);
        e.add(Score::WIN);

        assert_eq!(e.wins, 3);
        assert_eq!(e.losses, 2);
        assert_eq!(e.ties, 0);
        assert_eq!(e.net(), 1);
        assert_eq!(e.to_string(), "alice: 3W / 2L / 0T");
    }

    #[test]
    fn leaderboard_sorting() {
        let mut entries = vec![
            entry("bob", 1, 5),
            entry("alice", 10, 2),
            entry("carol", 3, 3),
            entry("dave", 4, 4),
            entry("erin", 20, 19),
        ];

        sort_leaderboard(&mut entries);

        let names = entries.iter().map(|e| e.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["alice", "erin", "carol", "dave", "bob"]);
    }
}
