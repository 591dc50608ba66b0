//! Rock-paper-scissors rules

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Rock beats Scissors, Scissors beats Paper, Paper beats Rock
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }
}

impl Distribution<Move> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        Move::ALL[rng.gen_range(0..Move::ALL.len())]
    }
}

/// Result of a round from the player's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    pub fn judge(user: Move, machine: Move) -> Self {
        if user == machine {
            Outcome::Tie
        } else if user.beats(machine) {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Win => "You Win!",
            Outcome::Lose => "You Lose!",
            Outcome::Tie => "It's a Tie!",
        }
    }
}

/// Running win/loss counters; ties are not counted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub user: u32,
    pub computer: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.user += 1,
            Outcome::Lose => self.computer += 1,
            Outcome::Tie => {}
        }
    }

    pub fn text(&self) -> String {
        format!("User: {} | Computer: {}", self.user, self.computer)
    }
}
