//! Rock-paper-scissors session state

use rand::Rng;

use crate::domain::{Move, Outcome, Scoreboard};

/// One played round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub user: Move,
    pub machine: Move,
    pub outcome: Outcome,
}

#[derive(Debug, Default)]
pub struct RpsGame {
    score: Scoreboard,
    last_round: Option<Round>,
}

impl RpsGame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Play against a uniformly random machine move
    pub fn play(&mut self, user: Move) -> Round {
        self.play_using(user, &mut rand::thread_rng())
    }

    pub fn play_using<R: Rng + ?Sized>(&mut self, user: Move, rng: &mut R) -> Round {
        let machine: Move = rng.gen();
        self.play_against(user, machine)
    }

    pub fn play_against(&mut self, user: Move, machine: Move) -> Round {
        let outcome = Outcome::judge(user, machine);
        self.score.record(outcome);
        let round = Round { user, machine, outcome };
        self.last_round = Some(round);
        round
    }

    /// "Play Again": clear the shown round, keep the score
    pub fn reset_round(&mut self) {
        self.last_round = None;
    }

    pub fn score(&self) -> Scoreboard {
        self.score
    }

    pub fn last_round(&self) -> Option<Round> {
        self.last_round
    }
}
