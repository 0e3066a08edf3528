use super::*;
use rpsdw_core::*;
use rpsdw_gameplay::*;

/// Everything that went into one throw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    round: usize,
    odds: Odds,
    roll: Probability,
    choice: Move,
}

impl Decision {
    pub fn new(round: usize, odds: Odds, roll: Probability, choice: Move) -> Self {
        Self {
            round,
            odds,
            roll,
            choice,
        }
    }
    /// Completed rounds before this throw.
    pub fn round(&self) -> usize {
        self.round
    }
    pub fn odds(&self) -> Odds {
        self.odds
    }
    /// Uniform roll compared against the special-move rates.
    pub fn roll(&self) -> Probability {
        self.roll
    }
    pub fn choice(&self) -> Move {
        self.choice
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "#{:<5} {} roll {:.4} -> {}",
            self.round, self.odds, self.roll, self.choice
        )
    }
}
