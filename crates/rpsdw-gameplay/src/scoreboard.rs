use super::*;

/// Win/loss/tie tallies over a match.
///
/// Pure telemetry: nothing here feeds back into move selection. Ties are
/// counted as ties; carrying tied points into the next round is the
/// runner's business.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    wins: usize,
    losses: usize,
    ties: usize,
}

impl Scoreboard {
    pub fn record(&mut self, round: &Round) -> Outcome {
        let outcome = round.outcome();
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
        outcome
    }
    pub fn wins(&self) -> usize {
        self.wins
    }
    pub fn losses(&self) -> usize {
        self.losses
    }
    pub fn ties(&self) -> usize {
        self.ties
    }
    pub fn rounds(&self) -> usize {
        self.wins + self.losses + self.ties
    }
    /// Swaps wins and losses.
    pub fn flip(&self) -> Self {
        Self {
            wins: self.losses,
            losses: self.wins,
            ties: self.ties,
        }
    }
}

impl From<&GameState> for Scoreboard {
    fn from(state: &GameState) -> Self {
        let mut board = Self::default();
        for round in state.rounds() {
            board.record(round);
        }
        board
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.wins, self.losses, self.ties)
    }
}
