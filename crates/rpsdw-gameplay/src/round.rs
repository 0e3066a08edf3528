use super::*;

/// One completed exchange.
///
/// Serialized the way the runner records it: `p1` is our own move,
/// `p2` the opponent's.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Round {
    #[serde(rename = "p1")]
    ours: Move,
    #[serde(rename = "p2")]
    theirs: Move,
}

impl Round {
    pub const fn new(ours: Move, theirs: Move) -> Self {
        Self { ours, theirs }
    }
    /// Move played by this bot.
    pub fn ours(&self) -> Move {
        self.ours
    }
    /// Move played by the opponent.
    pub fn theirs(&self) -> Move {
        self.theirs
    }
    pub fn is_tie(&self) -> bool {
        self.ours == self.theirs
    }
    /// Result from our side of the table.
    pub fn outcome(&self) -> Outcome {
        Outcome::from((self.ours, self.theirs))
    }
    /// Same round seen from the opponent's seat.
    pub fn flip(&self) -> Self {
        Self::new(self.theirs, self.ours)
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.ours, self.theirs)
    }
}
