use super::*;

/// Every completed round of a match, oldest first.
///
/// Bots only ever read this; the runner appends to it between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct GameState {
    rounds: Vec<Round>,
}

impl GameState {
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }
    pub fn len(&self) -> usize {
        self.rounds.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
    /// Most recently completed round, if any.
    pub fn last(&self) -> Option<&Round> {
        self.rounds.last()
    }
    /// Appends a completed round. Used by runners and tests.
    pub fn push(&mut self, round: Round) {
        self.rounds.push(round);
    }
    /// History as the opponent sees it.
    pub fn flip(&self) -> Self {
        self.rounds.iter().map(Round::flip).collect()
    }
    /// Every prefix from empty up to and including the full history,
    /// in the order a runner would have presented them.
    pub fn prefixes(&self) -> impl Iterator<Item = &[Round]> {
        (0..=self.len()).map(|n| &self.rounds[..n])
    }
}

impl From<Vec<Round>> for GameState {
    fn from(rounds: Vec<Round>) -> Self {
        Self { rounds }
    }
}

impl FromIterator<Round> for GameState {
    fn from_iter<I: IntoIterator<Item = Round>>(iter: I) -> Self {
        Self {
            rounds: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let rounds = self
            .rounds
            .iter()
            .map(Round::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "[{}]", rounds)
    }
}
