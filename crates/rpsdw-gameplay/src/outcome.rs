use super::*;

/// Result of one round from the perspective of the first move.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    pub fn flip(&self) -> Self {
        match self {
            Self::Win => Self::Loss,
            Self::Loss => Self::Win,
            Self::Tie => Self::Tie,
        }
    }
}

/// Looked up against the fixed adjacency table in [`Move::beats`].
impl From<(Move, Move)> for Outcome {
    fn from((ours, theirs): (Move, Move)) -> Self {
        if ours == theirs {
            Self::Tie
        } else if ours.beats(&theirs) {
            Self::Win
        } else {
            Self::Loss
        }
    }
}

/// Free-function form of the score lookup.
pub fn outcome(ours: Move, theirs: Move) -> Outcome {
    Outcome::from((ours, theirs))
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "W"),
            Self::Loss => write!(f, "L"),
            Self::Tie => write!(f, "T"),
        }
    }
}
