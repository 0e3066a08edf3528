use rand::Rng;
use rpsdw_core::*;
use rpsdw_gameplay::*;

/// Probabilities of throwing each special move this round.
///
/// Neither value is clamped to `[0, 1]` and their sum may exceed 1. A
/// negative rate simply never fires; a rate above 1 always does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Odds {
    dynamite: Probability,
    water: Probability,
}

impl Odds {
    pub const fn new(dynamite: Probability, water: Probability) -> Self {
        Self { dynamite, water }
    }
    pub fn dynamite(&self) -> Probability {
        self.dynamite
    }
    pub fn water(&self) -> Probability {
        self.water
    }
    /// Maps a roll in `[0, 1)` onto the special moves.
    ///
    /// `[0, dynamite)` is Dynamite, `[dynamite, dynamite + water)` is Water,
    /// anything else is `None` and falls through to a basic move.
    pub fn resolve(&self, roll: Probability) -> Option<Move> {
        if roll < self.dynamite {
            Some(Move::Dynamite)
        } else if roll < self.dynamite + self.water {
            Some(Move::Water)
        } else {
            None
        }
    }
    /// Rolls once for the specials and, on a miss, once more for
    /// Rock/Paper/Scissors with equal weight.
    pub fn sample<R>(&self, rng: &mut R) -> (Probability, Move)
    where
        R: Rng,
    {
        let roll = rng.random::<Probability>();
        let choice = self
            .resolve(roll)
            .unwrap_or_else(|| Move::BASIC[rng.random_range(0..Move::BASIC.len())]);
        (roll, choice)
    }
}

impl std::fmt::Display for Odds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "D {:.4} W {:.4}", self.dynamite, self.water)
    }
}
