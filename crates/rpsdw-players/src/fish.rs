use super::*;
use rand::seq::IndexedRandom;
use rpsdw_gameplay::*;

/// Random player that never spends a special move.
#[derive(Debug, Default, Clone, Copy)]
pub struct Fish;

impl Bot for Fish {
    fn make_move(&mut self, _: &GameState) -> Move {
        let ref mut rng = rand::rng();
        Move::BASIC
            .choose(rng)
            .copied()
            .expect("non empty basic moves")
    }
}
