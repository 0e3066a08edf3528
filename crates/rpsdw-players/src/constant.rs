use super::*;
use rpsdw_gameplay::*;

/// Plays the same move every round. Defaults to Paper, like the
/// runner's starter bot.
#[derive(Debug, Clone, Copy)]
pub struct Constant(pub Move);

impl Default for Constant {
    fn default() -> Self {
        Self(Move::Paper)
    }
}

impl Bot for Constant {
    fn make_move(&mut self, _: &GameState) -> Move {
        self.0
    }
}
