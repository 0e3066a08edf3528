use rpsdw_gameplay::*;

/// Anything the runner can ask for a move.
///
/// Called once per round with the full history so far; the runner waits
/// for the answer before advancing. Implementations may keep state
/// between calls, so `make_move` is not expected to be pure.
pub trait Bot: Send {
    fn make_move(&mut self, state: &GameState) -> Move;
}
