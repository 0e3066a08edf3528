//! RPSDW game vocabulary.
//!
//! - [`Move`] — the five-letter alphabet and its beats relation
//! - [`Round`] — one completed exchange, ours and theirs
//! - [`GameState`] — ordered match history handed to bots each turn
//! - [`Outcome`] / [`Scoreboard`] — round scoring, telemetry only
mod moves;
mod outcome;
mod round;
mod scoreboard;
mod state;

pub use moves::*;
pub use outcome::*;
pub use round::*;
pub use scoreboard::*;
pub use state::*;
