//! Rock-Paper-Scissors-Dynamite-Water bot.
//!
//! Re-exports the workspace crates under one roof:
//!
//! - [`rpsdw_core`] — aliases, default tuning constants, logging
//! - [`rpsdw_gameplay`] — moves, rounds, match history, scoring
//! - [`rpsdw_players`] — the move selector and simple bots
pub use rpsdw_core::*;
pub use rpsdw_gameplay::*;
pub use rpsdw_players::*;
