//! Bots for RPSDW.
//!
//! Everything here implements [`Bot`], the seam the runner calls once per
//! round.
//!
//! ## Implementations
//!
//! - [`Selector`] — tie-streak and opponent-propensity heuristic
//! - [`Constant`] — always the same move
//! - [`Fish`] — uniform Rock/Paper/Scissors
//!
//! The selector's arithmetic lives in [`Memory`] and [`Odds`], shaped by a
//! [`Tuning`]. [`Observer`]s receive a [`Decision`] after every throw.
mod bot;
mod constant;
mod decision;
mod fish;
mod memory;
mod observer;
mod odds;
mod selector;
mod tuning;

pub use bot::*;
pub use constant::*;
pub use decision::*;
pub use fish::*;
pub use memory::*;
pub use observer::*;
pub use odds::*;
pub use selector::*;
pub use tuning::*;
