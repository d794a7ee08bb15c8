//! Combat state machine and attribute checks.
//!
//! Owns the session's turn order. Initiative is rolled once per combat; each
//! turn refreshes the current participant's movement and action slots.

mod check;
mod error;
mod turns;

pub use check::{CheckOutcome, resolve_check};
pub use error::CombatError;
pub use turns::{advance_turn, begin_combat, end_combat};
