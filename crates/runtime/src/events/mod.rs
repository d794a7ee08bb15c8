//! Topic-based event bus for runtime events.
//!
//! Workers publish after a mutation has been committed; consumers subscribe
//! only to the topics they need. Delivery is best-effort and never affects the
//! outcome of a command.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{CombatEvent, ResonanceEvent, SessionEvent};
