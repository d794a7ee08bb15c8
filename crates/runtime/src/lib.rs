//! Runtime orchestration for combat sessions.
//!
//! This crate is the single-writer boundary around `vyuha-core`: every open
//! session is owned by one worker task that applies commands in arrival order,
//! commits each successful mutation through a [`SessionRepository`] and then
//! publishes what happened on the [`EventBus`]. Consumers embed [`Runtime`] to
//! open and close sessions and talk to each one through a [`SessionHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`workers`] keeps background tasks internal to the crate
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod api;
pub mod events;
pub mod oracle;
pub mod repository;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, SessionHandle};
pub use events::{CombatEvent, Event, EventBus, ResonanceEvent, SessionEvent, Topic};
pub use oracle::OracleManager;
pub use repository::{
    FileSessionRepository, InMemorySessionRepository, RepositoryError, SessionRepository,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
