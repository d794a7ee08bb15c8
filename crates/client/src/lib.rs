//! Scripted skirmish client for the vyuha runtime.
//!
//! # Architecture
//!
//! ```text
//! Simulation (composition root)
//!   ├─→ Content (rules, abilities, roster)
//!   ├─→ Runtime (one session worker, repository, event bus)
//!   └─→ Tactic (decides each participant's turn)
//! ```
//!
//! The simulation only talks to the session through its handle, so anything it
//! does could equally come from a networked client.

pub mod config;
pub mod simulation;
pub mod tactics;

pub use config::SimConfig;
pub use simulation::{Simulation, SimulationReport};
pub use tactics::{LowestHealthTactic, Tactic};
