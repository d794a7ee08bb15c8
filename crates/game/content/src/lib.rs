//! Data-driven content definitions and loaders.
//!
//! This crate houses static combat content and provides loaders for RON/TOML data files:
//! - Ability catalogs (data-driven via RON)
//! - Participant rosters with equipped gear (data-driven via RON)
//! - Rules constants and resonance tables (data-driven via TOML)
//!
//! Content is consumed by the runtime through the core oracle traits and never
//! appears in session state.

pub mod catalog;
pub mod inventory;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::AbilityCatalog;
pub use inventory::InMemoryInventory;

#[cfg(feature = "loaders")]
pub use loaders::{
    AbilityLoader, ConfigLoader, ContentFactory, LoadResult, ParticipantSpec, Roster,
    RosterLoader,
};
