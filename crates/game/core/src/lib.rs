//! Deterministic combat and ability rules shared by the runtime and tools.
//!
//! `vyuha-core` defines the canonical rules (abilities, resonance, turn order)
//! and exposes pure APIs with no I/O. All session mutation flows through
//! [`engine::CombatEngine`]; collaborators (ability catalog, inventory, rules
//! constants, randomness) are injected through [`env::Env`].
pub mod ability;
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod resonance;
pub mod state;
pub mod stats;

pub use ability::{
    Ability, AbilityId, ActionType, DiceError, DiceExpr, EffectKind, Requirement, ResourceCost,
    TargetKind,
};
pub use action::{AbilityError, ExecutionRequest, ExecutionResult, LogEvent, TargetSpec};
pub use combat::{CheckOutcome, CombatError};
pub use config::{ResonanceMagnitude, ResonanceTable, RulesConfig};
pub use engine::CombatEngine;
pub use env::{
    AbilityOracle, ConfigOracle, EmptyInventory, Env, GameEnv, InventoryOracle, ItemCategory,
    OracleError, PcgRng, RngOracle, ScriptedRng,
};
pub use error::{ErrorSeverity, GameError};
pub use resonance::{
    EffectiveResonance, Pole, Resonance, ResonanceAffinity, ResonanceError, ResonanceSource,
    ResonanceState, ResonanceTalent, SummonedZone,
};
pub use state::{
    ActionEconomy, CombatPhase, Participant, ParticipantId, ParticipantStatus, PlayerId, Position,
    SessionId, SessionState, TurnOrder,
};
pub use stats::{Attribute, AttributeCategory, AttributeScores, ResourceKind, ResourceMeter};
