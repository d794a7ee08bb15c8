//! Ability execution pipeline.
//!
//! The only public entry point is [`execute`]; the stages live in submodules:
//!
//! - `validation`: actor status, action economy, resources, requirements
//! - `targeting`: range, faction and area expansion
//! - `ledger`: action counters and resource payment
//! - `effects`: damage, healing, teleport, status and resonance summons
//! - `pipeline`: orchestration
//!
//! ## Error Handling
//!
//! Every failure is an [`AbilityError`] raised before the ledger runs, so a
//! rejected request leaves the session untouched.

mod context;
mod effects;
mod ledger;
mod pipeline;
mod targeting;
mod validation;

pub use context::EffectContext;

use crate::action::{AbilityError, ExecutionRequest, ExecutionResult};
use crate::env::GameEnv;
use crate::state::SessionState;

/// Resolves one ability use against the session.
///
/// ## Errors
/// - `AbilityError::NotFound` - actor, ability, target or a required oracle is missing
/// - `AbilityError::ActorIncapacitated` - actor is downed
/// - `AbilityError::ActionEconomyExhausted` - no slot of the required type left
/// - `AbilityError::InsufficientResource` - cost (after resonance) or distance unaffordable
/// - `AbilityError::OutOfRange` / `AbilityError::InvalidTarget` - targeting failed
/// - `AbilityError::RequirementUnmet` - custom requirement or effect precondition failed
pub fn execute(
    state: &mut SessionState,
    env: &GameEnv<'_>,
    request: &ExecutionRequest,
) -> Result<ExecutionResult, AbilityError> {
    pipeline::execute(state, env, request)
}
