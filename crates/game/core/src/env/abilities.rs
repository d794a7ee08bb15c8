//! Ability template oracle.

use crate::ability::{Ability, AbilityId};

/// Read-only access to ability templates (the `LoadAbility` collaborator).
pub trait AbilityOracle: Send + Sync {
    fn ability(&self, id: &AbilityId) -> Option<&Ability>;
}
