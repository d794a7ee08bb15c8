//! Custom ability requirements.
//!
//! Each requirement is a typed predicate evaluated against the actor and the
//! external inventory collaborator. A failing predicate yields a message that
//! can be shown to the player as-is.

use crate::action::AbilityError;
use crate::env::{InventoryOracle, ItemCategory};
use crate::state::Participant;
use crate::stats::Attribute;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Requirement {
    /// An item of the given category must be equipped.
    EquippedItem(ItemCategory),

    /// The raw attribute score must be at least `threshold`.
    MinimumAttribute { attribute: Attribute, threshold: i32 },
}

impl Requirement {
    /// Evaluates the predicate for `actor`.
    ///
    /// # Errors
    ///
    /// Returns `AbilityError::RequirementUnmet` describing the unmet condition.
    pub fn evaluate<I>(&self, actor: &Participant, inventory: &I) -> Result<(), AbilityError>
    where
        I: InventoryOracle + ?Sized,
    {
        match self {
            Self::EquippedItem(category) => {
                if inventory.has_equipped(actor.id, *category) {
                    Ok(())
                } else {
                    Err(AbilityError::RequirementUnmet(format!(
                        "requires a {category} to be equipped"
                    )))
                }
            }
            Self::MinimumAttribute {
                attribute,
                threshold,
            } => {
                let score = actor.attributes.get(*attribute);
                if score >= *threshold {
                    Ok(())
                } else {
                    Err(AbilityError::RequirementUnmet(format!(
                        "requires {attribute} {threshold} or higher (have {score})"
                    )))
                }
            }
        }
    }
}
