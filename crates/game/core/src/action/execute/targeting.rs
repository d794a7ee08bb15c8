//! Target validation and area expansion.

use crate::ability::{Ability, TargetKind};
use crate::action::{AbilityError, TargetSpec};
use crate::state::{Participant, ParticipantId, Position, SessionState};

/// Resolved targeting for one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct Targeting {
    /// Participants the effect applies to, in session insertion order for areas.
    pub affected: Vec<ParticipantId>,
}

impl Targeting {
    fn single(id: ParticipantId) -> Self {
        Self { affected: vec![id] }
    }
}

pub(super) fn resolve(
    state: &SessionState,
    actor: &Participant,
    ability: &Ability,
    target: &TargetSpec,
) -> Result<Targeting, AbilityError> {
    match ability.target {
        TargetKind::SelfOnly => Ok(Targeting::single(actor.id)),
        TargetKind::Point => resolve_point(state, actor, ability, target),
        TargetKind::Ally | TargetKind::Enemy => resolve_participant(state, actor, ability, target),
    }
}

fn ensure_in_range(from: Position, to: Position, range: u32) -> Result<(), AbilityError> {
    let distance = from.distance(to);
    if distance > range {
        return Err(AbilityError::OutOfRange {
            distance,
            max: range,
        });
    }
    Ok(())
}

fn actor_position(actor: &Participant) -> Result<Position, AbilityError> {
    actor
        .position
        .ok_or_else(|| AbilityError::InvalidTarget(format!("{} is not on the grid", actor.name)))
}

fn resolve_point(
    state: &SessionState,
    actor: &Participant,
    ability: &Ability,
    target: &TargetSpec,
) -> Result<Targeting, AbilityError> {
    let point = target.position.ok_or_else(|| {
        AbilityError::InvalidTarget("point target requires x, y coordinates".to_string())
    })?;
    ensure_in_range(actor_position(actor)?, point, ability.range)?;

    // Radius zero still catches whoever stands on the square.
    Ok(Targeting {
        affected: state.participants_within(point, ability.radius),
    })
}

fn resolve_participant(
    state: &SessionState,
    actor: &Participant,
    ability: &Ability,
    target: &TargetSpec,
) -> Result<Targeting, AbilityError> {
    let target_id = target.participant.ok_or_else(|| {
        AbilityError::InvalidTarget("a target participant must be specified".to_string())
    })?;
    let target = state
        .participant(target_id)
        .ok_or_else(|| AbilityError::NotFound(format!("participant {target_id}")))?;

    let (Some(from), Some(to)) = (actor.position, target.position) else {
        return Err(AbilityError::InvalidTarget(
            "actor or target is not on the grid".to_string(),
        ));
    };
    ensure_in_range(from, to, ability.range)?;

    let is_ally = actor.is_ally_of(target);
    match ability.target {
        TargetKind::Ally if !is_ally => {
            return Err(AbilityError::InvalidTarget(format!(
                "{} can only target allies",
                ability.name
            )));
        }
        TargetKind::Enemy if is_ally => {
            return Err(AbilityError::InvalidTarget(format!(
                "{} can only target enemies",
                ability.name
            )));
        }
        _ => {}
    }

    if ability.radius > 0 {
        Ok(Targeting {
            affected: state.participants_within(to, ability.radius),
        })
    } else {
        Ok(Targeting::single(target.id))
    }
}
