//! Scripted decision making for simulated participants.
//!
//! A [`Tactic`] proposes ability uses for the participant whose turn it is.
//! Proposals are only plausible, not validated; the engine has the final word
//! and the simulation falls through to the next proposal on rejection.

use vyuha_content::AbilityCatalog;
use vyuha_core::{
    Ability, AbilityId, EffectKind, ExecutionRequest, Participant, ParticipantId, SessionState,
    TargetKind, TargetSpec,
};

/// Strategy for choosing what a participant does on its turn.
///
/// Implementations must be deterministic so seeded runs replay exactly.
pub trait Tactic: Send + Sync {
    /// Ability uses to try, best first.
    fn candidates(
        &self,
        state: &SessionState,
        catalog: &AbilityCatalog,
        actor: ParticipantId,
    ) -> Vec<ExecutionRequest>;

    /// Returns the tactic name for debugging and logging.
    fn name(&self) -> &'static str;
}

/// Walks a fixed repertoire and aims every ability at the weakest valid target.
///
/// **Behavior:**
/// - Hostile abilities pick the enemy with the lowest vitality percentage in range
/// - Healing picks the most wounded ally in range and is skipped when nobody is hurt
/// - Summoning is skipped without an attunement or while a zone is active
/// - Teleports are never proposed
#[derive(Debug, Clone)]
pub struct LowestHealthTactic {
    repertoire: Vec<AbilityId>,
}

impl LowestHealthTactic {
    pub fn new(repertoire: impl IntoIterator<Item = impl Into<AbilityId>>) -> Self {
        Self {
            repertoire: repertoire.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for LowestHealthTactic {
    fn default() -> Self {
        Self::new(["call_of_the_pole", "mend", "hex", "strike", "arrow_volley"])
    }
}

impl Tactic for LowestHealthTactic {
    fn candidates(
        &self,
        state: &SessionState,
        catalog: &AbilityCatalog,
        actor: ParticipantId,
    ) -> Vec<ExecutionRequest> {
        let Some(actor) = state.participant(actor) else {
            return Vec::new();
        };
        if actor.is_downed() {
            return Vec::new();
        }

        self.repertoire
            .iter()
            .filter_map(|id| catalog.get(id))
            .filter_map(|ability| {
                aim(state, actor, ability)
                    .map(|target| ExecutionRequest::new(actor.id, ability.id.clone(), target))
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "Lowest Health"
    }
}

fn aim(state: &SessionState, actor: &Participant, ability: &Ability) -> Option<TargetSpec> {
    match (ability.target, ability.effect) {
        (_, EffectKind::Teleport) => None,
        (TargetKind::SelfOnly, EffectKind::SummonResonance) => {
            let can_summon = actor.affinity.attunement.is_some()
                && state.resonance.active_zone().is_none();
            can_summon.then_some(TargetSpec::NONE)
        }
        (TargetKind::SelfOnly, _) => Some(TargetSpec::NONE),
        (TargetKind::Ally, _) => weakest(state, actor, ability.range, |p| {
            actor.is_ally_of(p) && p.vitality.current < p.vitality.maximum
        })
        .map(|p| TargetSpec::participant(p.id)),
        (TargetKind::Enemy, _) => weakest(state, actor, ability.range, |p| {
            !actor.is_ally_of(p) && !p.is_downed()
        })
        .map(|p| TargetSpec::participant(p.id)),
        (TargetKind::Point, _) => weakest(state, actor, ability.range, |p| {
            !actor.is_ally_of(p) && !p.is_downed()
        })
        .and_then(|p| p.position)
        .map(TargetSpec::point),
    }
}

fn weakest<'s>(
    state: &'s SessionState,
    actor: &Participant,
    range: u32,
    eligible: impl Fn(&Participant) -> bool,
) -> Option<&'s Participant> {
    let origin = actor.position?;
    state
        .participants()
        .iter()
        .filter(|p| p.position.is_some_and(|pos| origin.distance(pos) <= range))
        .filter(|p| eligible(*p))
        .min_by_key(|p| health_percentage(p.vitality.current, p.vitality.maximum))
}

fn health_percentage(current: u32, maximum: u32) -> u32 {
    if maximum == 0 {
        return 0;
    }
    current * 100 / maximum
}

#[cfg(test)]
mod tests {
    use super::*;
    use vyuha_core::{PlayerId, Position, SessionId};

    fn state() -> SessionState {
        let mut wounded = Participant::new(ParticipantId(3), "Raksha", PlayerId(2))
            .at(Position::new(1, 0))
            .with_pools(20, 4, 0);
        wounded.take_damage(15);

        SessionState::new(SessionId(1), 0)
            .with_participant(
                Participant::new(ParticipantId(1), "Arjun", PlayerId(1)).at(Position::new(0, 0)),
            )
            .with_participant(
                Participant::new(ParticipantId(2), "Mira", PlayerId(1)).at(Position::new(0, 1)),
            )
            .with_participant(wounded)
            .with_participant(
                Participant::new(ParticipantId(4), "Kalanemi", PlayerId(2))
                    .at(Position::new(1, 1)),
            )
            .with_participant(
                Participant::new(ParticipantId(5), "Far", PlayerId(2)).at(Position::new(9, 9)),
            )
    }

    fn catalog() -> AbilityCatalog {
        AbilityCatalog::embedded().unwrap()
    }

    #[test]
    fn strikes_the_weakest_enemy_in_reach() {
        let tactic = LowestHealthTactic::new(["strike"]);
        let candidates = tactic.candidates(&state(), &catalog(), ParticipantId(1));
        assert_eq!(
            candidates,
            vec![ExecutionRequest::new(
                ParticipantId(1),
                "strike",
                TargetSpec::participant(ParticipantId(3))
            )]
        );
    }

    #[test]
    fn healing_waits_for_a_wound() {
        let tactic = LowestHealthTactic::new(["mend"]);
        let mut state = state();
        assert!(tactic.candidates(&state, &catalog(), ParticipantId(2)).is_empty());

        state
            .participant_mut(ParticipantId(1))
            .unwrap()
            .take_damage(3);
        let candidates = tactic.candidates(&state, &catalog(), ParticipantId(2));
        assert_eq!(candidates[0].target, TargetSpec::participant(ParticipantId(1)));
    }

    #[test]
    fn unattuned_actors_do_not_summon() {
        let tactic = LowestHealthTactic::new(["call_of_the_pole", "shadow_step"]);
        assert!(tactic.candidates(&state(), &catalog(), ParticipantId(1)).is_empty());
    }

    #[test]
    fn unknown_abilities_are_ignored() {
        let tactic = LowestHealthTactic::new(["meteor", "strike"]);
        let candidates = tactic.candidates(&state(), &catalog(), ParticipantId(1));
        assert_eq!(candidates.len(), 1);
    }
}
