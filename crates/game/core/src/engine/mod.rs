//! Session engine.
//!
//! [`CombatEngine`] is the only mutator of a [`SessionState`]. It wraps the
//! action pipeline and the combat state machine, and guarantees that a failed
//! operation leaves the session exactly as it found it.

use crate::action::{self, AbilityError, ExecutionRequest, ExecutionResult, LogEvent};
use crate::combat::{self, CheckOutcome, CombatError};
use crate::env::GameEnv;
use crate::resonance::Pole;
use crate::state::{ParticipantId, SessionState};
use crate::stats::Attribute;

/// Engine borrowing one session for the duration of a command.
pub struct CombatEngine<'a> {
    state: &'a mut SessionState,
}

impl<'a> CombatEngine<'a> {
    pub fn new(state: &'a mut SessionState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &SessionState {
        &*self.state
    }

    /// Participant whose turn it is, if combat is running.
    pub fn current_actor(&self) -> Option<ParticipantId> {
        self.state.current_actor()
    }

    /// Resolves an ability use, reporting failures inside the result.
    pub fn execute_ability(
        &mut self,
        env: &GameEnv<'_>,
        request: &ExecutionRequest,
    ) -> ExecutionResult {
        match self.try_execute_ability(env, request) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(
                    "{}: {} rejected for {}: {}",
                    self.state.id,
                    request.ability,
                    request.actor,
                    err
                );
                ExecutionResult::failure(&err)
            }
        }
    }

    /// Resolves an ability use.
    ///
    /// On error the session is restored to its state before the call.
    pub fn try_execute_ability(
        &mut self,
        env: &GameEnv<'_>,
        request: &ExecutionRequest,
    ) -> Result<ExecutionResult, AbilityError> {
        self.atomically(|state| action::execute(state, env, request))
    }

    pub fn begin_combat(&mut self, env: &GameEnv<'_>) -> Result<Vec<LogEvent>, CombatError> {
        self.atomically(|state| combat::begin_combat(state, env))
    }

    pub fn advance_turn(&mut self, env: &GameEnv<'_>) -> Result<Vec<LogEvent>, CombatError> {
        self.atomically(|state| combat::advance_turn(state, env))
    }

    pub fn end_combat(&mut self) -> Result<Vec<LogEvent>, CombatError> {
        self.atomically(combat::end_combat)
    }

    pub fn resolve_check(
        &mut self,
        env: &GameEnv<'_>,
        participant: ParticipantId,
        attribute: Attribute,
        dc: i32,
    ) -> Result<CheckOutcome, CombatError> {
        self.atomically(|state| combat::resolve_check(state, env, participant, attribute, dc))
    }

    /// Sets the session's default resonance. A summoned zone keeps precedence.
    pub fn set_environmental_resonance(&mut self, pole: Option<Pole>) {
        tracing::info!(
            "{}: environmental resonance set to {:?}",
            self.state.id,
            pole
        );
        self.state.resonance.environmental = pole;
    }

    fn atomically<T, E>(
        &mut self,
        op: impl FnOnce(&mut SessionState) -> Result<T, E>,
    ) -> Result<T, E> {
        let before = self.state.clone();
        let outcome = op(&mut *self.state);
        if outcome.is_err() {
            *self.state = before;
        }
        outcome
    }
}
