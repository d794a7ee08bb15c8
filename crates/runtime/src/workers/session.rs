//! Session worker that owns one authoritative [`SessionState`].
//!
//! Receives commands from [`SessionHandle`](crate::SessionHandle), applies them
//! through [`CombatEngine`], commits the result to the repository and then
//! publishes events to the [`EventBus`].

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, warn};

use vyuha_core::{
    Attribute, CheckOutcome, CombatEngine, ExecutionRequest, ExecutionResult, GameEnv, GameError,
    LogEvent, ParticipantId, Pole, SessionState,
};

use crate::api::{Result, RuntimeError};
use crate::events::{CombatEvent, Event, EventBus, ResonanceEvent};
use crate::oracle::OracleManager;
use crate::repository::SessionRepository;

/// Commands that can be sent to a session worker
pub enum Command {
    /// Resolve an ability. Rule violations come back as a failed result.
    ExecuteAbility {
        request: ExecutionRequest,
        reply: oneshot::Sender<Result<ExecutionResult>>,
    },
    BeginCombat {
        reply: oneshot::Sender<Result<Vec<LogEvent>>>,
    },
    AdvanceTurn {
        reply: oneshot::Sender<Result<Vec<LogEvent>>>,
    },
    EndCombat {
        reply: oneshot::Sender<Result<Vec<LogEvent>>>,
    },
    SetEnvironmentalResonance {
        pole: Option<Pole>,
        reply: oneshot::Sender<Result<()>>,
    },
    ResolveCheck {
        participant: ParticipantId,
        attribute: Attribute,
        dc: i32,
        reply: oneshot::Sender<Result<CheckOutcome>>,
    },
    /// Query the current session state (read-only).
    QuerySession { reply: oneshot::Sender<SessionState> },
    /// Stop the worker, replying with the final state.
    Close { reply: oneshot::Sender<SessionState> },
}

/// Background task that processes the commands of one session.
///
/// Every mutating command runs against a working copy. The copy replaces the
/// live state only after the repository accepted it, so a rejected command or
/// a failed save leaves the session untouched.
pub struct SessionWorker {
    state: SessionState,
    oracles: OracleManager,
    repository: Arc<dyn SessionRepository>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl SessionWorker {
    /// Creates a new session worker.
    pub fn new(
        state: SessionState,
        oracles: OracleManager,
        repository: Arc<dyn SessionRepository>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        tracing::info!(
            "SessionWorker for {} initialized with {} participants ({:?})",
            state.id,
            state.participants().len(),
            state.phase
        );

        Self {
            state,
            oracles,
            repository,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    if !self.handle_command(cmd) {
                        break;
                    }
                }
                else => break,
            }
        }
        tracing::info!("SessionWorker for {} stopped", self.state.id);
    }

    /// Returns `false` once the worker should stop.
    fn handle_command(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::ExecuteAbility { request, reply } => {
                let result = self.execute_ability(request);
                if reply.send(result).is_err() {
                    debug!("ExecuteAbility reply channel closed (caller dropped)");
                }
            }
            Command::BeginCombat { reply } => {
                let result = self.begin_combat();
                if reply.send(result).is_err() {
                    debug!("BeginCombat reply channel closed (caller dropped)");
                }
            }
            Command::AdvanceTurn { reply } => {
                let result = self.advance_turn();
                if reply.send(result).is_err() {
                    debug!("AdvanceTurn reply channel closed (caller dropped)");
                }
            }
            Command::EndCombat { reply } => {
                let result = self.end_combat();
                if reply.send(result).is_err() {
                    debug!("EndCombat reply channel closed (caller dropped)");
                }
            }
            Command::SetEnvironmentalResonance { pole, reply } => {
                let result = self.set_environmental_resonance(pole);
                if reply.send(result).is_err() {
                    debug!("SetEnvironmentalResonance reply channel closed (caller dropped)");
                }
            }
            Command::ResolveCheck {
                participant,
                attribute,
                dc,
                reply,
            } => {
                let result = self.resolve_check(participant, attribute, dc);
                if reply.send(result).is_err() {
                    debug!("ResolveCheck reply channel closed (caller dropped)");
                }
            }
            Command::QuerySession { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QuerySession reply channel closed (caller dropped)");
                }
            }
            Command::Close { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("Close reply channel closed (caller dropped)");
                }
                return false;
            }
        }
        true
    }

    fn execute_ability(&mut self, request: ExecutionRequest) -> Result<ExecutionResult> {
        let outcome = self.transact("execute_ability", |engine, env| {
            engine.try_execute_ability(env, &request)
        })?;

        match outcome {
            Ok(result) => {
                self.event_bus
                    .publish(Event::Combat(CombatEvent::AbilityResolved {
                        session: self.state.id,
                        actor: request.actor,
                        ability: request.ability.clone(),
                        message: result.message.clone(),
                        events: result.events.clone(),
                    }));
                self.event_bus.publish_log(self.state.id, &result.events);
                Ok(result)
            }
            Err(err) => Ok(ExecutionResult::failure(&err)),
        }
    }

    fn begin_combat(&mut self) -> Result<Vec<LogEvent>> {
        let events = self.transact("begin_combat", |engine, env| engine.begin_combat(env))??;
        self.event_bus.publish_log(self.state.id, &events);
        Ok(events)
    }

    fn advance_turn(&mut self) -> Result<Vec<LogEvent>> {
        let events = self.transact("advance_turn", |engine, env| engine.advance_turn(env))??;
        self.event_bus.publish_log(self.state.id, &events);
        Ok(events)
    }

    fn end_combat(&mut self) -> Result<Vec<LogEvent>> {
        let events = self.transact("end_combat", |engine, _| engine.end_combat())??;
        self.event_bus.publish_log(self.state.id, &events);
        Ok(events)
    }

    fn set_environmental_resonance(&mut self, pole: Option<Pole>) -> Result<()> {
        let mut working = self.state.clone();
        CombatEngine::new(&mut working).set_environmental_resonance(pole);
        self.commit(working, "set_environmental_resonance")?;

        self.event_bus
            .publish(Event::Resonance(ResonanceEvent::EnvironmentChanged {
                session: self.state.id,
                pole,
            }));
        Ok(())
    }

    fn resolve_check(
        &mut self,
        participant: ParticipantId,
        attribute: Attribute,
        dc: i32,
    ) -> Result<CheckOutcome> {
        let outcome = self.transact("resolve_check", |engine, env| {
            engine.resolve_check(env, participant, attribute, dc)
        })??;

        self.event_bus
            .publish(Event::Combat(CombatEvent::CheckResolved {
                session: self.state.id,
                event: outcome.event.clone(),
            }));
        Ok(outcome)
    }

    /// Runs `op` against a working copy and commits the copy on success.
    ///
    /// The outer error is a commit failure; the inner one is the rules
    /// rejection, already published as `ActionFailed`.
    fn transact<T, E, F>(
        &mut self,
        command: &'static str,
        op: F,
    ) -> Result<std::result::Result<T, E>>
    where
        E: GameError,
        F: FnOnce(&mut CombatEngine<'_>, &GameEnv<'_>) -> std::result::Result<T, E>,
    {
        let mut working = self.state.clone();
        let outcome = {
            let env = self.oracles.as_game_env();
            let mut engine = CombatEngine::new(&mut working);
            op(&mut engine, &env)
        };

        match outcome {
            Ok(value) => {
                self.commit(working, command)?;
                Ok(Ok(value))
            }
            Err(err) => {
                self.reject(command, &err);
                Ok(Err(err))
            }
        }
    }

    /// Persists `working` and makes it the live state.
    fn commit(&mut self, working: SessionState, command: &'static str) -> Result<()> {
        if let Err(err) = self.repository.save(&working) {
            let err = RuntimeError::from(err);
            error!("{}: failed to persist {}: {}", self.state.id, command, err);
            self.reject(command, &err);
            return Err(err);
        }
        self.state = working;
        Ok(())
    }

    fn reject<E: GameError>(&self, command: &'static str, err: &E) {
        warn!("{}: {} rejected: {}", self.state.id, command, err);
        self.event_bus
            .publish(Event::Combat(CombatEvent::ActionFailed {
                session: self.state.id,
                command: command.to_string(),
                error_code: err.error_code().to_string(),
                message: err.to_string(),
            }));
    }
}
