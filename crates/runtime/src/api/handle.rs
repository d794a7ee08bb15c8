//! Cloneable façade for issuing commands to one session.
//!
//! [`SessionHandle`] hides channel plumbing and offers async helpers for every
//! session operation. Commands from all clones are applied in arrival order by
//! the session's single worker.
use tokio::sync::{broadcast, mpsc, oneshot};

use vyuha_core::{
    Attribute, CheckOutcome, ExecutionRequest, ExecutionResult, LogEvent, ParticipantId, Pole,
    SessionId, SessionState,
};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with an open session
#[derive(Clone)]
pub struct SessionHandle {
    id: SessionId,
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl SessionHandle {
    pub(crate) fn new(id: SessionId, command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            id,
            command_tx,
            event_bus,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    async fn call<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Resolve an ability.
    ///
    /// Rule violations are reported inside the returned result with
    /// `success == false`; `Err` means the runtime itself failed.
    pub async fn execute_ability(&self, request: ExecutionRequest) -> Result<ExecutionResult> {
        self.call(|reply| Command::ExecuteAbility { request, reply })
            .await?
    }

    /// Roll initiative and start the first turn.
    pub async fn begin_combat(&self) -> Result<Vec<LogEvent>> {
        self.call(|reply| Command::BeginCombat { reply }).await?
    }

    /// End the current turn and start the next one.
    pub async fn advance_turn(&self) -> Result<Vec<LogEvent>> {
        self.call(|reply| Command::AdvanceTurn { reply }).await?
    }

    pub async fn end_combat(&self) -> Result<Vec<LogEvent>> {
        self.call(|reply| Command::EndCombat { reply }).await?
    }

    /// Set (or clear) the session's environmental resonance.
    pub async fn set_environmental_resonance(&self, pole: Option<Pole>) -> Result<()> {
        self.call(|reply| Command::SetEnvironmentalResonance { pole, reply })
            .await?
    }

    /// Roll a raw attribute check against `dc`.
    pub async fn resolve_check(
        &self,
        participant: ParticipantId,
        attribute: Attribute,
        dc: i32,
    ) -> Result<CheckOutcome> {
        self.call(|reply| Command::ResolveCheck {
            participant,
            attribute,
            dc,
            reply,
        })
        .await?
    }

    /// Query the current session state (read-only snapshot)
    pub async fn query_session(&self) -> Result<SessionState> {
        self.call(|reply| Command::QuerySession { reply }).await
    }

    /// Stop the worker and return the final state.
    pub(crate) async fn close(&self) -> Result<SessionState> {
        self.call(|reply| Command::Close { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// The bus is shared by every session; filter on [`Event::session`] to
    /// follow only this one.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use vyuha_runtime::Topic;
    ///
    /// let mut turns = handle.subscribe(Topic::Turn).await;
    /// while let Ok(event) = turns.recv().await {
    ///     // Handle turn events
    /// }
    /// ```
    pub async fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic).await
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
