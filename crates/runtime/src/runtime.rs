//! High-level runtime orchestrator.
//!
//! The runtime owns one worker per open session, wires up command/event
//! channels, and exposes a builder-based API for clients.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use vyuha_core::{RulesConfig, SessionId, SessionState};

use crate::api::{Result, RuntimeError, SessionHandle};
use crate::events::{Event, EventBus, Topic};
use crate::oracle::OracleManager;
use crate::repository::{InMemorySessionRepository, SessionRepository};
use crate::workers::{Command, SessionWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub rules: RulesConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            rules: RulesConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

struct SessionSlot {
    handle: SessionHandle,
    worker: JoinHandle<()>,
}

/// Main runtime that hosts combat sessions
///
/// Design: Runtime owns the session workers and the registry of open sessions.
/// [`SessionHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    config: RuntimeConfig,
    oracles: OracleManager,
    repository: Arc<dyn SessionRepository>,
    event_bus: EventBus,
    sessions: HashMap<SessionId, SessionSlot>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Subscribe to events of every session on one topic
    pub async fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic).await
    }

    /// Open a session from a fresh or externally built state.
    ///
    /// The state is saved before the worker starts, replacing any stored
    /// snapshot with the same id.
    pub async fn open_session(&mut self, state: SessionState) -> Result<SessionHandle> {
        if self.sessions.contains_key(&state.id) {
            return Err(RuntimeError::SessionAlreadyOpen(state.id));
        }
        self.repository.save(&state)?;
        Ok(self.spawn_worker(state))
    }

    /// Re-open a session from its last committed snapshot.
    pub async fn resume_session(&mut self, id: SessionId) -> Result<SessionHandle> {
        if self.sessions.contains_key(&id) {
            return Err(RuntimeError::SessionAlreadyOpen(id));
        }
        let state = self
            .repository
            .load(id)?
            .ok_or(RuntimeError::SessionNotFound(id))?;
        Ok(self.spawn_worker(state))
    }

    /// Handle to an open session
    pub fn session(&self, id: SessionId) -> Result<SessionHandle> {
        self.sessions
            .get(&id)
            .map(|slot| slot.handle.clone())
            .ok_or(RuntimeError::SessionNotOpen(id))
    }

    /// Ids of all open sessions in ascending order
    pub fn open_sessions(&self) -> Vec<SessionId> {
        let mut ids: Vec<SessionId> = self.sessions.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Stop a session's worker and return its final state.
    ///
    /// The committed snapshot stays in the repository. Outstanding handles
    /// fail with `CommandChannelClosed` afterwards.
    pub async fn close_session(&mut self, id: SessionId) -> Result<SessionState> {
        let slot = self
            .sessions
            .remove(&id)
            .ok_or(RuntimeError::SessionNotOpen(id))?;

        let state = slot.handle.close().await?;
        slot.worker.await.map_err(RuntimeError::WorkerJoin)?;

        tracing::info!("{} closed at nonce {}", id, state.nonce);
        Ok(state)
    }

    /// Close every open session
    pub async fn shutdown(mut self) -> Result<()> {
        for id in self.open_sessions() {
            self.close_session(id).await?;
        }
        Ok(())
    }

    fn spawn_worker(&mut self, state: SessionState) -> SessionHandle {
        let id = state.id;
        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let handle = SessionHandle::new(id, command_tx, self.event_bus.clone());

        let worker = SessionWorker::new(
            state,
            self.oracles.clone(),
            Arc::clone(&self.repository),
            command_rx,
            self.event_bus.clone(),
        );
        let worker = tokio::spawn(async move {
            worker.run().await;
        });

        self.sessions.insert(
            id,
            SessionSlot {
                handle: handle.clone(),
                worker,
            },
        );
        handle
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    repository: Option<Arc<dyn SessionRepository>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            repository: None,
        }
    }

    /// Override runtime configuration
    ///
    /// The configured rules replace whatever rules the oracle manager carries.
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Set the session repository (default: in-memory)
    pub fn repository(mut self, repository: Arc<dyn SessionRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Build the runtime
    pub async fn build(self) -> Result<Runtime> {
        let oracles = self
            .oracles
            .ok_or(RuntimeError::MissingOracles)?
            .with_rules(self.config.rules.clone());
        let repository = self
            .repository
            .unwrap_or_else(|| Arc::new(InMemorySessionRepository::new()));
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        Ok(Runtime {
            config: self.config,
            oracles,
            repository,
            event_bus,
            sessions: HashMap::new(),
        })
    }
}
