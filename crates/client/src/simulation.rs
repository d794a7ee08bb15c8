//! Scripted skirmish driven through the runtime.
//!
//! The simulation is a runtime client like any other: it reads state through
//! [`SessionHandle::query_session`], issues commands, and relays bus events to
//! an output sink as JSON lines.

use std::collections::BTreeSet;
use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::broadcast::{self, error::TryRecvError};

use vyuha_content::{AbilityCatalog, AbilityLoader, ConfigLoader, ContentFactory, RosterLoader};
use vyuha_core::{ParticipantId, PlayerId, Pole, SessionState};
use vyuha_runtime::{
    Event, EventBus, FileSessionRepository, InMemorySessionRepository, OracleManager, Runtime,
    RuntimeConfig, SessionHandle, SessionRepository, Topic,
};

use crate::config::SimConfig;
use crate::tactics::{LowestHealthTactic, Tactic};

/// Summary of a finished simulation.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub final_state: SessionState,
    /// Last round that was played.
    pub rounds: u32,
    /// Owner of the only side left standing, if combat was decided.
    pub victor: Option<PlayerId>,
    /// Bus events written to the sink.
    pub events: usize,
}

/// One scripted session from opening to close.
pub struct Simulation {
    runtime: Runtime,
    catalog: Arc<AbilityCatalog>,
    state: SessionState,
    rounds: u32,
    environment: Option<Pole>,
    tactic: Box<dyn Tactic>,
}

impl Simulation {
    pub fn new(runtime: Runtime, catalog: Arc<AbilityCatalog>, state: SessionState) -> Self {
        Self {
            runtime,
            catalog,
            state,
            rounds: 3,
            environment: None,
            tactic: Box::new(LowestHealthTactic::default()),
        }
    }

    /// Loads content and assembles the runtime described by `config`.
    pub async fn from_config(config: &SimConfig) -> Result<Self> {
        let (rules, catalog, roster) = match &config.data_dir {
            Some(dir) => {
                let factory = ContentFactory::new(dir);
                (
                    factory.load_rules()?,
                    factory.load_abilities()?,
                    factory.load_roster(&config.roster)?,
                )
            }
            None => (
                ConfigLoader::embedded()?,
                AbilityLoader::embedded()?,
                RosterLoader::skirmish()?,
            ),
        };
        tracing::info!(
            "Loaded {} abilities and {} participants",
            catalog.len(),
            roster.participants.len()
        );

        let (state, inventory) = roster.into_session(config.session_id, config.seed);
        let catalog = Arc::new(catalog);

        let repository: Arc<dyn SessionRepository> = match &config.save_dir {
            Some(dir) => Arc::new(FileSessionRepository::new(dir)?),
            None => Arc::new(InMemorySessionRepository::new()),
        };

        let runtime = Runtime::builder()
            .config(RuntimeConfig {
                rules,
                ..RuntimeConfig::default()
            })
            .oracles(OracleManager::new(Arc::clone(&catalog), Arc::new(inventory)))
            .repository(repository)
            .build()
            .await?;

        Ok(Self::new(runtime, catalog, state)
            .rounds(config.rounds)
            .environment(config.environment))
    }

    #[must_use]
    pub fn rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    #[must_use]
    pub fn environment(mut self, pole: Option<Pole>) -> Self {
        self.environment = pole;
        self
    }

    #[must_use]
    pub fn tactic(mut self, tactic: impl Tactic + 'static) -> Self {
        self.tactic = Box::new(tactic);
        self
    }

    /// Plays the session and writes every bus event to `out`.
    pub async fn run(mut self, out: &mut impl Write) -> Result<SimulationReport> {
        let mut printer = EventPrinter::subscribe(self.runtime.event_bus()).await;
        let session = self.state.id;
        let handle = self.runtime.open_session(self.state.clone()).await?;

        tracing::info!(
            "Session {} opened with tactic {}",
            session,
            self.tactic.name()
        );

        if self.environment.is_some() {
            handle.set_environmental_resonance(self.environment).await?;
        }
        handle.begin_combat().await?;
        let mut events = printer.flush(out)?;

        let (rounds, victor) = loop {
            let state = handle.query_session().await?;
            let victor = last_side_standing(&state);
            if state.turn.round > self.rounds || victor.is_some() {
                break (state.turn.round.min(self.rounds), victor);
            }

            if let Some(actor) = state.current_actor() {
                self.take_turn(&handle, &state, actor).await?;
            }
            handle.advance_turn().await?;
            events += printer.flush(out)?;
        };

        handle.end_combat().await?;
        let final_state = self.runtime.close_session(session).await?;
        events += printer.flush(out)?;

        Ok(SimulationReport {
            final_state,
            rounds,
            victor,
            events,
        })
    }

    /// Tries proposals in order until one resolves.
    async fn take_turn(
        &self,
        handle: &SessionHandle,
        state: &SessionState,
        actor: ParticipantId,
    ) -> Result<()> {
        for request in self.tactic.candidates(state, &self.catalog, actor) {
            let result = handle.execute_ability(request).await?;
            if result.success {
                tracing::debug!("{}", result.message);
                return Ok(());
            }
        }
        tracing::debug!("{} passes", actor);
        Ok(())
    }
}

fn last_side_standing(state: &SessionState) -> Option<PlayerId> {
    let standing: BTreeSet<PlayerId> = state
        .participants()
        .iter()
        .filter(|p| !p.is_downed())
        .map(|p| p.owner)
        .collect();
    match standing.len() {
        1 => standing.first().copied(),
        _ => None,
    }
}

/// Drains bus subscriptions into a sink as JSON lines.
struct EventPrinter {
    receivers: Vec<broadcast::Receiver<Event>>,
}

impl EventPrinter {
    async fn subscribe(bus: &EventBus) -> Self {
        let mut receivers = Vec::with_capacity(Topic::ALL.len());
        for topic in Topic::ALL {
            receivers.push(bus.subscribe(topic).await);
        }
        Self { receivers }
    }

    /// Writes every pending event. Returns how many were written.
    fn flush(&mut self, out: &mut impl Write) -> Result<usize> {
        let mut written = 0;
        for rx in &mut self.receivers {
            loop {
                match rx.try_recv() {
                    Ok(event) => {
                        writeln!(out, "{}", serde_json::to_string(&event)?)?;
                        written += 1;
                    }
                    Err(TryRecvError::Lagged(skipped)) => {
                        tracing::warn!("Event printer lagged, {} events skipped", skipped);
                    }
                    Err(TryRecvError::Empty | TryRecvError::Closed) => break,
                }
            }
        }
        Ok(written)
    }
}
