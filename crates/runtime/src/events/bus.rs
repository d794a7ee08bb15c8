//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};

use vyuha_core::{LogEvent, SessionId};

use super::types::{CombatEvent, ResonanceEvent, SessionEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Ability resolutions, checks and failures
    Combat,
    /// Initiative, turn starts and combat end
    Turn,
    /// Summoned zones and environmental changes
    Resonance,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Combat, Topic::Turn, Topic::Resonance];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Combat(CombatEvent),
    Turn(SessionEvent),
    Resonance(ResonanceEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Combat(_) => Topic::Combat,
            Event::Turn(_) => Topic::Turn,
            Event::Resonance(_) => Topic::Resonance,
        }
    }

    /// Routes a rules log entry to the topic that owns it.
    ///
    /// Attack, heal, teleport, status and check entries travel inside
    /// [`CombatEvent`]s instead and yield `None`.
    pub fn from_log(session: SessionId, event: LogEvent) -> Option<Self> {
        let scoped = SessionEvent { session, event };
        match scoped.event {
            LogEvent::InitiativeRoll { .. }
            | LogEvent::TurnOrderSet { .. }
            | LogEvent::TurnStarted { .. }
            | LogEvent::CombatEnded { .. } => Some(Event::Turn(scoped)),
            LogEvent::ResonanceSummoned { .. } | LogEvent::ResonanceExpired { .. } => {
                Some(Event::Resonance(ResonanceEvent::Log(scoped)))
            }
            _ => None,
        }
    }

    /// Session the event belongs to.
    pub fn session(&self) -> SessionId {
        match self {
            Event::Combat(
                CombatEvent::AbilityResolved { session, .. }
                | CombatEvent::CheckResolved { session, .. }
                | CombatEvent::ActionFailed { session, .. },
            ) => *session,
            Event::Turn(scoped) | Event::Resonance(ResonanceEvent::Log(scoped)) => scoped.session,
            Event::Resonance(ResonanceEvent::EnvironmentChanged { session, .. }) => *session,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about.
pub struct EventBus {
    channels: Arc<RwLock<HashMap<Topic, broadcast::Sender<Event>>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let channels = Topic::ALL
            .into_iter()
            .map(|topic| (topic, broadcast::channel(capacity).0))
            .collect();

        Self {
            channels: Arc::new(RwLock::new(channels)),
        }
    }

    /// Publish an event to its corresponding topic
    ///
    /// Delivery is best-effort. Publishing never waits on the channel map, so
    /// an event published while a subscription is being registered is dropped,
    /// as are events sent to a topic nobody listens on.
    pub fn publish(&self, event: Event) {
        let topic = event.topic();

        match self.channels.try_read() {
            Ok(channels) => {
                if let Some(tx) = channels.get(&topic)
                    && tx.send(event).is_err()
                {
                    tracing::trace!("No subscribers for topic {:?}", topic);
                }
            }
            Err(_) => {
                tracing::debug!("Failed to acquire event bus lock for topic {:?}", topic);
            }
        }
    }

    /// Publish every routable entry of a rules log.
    pub fn publish_log(&self, session: SessionId, events: &[LogEvent]) {
        for event in events {
            if let Some(event) = Event::from_log(session, event.clone()) {
                self.publish(event);
            }
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub async fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        let mut channels = self.channels.write().await;
        channels
            .entry(topic)
            .or_insert_with(|| broadcast::channel(100).0)
            .subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub async fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        let mut receivers = HashMap::with_capacity(topics.len());
        for &topic in topics {
            receivers.insert(topic, self.subscribe(topic).await);
        }
        receivers
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
