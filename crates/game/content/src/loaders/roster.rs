//! Participant roster loader.
//!
//! A roster lists the participants of an encounter together with the item
//! categories they have equipped. Specs are converted into core participants
//! with full resource pools.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use vyuha_core::{
    AttributeScores, ItemCategory, Participant, ParticipantId, PlayerId, Position,
    ResonanceAffinity, SessionId, SessionState,
};

use crate::inventory::InMemoryInventory;
use crate::loaders::{LoadResult, read_file};

const EMBEDDED_SKIRMISH: &str = include_str!("../../data/rosters/skirmish.ron");

fn default_movement_speed() -> u32 {
    6
}

/// Participant definition as written in roster files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantSpec {
    pub id: u32,
    pub name: String,
    pub owner: u32,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub attributes: AttributeScores,
    pub vitality: u32,
    pub stamina: u32,
    pub essence: u32,
    #[serde(default = "default_movement_speed")]
    pub movement_speed: u32,
    #[serde(default)]
    pub affinity: ResonanceAffinity,
    #[serde(default)]
    pub equipped: Vec<ItemCategory>,
}

impl ParticipantSpec {
    pub fn to_participant(&self) -> Participant {
        let mut participant =
            Participant::new(ParticipantId(self.id), self.name.clone(), PlayerId(self.owner))
                .with_attributes(self.attributes)
                .with_pools(self.vitality, self.stamina, self.essence)
                .with_movement_speed(self.movement_speed)
                .with_affinity(self.affinity);
        participant.position = self.position;
        participant
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RosterFile {
    participants: Vec<ParticipantSpec>,
}

/// Participants of an encounter and their equipment.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub participants: Vec<Participant>,
    pub inventory: InMemoryInventory,
}

impl Roster {
    /// Builds a fresh session seeded with every roster participant, in file order.
    pub fn into_session(self, id: SessionId, seed: u64) -> (SessionState, InMemoryInventory) {
        let state = self
            .participants
            .into_iter()
            .fold(SessionState::new(id, seed), SessionState::with_participant);
        (state, self.inventory)
    }
}

/// Loader for rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }

    /// The embedded three-way skirmish roster.
    pub fn skirmish() -> LoadResult<Roster> {
        Self::parse(EMBEDDED_SKIRMISH)
    }

    pub fn parse(content: &str) -> LoadResult<Roster> {
        let file: RosterFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        let mut seen = HashSet::new();
        let mut roster = Roster::default();
        for spec in &file.participants {
            if !seen.insert(spec.id) {
                anyhow::bail!("duplicate participant id {}", spec.id);
            }
            for category in &spec.equipped {
                roster.inventory.equip(ParticipantId(spec.id), *category);
            }
            roster.participants.push(spec.to_participant());
        }
        Ok(roster)
    }
}
