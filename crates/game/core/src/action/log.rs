//! Structured log events.
//!
//! Events carry participant and ability names rather than ids so observers can
//! render them without further lookups.

use strum::IntoStaticStr;

use crate::resonance::Pole;
use crate::state::Position;
use crate::stats::Attribute;

#[derive(Clone, Debug, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "event_kind", rename_all = "snake_case")
)]
pub enum LogEvent {
    AttackHit {
        actor: String,
        target: String,
        ability: String,
        roll: u32,
        modifier: i32,
        total: i32,
        threshold: i32,
        damage: u32,
    },
    AttackMiss {
        actor: String,
        target: String,
        ability: String,
        roll: u32,
        modifier: i32,
        total: i32,
        threshold: i32,
    },
    Heal {
        actor: String,
        target: String,
        ability: String,
        /// Vitality actually restored, after clamping to the maximum.
        healing: u32,
    },
    Teleport {
        actor: String,
        ability: String,
        from: Position,
        to: Position,
        distance: u32,
        status: Option<String>,
    },
    StatusApplied {
        actor: String,
        target: String,
        ability: String,
        status: String,
    },
    ResonanceSummoned {
        actor: String,
        ability: String,
        pole: Pole,
        enhanced: bool,
        radius: u32,
        rounds: u32,
    },
    ResonanceExpired {
        pole: Pole,
    },
    SkillCheck {
        actor: String,
        attribute: Attribute,
        roll: u32,
        modifier: i32,
        resonance: i32,
        total: i32,
        dc: i32,
        success: bool,
    },
    InitiativeRoll {
        actor: String,
        roll: u32,
        modifier: i32,
        total: i32,
    },
    TurnOrderSet {
        order: Vec<String>,
    },
    TurnStarted {
        actor: String,
        round: u32,
    },
    CombatEnded {
        rounds: u32,
    },
}

impl LogEvent {
    /// Snake-case event kind, matching the serialized `event_kind` tag.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_event_kind_tag() {
        let event = LogEvent::Heal {
            actor: "Mira".into(),
            target: "Arjun".into(),
            ability: "Mend".into(),
            healing: 4,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event_kind"], "heal");
        assert_eq!(json["healing"], 4);
        assert_eq!(event.kind(), "heal");
    }
}
