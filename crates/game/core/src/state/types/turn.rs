use super::ParticipantId;

/// Session phase driven by the combat state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatPhase {
    /// Pre-combat setup.
    #[default]
    Staging,
    /// Initiative rolled, turns advancing.
    Combat,
    /// Post-combat free roam.
    Exploration,
}

/// Turn order established by initiative.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnOrder {
    /// Participants sorted by initiative, highest first.
    pub order: Vec<ParticipantId>,

    /// Cursor into `order` pointing at the participant whose turn it is.
    pub index: usize,

    /// Round counter, starting at 1 when combat begins. Zero outside combat.
    pub round: u32,
}

impl TurnOrder {
    pub fn new(order: Vec<ParticipantId>) -> Self {
        Self {
            order,
            index: 0,
            round: 1,
        }
    }

    pub fn current(&self) -> Option<ParticipantId> {
        self.order.get(self.index).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Moves the cursor forward. Returns `true` when a new round began.
    pub fn advance(&mut self) -> bool {
        if self.order.is_empty() {
            return false;
        }
        self.index = (self.index + 1) % self.order.len();
        let wrapped = self.index == 0;
        if wrapped {
            self.round += 1;
        }
        wrapped
    }

    /// Drops a participant from the order, keeping the cursor on the same
    /// participant where possible.
    pub fn remove(&mut self, id: ParticipantId) {
        let Some(pos) = self.order.iter().position(|p| *p == id) else {
            return;
        };
        self.order.remove(pos);
        if pos < self.index {
            self.index -= 1;
        }
        if self.index >= self.order.len() {
            self.index = 0;
        }
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.index = 0;
        self.round = 0;
    }
}
