/// Magnitudes of one resonance strength (standard or enhanced).
///
/// Signs are not stored here: the favored side of a pole receives
/// `-cost`, `+roll`, `+check` and the opposed side the opposite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResonanceMagnitude {
    /// Cost shift for abilities paid from an aligned pool.
    pub cost: i32,
    /// Shift applied to attack rolls and DCs of aligned abilities.
    pub roll: i32,
    /// Shift applied to raw attribute checks.
    pub check: i32,
    /// Rounds a summoned zone of this strength lasts.
    pub duration: u32,
    /// Radius of a summoned zone of this strength, in squares.
    pub radius: u32,
}

/// Resonance tables for both strengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResonanceTable {
    pub standard: ResonanceMagnitude,
    pub enhanced: ResonanceMagnitude,
}

impl ResonanceTable {
    pub const fn magnitude(&self, enhanced: bool) -> &ResonanceMagnitude {
        if enhanced {
            &self.enhanced
        } else {
            &self.standard
        }
    }
}

impl Default for ResonanceTable {
    fn default() -> Self {
        Self {
            standard: ResonanceMagnitude {
                cost: 1,
                roll: 2,
                check: 2,
                duration: 5,
                radius: 15,
            },
            enhanced: ResonanceMagnitude {
                cost: 2,
                roll: 3,
                check: 3,
                duration: 7,
                radius: 20,
            },
        }
    }
}

/// Rules constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    /// Standard actions granted at the start of each turn.
    pub standard_actions_per_turn: u8,
    /// Bonus actions granted at the start of each turn.
    pub bonus_actions_per_turn: u8,
    /// Reactions granted once per combat; the pool persists across turns.
    pub reactions_per_combat: u8,
    /// Base of the evasion threshold (`base + agility modifier`).
    pub evasion_base: i32,
    /// Die used for attack rolls, checks and initiative.
    pub check_die: u32,
    pub resonance: ResonanceTable,
}

impl RulesConfig {
    pub const DEFAULT_STANDARD_ACTIONS: u8 = 1;
    pub const DEFAULT_BONUS_ACTIONS: u8 = 1;
    pub const DEFAULT_REACTIONS: u8 = 1;
    pub const DEFAULT_EVASION_BASE: i32 = 10;
    pub const DEFAULT_CHECK_DIE: u32 = 20;

    pub fn new() -> Self {
        Self {
            standard_actions_per_turn: Self::DEFAULT_STANDARD_ACTIONS,
            bonus_actions_per_turn: Self::DEFAULT_BONUS_ACTIONS,
            reactions_per_combat: Self::DEFAULT_REACTIONS,
            evasion_base: Self::DEFAULT_EVASION_BASE,
            check_die: Self::DEFAULT_CHECK_DIE,
            resonance: ResonanceTable::default(),
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}
