use super::Pole;

/// Advanced resonance talent. A participant holds at most one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResonanceTalent {
    /// All resonance effects are nullified for this participant only.
    Immunity,
    /// Zones summoned by this participant are enhanced.
    Mastery,
}

/// A participant's personal relationship with resonance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResonanceAffinity {
    /// Pole the participant can summon, if any.
    pub attunement: Option<Pole>,
    pub talent: Option<ResonanceTalent>,
}

impl ResonanceAffinity {
    pub const fn attuned(pole: Pole) -> Self {
        Self {
            attunement: Some(pole),
            talent: None,
        }
    }

    pub const fn immune() -> Self {
        Self {
            attunement: None,
            talent: Some(ResonanceTalent::Immunity),
        }
    }

    #[must_use]
    pub const fn with_talent(mut self, talent: ResonanceTalent) -> Self {
        self.talent = Some(talent);
        self
    }

    pub const fn is_immune(&self) -> bool {
        matches!(self.talent, Some(ResonanceTalent::Immunity))
    }

    pub const fn has_mastery(&self) -> bool {
        matches!(self.talent, Some(ResonanceTalent::Mastery))
    }
}
