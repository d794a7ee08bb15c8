//! The six attributes and their two categories.
//!
//! Attributes are a closed, typed set. Abilities refer to them by variant, so a
//! misspelled attribute name is a deserialization error instead of a runtime
//! lookup failure.

use strum::{Display, EnumIter, IntoStaticStr};

use super::modifier;

/// Attribute category.
///
/// Every attribute belongs to exactly one category. Resonance poles favor one
/// category and penalize the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeCategory {
    /// Physical attributes (might, agility, endurance).
    Body,
    /// Mental attributes (intellect, insight, resolve).
    Spirit,
}

impl AttributeCategory {
    /// Returns the other category.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Body => Self::Spirit,
            Self::Spirit => Self::Body,
        }
    }
}

/// Character attribute.
///
/// - **Might**: melee power
/// - **Agility**: evasion, initiative, precision
/// - **Endurance**: vitality, recovery
/// - **Intellect**: reasoning, learned techniques
/// - **Insight**: perception, healing arts
/// - **Resolve**: willpower, presence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    Might,
    Agility,
    Endurance,
    Intellect,
    Insight,
    Resolve,
}

impl Attribute {
    /// Returns the category this attribute belongs to.
    pub const fn category(self) -> AttributeCategory {
        match self {
            Self::Might | Self::Agility | Self::Endurance => AttributeCategory::Body,
            Self::Intellect | Self::Insight | Self::Resolve => AttributeCategory::Spirit,
        }
    }
}

/// Raw attribute scores of a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeScores {
    pub might: i32,
    pub agility: i32,
    pub endurance: i32,
    pub intellect: i32,
    pub insight: i32,
    pub resolve: i32,
}

impl AttributeScores {
    /// Create scores with explicit values for every attribute.
    pub const fn new(
        might: i32,
        agility: i32,
        endurance: i32,
        intellect: i32,
        insight: i32,
        resolve: i32,
    ) -> Self {
        Self {
            might,
            agility,
            endurance,
            intellect,
            insight,
            resolve,
        }
    }

    /// Returns the raw score for an attribute.
    pub const fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Might => self.might,
            Attribute::Agility => self.agility,
            Attribute::Endurance => self.endurance,
            Attribute::Intellect => self.intellect,
            Attribute::Insight => self.insight,
            Attribute::Resolve => self.resolve,
        }
    }

    /// Returns the modifier for an attribute.
    pub const fn modifier(&self, attribute: Attribute) -> i32 {
        modifier(self.get(attribute))
    }

    /// Returns a copy with one attribute replaced (builder pattern).
    #[must_use]
    pub const fn with(mut self, attribute: Attribute, score: i32) -> Self {
        match attribute {
            Attribute::Might => self.might = score,
            Attribute::Agility => self.agility = score,
            Attribute::Endurance => self.endurance = score,
            Attribute::Intellect => self.intellect = score,
            Attribute::Insight => self.insight = score,
            Attribute::Resolve => self.resolve = score,
        }
        self
    }
}

impl Default for AttributeScores {
    /// Default scores: all 10 (modifier +0).
    fn default() -> Self {
        Self::new(10, 10, 10, 10, 10, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_attribute_has_one_category() {
        let body: Vec<_> = Attribute::iter()
            .filter(|a| a.category() == AttributeCategory::Body)
            .collect();
        let spirit: Vec<_> = Attribute::iter()
            .filter(|a| a.category() == AttributeCategory::Spirit)
            .collect();

        assert_eq!(body.len(), 3);
        assert_eq!(spirit.len(), 3);
        assert!(body.contains(&Attribute::Agility));
        assert!(spirit.contains(&Attribute::Insight));
    }

    #[test]
    fn lookup_matches_fields() {
        let scores = AttributeScores::default()
            .with(Attribute::Agility, 14)
            .with(Attribute::Resolve, 7);

        assert_eq!(scores.get(Attribute::Agility), 14);
        assert_eq!(scores.modifier(Attribute::Agility), 2);
        assert_eq!(scores.modifier(Attribute::Resolve), -2);
        assert_eq!(scores.modifier(Attribute::Might), 0);
    }

    #[test]
    fn display_is_snake_case() {
        assert_eq!(Attribute::Insight.to_string(), "insight");
        assert_eq!(AttributeCategory::Body.to_string(), "body");
    }
}
