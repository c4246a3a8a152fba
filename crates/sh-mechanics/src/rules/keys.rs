//! Fixed keys of the system: attributes, skills, and power kinds.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MechError;

/// One of the three character attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// Body and strength.
    Physique,
    /// Wits and learning.
    Intellect,
    /// Will and soul.
    Spirit,
}

impl Attribute {
    /// All attributes in sheet order.
    pub const ALL: [Self; 3] = [Self::Physique, Self::Intellect, Self::Spirit];

    /// Storage key (e.g., "physique").
    pub fn key(self) -> &'static str {
        match self {
            Self::Physique => "physique",
            Self::Intellect => "intellect",
            Self::Spirit => "spirit",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Physique => "Physique",
            Self::Intellect => "Intellect",
            Self::Spirit => "Spirit",
        }
    }
}

impl FromStr for Attribute {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.key() == lower)
            .ok_or_else(|| MechError::UnknownAttribute(s.to_string()))
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the fixed skills. Which attribute governs each skill is
/// configuration, see [`crate::RuleSet::skill_bindings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    /// Running, climbing, fighting fitness.
    Athletics,
    /// Handling machines and tools.
    Operation,
    /// Moving unseen.
    Stealth,
    /// Searching and deduction.
    Investigation,
    /// Reading people and situations.
    Insight,
    /// Convincing others.
    Persuasion,
    /// Lore of souls and their hunt.
    Soulhunting,
}

impl Skill {
    /// All skills in sheet order.
    pub const ALL: [Self; 7] = [
        Self::Athletics,
        Self::Operation,
        Self::Stealth,
        Self::Investigation,
        Self::Insight,
        Self::Persuasion,
        Self::Soulhunting,
    ];

    /// Storage key (e.g., "soulhunting").
    pub fn key(self) -> &'static str {
        match self {
            Self::Athletics => "athletics",
            Self::Operation => "operation",
            Self::Stealth => "stealth",
            Self::Investigation => "investigation",
            Self::Insight => "insight",
            Self::Persuasion => "persuasion",
            Self::Soulhunting => "soulhunting",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Athletics => "Athletics",
            Self::Operation => "Operation",
            Self::Stealth => "Stealth",
            Self::Investigation => "Investigation",
            Self::Insight => "Insight",
            Self::Persuasion => "Persuasion",
            Self::Soulhunting => "Soul Hunting",
        }
    }
}

impl FromStr for Skill {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.key() == lower)
            .ok_or_else(|| MechError::UnknownSkill(s.to_string()))
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which combat power stat feeds a power check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerKind {
    /// Martial techniques.
    Martial,
    /// Spells.
    Spell,
    /// Soul abilities.
    Soul,
}

impl PowerKind {
    /// All power kinds.
    pub const ALL: [Self; 3] = [Self::Martial, Self::Spell, Self::Soul];

    /// Display label of the stat this kind draws on.
    pub fn label(self) -> &'static str {
        match self {
            Self::Martial => "Martial Power",
            Self::Spell => "Spell Power",
            Self::Soul => "Soul Power",
        }
    }
}

impl std::fmt::Display for PowerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The sheet value a combat power stat is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatBasis {
    /// Half an attribute value.
    Attribute(Attribute),
    /// Half a skill rank.
    Skill(Skill),
}
