//! Dice types, terms, pools, and rolling.
//!
//! Checks use three die types: the d20 base die, d4 bonus dice, and d6
//! style dice. Item damage formulas may use any polyhedral die. Every
//! die carries a [`DiceTag`] naming the factor that contributed it, so a
//! rolled result can be broken down per source for display.

pub mod formula;
pub mod pool;
pub mod roll;
pub mod source;
pub mod term;

pub use formula::{DiceFormula, FormulaRoll};
pub use pool::{DicePool, roll_terms};
pub use roll::{DieResult, RollResult};
pub use source::{DiceSource, ScriptedDice};
pub use term::DiceTerm;

use serde::{Deserialize, Serialize};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die (bonus dice).
    D4,
    /// Six-sided die (style dice).
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die (the base check die).
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Build a die from a side count. Fewer than two sides is not a die.
    pub fn from_sides(sides: u32) -> Option<Self> {
        match sides {
            4 => Some(Self::D4),
            6 => Some(Self::D6),
            8 => Some(Self::D8),
            10 => Some(Self::D10),
            12 => Some(Self::D12),
            20 => Some(Self::D20),
            100 => Some(Self::D100),
            n if n >= 2 => Some(Self::Custom(n)),
            _ => None,
        }
    }

    /// Parse a die from a string like "d20", "d6", "d100".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        let sides = s.strip_prefix('d')?.parse::<u32>().ok()?;
        Self::from_sides(sides)
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// The factor of a check that contributed a die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DiceTag {
    /// A die with no check role, e.g. from a damage formula.
    #[default]
    Plain,
    /// The mandatory base d20.
    Base,
    /// Bonus dice from skill rank.
    Skill,
    /// Bonus dice from the governing attribute.
    Attribute,
    /// Bonus dice from a combat power stat.
    Power,
    /// Bonus dice from selected power tags.
    PowerTag,
    /// Free bonus dice that cost nothing.
    Extra,
    /// Style dice, rolled separately and fed into the style pool.
    Style,
}

impl std::fmt::Display for DiceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Base => write!(f, "base"),
            Self::Skill => write!(f, "skill"),
            Self::Attribute => write!(f, "attribute"),
            Self::Power => write!(f, "power"),
            Self::PowerTag => write!(f, "tag"),
            Self::Extra => write!(f, "extra"),
            Self::Style => write!(f, "style"),
        }
    }
}
