//! A single `NdF` term of a dice formula.

use serde::{Deserialize, Serialize};

use super::{DiceTag, Die};

/// `count` dice of one type, all contributed by the same factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceTerm {
    /// How many dice to roll. Zero-count terms are skipped.
    pub count: u32,
    /// The die type.
    pub die: Die,
    /// Which factor contributed these dice.
    pub tag: DiceTag,
}

impl DiceTerm {
    /// Create an untagged term.
    pub fn new(count: u32, die: Die) -> Self {
        Self {
            count,
            die,
            tag: DiceTag::Plain,
        }
    }

    /// Create a term tagged with its contributing factor.
    pub fn tagged(count: u32, die: Die, tag: DiceTag) -> Self {
        Self { count, die, tag }
    }

    /// Returns true if the term contributes no dice.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl std::fmt::Display for DiceTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.die)
    }
}
