//! Dice roll results and aggregation.

use serde::{Deserialize, Serialize};

use super::{DiceTag, Die};

/// The result of rolling a single die.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    /// The type of die that was rolled.
    pub die: Die,
    /// The factor that contributed this die.
    pub tag: DiceTag,
    /// The value rolled (1 to die.sides()).
    pub value: u32,
}

/// The result of rolling a list of dice terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die results, in term order.
    pub dice: Vec<DieResult>,
}

impl RollResult {
    /// Sum of all die values.
    pub fn total(&self) -> u32 {
        self.dice.iter().map(|d| d.value).sum()
    }

    /// The raw per-die values in draw order.
    pub fn values(&self) -> Vec<u32> {
        self.dice.iter().map(|d| d.value).collect()
    }

    /// Get all die results with a specific tag.
    pub fn by_tag(&self, tag: DiceTag) -> Vec<&DieResult> {
        self.dice.iter().filter(|d| d.tag == tag).collect()
    }

    /// Sum of the dice contributed by one factor.
    pub fn total_by_tag(&self, tag: DiceTag) -> u32 {
        self.by_tag(tag).iter().map(|d| d.value).sum()
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// Append another roll's dice after this one's.
    pub fn extend(&mut self, other: RollResult) {
        self.dice.extend(other.dice);
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.value.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}
