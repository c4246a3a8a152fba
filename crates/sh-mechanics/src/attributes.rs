//! Attribute scores and the bonus dice they grant.

use serde::{Deserialize, Serialize};

use crate::rules::Attribute;

/// Bonus d4s granted by an attribute value: half of it, rounded down.
pub fn bonus_dice(value: u32) -> u32 {
    value / 2
}

/// Flat modifier of a bare attribute check: half the value minus one.
pub fn check_modifier(value: u32) -> i32 {
    i32::try_from(bonus_dice(value)).unwrap_or(i32::MAX) - 1
}

/// A character's three attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeScores {
    /// Physique value.
    pub physique: u32,
    /// Intellect value.
    pub intellect: u32,
    /// Spirit value.
    pub spirit: u32,
}

impl AttributeScores {
    /// All three attributes at the same value.
    pub fn uniform(value: u32) -> Self {
        Self {
            physique: value,
            intellect: value,
            spirit: value,
        }
    }

    /// The value of one attribute.
    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Physique => self.physique,
            Attribute::Intellect => self.intellect,
            Attribute::Spirit => self.spirit,
        }
    }

    /// Set the value of one attribute.
    pub fn set(&mut self, attribute: Attribute, value: u32) {
        match attribute {
            Attribute::Physique => self.physique = value,
            Attribute::Intellect => self.intellect = value,
            Attribute::Spirit => self.spirit = value,
        }
    }

    /// Bonus d4s from one attribute.
    pub fn bonus_dice(&self, attribute: Attribute) -> u32 {
        bonus_dice(self.get(attribute))
    }
}
