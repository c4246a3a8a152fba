//! The Style economy.
//!
//! Style is gained by opting into d6 style dice on a check and spent on
//! six fixed-cost narrative actions. The pool lives in `[0, style_max]`.
//! Gains clamp; action spends are rejected outright when unaffordable,
//! regardless of what the host's picker allowed.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::pool::ResourcePool;
use crate::error::{MechError, MechResult};
use crate::rules::RuleSet;

/// Name used for the style pool in errors and display.
pub const STYLE_POOL: &str = "style";

/// A named action bought with Style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleAction {
    /// Awaken a dormant power.
    Awakening,
    /// A climactic finishing move.
    Finale,
    /// Refuse to go down.
    Tenacity,
    /// Reveal a prepared past action.
    Flashback,
    /// Roll a check again.
    Reroll,
    /// Make an action count for more.
    Powerful,
}

impl StyleAction {
    /// All actions in menu order.
    pub const ALL: [Self; 6] = [
        Self::Awakening,
        Self::Finale,
        Self::Tenacity,
        Self::Flashback,
        Self::Reroll,
        Self::Powerful,
    ];

    /// Storage key (e.g., "flashback").
    pub fn key(self) -> &'static str {
        match self {
            Self::Awakening => "awakening",
            Self::Finale => "finale",
            Self::Tenacity => "tenacity",
            Self::Flashback => "flashback",
            Self::Reroll => "reroll",
            Self::Powerful => "powerful",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Awakening => "Awakening",
            Self::Finale => "Finale",
            Self::Tenacity => "Tenacity",
            Self::Flashback => "Flashback",
            Self::Reroll => "Reroll",
            Self::Powerful => "Powerful",
        }
    }

    /// The standard cost of the action.
    pub fn default_cost(self) -> u32 {
        match self {
            Self::Awakening => 30,
            Self::Finale | Self::Tenacity | Self::Flashback | Self::Reroll => 15,
            Self::Powerful => 10,
        }
    }
}

impl FromStr for StyleAction {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.key() == lower)
            .ok_or_else(|| MechError::UnknownAction(s.to_string()))
    }
}

impl std::fmt::Display for StyleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An entry of the action picker: the action, its cost, and whether the
/// current pool covers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionOption {
    /// The action.
    pub action: StyleAction,
    /// Its configured cost.
    pub cost: u32,
    /// Whether the pool can pay for it right now.
    pub affordable: bool,
}

/// Build the style pool for a persisted value under the ruleset's ceiling.
pub fn style_pool(value: i32, rules: &RuleSet) -> ResourcePool {
    ResourcePool::bounded(STYLE_POOL, value, 0, rules.style_max)
}

/// Add `amount` Style, clamped to the ceiling. Never fails.
pub fn gain(value: i32, amount: u32, rules: &RuleSet) -> i32 {
    let mut pool = style_pool(value, rules);
    pool.gain(amount);
    pool.current
}

/// Spend a raw cost, rejecting if the pool holds less.
pub fn spend(value: i32, cost: u32, rules: &RuleSet) -> MechResult<i32> {
    style_pool(value, rules).spend(cost)
}

/// Spend the configured cost of a named action.
///
/// Returns the new pool value. Fails with `InsufficientFunds` (and the
/// caller keeps the old value) when the pool is short, or `UnknownAction`
/// when the ruleset has no cost for the action.
pub fn spend_action(value: i32, action: StyleAction, rules: &RuleSet) -> MechResult<i32> {
    let cost = rules
        .style_cost(action)
        .ok_or_else(|| MechError::UnknownAction(action.key().to_string()))?;
    let new_value = spend(value, cost, rules)?;
    tracing::info!(action = action.key(), cost, from = value, to = new_value, "style spent");
    Ok(new_value)
}

/// Every configured action with its affordability against `value`.
pub fn action_options(value: i32, rules: &RuleSet) -> Vec<ActionOption> {
    let pool = style_pool(value, rules);
    StyleAction::ALL
        .into_iter()
        .filter_map(|action| {
            let cost = rules.style_cost(action)?;
            Some(ActionOption {
                action,
                cost,
                affordable: pool.can_afford(cost),
            })
        })
        .collect()
}
