//! Rules resolution for the Soul Hunter TTRPG.
//!
//! Provides dice rolling behind an injectable source, check composition
//! and success classification, the Style and MP resource economy, power
//! tags, derived combat stats, and character-level operations over a
//! host-provided store. Bindings and costs are data in a [`RuleSet`], so
//! alternate rule revisions are configuration rather than code.

pub mod attributes;
pub mod check;
pub mod combat;
pub mod dice;
pub mod economy;
pub mod error;
pub mod items;
pub mod resolution;
pub mod rules;
pub mod sheet;
pub mod validate;

pub use attributes::AttributeScores;
pub use check::{CheckEffect, CheckInput, CheckResult, PoolState, resolve_check};
pub use combat::{CombatStats, StatRead};
pub use dice::{
    DiceFormula, DicePool, DiceSource, DiceTag, Die, DieResult, RollResult, ScriptedDice,
};
pub use economy::{PowerTagSet, ResourcePool, StyleAction};
pub use error::{MechError, MechResult};
pub use items::{Item, ItemKind};
pub use resolution::{Outcome, SuccessClassifier, classify};
pub use rules::{Attribute, PowerKind, RuleSet, Skill, StatBasis};
pub use sheet::{CharacterSheet, CharacterStore};
pub use validate::{ValidationIssue, validate_rules};
