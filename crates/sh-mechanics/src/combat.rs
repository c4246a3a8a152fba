//! Derived combat power stats (martial, spell, soul).
//!
//! Each stat is half of its basis value, rounded down. A character may
//! carry a persisted override per stat. Zero means unset: the first read
//! derives the value and asks the caller to persist it once. After that
//! the stored value wins until an explicit reset re-derives it.

use serde::{Deserialize, Serialize};

use crate::attributes::AttributeScores;
use crate::rules::{PowerKind, RuleSet, Skill, StatBasis};

/// Half a basis value, rounded down.
pub fn derive(basis_value: u32) -> u32 {
    basis_value / 2
}

/// The result of reading a stat through lazy initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatRead {
    /// A nonzero value was already stored; nothing to write.
    Persisted(u32),
    /// Nothing was stored; this derived value must be written back.
    Initialized(u32),
}

impl StatRead {
    /// The effective stat value.
    pub fn value(self) -> u32 {
        match self {
            Self::Persisted(v) | Self::Initialized(v) => v,
        }
    }

    /// Returns true if the caller must persist the value.
    pub fn needs_persist(self) -> bool {
        matches!(self, Self::Initialized(_))
    }
}

/// Return the persisted value if nonzero, otherwise the derived value
/// flagged for a one-time write-back.
pub fn get_or_initialize(persisted: u32, derived: u32) -> StatRead {
    if persisted != 0 {
        StatRead::Persisted(persisted)
    } else {
        StatRead::Initialized(derived)
    }
}

/// Unconditionally replace any stored value with the derived one.
pub fn reset(derived: u32) -> u32 {
    derived
}

/// Derive one stat from a character's attributes and skill ranks.
///
/// A kind without a configured basis derives to 0.
pub fn derive_stat(
    kind: PowerKind,
    attributes: &AttributeScores,
    skill_rank: impl Fn(Skill) -> u32,
    rules: &RuleSet,
) -> u32 {
    match rules.basis(kind) {
        Some(StatBasis::Attribute(attr)) => derive(attributes.get(attr)),
        Some(StatBasis::Skill(skill)) => derive(skill_rank(skill)),
        None => {
            tracing::warn!(kind = ?kind, "no basis configured for combat stat");
            0
        }
    }
}

/// Stored combat stat overrides. Zero means unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    /// Martial power.
    pub martial_power: u32,
    /// Spell power.
    pub spell_power: u32,
    /// Soul power.
    pub soul_power: u32,
}

impl CombatStats {
    /// The stored value for one kind.
    pub fn get(&self, kind: PowerKind) -> u32 {
        match kind {
            PowerKind::Martial => self.martial_power,
            PowerKind::Spell => self.spell_power,
            PowerKind::Soul => self.soul_power,
        }
    }

    /// Store a value for one kind.
    pub fn set(&mut self, kind: PowerKind, value: u32) {
        match kind {
            PowerKind::Martial => self.martial_power = value,
            PowerKind::Spell => self.spell_power = value,
            PowerKind::Soul => self.soul_power = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Attribute, preset};

    #[test]
    fn derive_halves_down() {
        assert_eq!(derive(7), 3);
        assert_eq!(derive(0), 0);
        assert_eq!(derive(1), 0);
        assert_eq!(derive(8), 4);
    }

    #[test]
    fn lazy_init_only_when_unset() {
        assert_eq!(get_or_initialize(0, 4), StatRead::Initialized(4));
        assert!(get_or_initialize(0, 4).needs_persist());
        let stale = get_or_initialize(9, 4);
        assert_eq!(stale, StatRead::Persisted(9));
        assert_eq!(stale.value(), 9);
        assert!(!stale.needs_persist());
    }

    #[test]
    fn reset_overwrites() {
        assert_eq!(reset(derive(8)), 4);
    }

    #[test]
    fn derive_stat_follows_basis() {
        let mut attrs = AttributeScores::uniform(3);
        attrs.set(Attribute::Physique, 9);
        attrs.set(Attribute::Intellect, 6);
        let ranks = |s: Skill| if s == Skill::Athletics { 5 } else { 0 };

        let standard = preset::standard();
        assert_eq!(derive_stat(PowerKind::Martial, &attrs, ranks, &standard), 4);
        assert_eq!(derive_stat(PowerKind::Spell, &attrs, ranks, &standard), 3);
        assert_eq!(derive_stat(PowerKind::Soul, &attrs, ranks, &standard), 1);

        let revised = preset::revised();
        assert_eq!(derive_stat(PowerKind::Martial, &attrs, ranks, &revised), 2);
    }

    #[test]
    fn derive_stat_without_basis_is_zero() {
        let mut rules = preset::standard();
        rules.power_basis.clear();
        let attrs = AttributeScores::uniform(10);
        assert_eq!(derive_stat(PowerKind::Soul, &attrs, |_| 0, &rules), 0);
    }

    #[test]
    fn stats_get_set() {
        let mut stats = CombatStats::default();
        stats.set(PowerKind::Spell, 2);
        assert_eq!(stats.get(PowerKind::Spell), 2);
        assert_eq!(stats.get(PowerKind::Martial), 0);
    }
}
