//! Rules configuration.
//!
//! A [`RuleSet`] carries every table the mechanics consult: which
//! attribute governs each skill, what each combat power stat derives
//! from, Style action costs, and the numeric constants of checks. It is
//! passed explicitly to every operation, so tests can run against
//! alternate tables. Load one from JSON with [`RuleSet::from_json`] or
//! start from a function in [`preset`].

pub mod keys;
pub mod preset;

pub use keys::{Attribute, PowerKind, Skill, StatBasis};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::economy::StyleAction;
use crate::error::{MechError, MechResult};
use crate::resolution::SuccessClassifier;

/// A complete configuration of the check system.
///
/// Every field is optional in JSON and falls back to the standard
/// preset. A map given in JSON replaces the preset's map wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Governing attribute per skill. Unbound skills get no attribute dice.
    pub skill_bindings: BTreeMap<Skill, Attribute>,
    /// What each combat power stat is derived from.
    pub power_basis: BTreeMap<PowerKind, StatBasis>,
    /// Style cost per action. Actions without a cost cannot be bought.
    pub style_costs: BTreeMap<StyleAction, u32>,
    /// Threshold used when a check does not name one.
    pub default_threshold: i32,
    /// Margin per success tier.
    pub tier_width: u32,
    /// Ceiling of the Style pool.
    pub style_max: i32,
    /// Highest style level a check may request.
    pub max_style_level: u32,
    /// Value assumed for an attribute the sheet does not carry.
    pub default_attribute: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        preset::standard()
    }
}

impl RuleSet {
    /// Parse a ruleset from JSON layered over the standard preset, then
    /// validate it.
    pub fn from_json(json: &str) -> MechResult<Self> {
        let rules: Self =
            serde_json::from_str(json).map_err(|e| MechError::InvalidConfig(e.to_string()))?;
        rules.validate()?;
        Ok(rules)
    }

    /// Check the numeric constants for values no check can use.
    pub fn validate(&self) -> MechResult<()> {
        if self.tier_width == 0 {
            return Err(MechError::InvalidConfig(
                "tier_width must be at least 1".to_string(),
            ));
        }
        if self.style_max < 0 {
            return Err(MechError::InvalidConfig(format!(
                "style_max must not be negative, got {}",
                self.style_max
            )));
        }
        Ok(())
    }

    /// The attribute governing a skill, if bound.
    pub fn governing_attribute(&self, skill: Skill) -> Option<Attribute> {
        self.skill_bindings.get(&skill).copied()
    }

    /// The basis of a combat power stat, if configured.
    pub fn basis(&self, kind: PowerKind) -> Option<StatBasis> {
        self.power_basis.get(&kind).copied()
    }

    /// The configured cost of a Style action.
    pub fn style_cost(&self, action: StyleAction) -> Option<u32> {
        self.style_costs.get(&action).copied()
    }

    /// A classifier using this ruleset's tier width.
    pub fn classifier(&self) -> SuccessClassifier {
        SuccessClassifier::new(self.tier_width)
    }

    /// Set the default check threshold.
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.default_threshold = threshold;
        self
    }

    /// Set the margin per success tier (at least 1).
    pub fn with_tier_width(mut self, width: u32) -> Self {
        self.tier_width = width.max(1);
        self
    }

    /// Bind a skill to a governing attribute.
    pub fn with_binding(mut self, skill: Skill, attribute: Attribute) -> Self {
        self.skill_bindings.insert(skill, attribute);
        self
    }

    /// Remove a skill's binding so it gets no attribute dice.
    pub fn without_binding(mut self, skill: Skill) -> Self {
        self.skill_bindings.remove(&skill);
        self
    }

    /// Set what a combat power stat derives from.
    pub fn with_power_basis(mut self, kind: PowerKind, basis: StatBasis) -> Self {
        self.power_basis.insert(kind, basis);
        self
    }

    /// Set the cost of a Style action.
    pub fn with_style_cost(mut self, action: StyleAction, cost: u32) -> Self {
        self.style_costs.insert(action, cost);
        self
    }

    /// Set the Style ceiling (not below 0).
    pub fn with_style_max(mut self, max: i32) -> Self {
        self.style_max = max.max(0);
        self
    }

    /// Set the highest style level a check may request.
    pub fn with_max_style_level(mut self, level: u32) -> Self {
        self.max_style_level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard_preset() {
        let rules = RuleSet::default();
        assert_eq!(rules.default_threshold, 10);
        assert_eq!(rules.tier_width, 5);
        assert_eq!(rules.style_max, 100);
        assert_eq!(rules.max_style_level, 3);
        assert_eq!(rules.default_attribute, 3);
        assert_eq!(
            rules.governing_attribute(Skill::Athletics),
            Some(Attribute::Physique)
        );
        assert_eq!(rules.style_cost(StyleAction::Awakening), Some(30));
        assert_eq!(rules.style_costs.len(), 6);
    }

    #[test]
    fn from_json_empty_object_is_default() {
        let rules = RuleSet::from_json("{}").unwrap();
        assert_eq!(rules, RuleSet::default());
    }

    #[test]
    fn from_json_overrides_fields() {
        let rules = RuleSet::from_json(
            r#"{
                "default_threshold": 12,
                "skill_bindings": { "insight": "spirit" },
                "power_basis": { "martial": { "skill": "athletics" } }
            }"#,
        )
        .unwrap();
        assert_eq!(rules.default_threshold, 12);
        assert_eq!(rules.tier_width, 5);
        assert_eq!(
            rules.governing_attribute(Skill::Insight),
            Some(Attribute::Spirit)
        );
        assert_eq!(rules.governing_attribute(Skill::Athletics), None);
        assert_eq!(
            rules.basis(PowerKind::Martial),
            Some(StatBasis::Skill(Skill::Athletics))
        );
        assert_eq!(rules.basis(PowerKind::Spell), None);
    }

    #[test]
    fn from_json_rejects_zero_tier_width() {
        assert!(matches!(
            RuleSet::from_json(r#"{ "tier_width": 0 }"#),
            Err(MechError::InvalidConfig(_))
        ));
    }

    #[test]
    fn from_json_rejects_unknown_keys_in_maps() {
        assert!(matches!(
            RuleSet::from_json(r#"{ "skill_bindings": { "juggling": "physique" } }"#),
            Err(MechError::InvalidConfig(_))
        ));
    }

    #[test]
    fn builder_chain() {
        let rules = RuleSet::default()
            .with_threshold(8)
            .with_tier_width(0)
            .with_binding(Skill::Persuasion, Attribute::Intellect)
            .without_binding(Skill::Stealth)
            .with_style_max(-4)
            .with_max_style_level(5);
        assert_eq!(rules.default_threshold, 8);
        assert_eq!(rules.tier_width, 1);
        assert_eq!(
            rules.governing_attribute(Skill::Persuasion),
            Some(Attribute::Intellect)
        );
        assert_eq!(rules.governing_attribute(Skill::Stealth), None);
        assert_eq!(rules.style_max, 0);
        assert_eq!(rules.max_style_level, 5);
        assert!(rules.validate().is_ok());
    }
}
