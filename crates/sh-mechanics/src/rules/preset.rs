//! Pre-configured rulesets.
//!
//! The system's sheets have shipped with more than one skill table. Each
//! variant is a preset here rather than a hard-coded branch, so a host
//! picks the table its sheets were built against.

use std::collections::BTreeMap;

use crate::economy::StyleAction;
use crate::resolution::{DEFAULT_THRESHOLD, DEFAULT_TIER_WIDTH};
use crate::rules::{Attribute, PowerKind, RuleSet, Skill, StatBasis};

/// The standard table.
///
/// Athletics, operation and stealth use physique; investigation and
/// insight use intellect; persuasion and soul hunting use spirit. Each
/// combat power stat is half of one attribute: martial from physique,
/// spell from intellect, soul from spirit.
pub fn standard() -> RuleSet {
    RuleSet {
        skill_bindings: BTreeMap::from([
            (Skill::Athletics, Attribute::Physique),
            (Skill::Operation, Attribute::Physique),
            (Skill::Stealth, Attribute::Physique),
            (Skill::Investigation, Attribute::Intellect),
            (Skill::Insight, Attribute::Intellect),
            (Skill::Persuasion, Attribute::Spirit),
            (Skill::Soulhunting, Attribute::Spirit),
        ]),
        power_basis: BTreeMap::from([
            (PowerKind::Martial, StatBasis::Attribute(Attribute::Physique)),
            (PowerKind::Spell, StatBasis::Attribute(Attribute::Intellect)),
            (PowerKind::Soul, StatBasis::Attribute(Attribute::Spirit)),
        ]),
        style_costs: StyleAction::ALL
            .into_iter()
            .map(|a| (a, a.default_cost()))
            .collect(),
        default_threshold: DEFAULT_THRESHOLD,
        tier_width: DEFAULT_TIER_WIDTH,
        style_max: 100,
        max_style_level: 3,
        default_attribute: 3,
    }
}

/// The revised sheet table.
///
/// Only athletics uses physique. Operation, stealth and investigation
/// use intellect; insight and persuasion use spirit. Soul hunting has no
/// governing attribute and rolls without attribute dice. Martial power is
/// half the athletics rank instead of half physique.
pub fn revised() -> RuleSet {
    standard()
        .with_binding(Skill::Operation, Attribute::Intellect)
        .with_binding(Skill::Stealth, Attribute::Intellect)
        .with_binding(Skill::Insight, Attribute::Spirit)
        .without_binding(Skill::Soulhunting)
        .with_power_basis(PowerKind::Martial, StatBasis::Skill(Skill::Athletics))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_binds_every_skill() {
        let rules = standard();
        for skill in Skill::ALL {
            assert!(rules.governing_attribute(skill).is_some(), "{skill} unbound");
        }
        for kind in PowerKind::ALL {
            assert!(rules.basis(kind).is_some());
        }
    }

    #[test]
    fn revised_differs_from_standard() {
        let rules = revised();
        assert_eq!(
            rules.governing_attribute(Skill::Athletics),
            Some(Attribute::Physique)
        );
        assert_eq!(
            rules.governing_attribute(Skill::Stealth),
            Some(Attribute::Intellect)
        );
        assert_eq!(
            rules.governing_attribute(Skill::Insight),
            Some(Attribute::Spirit)
        );
        assert_eq!(
            rules.governing_attribute(Skill::Persuasion),
            Some(Attribute::Spirit)
        );
        assert_eq!(rules.governing_attribute(Skill::Soulhunting), None);
        assert_eq!(
            rules.basis(PowerKind::Martial),
            Some(StatBasis::Skill(Skill::Athletics))
        );
        assert_eq!(
            rules.basis(PowerKind::Spell),
            Some(StatBasis::Attribute(Attribute::Intellect))
        );
    }
}
