//! The character aggregate and the store contract the mechanics use.
//!
//! The mechanics never own a character. Each operation in [`ops`] reads
//! what it needs through a [`CharacterStore`], computes, and writes the
//! changed values back before returning. Hosts implement the trait over
//! their own persistence; [`CharacterSheet`] is a plain in-memory
//! implementation.

pub mod ops;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attributes::AttributeScores;
use crate::combat::CombatStats;
use crate::economy::PowerTagSet;
use crate::items::Item;
use crate::rules::{Attribute, PowerKind, RuleSet, Skill};

/// Read and write access to one character's mechanical state.
pub trait CharacterStore {
    /// An attribute value, or `None` if the character has none recorded.
    fn attribute(&self, attribute: Attribute) -> Option<u32>;
    /// A skill rank. Untrained skills are 0.
    fn skill_rank(&self, skill: Skill) -> u32;
    /// Current Style.
    fn style(&self) -> i32;
    /// Persist a new Style value.
    fn set_style(&mut self, value: i32);
    /// Current MP.
    fn mp(&self) -> i32;
    /// Persist a new MP value.
    fn set_mp(&mut self, value: i32);
    /// Stored combat stat override, 0 if unset.
    fn combat_override(&self, kind: PowerKind) -> u32;
    /// Persist a combat stat override.
    fn set_combat_override(&mut self, kind: PowerKind, value: u32);
    /// The power tag set.
    fn power_tags(&self) -> PowerTagSet;
    /// Persist a new power tag set.
    fn set_power_tags(&mut self, tags: PowerTagSet);

    /// All three attributes, filling gaps with the ruleset default.
    fn attributes(&self, rules: &RuleSet) -> AttributeScores {
        let mut scores = AttributeScores::uniform(rules.default_attribute);
        for attr in Attribute::ALL {
            if let Some(value) = self.attribute(attr) {
                scores.set(attr, value);
            }
        }
        scores
    }
}

/// An in-memory character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterSheet {
    /// Character name.
    pub name: String,
    /// Recorded attribute values.
    pub attributes: BTreeMap<Attribute, u32>,
    /// Skill ranks. Missing skills are untrained.
    pub skills: BTreeMap<Skill, u32>,
    /// Style pool value.
    pub style: i32,
    /// MP pool value.
    pub mp: i32,
    /// Combat stat overrides.
    pub combat: CombatStats,
    /// Power tags.
    pub power_tags: PowerTagSet,
    /// Items carried.
    pub items: Vec<Item>,
}

impl CharacterSheet {
    /// Create an empty character.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set an attribute value.
    pub fn with_attribute(mut self, attribute: Attribute, value: u32) -> Self {
        self.attributes.insert(attribute, value);
        self
    }

    /// Set a skill rank.
    pub fn with_skill(mut self, skill: Skill, rank: u32) -> Self {
        self.skills.insert(skill, rank);
        self
    }

    /// Set the Style pool value.
    pub fn with_style(mut self, value: i32) -> Self {
        self.style = value;
        self
    }

    /// Set the MP pool value.
    pub fn with_mp(mut self, value: i32) -> Self {
        self.mp = value;
        self
    }

    /// Add a power tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.power_tags.add(tag);
        self
    }

    /// Add an item.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Find a carried item by name.
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name == name)
    }
}

impl CharacterStore for CharacterSheet {
    fn attribute(&self, attribute: Attribute) -> Option<u32> {
        self.attributes.get(&attribute).copied()
    }

    fn skill_rank(&self, skill: Skill) -> u32 {
        self.skills.get(&skill).copied().unwrap_or(0)
    }

    fn style(&self) -> i32 {
        self.style
    }

    fn set_style(&mut self, value: i32) {
        self.style = value;
    }

    fn mp(&self) -> i32 {
        self.mp
    }

    fn set_mp(&mut self, value: i32) {
        self.mp = value;
    }

    fn combat_override(&self, kind: PowerKind) -> u32 {
        self.combat.get(kind)
    }

    fn set_combat_override(&mut self, kind: PowerKind, value: u32) {
        self.combat.set(kind, value);
    }

    fn power_tags(&self) -> PowerTagSet {
        self.power_tags.clone()
    }

    fn set_power_tags(&mut self, tags: PowerTagSet) {
        self.power_tags = tags;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_attributes_use_rules_default() {
        let sheet = CharacterSheet::new("Mei").with_attribute(Attribute::Physique, 6);
        let scores = sheet.attributes(&RuleSet::default());
        assert_eq!(scores.physique, 6);
        assert_eq!(scores.intellect, 3);
        assert_eq!(scores.spirit, 3);
    }

    #[test]
    fn untrained_skill_is_zero() {
        let sheet = CharacterSheet::new("Mei").with_skill(Skill::Stealth, 2);
        assert_eq!(sheet.skill_rank(Skill::Stealth), 2);
        assert_eq!(sheet.skill_rank(Skill::Insight), 0);
    }

    #[test]
    fn deserialize_partial_sheet() {
        let sheet: CharacterSheet = serde_json::from_str(
            r#"{
                "name": "Mei",
                "attributes": { "spirit": 7 },
                "skills": { "soulhunting": 3 },
                "style": 20,
                "power_tags": ["echo", "echo", "veil"]
            }"#,
        )
        .unwrap();
        assert_eq!(sheet.attribute(Attribute::Spirit), Some(7));
        assert_eq!(sheet.skill_rank(Skill::Soulhunting), 3);
        assert_eq!(sheet.style(), 20);
        assert_eq!(sheet.mp(), 0);
        assert_eq!(sheet.power_tags.len(), 2);
    }

    #[test]
    fn item_lookup() {
        let sheet = CharacterSheet::new("Mei")
            .with_item(Item::new("Lantern", crate::items::ItemKind::Consumable));
        assert!(sheet.item("Lantern").is_some());
        assert!(sheet.item("Rope").is_none());
    }
}
