//! Items: techniques, spells, gear, and what using them costs.

use serde::{Deserialize, Serialize};

use crate::dice::{DiceFormula, DiceSource, FormulaRoll};
use crate::economy::{power, style};
use crate::error::MechResult;
use crate::rules::{PowerKind, RuleSet};

/// The category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A martial technique.
    Martial,
    /// A spell.
    Spell,
    /// A passive talent.
    Talent,
    /// A bound soul weapon.
    #[serde(rename = "soulweapon")]
    SoulWeapon,
    /// A single-use consumable.
    Consumable,
    /// A signature ultimate technique.
    Ultimate,
}

impl ItemKind {
    /// Display name of the category.
    pub fn label(self) -> &'static str {
        match self {
            Self::Martial => "Martial Art",
            Self::Spell => "Spell",
            Self::Talent => "Talent",
            Self::SoulWeapon => "Soul Weapon",
            Self::Consumable => "Consumable",
            Self::Ultimate => "Ultimate",
        }
    }

    /// The combat power stat that drives checks made with this item.
    pub fn power_kind(self) -> Option<PowerKind> {
        match self {
            Self::Martial => Some(PowerKind::Martial),
            Self::Spell => Some(PowerKind::Spell),
            Self::SoulWeapon => Some(PowerKind::Soul),
            Self::Talent | Self::Consumable | Self::Ultimate => None,
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which pool an item draws on when used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsumptionResource {
    /// Free to use.
    #[default]
    None,
    /// Costs Style.
    Style,
    /// Costs MP.
    Mp,
}

/// The cost of using an item once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumption {
    /// The pool charged.
    #[serde(rename = "type")]
    pub resource: ConsumptionResource,
    /// The amount charged.
    pub value: u32,
}

/// An item on a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item name.
    pub name: String,
    /// Item category.
    pub kind: ItemKind,
    /// Free-text description shown on use.
    #[serde(default)]
    pub description: String,
    /// Cost per use.
    #[serde(default)]
    pub consumption: Consumption,
    /// Damage formula, if the item deals damage.
    #[serde(default)]
    pub damage: Option<DiceFormula>,
}

impl Item {
    /// Create a free item with no damage.
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: String::new(),
            consumption: Consumption::default(),
            damage: None,
        }
    }

    /// Set the cost per use.
    pub fn with_consumption(mut self, resource: ConsumptionResource, value: u32) -> Self {
        self.consumption = Consumption { resource, value };
        self
    }

    /// Set the damage formula.
    pub fn with_damage(mut self, formula: DiceFormula) -> Self {
        self.damage = Some(formula);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Pay for one use of an item.
///
/// Returns the pool values after payment. Fails with `InsufficientFunds`
/// when the charged pool is short; nothing changes in that case. Free
/// items and zero costs always succeed.
pub fn pay_for_use(
    item: &Item,
    style_value: i32,
    mp_value: i32,
    rules: &RuleSet,
) -> MechResult<(i32, i32)> {
    let Consumption { resource, value } = item.consumption;
    if value == 0 {
        return Ok((style_value, mp_value));
    }
    match resource {
        ConsumptionResource::None => Ok((style_value, mp_value)),
        ConsumptionResource::Style => Ok((style::spend(style_value, value, rules)?, mp_value)),
        ConsumptionResource::Mp => {
            let mp = power::mp_pool(mp_value).spend(value)?;
            Ok((style_value, mp))
        }
    }
}

/// Roll an item's damage formula, or `None` if it deals no damage.
pub fn roll_damage<D: DiceSource + ?Sized>(item: &Item, dice: &mut D) -> Option<FormulaRoll> {
    item.damage.as_ref().map(|formula| formula.roll(dice))
}
