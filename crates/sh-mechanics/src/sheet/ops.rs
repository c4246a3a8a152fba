//! Character-level operations.
//!
//! Each function reads from a [`CharacterStore`], runs the pure
//! mechanics, and writes back only the values that changed. Interactive
//! choices (style level, selected tags, chosen action) are decided by the
//! host before the call; declining a choice means not calling.

use crate::attributes::{self, AttributeScores};
use crate::check::{CheckInput, CheckResult, PoolState, resolve_check};
use crate::combat::{self, StatRead};
use crate::dice::{DiceSource, FormulaRoll};
use crate::economy::style::{self, ActionOption, StyleAction};
use crate::error::MechResult;
use crate::items::{self, Item};
use crate::rules::{Attribute, PowerKind, RuleSet, Skill};
use crate::sheet::CharacterStore;

pub use crate::items::roll_damage;

/// A skill check request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCheck {
    /// The skill being tested.
    pub skill: Skill,
    /// Chosen style level (0 opts out).
    pub style_level: u32,
    /// Free bonus dice.
    pub extra_dice: u32,
    /// Threshold override.
    pub threshold: Option<i32>,
}

impl SkillCheck {
    /// A plain check of `skill` with no style dice.
    pub fn new(skill: Skill) -> Self {
        Self {
            skill,
            style_level: 0,
            extra_dice: 0,
            threshold: None,
        }
    }

    /// Set the style level.
    pub fn with_style_level(mut self, level: u32) -> Self {
        self.style_level = level;
        self
    }

    /// Set the free bonus dice.
    pub fn with_extra_dice(mut self, dice: u32) -> Self {
        self.extra_dice = dice;
        self
    }

    /// Set the threshold.
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = Some(threshold);
        self
    }
}

/// A use of the character's signature power.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerUse {
    /// Which combat power stat adds dice.
    pub kind: PowerKind,
    /// Tags the player selected. Each tag in the set adds a d4 and costs 1 MP.
    pub selected_tags: Vec<String>,
    /// Skill whose rank and attribute also add dice, if any.
    pub skill: Option<Skill>,
    /// Free bonus dice.
    pub extra_dice: u32,
    /// Chosen style level (0 opts out).
    pub style_level: u32,
    /// Threshold override.
    pub threshold: Option<i32>,
}

impl PowerUse {
    /// A power use of the given kind with nothing selected.
    pub fn new(kind: PowerKind) -> Self {
        Self {
            kind,
            selected_tags: Vec::new(),
            skill: None,
            extra_dice: 0,
            style_level: 0,
            threshold: None,
        }
    }

    /// A power use driven by the item's combat stat, or `None` for items
    /// that are not martial arts, spells, or soul weapons.
    pub fn for_item(item: &Item) -> Option<Self> {
        item.kind.power_kind().map(Self::new)
    }

    /// Select tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Add a skill's rank and attribute dice.
    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skill = Some(skill);
        self
    }

    /// Set the free bonus dice.
    pub fn with_extra_dice(mut self, dice: u32) -> Self {
        self.extra_dice = dice;
        self
    }

    /// Set the style level.
    pub fn with_style_level(mut self, level: u32) -> Self {
        self.style_level = level;
        self
    }

    /// Set the threshold.
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = Some(threshold);
        self
    }
}

/// A resolved check with its display heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Heading for the chat card, e.g. "Athletics check (Physique 5, +2d4)".
    pub flavor: String,
    /// The resolved check.
    pub result: CheckResult,
}

/// The outcome of using an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUse {
    /// Item name.
    pub name: String,
    /// Item description.
    pub description: String,
    /// Damage rolled, if the item deals damage.
    pub damage: Option<FormulaRoll>,
}

/// Attribute dice for a skill, plus a flavor suffix naming the attribute.
fn attribute_dice(skill: Skill, attrs: &AttributeScores, rules: &RuleSet) -> (u32, String) {
    let Some(attr) = rules.governing_attribute(skill) else {
        tracing::warn!(skill = skill.key(), "skill has no governing attribute");
        return (0, String::new());
    };
    let value = attrs.get(attr);
    let bonus = attributes::bonus_dice(value);
    if bonus > 0 {
        (bonus, format!(" ({} {value}, +{bonus}d4)", attr.label()))
    } else {
        (0, String::new())
    }
}

fn pools_of<S: CharacterStore + ?Sized>(store: &S) -> PoolState {
    PoolState {
        style: store.style(),
        mp: store.mp(),
    }
}

fn write_back<S: CharacterStore + ?Sized>(store: &mut S, before: PoolState, after: PoolState) {
    if after.style != before.style {
        tracing::info!(from = before.style, to = after.style, "style updated");
        store.set_style(after.style);
    }
    if after.mp != before.mp {
        tracing::info!(from = before.mp, to = after.mp, "mp updated");
        store.set_mp(after.mp);
    }
}

/// Roll a skill check and persist its resource effects.
pub fn roll_skill<S, D>(
    store: &mut S,
    rules: &RuleSet,
    request: &SkillCheck,
    dice: &mut D,
) -> CheckReport
where
    S: CharacterStore + ?Sized,
    D: DiceSource + ?Sized,
{
    let attrs = store.attributes(rules);
    let rank = store.skill_rank(request.skill);
    let (attribute_bonus, detail) = attribute_dice(request.skill, &attrs, rules);

    let mut input = CheckInput::new()
        .with_skill_rank(rank)
        .with_attribute_bonus(attribute_bonus)
        .with_style_level(request.style_level)
        .with_extra_dice(request.extra_dice);
    input.threshold = request.threshold;

    let before = pools_of(store);
    let result = resolve_check(rules, &input, before, dice);
    write_back(store, before, result.pools);

    CheckReport {
        flavor: format!("{} check{detail}", request.skill.label()),
        result,
    }
}

/// Roll a bare attribute check: `1d20 + (value / 2 - 1)`.
pub fn roll_attribute<S, D>(
    store: &S,
    rules: &RuleSet,
    attribute: Attribute,
    threshold: Option<i32>,
    dice: &mut D,
) -> CheckReport
where
    S: CharacterStore + ?Sized,
    D: DiceSource + ?Sized,
{
    let value = store.attributes(rules).get(attribute);
    let mut input = CheckInput::new().with_modifier(attributes::check_modifier(value));
    input.threshold = threshold;
    let result = resolve_check(rules, &input, pools_of(store), dice);
    CheckReport {
        flavor: format!("{} check", attribute.label()),
        result,
    }
}

/// Use the signature power: roll with combat stat, tag, and optional skill
/// dice, charge MP per selected tag (clamped, never blocking), and gain
/// Style from any style dice.
pub fn use_power<S, D>(
    store: &mut S,
    rules: &RuleSet,
    request: &PowerUse,
    dice: &mut D,
) -> CheckReport
where
    S: CharacterStore + ?Sized,
    D: DiceSource + ?Sized,
{
    let power_strength = combat_stat(store, rules, request.kind);
    let tags = store.power_tags();
    let tag_dice = tags.count_selected(&request.selected_tags);
    if (tag_dice as usize) < request.selected_tags.len() {
        tracing::warn!(
            selected = request.selected_tags.len(),
            counted = tag_dice,
            "ignoring selected tags that are duplicated or not on the character"
        );
    }

    let (skill_rank, attribute_bonus) = match request.skill {
        Some(skill) => {
            let attrs = store.attributes(rules);
            (store.skill_rank(skill), attribute_dice(skill, &attrs, rules).0)
        }
        None => (0, 0),
    };

    let mut input = CheckInput::new()
        .with_skill_rank(skill_rank)
        .with_attribute_bonus(attribute_bonus)
        .with_power_strength(power_strength)
        .with_tag_dice(tag_dice)
        .with_extra_dice(request.extra_dice)
        .with_style_level(request.style_level);
    input.threshold = request.threshold;

    let before = pools_of(store);
    let result = resolve_check(rules, &input, before, dice);
    write_back(store, before, result.pools);

    let flavor = match tag_dice {
        0 => request.kind.label().to_string(),
        1 => format!("{} (1 tag)", request.kind.label()),
        n => format!("{} ({n} tags)", request.kind.label()),
    };
    CheckReport { flavor, result }
}

/// Spend Style on a named action. On `InsufficientFunds` nothing changes.
pub fn spend_style<S: CharacterStore + ?Sized>(
    store: &mut S,
    rules: &RuleSet,
    action: StyleAction,
) -> MechResult<i32> {
    let new_value = style::spend_action(store.style(), action, rules)?;
    store.set_style(new_value);
    Ok(new_value)
}

/// The action picker for the character's current Style.
pub fn style_options<S: CharacterStore + ?Sized>(store: &S, rules: &RuleSet) -> Vec<ActionOption> {
    style::action_options(store.style(), rules)
}

fn derived_stat<S: CharacterStore + ?Sized>(store: &S, rules: &RuleSet, kind: PowerKind) -> u32 {
    let attrs = store.attributes(rules);
    combat::derive_stat(kind, &attrs, |skill| store.skill_rank(skill), rules)
}

/// Read a combat power stat, deriving and persisting it on first read.
pub fn combat_stat<S: CharacterStore + ?Sized>(
    store: &mut S,
    rules: &RuleSet,
    kind: PowerKind,
) -> u32 {
    let derived = derived_stat(store, rules, kind);
    let read = combat::get_or_initialize(store.combat_override(kind), derived);
    if let StatRead::Initialized(value) = read {
        tracing::info!(kind = ?kind, value, "combat stat initialized");
        store.set_combat_override(kind, value);
    }
    read.value()
}

/// Re-derive a combat power stat and overwrite whatever was stored.
pub fn reset_combat_stat<S: CharacterStore + ?Sized>(
    store: &mut S,
    rules: &RuleSet,
    kind: PowerKind,
) -> u32 {
    let value = combat::reset(derived_stat(store, rules, kind));
    store.set_combat_override(kind, value);
    value
}

/// Add a power tag. Returns true if the set changed.
pub fn add_power_tag<S: CharacterStore + ?Sized>(store: &mut S, tag: &str) -> bool {
    let mut tags = store.power_tags();
    let changed = tags.add(tag);
    if changed {
        store.set_power_tags(tags);
    }
    changed
}

/// Remove a power tag the player confirmed deleting. Returns true if the
/// set changed.
pub fn remove_power_tag<S: CharacterStore + ?Sized>(store: &mut S, tag: &str) -> bool {
    let mut tags = store.power_tags();
    let changed = tags.remove(tag);
    if changed {
        store.set_power_tags(tags);
    }
    changed
}

/// Use an item: pay its cost, then roll its damage if it has any.
///
/// Fails with `InsufficientFunds` before anything is rolled or written
/// when the charged pool is short.
pub fn use_item<S, D>(
    store: &mut S,
    rules: &RuleSet,
    item: &Item,
    dice: &mut D,
) -> MechResult<ItemUse>
where
    S: CharacterStore + ?Sized,
    D: DiceSource + ?Sized,
{
    let before = pools_of(store);
    let (style, mp) = items::pay_for_use(item, before.style, before.mp, rules)?;
    write_back(store, before, PoolState { style, mp });

    Ok(ItemUse {
        name: item.name.clone(),
        description: item.description.clone(),
        damage: items::roll_damage(item, dice),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use crate::error::MechError;
    use crate::items::{ConsumptionResource, ItemKind};
    use crate::resolution::Outcome;
    use crate::sheet::CharacterSheet;

    fn hunter() -> CharacterSheet {
        CharacterSheet::new("Ren")
            .with_attribute(Attribute::Physique, 5)
            .with_attribute(Attribute::Intellect, 4)
            .with_attribute(Attribute::Spirit, 8)
            .with_skill(Skill::Athletics, 2)
            .with_style(10)
            .with_mp(5)
            .with_tag("fire")
            .with_tag("swift")
    }

    #[test]
    fn skill_check_flavor_names_attribute() {
        let mut sheet = hunter();
        let mut dice = ScriptedDice::new([10, 1, 1, 1, 1]);
        let report = roll_skill(
            &mut sheet,
            &RuleSet::default(),
            &SkillCheck::new(Skill::Athletics),
            &mut dice,
        );
        assert_eq!(report.flavor, "Athletics check (Physique 5, +2d4)");
        assert_eq!(report.result.formula, "1d20 + 2d4 + 2d4");
        assert_eq!(report.result.total, 14);
        assert_eq!(sheet.style, 10);
    }

    #[test]
    fn unbound_skill_gets_no_attribute_dice() {
        let rules = RuleSet::default().without_binding(Skill::Athletics);
        let mut sheet = hunter();
        let mut dice = ScriptedDice::new([10, 1, 1]);
        let request = SkillCheck::new(Skill::Athletics);
        let report = roll_skill(&mut sheet, &rules, &request, &mut dice);
        assert_eq!(report.flavor, "Athletics check");
        assert_eq!(report.result.formula, "1d20 + 2d4");
    }

    #[test]
    fn attribute_check_uses_modifier() {
        let sheet = hunter();
        let mut dice = ScriptedDice::new([9]);
        let rules = RuleSet::default();
        let report = roll_attribute(&sheet, &rules, Attribute::Spirit, None, &mut dice);
        assert_eq!(report.result.formula, "1d20 + 3");
        assert_eq!(report.result.total, 12);
        assert_eq!(report.result.outcome, Outcome::Success);
        assert_eq!(report.flavor, "Spirit check");
    }

    #[test]
    fn spend_style_rejects_without_mutation() {
        let mut sheet = hunter();
        let err = spend_style(&mut sheet, &RuleSet::default(), StyleAction::Finale).unwrap_err();
        assert!(matches!(err, MechError::InsufficientFunds { .. }));
        assert_eq!(sheet.style, 10);
        assert_eq!(
            spend_style(&mut sheet, &RuleSet::default(), StyleAction::Powerful).unwrap(),
            0
        );
        assert_eq!(sheet.style, 0);
    }

    #[test]
    fn style_options_follow_sheet() {
        let sheet = hunter();
        let affordable: Vec<StyleAction> = style_options(&sheet, &RuleSet::default())
            .into_iter()
            .filter(|o| o.affordable)
            .map(|o| o.action)
            .collect();
        assert_eq!(affordable, vec![StyleAction::Powerful]);
    }

    #[test]
    fn combat_stat_initializes_once() {
        let rules = RuleSet::default();
        let mut sheet = hunter();
        assert_eq!(combat_stat(&mut sheet, &rules, PowerKind::Soul), 4);
        assert_eq!(sheet.combat.soul_power, 4);

        sheet.attributes.insert(Attribute::Spirit, 2);
        assert_eq!(combat_stat(&mut sheet, &rules, PowerKind::Soul), 4);
        assert_eq!(reset_combat_stat(&mut sheet, &rules, PowerKind::Soul), 1);
        assert_eq!(sheet.combat.soul_power, 1);
    }

    #[test]
    fn power_use_counts_only_known_tags() {
        let mut sheet = hunter();
        let request = PowerUse::new(PowerKind::Martial).with_tags(["fire", "ice", "fire"]);
        // d20, 2d4 martial power, 1d4 tag
        let mut dice = ScriptedDice::new([7, 2, 2, 3]);
        let report = use_power(&mut sheet, &RuleSet::default(), &request, &mut dice);
        assert_eq!(report.flavor, "Martial Power (1 tag)");
        assert_eq!(report.result.formula, "1d20 + 2d4 + 1d4");
        assert_eq!(report.result.total, 14);
        assert_eq!(sheet.mp, 4);
        assert_eq!(sheet.combat.martial_power, 2);
    }

    #[test]
    fn item_power_use_follows_kind() {
        let mut sheet = hunter();
        let blade = Item::new("Hollow Edge", ItemKind::SoulWeapon);
        let request = PowerUse::for_item(&blade).unwrap().with_tags(["swift"]);
        assert_eq!(request.kind, PowerKind::Soul);
        // d20, 4d4 soul power (spirit 8), 1d4 tag
        let mut dice = ScriptedDice::new([3, 1, 1, 1, 1, 2]);
        let report = use_power(&mut sheet, &RuleSet::default(), &request, &mut dice);
        assert_eq!(report.result.formula, "1d20 + 4d4 + 1d4");
        assert_eq!(report.flavor, "Soul Power (1 tag)");
        assert!(PowerUse::for_item(&Item::new("Salve", ItemKind::Consumable)).is_none());
    }

    #[test]
    fn tag_edits_persist() {
        let mut sheet = hunter();
        assert!(add_power_tag(&mut sheet, "ice"));
        assert!(!add_power_tag(&mut sheet, "ice"));
        assert!(!remove_power_tag(&mut sheet, "stone"));
        assert!(remove_power_tag(&mut sheet, "fire"));
        assert_eq!(sheet.power_tags.iter().collect::<Vec<_>>(), vec!["swift", "ice"]);
    }

    #[test]
    fn use_item_pays_then_rolls() {
        let mut sheet = hunter();
        let item = Item::new("Ember Lance", ItemKind::Spell)
            .with_consumption(ConsumptionResource::Mp, 3)
            .with_damage(crate::dice::DiceFormula::parse("2d6").unwrap());
        let mut dice = ScriptedDice::new([4, 6]);
        let used = use_item(&mut sheet, &RuleSet::default(), &item, &mut dice).unwrap();
        assert_eq!(sheet.mp, 2);
        assert_eq!(used.damage.unwrap().total, 10);

        let err = use_item(&mut sheet, &RuleSet::default(), &item, &mut dice).unwrap_err();
        assert!(matches!(err, MechError::InsufficientFunds { needed: 3, available: 2, .. }));
        assert_eq!(sheet.mp, 2);
    }
}
