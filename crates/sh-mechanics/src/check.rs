//! Check resolution: compose the dice, roll, pay, classify.
//!
//! A check always rolls a d20. Bonus d4s come from skill rank, the
//! governing attribute, a combat power stat, selected power tags, and
//! free extra dice, in that order. Style d6s come last and are rolled as
//! a separate draw because their sum also feeds the Style pool.
//!
//! Resource effects are applied to a [`PoolState`] value and returned;
//! the caller persists them.

use serde::{Deserialize, Serialize};

use crate::dice::{DiceFormula, DicePool, DiceSource, DiceTag, Die, RollResult};
use crate::economy::{power, style};
use crate::resolution::Outcome;
use crate::rules::RuleSet;

/// Already-decided inputs of one check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInput {
    /// Skill rank, rolled as d4s.
    pub skill_rank: u32,
    /// Bonus d4s from the governing attribute (half its value).
    pub attribute_bonus: u32,
    /// Style level 0-3; each level adds a d6 and 0 opts out.
    pub style_level: u32,
    /// Bonus d4s from a combat power stat, 0 if not a power check.
    pub power_strength: u32,
    /// Number of selected power tags; each adds a d4 and costs 1 MP.
    pub tag_dice: u32,
    /// Free bonus d4s.
    pub extra_dice: u32,
    /// Flat modifier added to the total.
    pub modifier: i32,
    /// Threshold to reach, or the ruleset default.
    pub threshold: Option<i32>,
}

impl CheckInput {
    /// A bare `1d20` check.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the skill rank.
    pub fn with_skill_rank(mut self, rank: u32) -> Self {
        self.skill_rank = rank;
        self
    }

    /// Set the attribute bonus dice.
    pub fn with_attribute_bonus(mut self, dice: u32) -> Self {
        self.attribute_bonus = dice;
        self
    }

    /// Set the style level.
    pub fn with_style_level(mut self, level: u32) -> Self {
        self.style_level = level;
        self
    }

    /// Set the combat power stat dice.
    pub fn with_power_strength(mut self, dice: u32) -> Self {
        self.power_strength = dice;
        self
    }

    /// Set the number of selected power tags.
    pub fn with_tag_dice(mut self, dice: u32) -> Self {
        self.tag_dice = dice;
        self
    }

    /// Set the free bonus dice.
    pub fn with_extra_dice(mut self, dice: u32) -> Self {
        self.extra_dice = dice;
        self
    }

    /// Set the flat modifier.
    pub fn with_modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    /// Set an explicit threshold.
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = Some(threshold);
        self
    }
}

/// Resource pool values before or after a check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolState {
    /// Style pool value.
    pub style: i32,
    /// MP pool value.
    pub mp: i32,
}

/// A resource change produced by a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckEffect {
    /// Style gained from the style dice, after clamping.
    StyleGained(u32),
    /// MP spent on selected tags, after clamping.
    MpSpent(u32),
}

impl std::fmt::Display for CheckEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StyleGained(n) => write!(f, "Style +{n}"),
            Self::MpSpent(n) => write!(f, "MP -{n}"),
        }
    }
}

/// The result of resolving a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// The rendered formula, non-zero terms only.
    pub formula: String,
    /// Base roll plus style roll plus modifier.
    pub total: i32,
    /// The threshold the total was compared to.
    pub threshold: i32,
    /// The classified outcome.
    pub outcome: Outcome,
    /// The d20 and all d4s.
    pub base_roll: RollResult,
    /// The style d6s, if any were rolled.
    pub style_roll: Option<RollResult>,
    /// Resource changes, in the order applied.
    pub effects: Vec<CheckEffect>,
    /// Pool values after the effects.
    pub pools: PoolState,
}

impl CheckResult {
    /// The success tier, `None` on failure.
    pub fn success_tier(&self) -> Option<u32> {
        self.outcome.tier()
    }

    /// Sum of the style dice (0 if none).
    pub fn style_total(&self) -> u32 {
        self.style_roll.as_ref().map_or(0, RollResult::total)
    }
}

/// The two dice pools of a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedCheck {
    /// d20 plus every d4 term, rolled as one draw.
    pub base: DicePool,
    /// Style d6s, rolled as a second draw. Empty when style level is 0.
    pub style: DicePool,
    /// Flat modifier.
    pub modifier: i32,
}

impl ComposedCheck {
    /// The formula of both pools, in display order.
    pub fn formula(&self) -> DiceFormula {
        DiceFormula {
            terms: self
                .base
                .terms()
                .iter()
                .chain(self.style.terms())
                .copied()
                .collect(),
            modifier: self.modifier,
        }
    }
}

/// Build the dice pools for a check. Zero-count terms are left out.
pub fn compose(input: &CheckInput, rules: &RuleSet) -> ComposedCheck {
    let style_level = if input.style_level > rules.max_style_level {
        tracing::warn!(
            requested = input.style_level,
            max = rules.max_style_level,
            "style level above maximum, clamping"
        );
        rules.max_style_level
    } else {
        input.style_level
    };

    let base = DicePool::new()
        .add_tagged(Die::D20, DiceTag::Base, 1)
        .add_tagged(Die::D4, DiceTag::Skill, input.skill_rank)
        .add_tagged(Die::D4, DiceTag::Attribute, input.attribute_bonus)
        .add_tagged(Die::D4, DiceTag::Power, input.power_strength)
        .add_tagged(Die::D4, DiceTag::PowerTag, input.tag_dice)
        .add_tagged(Die::D4, DiceTag::Extra, input.extra_dice);
    let style = DicePool::new().add_tagged(Die::D6, DiceTag::Style, style_level);

    ComposedCheck {
        base,
        style,
        modifier: input.modifier,
    }
}

/// Resolve a check end to end.
///
/// Rolls the base pool, then the style pool. Selected tags cost MP,
/// clamped at 0 without blocking the roll; the style dice sum is added to
/// the Style pool, clamped to its ceiling. The total is then classified.
pub fn resolve_check<D: DiceSource + ?Sized>(
    rules: &RuleSet,
    input: &CheckInput,
    pools: PoolState,
    dice: &mut D,
) -> CheckResult {
    let composed = compose(input, rules);
    let formula = composed.formula().to_string();

    let base_roll = composed.base.roll(dice);
    let style_roll = (!composed.style.is_empty()).then(|| composed.style.roll(dice));
    let style_sum = style_roll.as_ref().map_or(0, RollResult::total);

    let total = i32::try_from(base_roll.total() + style_sum)
        .unwrap_or(i32::MAX)
        .saturating_add(composed.modifier);

    let mut effects = Vec::new();
    let mut after = pools;

    if input.tag_dice > 0 {
        let (mp, spent) = power::spend_for_tags(pools.mp, input.tag_dice);
        if spent < power::tag_cost(input.tag_dice) {
            tracing::warn!(
                tags = input.tag_dice,
                mp = pools.mp,
                "not enough MP for selected tags, clamping to 0"
            );
        }
        after.mp = mp;
        effects.push(CheckEffect::MpSpent(spent));
    }

    if style_roll.is_some() {
        let mut pool = style::style_pool(pools.style, rules);
        let gained = pool.gain(style_sum);
        after.style = pool.current;
        effects.push(CheckEffect::StyleGained(gained));
    }

    let threshold = input.threshold.unwrap_or(rules.default_threshold);
    let outcome = rules.classifier().classify(total, threshold);

    tracing::debug!(
        %formula,
        base = base_roll.total(),
        style = style_sum,
        total,
        threshold,
        %outcome,
        "check resolved"
    );

    CheckResult {
        formula,
        total,
        threshold,
        outcome,
        base_roll,
        style_roll,
        effects,
        pools: after,
    }
}
