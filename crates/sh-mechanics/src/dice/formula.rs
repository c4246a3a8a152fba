//! Textual dice formulas such as `2d6 + 3`, used for item damage.

use serde::{Deserialize, Serialize};

use super::pool::roll_terms;
use super::roll::RollResult;
use super::source::DiceSource;
use super::term::DiceTerm;
use super::Die;
use crate::error::{MechError, MechResult};

/// Most dice a single formula may roll.
pub const MAX_FORMULA_DICE: u32 = 100;

/// A sum of dice terms plus a flat modifier.
///
/// Serializes as its formula string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DiceFormula {
    /// Dice terms in written order.
    pub terms: Vec<DiceTerm>,
    /// Flat value added after the dice.
    pub modifier: i32,
}

/// The outcome of rolling a [`DiceFormula`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaRoll {
    /// Every die drawn.
    pub roll: RollResult,
    /// Dice total plus modifier.
    pub total: i32,
}

impl DiceFormula {
    /// Parse a formula like `"1d8 + 2d4 - 1"`.
    ///
    /// Dice terms may omit the count (`d6` means `1d6`) and may only be
    /// added. Integers may be added or subtracted. A formula rolling more
    /// than [`MAX_FORMULA_DICE`] dice, or whose modifier leaves the `i32`
    /// range, is rejected.
    pub fn parse(input: &str) -> MechResult<Self> {
        let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(MechError::InvalidFormula("empty formula".to_string()));
        }

        let mut formula = Self::default();
        let mut dice = 0u32;
        for (negative, token) in split_signed(&compact) {
            if token.is_empty() {
                return Err(MechError::InvalidFormula(input.to_string()));
            }
            let lower = token.to_lowercase();
            if let Some((count, sides)) = lower.split_once('d') {
                if negative {
                    return Err(MechError::InvalidFormula(format!(
                        "dice cannot be subtracted: {token}"
                    )));
                }
                let count = if count.is_empty() {
                    1
                } else {
                    count
                        .parse::<u32>()
                        .map_err(|_| MechError::InvalidFormula(token.to_string()))?
                };
                let die = sides
                    .parse::<u32>()
                    .ok()
                    .and_then(Die::from_sides)
                    .ok_or_else(|| MechError::InvalidFormula(token.to_string()))?;
                dice = dice.saturating_add(count);
                if dice > MAX_FORMULA_DICE {
                    return Err(MechError::InvalidFormula(format!(
                        "more than {MAX_FORMULA_DICE} dice: {input}"
                    )));
                }
                formula.terms.push(DiceTerm::new(count, die));
            } else {
                let value = token
                    .parse::<i32>()
                    .map_err(|_| MechError::InvalidFormula(token.to_string()))?;
                let modifier = if negative {
                    formula.modifier.checked_sub(value)
                } else {
                    formula.modifier.checked_add(value)
                };
                formula.modifier = modifier.ok_or_else(|| {
                    MechError::InvalidFormula(format!("modifier out of range: {input}"))
                })?;
            }
        }
        Ok(formula)
    }

    /// Roll the formula.
    pub fn roll<D: DiceSource + ?Sized>(&self, source: &mut D) -> FormulaRoll {
        let roll = roll_terms(&self.terms, source);
        let total = i32::try_from(roll.total())
            .unwrap_or(i32::MAX)
            .saturating_add(self.modifier);
        FormulaRoll { roll, total }
    }
}

impl TryFrom<String> for DiceFormula {
    type Error = MechError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DiceFormula> for String {
    fn from(formula: DiceFormula) -> Self {
        formula.to_string()
    }
}

/// Split `"2d6+3-1"` into `[(false, "2d6"), (false, "3"), (true, "1")]`.
fn split_signed(s: &str) -> Vec<(bool, &str)> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut negative = false;
    for (i, c) in s.char_indices() {
        if c == '+' || c == '-' {
            if i > 0 {
                parts.push((negative, &s[start..i]));
            } else if c == '-' {
                negative = true;
                start = 1;
                continue;
            }
            negative = c == '-';
            start = i + 1;
        }
    }
    parts.push((negative, &s[start..]));
    parts
}

impl std::fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .terms
            .iter()
            .filter(|t| !t.is_empty())
            .map(ToString::to_string)
            .collect();
        if parts.is_empty() {
            return write!(f, "{}", self.modifier);
        }
        write!(f, "{}", parts.join(" + "))?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, " + {m}"),
            m => write!(f, " - {}", -m),
        }
    }
}
