//! Dice pool construction and rolling.

use super::roll::{DieResult, RollResult};
use super::source::DiceSource;
use super::term::DiceTerm;
use super::{DiceTag, Die};

/// Roll every die of every term, in term order.
///
/// Each die is an independent draw in `[1, sides]`; the result's total is
/// the sum of all draws. Zero-count terms contribute nothing, so an empty
/// or all-zero list rolls to a total of 0 with no dice.
pub fn roll_terms<D: DiceSource + ?Sized>(terms: &[DiceTerm], source: &mut D) -> RollResult {
    let dice = terms
        .iter()
        .flat_map(|term| std::iter::repeat_n(*term, term.count as usize))
        .map(|term| DieResult {
            die: term.die,
            tag: term.tag,
            value: source.draw(term.die.sides()),
        })
        .collect();
    RollResult { dice }
}

/// An ordered collection of dice terms rolled together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DicePool {
    terms: Vec<DiceTerm>,
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add `count` untagged dice of the given type. A zero count is dropped.
    pub fn add(self, die: Die, count: u32) -> Self {
        self.add_tagged(die, DiceTag::Plain, count)
    }

    /// Add `count` dice of the given type with a specific tag.
    pub fn add_tagged(mut self, die: Die, tag: DiceTag, count: u32) -> Self {
        if count > 0 {
            self.terms.push(DiceTerm::tagged(count, die, tag));
        }
        self
    }

    /// The non-empty terms in insertion order.
    pub fn terms(&self) -> &[DiceTerm] {
        &self.terms
    }

    /// Returns how many dice are in the pool across all terms.
    pub fn count(&self) -> u32 {
        self.terms.iter().map(|t| t.count).sum()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Roll all dice in the pool using the given source.
    pub fn roll<D: DiceSource + ?Sized>(&self, source: &mut D) -> RollResult {
        roll_terms(&self.terms, source)
    }
}

impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        let parts: Vec<String> = self.terms.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join(" + "))
    }
}
