//! Power tags and the MP pool.
//!
//! A character's signature power carries free-text capability tags. Each
//! tag selected for a use adds a d4 and costs 1 MP. MP has a floor of 0
//! and no ceiling; the per-use spend clamps instead of blocking the roll.

use serde::{Deserialize, Serialize};

use super::pool::ResourcePool;

/// Name used for the MP pool in errors and display.
pub const MP_POOL: &str = "mp";

/// MP charged per selected tag.
pub const MP_PER_TAG: u32 = 1;

/// An insertion-ordered set of unique, non-blank tags.
///
/// Uniqueness is by exact string match; tags are stored as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct PowerTagSet {
    tags: Vec<String>,
}

impl PowerTagSet {
    /// Create an empty tag set.
    pub fn new() -> Self {
        Self { tags: Vec::new() }
    }

    /// Add a tag. Blank tags and tags already present are ignored.
    ///
    /// Returns true if the set changed.
    pub fn add(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if tag.trim().is_empty() || self.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Remove a tag. Absent tags are ignored.
    ///
    /// Removal is irreversible; the host confirms with the player before
    /// calling this. Returns true if the set changed.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    /// Returns true if the tag is in the set.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if there are no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Count how many distinct entries of `selected` are in this set.
    pub fn count_selected<S: AsRef<str>>(&self, selected: &[S]) -> u32 {
        let mut seen: Vec<&str> = Vec::new();
        for tag in selected.iter().map(AsRef::as_ref) {
            if self.contains(tag) && !seen.contains(&tag) {
                seen.push(tag);
            }
        }
        u32::try_from(seen.len()).unwrap_or(u32::MAX)
    }
}

impl From<Vec<String>> for PowerTagSet {
    fn from(tags: Vec<String>) -> Self {
        let mut set = Self::new();
        for tag in tags {
            set.add(tag);
        }
        set
    }
}

impl From<PowerTagSet> for Vec<String> {
    fn from(set: PowerTagSet) -> Self {
        set.tags
    }
}

/// MP cost of a use with `selected_tags` tags selected. Extra dice are free.
pub fn tag_cost(selected_tags: u32) -> u32 {
    selected_tags.saturating_mul(MP_PER_TAG)
}

/// Build the MP pool for a persisted value.
pub fn mp_pool(value: i32) -> ResourcePool {
    ResourcePool::floored(MP_POOL, value, 0)
}

/// Charge MP for a tagged use, clamping at 0.
///
/// Returns `(new_value, amount_spent)`.
pub fn spend_for_tags(value: i32, selected_tags: u32) -> (i32, u32) {
    let mut pool = mp_pool(value);
    let spent = pool.spend_clamped(tag_cost(selected_tags));
    (pool.current, spent)
}
