//! Clamped resource pools (Style, MP).
//!
//! A pool is a numeric value with a floor and an optional ceiling. Gains
//! and clamped spends never fail; a rejecting spend fails without
//! touching the value when the pool cannot cover the cost.

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// A named numeric resource clamped to `[min, max]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    /// Display name of the pool.
    pub name: String,
    /// Current value.
    pub current: i32,
    /// Minimum value (usually 0).
    pub min: i32,
    /// Maximum value, or `None` when unbounded above.
    pub max: Option<i32>,
}

impl ResourcePool {
    /// Create a pool bounded on both sides. The starting value is clamped.
    pub fn bounded(name: impl Into<String>, current: i32, min: i32, max: i32) -> Self {
        let max = max.max(min);
        Self {
            name: name.into(),
            current: current.clamp(min, max),
            min,
            max: Some(max),
        }
    }

    /// Create a pool with a floor but no ceiling. The starting value is clamped.
    pub fn floored(name: impl Into<String>, current: i32, min: i32) -> Self {
        Self {
            name: name.into(),
            current: current.max(min),
            min,
            max: None,
        }
    }

    fn clamp(&self, value: i32) -> i32 {
        match self.max {
            Some(max) => value.clamp(self.min, max),
            None => value.max(self.min),
        }
    }

    /// Adjust the pool by a delta, clamping to bounds. Returns the new value.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        self.current = self.clamp(self.current.saturating_add(delta));
        self.current
    }

    /// Add `amount`, clamped to the ceiling. Returns the amount actually gained.
    pub fn gain(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.adjust(i32::try_from(amount).unwrap_or(i32::MAX));
        (self.current - before).unsigned_abs()
    }

    /// Returns true if the pool holds at least `cost`.
    pub fn can_afford(&self, cost: u32) -> bool {
        i64::from(self.current) >= i64::from(cost)
    }

    /// Spend `cost`, rejecting without mutation if the pool holds less.
    ///
    /// On success the new value is floored at `min`. Returns the new value.
    pub fn spend(&mut self, cost: u32) -> MechResult<i32> {
        if !self.can_afford(cost) {
            return Err(MechError::InsufficientFunds {
                resource: self.name.clone(),
                needed: i32::try_from(cost).unwrap_or(i32::MAX),
                available: self.current,
            });
        }
        self.adjust(-i32::try_from(cost).unwrap_or(i32::MAX));
        Ok(self.current)
    }

    /// Spend up to `cost`, stopping at the floor. Never fails.
    ///
    /// Returns the amount actually removed.
    pub fn spend_clamped(&mut self, cost: u32) -> u32 {
        let before = self.current;
        self.adjust(-i32::try_from(cost).unwrap_or(i32::MAX));
        (before - self.current).unsigned_abs()
    }

    /// Returns true if the pool is at its minimum value.
    pub fn is_empty(&self) -> bool {
        self.current <= self.min
    }

    /// Returns true if the pool has a ceiling and is at it.
    pub fn is_full(&self) -> bool {
        self.max.is_some_and(|max| self.current >= max)
    }
}

impl std::fmt::Display for ResourcePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}: {}/{}", self.name, self.current, max),
            None => write!(f, "{}: {}", self.name, self.current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_clamps_initial() {
        let p = ResourcePool::bounded("Style", 140, 0, 100);
        assert_eq!(p.current, 100);
        assert!(p.is_full());
        let p = ResourcePool::bounded("Style", -5, 0, 100);
        assert_eq!(p.current, 0);
        assert!(p.is_empty());
    }

    #[test]
    fn floored_has_no_ceiling() {
        let mut p = ResourcePool::floored("MP", 3, 0);
        assert_eq!(p.gain(1000), 1000);
        assert_eq!(p.current, 1003);
        assert!(!p.is_full());
    }

    #[test]
    fn gain_clamps_to_max() {
        let mut p = ResourcePool::bounded("Style", 95, 0, 100);
        assert_eq!(p.gain(10), 5);
        assert_eq!(p.current, 100);
    }

    #[test]
    fn spend_rejects_without_mutation() {
        let mut p = ResourcePool::bounded("style", 10, 0, 100);
        let err = p.spend(15).unwrap_err();
        assert_eq!(
            err,
            MechError::InsufficientFunds {
                resource: "style".to_string(),
                needed: 15,
                available: 10,
            }
        );
        assert_eq!(p.current, 10);
    }

    #[test]
    fn spend_exact_reaches_zero() {
        let mut p = ResourcePool::bounded("Style", 30, 0, 100);
        assert_eq!(p.spend(30).unwrap(), 0);
        assert!(p.is_empty());
    }

    #[test]
    fn spend_clamped_stops_at_floor() {
        let mut p = ResourcePool::floored("MP", 2, 0);
        assert_eq!(p.spend_clamped(3), 2);
        assert_eq!(p.current, 0);
    }

    #[test]
    fn adjust_normal() {
        let mut p = ResourcePool::bounded("Style", 50, 0, 100);
        assert_eq!(p.adjust(-20), 30);
        assert_eq!(p.adjust(5), 35);
    }

    #[test]
    fn display() {
        assert_eq!(
            ResourcePool::bounded("Style", 40, 0, 100).to_string(),
            "Style: 40/100"
        );
        assert_eq!(ResourcePool::floored("MP", 7, 0).to_string(), "MP: 7");
    }
}
