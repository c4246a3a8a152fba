//! Injectable sources of die draws.
//!
//! Rolling never touches global state: every roll takes a [`DiceSource`]
//! by mutable reference. Production hosts pass a seeded or thread-local
//! RNG; tests pass [`ScriptedDice`] to replay exact values.

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

/// Something that can draw a single die.
pub trait DiceSource {
    /// Draw one die with `sides` faces: an integer in `[1, sides]`.
    fn draw(&mut self, sides: u32) -> u32;
}

impl DiceSource for StdRng {
    fn draw(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides.max(1))
    }
}

impl DiceSource for ThreadRng {
    fn draw(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides.max(1))
    }
}

impl<T: DiceSource + ?Sized> DiceSource for &mut T {
    fn draw(&mut self, sides: u32) -> u32 {
        (**self).draw(sides)
    }
}

/// A dice source that replays a fixed sequence of values.
///
/// Values are clamped into the face range of the die being drawn. Once
/// the script runs out every draw returns 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    values: VecDeque<u32>,
}

impl ScriptedDice {
    /// Create a source that yields `values` in order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of scripted values not yet drawn.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl DiceSource for ScriptedDice {
    fn draw(&mut self, sides: u32) -> u32 {
        self.values
            .pop_front()
            .unwrap_or(1)
            .clamp(1, sides.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn scripted_replays_in_order() {
        let mut dice = ScriptedDice::new([3, 17, 2]);
        assert_eq!(dice.draw(4), 3);
        assert_eq!(dice.draw(20), 17);
        assert_eq!(dice.remaining(), 1);
        assert_eq!(dice.draw(6), 2);
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn scripted_clamps_to_faces() {
        let mut dice = ScriptedDice::new([9, 0]);
        assert_eq!(dice.draw(4), 4);
        assert_eq!(dice.draw(6), 1);
    }

    #[test]
    fn scripted_exhausted_yields_one() {
        let mut dice = ScriptedDice::default();
        assert_eq!(dice.draw(20), 1);
    }

    #[test]
    fn std_rng_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let v = rng.draw(6);
            assert!((1..=6).contains(&v));
        }
    }

    #[test]
    fn mut_ref_forwards() {
        fn draw_via<D: DiceSource>(mut source: D, sides: u32) -> u32 {
            source.draw(sides)
        }

        let mut dice = ScriptedDice::new([5, 2]);
        assert_eq!(draw_via(&mut dice, 6), 5);
        assert_eq!(dice.remaining(), 1);
    }
}
