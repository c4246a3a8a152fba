//! Property tests for the dice, derivation, classification, and pools.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use sh_mechanics::combat::derive;
use sh_mechanics::economy::{power, style};
use sh_mechanics::{
    CheckInput, DicePool, Die, Outcome, PoolState, RuleSet, ScriptedDice, classify, resolve_check,
};

proptest! {
    #[test]
    fn rolled_dice_stay_on_their_faces(seed in any::<u64>(), d4s in 0u32..8, d6s in 0u32..4) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pool = DicePool::new().add(Die::D20, 1).add(Die::D4, d4s).add(Die::D6, d6s);
        let roll = pool.roll(&mut rng);

        prop_assert_eq!(roll.count() as u32, 1 + d4s + d6s);
        for die in &roll.dice {
            prop_assert!((1..=die.die.sides()).contains(&die.value));
        }
        prop_assert_eq!(roll.total(), roll.values().iter().sum::<u32>());
    }

    #[test]
    fn derive_is_half_rounded_down(v in 0u32..10_000) {
        let d = derive(v);
        prop_assert!((2 * d..2 * d + 2).contains(&v));
    }

    #[test]
    fn classification_matches_margin(total in -200i32..200, threshold in -50i32..50) {
        let outcome = classify(total, threshold);
        let margin = total - threshold;
        match outcome {
            Outcome::Failure => prop_assert!(margin < 0),
            Outcome::Success => prop_assert!((0..5).contains(&margin)),
            Outcome::SuccessTier(n) => {
                prop_assert!(margin >= 5);
                prop_assert_eq!(n as i32, margin / 5);
            }
        }
    }

    #[test]
    fn style_gain_never_exceeds_ceiling(value in 0i32..=100, amount in 0u32..500) {
        let rules = RuleSet::default();
        let after = style::gain(value, amount, &rules);
        prop_assert!((value..=100).contains(&after));
    }

    #[test]
    fn style_spend_is_all_or_nothing(value in 0i32..=100, cost in 0u32..150) {
        let rules = RuleSet::default();
        match style::spend(value, cost, &rules) {
            Ok(after) => prop_assert_eq!(after, value - cost as i32),
            Err(_) => prop_assert!((cost as i32) > value),
        }
    }

    #[test]
    fn mp_never_negative(value in 0i32..20, tags in 0u32..20) {
        let (after, spent) = power::spend_for_tags(value, tags);
        prop_assert!(after >= 0);
        prop_assert_eq!(after + spent as i32, value);
    }

    #[test]
    fn check_total_is_sum_of_both_draws(
        faces in proptest::collection::vec(1u32..=4, 16),
        skill in 0u32..4,
        style_level in 0u32..=3,
        modifier in -3i32..3,
    ) {
        let rules = RuleSet::default();
        let input = CheckInput::new()
            .with_skill_rank(skill)
            .with_style_level(style_level)
            .with_modifier(modifier);
        let mut dice = ScriptedDice::new(faces);
        let result = resolve_check(&rules, &input, PoolState { style: 50, mp: 0 }, &mut dice);

        let style_sum = result.style_total();
        prop_assert_eq!(
            result.total,
            (result.base_roll.total() + style_sum) as i32 + modifier
        );
        prop_assert_eq!(result.pools.style, 50 + style_sum as i32);
        prop_assert_eq!(result.style_roll.is_some(), style_level > 0);
    }
}
