//! Property tests for the balance calculators

use clan_core::prelude::*;
use clan_core::{
    max_attacker_level_without_penalty, min_level_difference, would_receive_penalty,
    UPGRADE_TIERS,
};
use proptest::prelude::*;

fn rarity_strategy() -> impl Strategy<Value = Rarity> {
    prop::sample::select(Rarity::all().to_vec())
}

fn unbindable_rarity() -> impl Strategy<Value = Rarity> {
    prop::sample::select(vec![
        Rarity::Common,
        Rarity::Unique,
        Rarity::Heroic,
        Rarity::Legendary,
    ])
}

proptest! {
    #[test]
    fn min_difference_formula(attacker in 1u32..=500) {
        let expected = 16.0 + ((attacker as f64 - 100.0) / 5.0).max(0.0);
        prop_assert!((min_level_difference(attacker) - expected).abs() < 1e-12);
    }

    #[test]
    fn penalty_matches_gap(attacker in 1u32..=500, victim in 1u32..=500) {
        let gap = attacker as f64 - victim as f64;
        let penalty = would_receive_penalty(attacker, victim).unwrap();
        prop_assert_eq!(penalty, gap >= min_level_difference(attacker));
    }

    #[test]
    fn max_safe_attacker_is_safe(victim in 1u32..=300) {
        let safe = max_attacker_level_without_penalty(victim).unwrap();
        prop_assert!(safe >= victim);
        prop_assert!(!would_receive_penalty(safe, victim).unwrap());
        if safe < 300 {
            prop_assert!(would_receive_penalty(safe + 1, victim).unwrap());
        }
    }

    #[test]
    fn group_outcome_matches_values(
        attackers in prop::collection::vec(1u32..=500, 1..8),
        defenders in prop::collection::vec(1u32..=500, 1..8),
    ) {
        let result = assess_group(&attackers, &defenders).unwrap();
        prop_assert_eq!(result.penalty, result.difference > result.threshold);
        prop_assert!(result.threshold >= 15.0);
        prop_assert!(result.avg_attacker_level <= result.max_attacker_level as f64);
    }

    #[test]
    fn unbind_never_exceeds_cap(level in 1u32..=300, rarity in unbindable_rarity()) {
        let config = BalanceConfig::default();
        let cap = config.unbind.rarity(rarity).unwrap().max_cost;
        let cost = calculate_unbind_cost(level, rarity).unwrap();
        prop_assert!(cost.total_cost <= cap);
        if cost.is_capped {
            prop_assert_eq!(cost.total_cost, cap);
        } else {
            prop_assert_eq!(cost.total_cost % 75, 0);
        }
    }

    #[test]
    fn tier_costs_sum_to_full_cost(level in 1u32..=300, rarity in rarity_strategy()) {
        let cost = calculate_upgrade_cost(level as f64, rarity);
        let sum: f64 = cost.tier_costs.iter().sum();
        let full = cost.cumulative[UPGRADE_TIERS - 1];
        prop_assert_eq!(sum, full);
        prop_assert_eq!(cost.total_upgrade_cost, full);
    }

    #[test]
    fn normal_extraction_is_three_quarters(level in 1u32..=300, rarity in rarity_strategy()) {
        let cost = calculate_upgrade_cost(level as f64, rarity);
        prop_assert_eq!(cost.total_75_percent, cost.total_upgrade_cost * 0.75);
    }

    #[test]
    fn upgrade_steps_are_positive(level in 1u32..=300, rarity in rarity_strategy()) {
        let cost = calculate_upgrade_cost(level as f64, rarity);
        for step in cost.tier_costs {
            prop_assert!(step > 0.0);
        }
    }

    #[test]
    fn upgrade_level_always_clamped(raw in any::<f64>()) {
        let cost = calculate_upgrade_cost(raw, Rarity::Common);
        prop_assert!((1..=300).contains(&cost.level));
    }
}
