//! Integration test: Load balance config -> Run every calculator -> Check the worked examples
//!
//! This test validates the full flow the TUI goes through for each tab.

use clan_core::config::{load_balance_config, parse_balance_config};
use clan_core::{
    assess_duel_with, assess_group_with, calculate_unbind_cost_with, calculate_upgrade_cost_with,
    BalanceConfig, CalcError, Rarity, UPGRADE_TIERS,
};
use std::path::Path;

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

fn shipped_config() -> BalanceConfig {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../clan_core/config/balance.toml");
    load_balance_config(&path).expect("shipped balance.toml should load")
}

#[test]
fn test_full_calculator_flow() {
    separator("STEP 1: Load balance config");
    let config = shipped_config();
    assert_eq!(config, BalanceConfig::default());
    println!("  Penalty scan bound: {}", config.penalty.max_scan_level);

    separator("STEP 2: 1v1 penalty");
    let duel = assess_duel_with(&config.penalty, 200, 150).unwrap();
    println!(
        "  200 vs 150: gap {} / needed {:.1} -> penalty {}",
        duel.level_difference, duel.min_difference, duel.penalty
    );
    assert!(duel.penalty);
    assert_eq!(duel.min_victim_level, 164);
    assert_eq!(duel.max_attacker_level, 182);

    let duel = assess_duel_with(&config.penalty, 120, 119).unwrap();
    assert!(!duel.penalty);

    separator("STEP 3: Group penalty");
    let group = assess_group_with(&config.penalty, &[200, 180, 160], &[150, 140]).unwrap();
    println!(
        "  difference {:.2} / threshold {:.2} -> penalty {}",
        group.difference, group.threshold, group.penalty
    );
    assert!((group.difference - 45.0).abs() < 1e-9);
    assert!((group.threshold - 33.0).abs() < 1e-9);
    assert!(group.penalty);

    separator("STEP 4: Unbind cost");
    for rarity in [Rarity::Common, Rarity::Unique, Rarity::Heroic, Rarity::Legendary] {
        let cost = calculate_unbind_cost_with(&config.unbind, 100, rarity).unwrap();
        println!(
            "  lvl 100 {:10} base {:.1} -> {} (capped: {})",
            rarity.name(),
            cost.base_value,
            cost.total_cost,
            cost.is_capped
        );
    }
    let legendary = calculate_unbind_cost_with(&config.unbind, 280, Rarity::Legendary).unwrap();
    assert_eq!(legendary.total_cost, 6750);
    assert!(legendary.is_capped);

    separator("STEP 5: Upgrade cost");
    let upgrade = calculate_upgrade_cost_with(&config.upgrade, 100.0, Rarity::Heroic);
    for i in 0..UPGRADE_TIERS {
        println!(
            "  +{}: step {:>12.1}  cumulative {:>12.1}",
            i + 1,
            upgrade.tier_costs[i],
            upgrade.cumulative[i]
        );
    }
    // 100 * 7.0 * 280
    assert!((upgrade.total_upgrade_cost - 196_000.0).abs() < 1e-6);
    assert!((upgrade.total_75_percent - 147_000.0).abs() < 1e-6);
}

#[test]
fn test_overridden_config_changes_results() {
    let config = parse_balance_config(
        r#"
[penalty]
base_min_difference = 10.0

[unbind.common]
multiplier = 2.0
cap_threshold = 50.0
max_cost = 10000
cap_inclusive = false

[upgrade]
normal_extraction_ratio = 0.5
"#,
    )
    .unwrap();

    // Level 80 now only needs a gap of 10
    let duel = assess_duel_with(&config.penalty, 80, 70).unwrap();
    assert!(duel.penalty);

    // base 15 * 2 = 30 points
    let unbind = calculate_unbind_cost_with(&config.unbind, 50, Rarity::Common).unwrap();
    assert_eq!(unbind.total_cost, 2250);

    let upgrade = calculate_upgrade_cost_with(&config.upgrade, 1.0, Rarity::Common);
    assert!((upgrade.total_75_percent - upgrade.total_upgrade_cost * 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_errors_surface_unchanged() {
    let config = shipped_config();

    assert!(matches!(
        assess_duel_with(&config.penalty, 0, 1),
        Err(CalcError::LevelOutOfRange { level: 0, .. })
    ));
    assert!(matches!(
        assess_group_with(&config.penalty, &[], &[1]),
        Err(CalcError::EmptyLevels { .. })
    ));
    assert!(matches!(
        calculate_unbind_cost_with(&config.unbind, 10, Rarity::Upgraded),
        Err(CalcError::UnsupportedRarity { .. })
    ));
    assert!(matches!(
        "mythic".parse::<Rarity>(),
        Err(CalcError::UnknownRarity(_))
    ));
}
