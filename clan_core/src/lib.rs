//! clan_core - Game-balance calculators for clan tooling
//!
//! This library provides:
//! - Penalty points: 1v1 and group level-gap penalty checks
//! - Unbind cost: capped, rarity-weighted cost to unbind an item
//! - Upgrade cost: cumulative and per-tier cost for upgrades +1 to +5
//! - BalanceConfig: the constant tables driving all of the above, loadable from TOML

pub mod config;
pub mod error;
pub mod item;
pub mod penalty;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use config::{default_balance, BalanceConfig, ConfigError};
pub use error::CalcError;
pub use item::{
    calculate_unbind_cost, calculate_unbind_cost_with, calculate_upgrade_cost,
    calculate_upgrade_cost_with, clamp_upgrade_level, UnbindCost, UpgradeCost, UPGRADE_TIERS,
};
pub use penalty::{
    assess_duel, assess_duel_with, assess_group, assess_group_with,
    max_attacker_level_without_penalty, min_level_difference, min_victim_level_for_penalty,
    would_receive_penalty, DuelPenalty, GroupPenalty,
};
pub use types::{Rarity, Side};
