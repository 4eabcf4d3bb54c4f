//! Upgrade cost - Currency needed to take an item from +0 to +5
//!
//! The formula gives the cumulative cost of reaching each tier from
//! scratch; the per-tier cost is the difference between neighbours.
//!
//! Formula for tier n (level factor f[n] = 1.0, 2.1, 3.4, 5.0, 7.0):
//! - upgraded items: f[n] * (150 * level + 27000)
//! - everything else: rarity_factor * f[n] * (180 + level)
//!
//! Unlike the other calculators, invalid levels are clamped, not rejected.

use crate::config::UpgradeConstants;
use crate::types::{Rarity, MAX_ITEM_LEVEL, MIN_LEVEL};
use serde::{Deserialize, Serialize};

/// Number of upgrade tiers (+1 to +5)
pub const UPGRADE_TIERS: usize = 5;

/// Upgrade costs for one item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeCost {
    /// Level after clamping
    pub level: u32,
    pub rarity: Rarity,
    /// Display only
    pub gold_factor: f64,
    /// Cost of reaching +1..+5 from +0
    pub cumulative: [f64; UPGRADE_TIERS],
    /// Cost of each single step +0->+1 .. +4->+5
    pub tier_costs: [f64; UPGRADE_TIERS],
    /// Full extraction value, the sum of `tier_costs`
    pub total_upgrade_cost: f64,
    /// Normal extraction value
    pub total_75_percent: f64,
}

/// Truncate and clamp a raw level into 1-300 (NaN becomes 1)
pub fn clamp_upgrade_level(raw: f64) -> u32 {
    if raw.is_nan() {
        return MIN_LEVEL;
    }
    raw.trunc().clamp(MIN_LEVEL as f64, MAX_ITEM_LEVEL as f64) as u32
}

impl UpgradeConstants {
    /// Cumulative cost of each tier for an already clamped level
    pub fn cumulative_costs(&self, level: u32, rarity: Rarity) -> [f64; UPGRADE_TIERS] {
        let level = level as f64;
        let rarity_factor = self.rarity(rarity).rarity_factor;

        self.level_factors.map(|factor| match rarity {
            Rarity::Upgraded => factor * (self.upgraded_per_level * level + self.upgraded_base),
            _ => rarity_factor * factor * (self.level_offset + level),
        })
    }

    /// Calculate upgrade costs for a raw level
    pub fn calculate(&self, level: f64, rarity: Rarity) -> UpgradeCost {
        let clamped = clamp_upgrade_level(level);
        if clamped as f64 != level {
            log::debug!("upgrade level {} clamped to {}", level, clamped);
        }

        let cumulative = self.cumulative_costs(clamped, rarity);

        let mut tier_costs = [0.0; UPGRADE_TIERS];
        tier_costs[0] = cumulative[0];
        for i in 1..UPGRADE_TIERS {
            tier_costs[i] = cumulative[i] - cumulative[i - 1];
        }

        let total_upgrade_cost: f64 = tier_costs.iter().sum();

        UpgradeCost {
            level: clamped,
            rarity,
            gold_factor: self.rarity(rarity).gold_factor,
            cumulative,
            tier_costs,
            total_upgrade_cost,
            total_75_percent: total_upgrade_cost * self.normal_extraction_ratio,
        }
    }
}

/// Calculate upgrade costs with the default balance table
pub fn calculate_upgrade_cost(level: f64, rarity: Rarity) -> UpgradeCost {
    UpgradeConstants::default().calculate(level, rarity)
}

/// Calculate upgrade costs with a supplied balance table
pub fn calculate_upgrade_cost_with(
    constants: &UpgradeConstants,
    level: f64,
    rarity: Rarity,
) -> UpgradeCost {
    constants.calculate(level, rarity)
}
