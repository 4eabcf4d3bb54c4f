//! Balance tables for the calculators

use super::ConfigError;
use crate::types::{Rarity, MAX_CHARACTER_LEVEL};
use serde::{Deserialize, Serialize};

/// Tunable balance constants
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BalanceConfig {
    #[serde(default)]
    pub penalty: PenaltyConstants,
    #[serde(default)]
    pub unbind: UnbindConstants,
    #[serde(default)]
    pub upgrade: UpgradeConstants,
}

impl BalanceConfig {
    /// Check the tables for values the formulas cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.penalty.validate()?;
        self.unbind.validate()?;
        self.upgrade.validate()?;
        Ok(())
    }
}

/// False for NaN and infinities as well as for zero and negative values
fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

// =============================================================================
// Penalty points
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyConstants {
    /// Minimum 1v1 level gap before the level-scaled part kicks in
    #[serde(default = "default_base_min_difference")]
    pub base_min_difference: f64,
    /// Attacker level above which the required gap grows
    #[serde(default = "default_level_offset")]
    pub level_offset: f64,
    /// Attacker levels per extra point of required gap
    #[serde(default = "default_level_divisor")]
    pub level_divisor: f64,
    /// Upper bound of the "highest safe attacker level" scan
    #[serde(default = "default_max_scan_level")]
    pub max_scan_level: u32,
    #[serde(default = "default_group_base_threshold")]
    pub group_base_threshold: f64,
    #[serde(default = "default_group_strength_factor")]
    pub group_strength_factor: f64,
    #[serde(default = "default_group_strength_offset")]
    pub group_strength_offset: f64,
    /// Share of the attacker strength compared against the defender average
    #[serde(default = "default_group_difference_factor")]
    pub group_difference_factor: f64,
}

impl Default for PenaltyConstants {
    fn default() -> Self {
        PenaltyConstants {
            base_min_difference: default_base_min_difference(),
            level_offset: default_level_offset(),
            level_divisor: default_level_divisor(),
            max_scan_level: default_max_scan_level(),
            group_base_threshold: default_group_base_threshold(),
            group_strength_factor: default_group_strength_factor(),
            group_strength_offset: default_group_strength_offset(),
            group_difference_factor: default_group_difference_factor(),
        }
    }
}

impl PenaltyConstants {
    fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.level_divisor) {
            return Err(ConfigError::ValidationError(
                "penalty.level_divisor must be positive".to_string(),
            ));
        }
        if self.max_scan_level == 0 || self.max_scan_level > MAX_CHARACTER_LEVEL {
            return Err(ConfigError::ValidationError(format!(
                "penalty.max_scan_level must be within 1-{}",
                MAX_CHARACTER_LEVEL
            )));
        }
        if !non_negative(self.base_min_difference) || !non_negative(self.group_base_threshold) {
            return Err(ConfigError::ValidationError(
                "penalty thresholds must not be negative".to_string(),
            ));
        }
        let factors = [
            self.level_offset,
            self.group_strength_factor,
            self.group_strength_offset,
            self.group_difference_factor,
        ];
        if factors.iter().any(|f| !f.is_finite()) {
            return Err(ConfigError::ValidationError(
                "penalty offsets and factors must be finite numbers".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_base_min_difference() -> f64 {
    16.0
}
fn default_level_offset() -> f64 {
    100.0
}
fn default_level_divisor() -> f64 {
    5.0
}
fn default_max_scan_level() -> u32 {
    300
}
fn default_group_base_threshold() -> f64 {
    15.0
}
fn default_group_strength_factor() -> f64 {
    0.1
}
fn default_group_strength_offset() -> f64 {
    20.0
}
fn default_group_difference_factor() -> f64 {
    0.5
}

// =============================================================================
// Unbind cost
// =============================================================================

/// Per-rarity unbind parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnbindRarity {
    pub multiplier: f64,
    pub cap_threshold: f64,
    pub max_cost: u64,
    /// Whether a base value equal to the threshold is already capped
    pub cap_inclusive: bool,
}

impl UnbindRarity {
    fn new(multiplier: f64, cap_threshold: f64, max_cost: u64, cap_inclusive: bool) -> Self {
        UnbindRarity {
            multiplier,
            cap_threshold,
            max_cost,
            cap_inclusive,
        }
    }

    /// Check whether a base value hits this rarity's cap
    pub fn is_capped(&self, base_value: f64) -> bool {
        if self.cap_inclusive {
            base_value >= self.cap_threshold
        } else {
            base_value > self.cap_threshold
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnbindConstants {
    #[serde(default = "default_unbind_base_value")]
    pub base_value: f64,
    #[serde(default = "default_unbind_per_level")]
    pub per_level: f64,
    /// Currency per rounded point of weighted base value
    #[serde(default = "default_cost_per_point")]
    pub cost_per_point: f64,
    #[serde(default = "default_unbind_common")]
    pub common: UnbindRarity,
    #[serde(default = "default_unbind_unique")]
    pub unique: UnbindRarity,
    #[serde(default = "default_unbind_heroic")]
    pub heroic: UnbindRarity,
    #[serde(default = "default_unbind_legendary")]
    pub legendary: UnbindRarity,
}

impl Default for UnbindConstants {
    fn default() -> Self {
        UnbindConstants {
            base_value: default_unbind_base_value(),
            per_level: default_unbind_per_level(),
            cost_per_point: default_cost_per_point(),
            common: default_unbind_common(),
            unique: default_unbind_unique(),
            heroic: default_unbind_heroic(),
            legendary: default_unbind_legendary(),
        }
    }
}

impl UnbindConstants {
    /// Parameters for a rarity, `None` for rarities that cannot be unbound
    pub fn rarity(&self, rarity: Rarity) -> Option<&UnbindRarity> {
        match rarity {
            Rarity::Common => Some(&self.common),
            Rarity::Unique => Some(&self.unique),
            Rarity::Heroic => Some(&self.heroic),
            Rarity::Legendary => Some(&self.legendary),
            Rarity::Upgraded => None,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if ![self.base_value, self.per_level, self.cost_per_point].into_iter().all(non_negative) {
            return Err(ConfigError::ValidationError(
                "unbind.base_value, per_level and cost_per_point must not be negative".to_string(),
            ));
        }
        for (name, table) in [
            ("common", &self.common),
            ("unique", &self.unique),
            ("heroic", &self.heroic),
            ("legendary", &self.legendary),
        ] {
            if !non_negative(table.multiplier) || !non_negative(table.cap_threshold) {
                return Err(ConfigError::ValidationError(format!(
                    "unbind.{} multiplier and cap_threshold must not be negative",
                    name
                )));
            }
        }
        Ok(())
    }
}

fn default_unbind_base_value() -> f64 {
    10.0
}
fn default_unbind_per_level() -> f64 {
    0.1
}
fn default_cost_per_point() -> f64 {
    75.0
}
fn default_unbind_common() -> UnbindRarity {
    UnbindRarity::new(1.0, 20.0, 1500, false)
}
fn default_unbind_unique() -> UnbindRarity {
    UnbindRarity::new(1.2, 20.0, 1800, true)
}
fn default_unbind_heroic() -> UnbindRarity {
    UnbindRarity::new(1.5, 30.0, 3375, true)
}
fn default_unbind_legendary() -> UnbindRarity {
    UnbindRarity::new(3.0, 30.0, 6750, true)
}

// =============================================================================
// Upgrade cost
// =============================================================================

/// Per-rarity upgrade factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpgradeRarity {
    /// Multiplier in the cost formula (unused for upgraded items)
    pub rarity_factor: f64,
    /// Shown to players, not part of the cost
    pub gold_factor: f64,
}

impl UpgradeRarity {
    fn new(rarity_factor: f64, gold_factor: f64) -> Self {
        UpgradeRarity {
            rarity_factor,
            gold_factor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeConstants {
    /// Level factor for tiers +1 to +5
    #[serde(default = "default_level_factors")]
    pub level_factors: [f64; 5],
    #[serde(default = "default_upgrade_level_offset")]
    pub level_offset: f64,
    #[serde(default = "default_upgraded_per_level")]
    pub upgraded_per_level: f64,
    #[serde(default = "default_upgraded_base")]
    pub upgraded_base: f64,
    /// Share of the full cost needed for a normal extraction
    #[serde(default = "default_normal_extraction_ratio")]
    pub normal_extraction_ratio: f64,
    #[serde(default = "default_upgrade_common")]
    pub common: UpgradeRarity,
    #[serde(default = "default_upgrade_unique")]
    pub unique: UpgradeRarity,
    #[serde(default = "default_upgrade_heroic")]
    pub heroic: UpgradeRarity,
    #[serde(default = "default_upgrade_upgraded")]
    pub upgraded: UpgradeRarity,
    #[serde(default = "default_upgrade_legendary")]
    pub legendary: UpgradeRarity,
}

impl Default for UpgradeConstants {
    fn default() -> Self {
        UpgradeConstants {
            level_factors: default_level_factors(),
            level_offset: default_upgrade_level_offset(),
            upgraded_per_level: default_upgraded_per_level(),
            upgraded_base: default_upgraded_base(),
            normal_extraction_ratio: default_normal_extraction_ratio(),
            common: default_upgrade_common(),
            unique: default_upgrade_unique(),
            heroic: default_upgrade_heroic(),
            upgraded: default_upgrade_upgraded(),
            legendary: default_upgrade_legendary(),
        }
    }
}

impl UpgradeConstants {
    /// Factors for a rarity
    pub fn rarity(&self, rarity: Rarity) -> &UpgradeRarity {
        match rarity {
            Rarity::Common => &self.common,
            Rarity::Unique => &self.unique,
            Rarity::Heroic => &self.heroic,
            Rarity::Upgraded => &self.upgraded,
            Rarity::Legendary => &self.legendary,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.level_factors.into_iter().all(positive) {
            return Err(ConfigError::ValidationError(
                "upgrade.level_factors must all be positive".to_string(),
            ));
        }
        let offsets = [self.level_offset, self.upgraded_per_level, self.upgraded_base];
        let rarity_factors = Rarity::all().iter().map(|r| self.rarity(*r).rarity_factor);
        if offsets.into_iter().chain(rarity_factors).any(|f| !f.is_finite()) {
            return Err(ConfigError::ValidationError(
                "upgrade offsets and rarity factors must be finite numbers".to_string(),
            ));
        }
        if !positive(self.normal_extraction_ratio) || self.normal_extraction_ratio > 1.0 {
            return Err(ConfigError::ValidationError(
                "upgrade.normal_extraction_ratio must be within (0, 1]".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_level_factors() -> [f64; 5] {
    [1.0, 2.1, 3.4, 5.0, 7.0]
}
fn default_upgrade_level_offset() -> f64 {
    180.0
}
fn default_upgraded_per_level() -> f64 {
    150.0
}
fn default_upgraded_base() -> f64 {
    27000.0
}
fn default_normal_extraction_ratio() -> f64 {
    0.75
}
fn default_upgrade_common() -> UpgradeRarity {
    UpgradeRarity::new(1.0, 1.0)
}
fn default_upgrade_unique() -> UpgradeRarity {
    UpgradeRarity::new(10.0, 10.0)
}
fn default_upgrade_heroic() -> UpgradeRarity {
    UpgradeRarity::new(100.0, 30.0)
}
fn default_upgrade_upgraded() -> UpgradeRarity {
    UpgradeRarity::new(-1.0, 40.0)
}
fn default_upgrade_legendary() -> UpgradeRarity {
    UpgradeRarity::new(1000.0, 60.0)
}
