//! Unbind cost - Currency needed to remove an item's ownership lock
//!
//! Formula:
//! - base_value = 10 + 0.1 * level
//! - capped: cost = max_cost for the rarity
//! - otherwise: cost = 75 * round(base_value * multiplier)
//!
//! Common items cap only above their threshold, every other rarity caps
//! at the threshold already.

use crate::config::UnbindConstants;
use crate::error::CalcError;
use crate::types::{validate_level, Rarity, MAX_ITEM_LEVEL};
use serde::{Deserialize, Serialize};

/// Unbind cost with the values it was derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnbindCost {
    pub level: u32,
    pub rarity: Rarity,
    pub base_value: f64,
    pub multiplier: f64,
    pub total_cost: u64,
    pub is_capped: bool,
}

impl UnbindConstants {
    /// Level-dependent base value, before the rarity multiplier
    pub fn base_value_for(&self, level: u32) -> f64 {
        self.base_value + self.per_level * level as f64
    }

    /// Calculate the unbind cost of an item
    pub fn calculate(&self, level: u32, rarity: Rarity) -> Result<UnbindCost, CalcError> {
        validate_level(level, MAX_ITEM_LEVEL)?;
        let table = self
            .rarity(rarity)
            .ok_or(CalcError::UnsupportedRarity {
                rarity,
                calculator: "unbind",
            })?;

        let base_value = self.base_value_for(level);
        let is_capped = table.is_capped(base_value);

        let total_cost = if is_capped {
            log::debug!("unbind {} lvl {} capped at {}", rarity, level, table.max_cost);
            table.max_cost
        } else {
            (self.cost_per_point * (base_value * table.multiplier).round()) as u64
        };

        Ok(UnbindCost {
            level,
            rarity,
            base_value,
            multiplier: table.multiplier,
            total_cost,
            is_capped,
        })
    }
}

/// Calculate the unbind cost with the default balance table
pub fn calculate_unbind_cost(level: u32, rarity: Rarity) -> Result<UnbindCost, CalcError> {
    UnbindConstants::default().calculate(level, rarity)
}

/// Calculate the unbind cost with a supplied balance table
pub fn calculate_unbind_cost_with(
    constants: &UnbindConstants,
    level: u32,
    rarity: Rarity,
) -> Result<UnbindCost, CalcError> {
    constants.calculate(level, rarity)
}
