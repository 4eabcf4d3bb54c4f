//! Group penalty - Several attackers against several defenders
//!
//! Formula:
//! - strength = max(attackers) + avg(attackers)
//! - difference = 0.5 * strength - avg(defenders)
//! - threshold = 15 + max(0, 0.1 * strength - 20)
//! - penalty when difference > threshold

use crate::config::PenaltyConstants;
use crate::error::CalcError;
use crate::types::{validate_level, Side, MAX_CHARACTER_LEVEL};
use serde::{Deserialize, Serialize};

/// Group calculation with every intermediate value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupPenalty {
    pub attacker_count: usize,
    pub defender_count: usize,
    pub max_attacker_level: u32,
    pub avg_attacker_level: f64,
    pub avg_defender_level: f64,
    pub attacker_strength: f64,
    pub difference: f64,
    pub threshold: f64,
    pub penalty: bool,
}

fn validate_side(levels: &[u32], side: Side) -> Result<(), CalcError> {
    if levels.is_empty() {
        return Err(CalcError::EmptyLevels { side });
    }
    for level in levels {
        validate_level(*level, MAX_CHARACTER_LEVEL)?;
    }
    Ok(())
}

fn average(levels: &[u32]) -> f64 {
    let total: u64 = levels.iter().map(|l| *l as u64).sum();
    total as f64 / levels.len() as f64
}

impl PenaltyConstants {
    /// Group threshold for a given attacker strength
    pub fn group_threshold(&self, attacker_strength: f64) -> f64 {
        let scaled = self.group_strength_factor * attacker_strength - self.group_strength_offset;
        self.group_base_threshold + scaled.max(0.0)
    }

    /// Run the group calculation
    pub fn assess_group(
        &self,
        attacker_levels: &[u32],
        defender_levels: &[u32],
    ) -> Result<GroupPenalty, CalcError> {
        validate_side(attacker_levels, Side::Attacker)?;
        validate_side(defender_levels, Side::Defender)?;

        let max_attacker_level = attacker_levels.iter().copied().max().unwrap_or_default();
        let avg_attacker_level = average(attacker_levels);
        let avg_defender_level = average(defender_levels);

        let attacker_strength = max_attacker_level as f64 + avg_attacker_level;
        let difference = self.group_difference_factor * attacker_strength - avg_defender_level;
        let threshold = self.group_threshold(attacker_strength);
        let penalty = difference > threshold;

        log::debug!(
            "group {}v{}: difference {:.2} / threshold {:.2} -> penalty {}",
            attacker_levels.len(),
            defender_levels.len(),
            difference,
            threshold,
            penalty
        );

        Ok(GroupPenalty {
            attacker_count: attacker_levels.len(),
            defender_count: defender_levels.len(),
            max_attacker_level,
            avg_attacker_level,
            avg_defender_level,
            attacker_strength,
            difference,
            threshold,
            penalty,
        })
    }
}

/// Run the group calculation with the default balance table
pub fn assess_group(
    attacker_levels: &[u32],
    defender_levels: &[u32],
) -> Result<GroupPenalty, CalcError> {
    PenaltyConstants::default().assess_group(attacker_levels, defender_levels)
}

/// Run the group calculation with a supplied balance table
pub fn assess_group_with(
    constants: &PenaltyConstants,
    attacker_levels: &[u32],
    defender_levels: &[u32],
) -> Result<GroupPenalty, CalcError> {
    constants.assess_group(attacker_levels, defender_levels)
}
