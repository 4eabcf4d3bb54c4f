//! 1v1 penalty - Defeating a much lower level character
//!
//! The attacker receives a penalty point when the level gap reaches a
//! threshold that grows with the attacker's level.
//!
//! Formula: min_difference = 16 + max(0, (attacker - 100) / 5)
//!
//! Examples:
//! - Level 80 attacker: gap of 16 needed
//! - Level 120 attacker: gap of 20 needed
//! - Level 200 attacker: gap of 36 needed

use crate::config::PenaltyConstants;
use crate::error::CalcError;
use crate::types::{validate_level, MAX_CHARACTER_LEVEL};
use serde::{Deserialize, Serialize};

/// Everything the 1v1 calculator knows about an attacker/victim pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuelPenalty {
    pub attacker_level: u32,
    pub victim_level: u32,
    /// attacker - victim, negative when the victim is higher
    pub level_difference: i64,
    /// Gap the attacker's level requires for a penalty
    pub min_difference: f64,
    pub penalty: bool,
    /// Victim level at or below which this attacker is penalised (may be < 1)
    pub min_victim_level: i64,
    /// Highest attacker level that can still defeat this victim safely
    pub max_attacker_level: u32,
}

impl PenaltyConstants {
    /// Required level gap for an attacker level (not rounded)
    pub fn min_level_difference(&self, attacker_level: u32) -> f64 {
        let scaled = (attacker_level as f64 - self.level_offset) / self.level_divisor;
        self.base_min_difference + scaled.max(0.0)
    }

    fn triggers(&self, attacker_level: u32, victim_level: u32) -> bool {
        let difference = attacker_level as f64 - victim_level as f64;
        difference >= self.min_level_difference(attacker_level)
    }

    /// Check whether defeating `victim_level` gives `attacker_level` a penalty
    pub fn would_receive_penalty(
        &self,
        attacker_level: u32,
        victim_level: u32,
    ) -> Result<bool, CalcError> {
        validate_level(attacker_level, MAX_CHARACTER_LEVEL)?;
        validate_level(victim_level, MAX_CHARACTER_LEVEL)?;
        Ok(self.triggers(attacker_level, victim_level))
    }

    /// `ceil(attacker - min_difference)`
    pub fn min_victim_level_for_penalty(&self, attacker_level: u32) -> Result<i64, CalcError> {
        validate_level(attacker_level, MAX_CHARACTER_LEVEL)?;
        let level = attacker_level as f64 - self.min_level_difference(attacker_level);
        Ok(level.ceil() as i64)
    }

    /// Scan attacker levels upward from the victim's level and return the
    /// last one that does not trigger a penalty.
    ///
    /// The scan stops at `max_scan_level`, so the answer never exceeds it
    /// unless the victim is already above it.
    pub fn max_attacker_level_without_penalty(&self, victim_level: u32) -> Result<u32, CalcError> {
        validate_level(victim_level, MAX_CHARACTER_LEVEL)?;

        let mut safe_level = victim_level;
        for level in victim_level..=self.max_scan_level {
            if self.triggers(level, victim_level) {
                break;
            }
            safe_level = level;
        }
        Ok(safe_level)
    }
}

/// Required level gap using the default balance table
pub fn min_level_difference(attacker_level: u32) -> f64 {
    PenaltyConstants::default().min_level_difference(attacker_level)
}

/// See [`PenaltyConstants::would_receive_penalty`]
pub fn would_receive_penalty(attacker_level: u32, victim_level: u32) -> Result<bool, CalcError> {
    PenaltyConstants::default().would_receive_penalty(attacker_level, victim_level)
}

/// See [`PenaltyConstants::min_victim_level_for_penalty`]
pub fn min_victim_level_for_penalty(attacker_level: u32) -> Result<i64, CalcError> {
    PenaltyConstants::default().min_victim_level_for_penalty(attacker_level)
}

/// See [`PenaltyConstants::max_attacker_level_without_penalty`]
pub fn max_attacker_level_without_penalty(victim_level: u32) -> Result<u32, CalcError> {
    PenaltyConstants::default().max_attacker_level_without_penalty(victim_level)
}

/// Run the full 1v1 calculation with the default balance table
pub fn assess_duel(attacker_level: u32, victim_level: u32) -> Result<DuelPenalty, CalcError> {
    assess_duel_with(&PenaltyConstants::default(), attacker_level, victim_level)
}

/// Run the full 1v1 calculation
pub fn assess_duel_with(
    constants: &PenaltyConstants,
    attacker_level: u32,
    victim_level: u32,
) -> Result<DuelPenalty, CalcError> {
    let penalty = constants.would_receive_penalty(attacker_level, victim_level)?;
    let result = DuelPenalty {
        attacker_level,
        victim_level,
        level_difference: attacker_level as i64 - victim_level as i64,
        min_difference: constants.min_level_difference(attacker_level),
        penalty,
        min_victim_level: constants.min_victim_level_for_penalty(attacker_level)?,
        max_attacker_level: constants.max_attacker_level_without_penalty(victim_level)?,
    };

    log::debug!(
        "1v1 {} vs {}: gap {} / needed {:.1} -> penalty {}",
        attacker_level,
        victim_level,
        result.level_difference,
        result.min_difference,
        penalty
    );

    Ok(result)
}
