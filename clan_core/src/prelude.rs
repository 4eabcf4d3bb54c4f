//! Prelude module for convenient imports
//!
//! ```rust
//! use clan_core::prelude::*;
//! ```

// Core types
pub use crate::error::CalcError;
pub use crate::types::{Rarity, Side};

// Calculators
pub use crate::item::{calculate_unbind_cost, calculate_upgrade_cost, UnbindCost, UpgradeCost};
pub use crate::penalty::{assess_duel, assess_group, DuelPenalty, GroupPenalty};

// Config
pub use crate::config::{default_balance, BalanceConfig};
