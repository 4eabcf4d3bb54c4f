//! Item costs - Unbinding and upgrading

mod unbind;
mod upgrade;

pub use unbind::{calculate_unbind_cost, calculate_unbind_cost_with, UnbindCost};
pub use upgrade::{
    calculate_upgrade_cost, calculate_upgrade_cost_with, clamp_upgrade_level, UpgradeCost,
    UPGRADE_TIERS,
};
