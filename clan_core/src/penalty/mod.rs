//! Penalty points - level-gap checks for 1v1 and group fights

mod duel;
mod group;

pub use duel::{
    assess_duel, assess_duel_with, max_attacker_level_without_penalty, min_level_difference,
    min_victim_level_for_penalty, would_receive_penalty, DuelPenalty,
};
pub use group::{assess_group, assess_group_with, GroupPenalty};
