//! Formula captions built from the active balance table

use clan_core::config::{PenaltyConstants, UnbindConstants, UpgradeConstants};
use clan_core::Rarity;

pub fn duel_required(p: &PenaltyConstants) -> String {
    format!(
        "Required difference = {} + max(0, (attacker - {}) / {})",
        p.base_min_difference, p.level_offset, p.level_divisor
    )
}

pub fn duel_scan(p: &PenaltyConstants) -> String {
    format!("Safe attacker level is searched up to level {}", p.max_scan_level)
}

pub fn group_difference(p: &PenaltyConstants) -> String {
    format!(
        "Difference = {} * strength - avg defender",
        p.group_difference_factor
    )
}

pub fn group_threshold(p: &PenaltyConstants) -> String {
    format!(
        "Threshold  = {} + max(0, {} * strength - {})",
        p.group_base_threshold, p.group_strength_factor, p.group_strength_offset
    )
}

pub fn unbind_base(u: &UnbindConstants) -> String {
    format!("Base value = {} + {} * level", u.base_value, u.per_level)
}

pub fn unbind_cost(u: &UnbindConstants) -> String {
    format!(
        "Cost       = {} * round(base value * multiplier), up to the cap",
        u.cost_per_point
    )
}

/// One entry per unbindable rarity, e.g. "Common above 20"
pub fn unbind_caps(u: &UnbindConstants) -> String {
    let caps: Vec<String> = Rarity::all()
        .iter()
        .filter_map(|r| u.rarity(*r).map(|t| (r, t)))
        .map(|(r, t)| {
            let rule = if t.cap_inclusive { "at" } else { "above" };
            format!("{} {} {} ({})", r.name(), rule, t.cap_threshold, t.max_cost)
        })
        .collect();
    format!("Caps: {}", caps.join(", "))
}

pub fn upgrade_tiers(u: &UpgradeConstants) -> String {
    let factors: Vec<String> = u.level_factors.iter().map(|f| format!("{:.1}", f)).collect();
    format!("Tier factors {} for +1 .. +5", factors.join(" / "))
}

pub fn upgrade_upgraded(u: &UpgradeConstants) -> String {
    format!(
        "Upgraded items: factor * ({} * level + {})",
        u.upgraded_per_level, u.upgraded_base
    )
}

pub fn upgrade_others(u: &UpgradeConstants) -> String {
    format!("Others: rarity factor * factor * ({} + level)", u.level_offset)
}

pub fn upgrade_extraction(u: &UpgradeConstants) -> String {
    format!(
        "Normal extraction = {} * the +5 cost",
        u.normal_extraction_ratio
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clan_core::config::parse_balance_config;
    use clan_core::BalanceConfig;

    #[test]
    fn test_default_captions() {
        let config = BalanceConfig::default();
        assert_eq!(
            duel_required(&config.penalty),
            "Required difference = 16 + max(0, (attacker - 100) / 5)"
        );
        assert_eq!(
            group_threshold(&config.penalty),
            "Threshold  = 15 + max(0, 0.1 * strength - 20)"
        );
        assert_eq!(unbind_base(&config.unbind), "Base value = 10 + 0.1 * level");
        assert_eq!(
            unbind_caps(&config.unbind),
            "Caps: Common above 20 (1500), Unique at 20 (1800), \
             Heroic at 30 (3375), Legendary at 30 (6750)"
        );
        assert_eq!(
            upgrade_tiers(&config.upgrade),
            "Tier factors 1.0 / 2.1 / 3.4 / 5.0 / 7.0 for +1 .. +5"
        );
        assert_eq!(
            upgrade_extraction(&config.upgrade),
            "Normal extraction = 0.75 * the +5 cost"
        );
    }

    #[test]
    fn test_captions_follow_overrides() {
        let config = parse_balance_config(
            r#"
[penalty]
base_min_difference = 10.0
level_divisor = 4.0
max_scan_level = 400
group_base_threshold = 12.0

[unbind]
cost_per_point = 90.0

[upgrade]
upgraded_base = 30000.0
normal_extraction_ratio = 0.5
"#,
        )
        .unwrap();

        assert_eq!(
            duel_required(&config.penalty),
            "Required difference = 10 + max(0, (attacker - 100) / 4)"
        );
        assert_eq!(
            duel_scan(&config.penalty),
            "Safe attacker level is searched up to level 400"
        );
        assert!(group_threshold(&config.penalty).starts_with("Threshold  = 12 + "));
        assert!(unbind_cost(&config.unbind).starts_with("Cost       = 90 * "));
        assert_eq!(
            upgrade_upgraded(&config.upgrade),
            "Upgraded items: factor * (150 * level + 30000)"
        );
        assert_eq!(
            upgrade_extraction(&config.upgrade),
            "Normal extraction = 0.5 * the +5 cost"
        );
    }
}
