//! Configuration loading from TOML files

mod balance;

pub use balance::{
    BalanceConfig, PenaltyConstants, UnbindConstants, UnbindRarity, UpgradeConstants,
    UpgradeRarity,
};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate a balance table from a TOML file
pub fn load_balance_config(path: &Path) -> Result<BalanceConfig, ConfigError> {
    let config: BalanceConfig = load_toml(path)?;
    config.validate()?;
    log::info!("Loaded balance config from {}", path.display());
    Ok(config)
}

/// Parse and validate a balance table from a TOML string
pub fn parse_balance_config(content: &str) -> Result<BalanceConfig, ConfigError> {
    let config: BalanceConfig = parse_toml(content)?;
    config.validate()?;
    Ok(config)
}

/// Get the balance table shipped with the crate
pub fn default_balance() -> BalanceConfig {
    let toml = include_str!("../../config/balance.toml");
    parse_balance_config(toml).unwrap_or_else(|e| {
        log::warn!("Embedded balance table is invalid ({}), using built-in constants", e);
        BalanceConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rarity;

    #[test]
    fn test_default_balance_matches_builtin() {
        let shipped = default_balance();
        let builtin = BalanceConfig::default();
        assert_eq!(shipped, builtin);
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        let result = parse_balance_config("[penalty\nbase_min_difference = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        let toml = r#"
[penalty]
level_divisor = 0.0
"#;
        let result = parse_balance_config(toml);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_parse_rejects_nan_divisor() {
        let toml = r#"
[penalty]
level_divisor = nan
"#;
        let result = parse_balance_config(toml);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_balance_config(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
[unbind.legendary]
multiplier = 4.0
cap_threshold = 35.0
max_cost = 9000
cap_inclusive = true
"#;
        let config = parse_balance_config(toml).unwrap();
        let legendary = config.unbind.rarity(Rarity::Legendary).unwrap();
        assert_eq!(legendary.max_cost, 9000);
        // Untouched sections keep their defaults
        let common = config.unbind.rarity(Rarity::Common).unwrap();
        assert_eq!(common.max_cost, 1500);
        assert!((config.penalty.base_min_difference - 16.0).abs() < f64::EPSILON);
    }
}
