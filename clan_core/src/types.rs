//! Core types shared by the calculators

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest level any calculator accepts
pub const MIN_LEVEL: u32 = 1;

/// Highest character level accepted by the penalty calculators
pub const MAX_CHARACTER_LEVEL: u32 = 500;

/// Highest item level accepted by the item calculators
pub const MAX_ITEM_LEVEL: u32 = 300;

/// Item/hero quality tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Unique,
    Heroic,
    /// Only meaningful for upgrade costs
    Upgraded,
    Legendary,
}

impl Rarity {
    /// Get all rarities, in ascending order
    pub fn all() -> &'static [Rarity] {
        &[
            Rarity::Common,
            Rarity::Unique,
            Rarity::Heroic,
            Rarity::Upgraded,
            Rarity::Legendary,
        ]
    }

    /// Lowercase identifier, as used in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Unique => "unique",
            Rarity::Heroic => "heroic",
            Rarity::Upgraded => "upgraded",
            Rarity::Legendary => "legendary",
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Unique => "Unique",
            Rarity::Heroic => "Heroic",
            Rarity::Upgraded => "Upgraded",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Next rarity in `all()`, wrapping around
    pub fn next(&self) -> Rarity {
        let all = Rarity::all();
        let idx = all.iter().position(|r| r == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Previous rarity in `all()`, wrapping around
    pub fn prev(&self) -> Rarity {
        let all = Rarity::all();
        let idx = all.iter().position(|r| r == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Rarity::all()
            .iter()
            .copied()
            .find(|r| r.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CalcError::UnknownRarity(s.to_string()))
    }
}

/// Which side of a group fight a level list belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Attacker,
    Defender,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Attacker => f.write_str("attacker"),
            Side::Defender => f.write_str("defender"),
        }
    }
}

/// Reject a level outside `[MIN_LEVEL, max]`
pub fn validate_level(level: u32, max: u32) -> Result<u32, CalcError> {
    if (MIN_LEVEL..=max).contains(&level) {
        Ok(level)
    } else {
        Err(CalcError::LevelOutOfRange {
            level,
            min: MIN_LEVEL,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rarity() {
        assert_eq!("common".parse::<Rarity>(), Ok(Rarity::Common));
        assert_eq!("Legendary".parse::<Rarity>(), Ok(Rarity::Legendary));
        assert_eq!(" heroic ".parse::<Rarity>(), Ok(Rarity::Heroic));
        assert_eq!(
            "mythic".parse::<Rarity>(),
            Err(CalcError::UnknownRarity("mythic".to_string()))
        );
    }

    #[test]
    fn test_rarity_display_roundtrip() {
        for rarity in Rarity::all() {
            assert_eq!(rarity.to_string().parse::<Rarity>(), Ok(*rarity));
        }
    }

    #[test]
    fn test_rarity_cycle() {
        assert_eq!(Rarity::Common.next(), Rarity::Unique);
        assert_eq!(Rarity::Legendary.next(), Rarity::Common);
        assert_eq!(Rarity::Common.prev(), Rarity::Legendary);
        assert_eq!(Rarity::Upgraded.prev(), Rarity::Heroic);
    }

    #[test]
    fn test_rarity_serde() {
        let json = serde_json::to_string(&Rarity::Heroic).unwrap();
        assert_eq!(json, "\"heroic\"");
        let rarity: Rarity = serde_json::from_str("\"upgraded\"").unwrap();
        assert_eq!(rarity, Rarity::Upgraded);
    }

    #[test]
    fn test_validate_level() {
        assert_eq!(validate_level(1, 300), Ok(1));
        assert_eq!(validate_level(300, 300), Ok(300));
        assert_eq!(
            validate_level(0, 300),
            Err(CalcError::LevelOutOfRange {
                level: 0,
                min: 1,
                max: 300,
            })
        );
        assert!(validate_level(301, 300).is_err());
        assert!(validate_level(500, MAX_CHARACTER_LEVEL).is_ok());
    }
}
