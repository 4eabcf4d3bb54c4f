//! Calculator errors

use crate::types::{Rarity, Side};
use thiserror::Error;

/// Error returned when calculator input is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("level {level} is out of range, expected {min}-{max}")]
    LevelOutOfRange { level: u32, min: u32, max: u32 },
    #[error("provide at least one {side} level")]
    EmptyLevels { side: Side },
    #[error("unknown item rarity: {0:?}")]
    UnknownRarity(String),
    #[error("{rarity} rarity is not supported by the {calculator} calculator")]
    UnsupportedRarity {
        rarity: Rarity,
        calculator: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = CalcError::LevelOutOfRange {
            level: 0,
            min: 1,
            max: 300,
        };
        assert_eq!(err.to_string(), "level 0 is out of range, expected 1-300");

        let err = CalcError::EmptyLevels {
            side: Side::Defender,
        };
        assert_eq!(err.to_string(), "provide at least one defender level");

        let err = CalcError::UnknownRarity("mythic".to_string());
        assert_eq!(err.to_string(), "unknown item rarity: \"mythic\"");

        let err = CalcError::UnsupportedRarity {
            rarity: Rarity::Upgraded,
            calculator: "unbind",
        };
        assert_eq!(
            err.to_string(),
            "upgraded rarity is not supported by the unbind calculator"
        );
    }
}
