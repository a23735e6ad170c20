//! Era and direction value objects

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::{InvalidDirectionError, InvalidEraError};

/// All available eras
pub const ALL_ERAS: &[Era] = &[Era::Modern, Era::Legacy2016];

/// All available directions
pub const ALL_DIRECTIONS: &[Direction] = &[Direction::ToSlang, Direction::ToNormal];

/// Slang era selecting vocabulary, tone, and vibe labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Era {
    #[default]
    #[serde(rename = "modern")]
    Modern,
    #[serde(rename = "2016", alias = "legacy2016")]
    Legacy2016,
}

impl Era {
    /// Get the human-readable label for this era
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Modern => "MODERN (2024+ Brain Rot / Hyper-Authentic Gen Z)",
            Self::Legacy2016 => "2016 (The \"Lit\" Era)",
        }
    }

    /// Get the string identifier for this era
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Legacy2016 => "2016",
        }
    }
}

impl FromStr for Era {
    type Err = InvalidEraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "modern" => Ok(Self::Modern),
            "2016" | "legacy" | "legacy2016" => Ok(Self::Legacy2016),
            _ => Err(InvalidEraError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transformation polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Formal text to era slang
    #[default]
    #[serde(rename = "to-slang")]
    ToSlang,
    /// Era slang back to plain, formal text
    #[serde(rename = "to-normal")]
    ToNormal,
}

impl Direction {
    /// Get the string identifier for this direction
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ToSlang => "to-slang",
            Self::ToNormal => "to-normal",
        }
    }
}

impl FromStr for Direction {
    type Err = InvalidDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "to-slang" | "slang" => Ok(Self::ToSlang),
            "to-normal" | "normal" => Ok(Self::ToNormal),
            _ => Err(InvalidDirectionError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_eras() {
        assert_eq!("modern".parse::<Era>().unwrap(), Era::Modern);
        assert_eq!("2016".parse::<Era>().unwrap(), Era::Legacy2016);
        assert_eq!("legacy".parse::<Era>().unwrap(), Era::Legacy2016);
        assert_eq!("  MODERN ".parse::<Era>().unwrap(), Era::Modern);
    }

    #[test]
    fn parse_invalid_era() {
        assert!("2012".parse::<Era>().is_err());
        assert!("".parse::<Era>().is_err());
    }

    #[test]
    fn parse_directions() {
        assert_eq!("to-slang".parse::<Direction>().unwrap(), Direction::ToSlang);
        assert_eq!("Normal".parse::<Direction>().unwrap(), Direction::ToNormal);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for era in ALL_ERAS {
            assert_eq!(era.to_string().parse::<Era>().unwrap(), *era);
        }
        for direction in ALL_DIRECTIONS {
            assert_eq!(
                direction.to_string().parse::<Direction>().unwrap(),
                *direction
            );
        }
    }

    #[test]
    fn serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Era::Legacy2016).unwrap(), "\"2016\"");
        assert_eq!(
            serde_json::to_string(&Direction::ToNormal).unwrap(),
            "\"to-normal\""
        );
        let era: Era = serde_json::from_str("\"legacy2016\"").unwrap();
        assert_eq!(era, Era::Legacy2016);
    }

    #[test]
    fn defaults() {
        assert_eq!(Era::default(), Era::Modern);
        assert_eq!(Direction::default(), Direction::ToSlang);
    }
}
