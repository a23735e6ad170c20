//! Vibe statistics value object

use serde::{Deserialize, Serialize};

use crate::domain::error::StatsError;

/// Highest accepted vibe score
pub const MAX_STAT: i64 = 100;

/// Slot names in their fixed order
pub const SLOT_NAMES: [&str; 4] = ["primary", "secondary", "tertiary", "quaternary"];

/// Display label and response-schema key for one stat slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatLabel {
    /// Label shown to the user (e.g. "Brain Rot")
    pub label: &'static str,
    /// Key the model must use in the structured response (e.g. "brainRot")
    pub key: &'static str,
}

/// Era-specific labels for the four stat slots, in slot order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatLabels(pub [StatLabel; 4]);

impl StatLabels {
    /// Schema keys in slot order
    pub fn keys(&self) -> [&'static str; 4] {
        self.0.map(|s| s.key)
    }

    /// Display labels in slot order
    pub fn labels(&self) -> [&'static str; 4] {
        self.0.map(|s| s.label)
    }
}

#[derive(Deserialize)]
struct RawVibeStats {
    primary: i64,
    secondary: i64,
    tertiary: i64,
    quaternary: i64,
}

impl TryFrom<RawVibeStats> for VibeStats {
    type Error = StatsError;

    fn try_from(raw: RawVibeStats) -> Result<Self, Self::Error> {
        Self::from_values([raw.primary, raw.secondary, raw.tertiary, raw.quaternary])
    }
}

/// Four vibe scores in fixed slot order, each within 0..=100.
///
/// Values are never clamped: anything outside the range is rejected
/// at construction, including when deserializing persisted history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawVibeStats")]
pub struct VibeStats {
    primary: u8,
    secondary: u8,
    tertiary: u8,
    quaternary: u8,
}

impl VibeStats {
    /// Create stats from four scores in slot order
    pub fn new(
        primary: i64,
        secondary: i64,
        tertiary: i64,
        quaternary: i64,
    ) -> Result<Self, StatsError> {
        Self::from_values([primary, secondary, tertiary, quaternary])
    }

    /// Create stats from an array of scores, naming offending slots by `SLOT_NAMES`
    pub fn from_values(values: [i64; 4]) -> Result<Self, StatsError> {
        Self::from_keyed(values, SLOT_NAMES)
    }

    /// Create stats, reporting range errors against the given slot keys
    pub(crate) fn from_keyed(
        values: [i64; 4],
        keys: [&'static str; 4],
    ) -> Result<Self, StatsError> {
        let mut checked = [0u8; 4];
        for (i, value) in values.into_iter().enumerate() {
            if !(0..=MAX_STAT).contains(&value) {
                return Err(StatsError {
                    slot: keys[i],
                    value,
                });
            }
            checked[i] = value as u8;
        }
        Ok(Self {
            primary: checked[0],
            secondary: checked[1],
            tertiary: checked[2],
            quaternary: checked[3],
        })
    }

    pub fn primary(&self) -> u8 {
        self.primary
    }

    pub fn secondary(&self) -> u8 {
        self.secondary
    }

    pub fn tertiary(&self) -> u8 {
        self.tertiary
    }

    pub fn quaternary(&self) -> u8 {
        self.quaternary
    }

    /// All scores in slot order
    pub fn values(&self) -> [u8; 4] {
        [self.primary, self.secondary, self.tertiary, self.quaternary]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        let stats = VibeStats::new(0, 100, 50, 1).unwrap();
        assert_eq!(stats.values(), [0, 100, 50, 1]);
    }

    #[test]
    fn rejects_above_range() {
        let err = VibeStats::new(80, 101, 90, 60).unwrap_err();
        assert_eq!(err.slot, "secondary");
        assert_eq!(err.value, 101);
    }

    #[test]
    fn rejects_negative() {
        let err = VibeStats::new(80, 70, 90, -5).unwrap_err();
        assert_eq!(err.slot, "quaternary");
    }

    #[test]
    fn keyed_errors_use_given_keys() {
        let err = VibeStats::from_keyed([1, 2, 300, 4], ["rizz", "aura", "brainRot", "drip"])
            .unwrap_err();
        assert_eq!(err.slot, "brainRot");
    }

    #[test]
    fn serializes_by_slot_name() {
        let stats = VibeStats::new(80, 70, 90, 60).unwrap();
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["primary"], 80);
        assert_eq!(json["quaternary"], 60);
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        let json = r#"{"primary":80,"secondary":70,"tertiary":900,"quaternary":60}"#;
        assert!(serde_json::from_str::<VibeStats>(json).is_err());
    }

    #[test]
    fn deserialize_rejects_missing_slot() {
        let json = r#"{"primary":80,"secondary":70,"tertiary":90}"#;
        assert!(serde_json::from_str::<VibeStats>(json).is_err());
    }
}
