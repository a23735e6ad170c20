//! Translation record entity

use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::vibe::{Direction, Era, VibeResult, VibeStats};

/// Characters used for generated ids (base 36, uppercase)
const ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of generated ids
pub const ID_LENGTH: usize = 6;

/// Short opaque identifier used as a display/list key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationId(String);

impl TranslationId {
    /// Generate a random id
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let id = (0..ID_LENGTH)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against user input
    pub fn matches(&self, input: &str) -> bool {
        self.0.eq_ignore_ascii_case(input.trim())
    }
}

impl From<&str> for TranslationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for TranslationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A completed transform. Created once when a transform succeeds and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    id: TranslationId,
    original_text: String,
    translated_text: String,
    timestamp: DateTime<Utc>,
    vibe_stats: VibeStats,
    era: Era,
    #[serde(default)]
    direction: Direction,
}

impl Translation {
    /// Record a successful transform, stamping a fresh id and the current time
    pub fn record(
        original_text: impl Into<String>,
        result: VibeResult,
        era: Era,
        direction: Direction,
    ) -> Self {
        Self {
            id: TranslationId::generate(),
            original_text: original_text.into(),
            translated_text: result.translated_text,
            timestamp: Utc::now(),
            vibe_stats: result.stats,
            era,
            direction,
        }
    }

    /// Rebuild a record from all of its parts
    pub fn from_parts(
        id: TranslationId,
        original_text: String,
        translated_text: String,
        timestamp: DateTime<Utc>,
        vibe_stats: VibeStats,
        era: Era,
        direction: Direction,
    ) -> Self {
        Self {
            id,
            original_text,
            translated_text,
            timestamp,
            vibe_stats,
            era,
            direction,
        }
    }

    pub fn id(&self) -> &TranslationId {
        &self.id
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn vibe_stats(&self) -> &VibeStats {
        &self.vibe_stats
    }

    pub fn era(&self) -> Era {
        self.era
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> VibeResult {
        VibeResult {
            translated_text: "week was gas fr".to_string(),
            stats: VibeStats::new(80, 70, 90, 60).unwrap(),
        }
    }

    #[test]
    fn generated_ids_are_short_base36() {
        let id = TranslationId::generate();
        assert_eq!(id.as_str().len(), ID_LENGTH);
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn id_matches_case_insensitive() {
        let id = TranslationId::from("AB12CD");
        assert!(id.matches("ab12cd"));
        assert!(id.matches(" AB12CD "));
        assert!(!id.matches("AB12C"));
    }

    #[test]
    fn record_copies_result() {
        let t = Translation::record(
            "I had a great week",
            result(),
            Era::Modern,
            Direction::ToSlang,
        );
        assert_eq!(t.original_text(), "I had a great week");
        assert_eq!(t.translated_text(), "week was gas fr");
        assert_eq!(t.vibe_stats().values(), [80, 70, 90, 60]);
        assert_eq!(t.era(), Era::Modern);
        assert_eq!(t.direction(), Direction::ToSlang);
    }

    #[test]
    fn serializes_camel_case() {
        let t = Translation::record("hi", result(), Era::Legacy2016, Direction::ToNormal);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["originalText"], "hi");
        assert_eq!(json["translatedText"], "week was gas fr");
        assert_eq!(json["vibeStats"]["tertiary"], 90);
        assert_eq!(json["era"], "2016");
        assert_eq!(json["direction"], "to-normal");
        assert_eq!(json["id"], t.id().as_str());
    }

    #[test]
    fn missing_direction_defaults_to_slang() {
        let json = r#"{"id":"ABC123","originalText":"hi","translatedText":"yo","timestamp":"2024-05-01T12:30:00Z","vibeStats":{"primary":1,"secondary":2,"tertiary":3,"quaternary":4},"era":"2016"}"#;
        let t: Translation = serde_json::from_str(json).unwrap();
        assert_eq!(t.direction(), Direction::ToSlang);
        assert_eq!(t.era(), Era::Legacy2016);
    }
}
