//! Structured transform result and its response contract

use serde::Serialize;
use serde_json::{json, Map, Value};

use super::stats::{StatLabels, VibeStats, MAX_STAT};
use crate::domain::error::ResponseShapeError;

const TEXT_FIELD: &str = "translatedText";
const STATS_FIELD: &str = "stats";

/// Validated output of a style transform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VibeResult {
    pub translated_text: String,
    pub stats: VibeStats,
}

impl VibeResult {
    /// Parse and validate a raw JSON response body.
    ///
    /// The four stats are read by the era's schema keys and stored in slot
    /// order. Every key must be present, an integer, and within 0..=100.
    pub fn parse(raw: &str, labels: &StatLabels) -> Result<Self, ResponseShapeError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| ResponseShapeError::NotJson(e.to_string()))?;
        let object = value.as_object().ok_or(ResponseShapeError::NotAnObject)?;

        let translated_text = match object.get(TEXT_FIELD) {
            None => return Err(ResponseShapeError::MissingField(TEXT_FIELD.to_string())),
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                return Err(ResponseShapeError::WrongType {
                    field: TEXT_FIELD.to_string(),
                    expected: "string",
                })
            }
        };
        if translated_text.trim().is_empty() {
            return Err(ResponseShapeError::EmptyText);
        }

        let stats = match object.get(STATS_FIELD) {
            None => return Err(ResponseShapeError::MissingField(STATS_FIELD.to_string())),
            Some(Value::Object(map)) => map,
            Some(_) => {
                return Err(ResponseShapeError::WrongType {
                    field: STATS_FIELD.to_string(),
                    expected: "object",
                })
            }
        };

        let keys = labels.keys();
        let mut values = [0i64; 4];
        for (slot, key) in keys.iter().enumerate() {
            values[slot] = read_integer(stats, key)?;
        }
        let stats = VibeStats::from_keyed(values, keys)?;

        Ok(Self {
            translated_text,
            stats,
        })
    }
}

fn read_integer(stats: &Map<String, Value>, key: &str) -> Result<i64, ResponseShapeError> {
    let field = format!("{}.{}", STATS_FIELD, key);
    match stats.get(key) {
        None => Err(ResponseShapeError::MissingField(field)),
        Some(Value::Number(n)) => n.as_i64().ok_or(ResponseShapeError::WrongType {
            field,
            expected: "integer",
        }),
        Some(_) => Err(ResponseShapeError::WrongType {
            field,
            expected: "integer",
        }),
    }
}

/// Response schema sent with the request, in the API's OpenAPI subset
pub fn response_schema(labels: &StatLabels) -> Value {
    let mut stat_properties = Map::new();
    for key in labels.keys() {
        stat_properties.insert(
            key.to_string(),
            json!({ "type": "INTEGER", "minimum": 0, "maximum": MAX_STAT }),
        );
    }

    json!({
        "type": "OBJECT",
        "properties": {
            TEXT_FIELD: { "type": "STRING" },
            STATS_FIELD: {
                "type": "OBJECT",
                "properties": stat_properties,
                "required": labels.keys(),
            },
        },
        "required": [TEXT_FIELD, STATS_FIELD],
    })
}
