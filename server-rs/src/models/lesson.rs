use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A row of `lesson_slot_batches`, carried through field for field.
///
/// Only `created_at` is known to exist; everything else belongs to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonSlotBatch(Map<String, Value>);

impl LessonSlotBatch {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        self.0
            .get("created_at")
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    }
}

#[derive(Debug, Serialize)]
pub struct LessonSlotBatchesResponse {
    pub batches: Vec<LessonSlotBatch>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleWindowResponse {
    pub from: String,
    pub to: String,
    pub from_label: String,
    pub to_label: String,
}
