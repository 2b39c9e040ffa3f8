use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One time slot's entry for one date. `value` absent means the slot is unset
/// for charting and aggregation even when medication or comments are present.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Reading {
    #[serde(default)]
    pub value: Option<i64>,
    #[serde(default)]
    pub medication: Vec<String>,
    #[serde(default)]
    pub comments: String,
}

/// Sparse slot-label → reading map for one calendar date. Saves replace the
/// whole map for a date; there is no per-slot merge.
pub type DailyRecord = BTreeMap<String, Reading>;

/// The persisted/export document. Field names match the document format
/// users already have on disk, so exports keep round-tripping.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(rename = "standardPattern", default)]
    pub standard_pattern: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub records: BTreeMap<String, DailyRecord>,
}

/// Derived chartable point for a single day; never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub slot: &'static str,
    pub value: i64,
    pub medication: Vec<String>,
    pub comments: String,
}

/// Per-slot summary over a date range. `stats` is `None` exactly when
/// `count == 0`; a slot whose readings are all zero still carries stats.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotAggregate {
    pub slot: &'static str,
    pub count: usize,
    #[serde(flatten)]
    pub stats: Option<SlotStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotStats {
    pub average: f64,
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Deserialize)]
pub struct MedicationsRequest {
    pub medications: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SyncRequest {
    pub api_key: String,
    pub bin_id: String,
}

#[derive(Debug, Serialize)]
pub struct SyncResponse {
    pub status: &'static str,
}
