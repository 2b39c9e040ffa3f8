use crate::errors::AppError;
use crate::models::{
    AppData, ChartPoint, DailyRecord, MedicationsRequest, RangeQuery, SlotAggregate, SyncRequest,
    SyncResponse,
};
use crate::remote;
use crate::series::derive_series;
use crate::slots::is_valid_slot;
use crate::state::AppState;
use crate::stats::aggregate_range;
use crate::storage::{parse_document, persist_data};
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::info;

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DailyRecord>, AppError> {
    let date = parse_date(&date)?;
    let data = state.data.lock().await;
    let record = data.records.get(&date.to_string()).cloned().unwrap_or_default();
    Ok(Json(record))
}

/// Replaces the whole record for one date. There is no per-slot merge: the
/// uploaded map becomes the day's record as-is.
pub async fn save_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(record): Json<DailyRecord>,
) -> Result<Json<DailyRecord>, AppError> {
    let date = parse_date(&date)?;
    validate_record(&record)?;

    let mut data = state.data.lock().await;
    data.records.insert(date.to_string(), record.clone());
    persist_data(&state.data_path, &data).await?;
    info!("saved record for {date}");

    Ok(Json(record))
}

pub async fn get_day_series(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<Vec<ChartPoint>>, AppError> {
    let date = parse_date(&date)?;
    let data = state.data.lock().await;
    let series = derive_series(data.records.get(&date.to_string()));
    Ok(Json(series))
}

pub async fn get_range(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<SlotAggregate>>, AppError> {
    let start = parse_date(&query.start)?;
    let end = parse_date(&query.end)?;

    let data = state.data.lock().await;
    Ok(Json(aggregate_range(&data.records, start, end)))
}

pub async fn get_medications(State(state): State<AppState>) -> Json<Vec<String>> {
    let data = state.data.lock().await;
    Json(data.medications.clone())
}

pub async fn put_medications(
    State(state): State<AppState>,
    Json(payload): Json<MedicationsRequest>,
) -> Result<Json<Vec<String>>, AppError> {
    let mut data = state.data.lock().await;
    data.medications = payload.medications;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(data.medications.clone()))
}

pub async fn get_pattern(State(state): State<AppState>) -> Json<BTreeMap<String, Vec<String>>> {
    let data = state.data.lock().await;
    Json(data.standard_pattern.clone())
}

pub async fn put_pattern(
    State(state): State<AppState>,
    Json(pattern): Json<BTreeMap<String, Vec<String>>>,
) -> Result<Json<BTreeMap<String, Vec<String>>>, AppError> {
    for slot in pattern.keys() {
        if !is_valid_slot(slot) {
            return Err(AppError::bad_request(format!("unknown time slot '{slot}'")));
        }
    }

    let mut data = state.data.lock().await;
    data.standard_pattern = pattern;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(data.standard_pattern.clone()))
}

pub async fn export_data(State(state): State<AppState>) -> Json<AppData> {
    let data = state.data.lock().await;
    Json(data.clone())
}

/// Replaces the whole document with an uploaded one. A document that fails to
/// parse is rejected outright; nothing is partially applied.
pub async fn import_data(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SyncResponse>, AppError> {
    let imported = parse_document(&body)
        .map_err(|err| AppError::bad_request(format!("invalid document: {err}")))?;

    let mut data = state.data.lock().await;
    *data = imported;
    persist_data(&state.data_path, &data).await?;
    info!("imported document with {} recorded days", data.records.len());

    Ok(Json(SyncResponse { status: "imported" }))
}

pub async fn sync_pull(
    State(state): State<AppState>,
    Json(payload): Json<SyncRequest>,
) -> Result<Json<SyncResponse>, AppError> {
    let fetched = remote::fetch_document(&payload.api_key, &payload.bin_id).await?;

    let mut data = state.data.lock().await;
    *data = fetched;
    persist_data(&state.data_path, &data).await?;
    info!("pulled document with {} recorded days", data.records.len());

    Ok(Json(SyncResponse { status: "pulled" }))
}

pub async fn sync_push(
    State(state): State<AppState>,
    Json(payload): Json<SyncRequest>,
) -> Result<Json<SyncResponse>, AppError> {
    let data = state.data.lock().await;
    remote::push_document(&payload.api_key, &payload.bin_id, &data).await?;
    info!("pushed document with {} recorded days", data.records.len());

    Ok(Json(SyncResponse { status: "pushed" }))
}

fn parse_date(text: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request(format!("invalid date '{text}', expected YYYY-MM-DD")))
}

/// Producing-layer checks: the core treats values as opaque integers, so
/// out-of-range values and unknown slots are stopped here, before they enter
/// the store.
fn validate_record(record: &DailyRecord) -> Result<(), AppError> {
    for (slot, reading) in record {
        if !is_valid_slot(slot) {
            return Err(AppError::bad_request(format!("unknown time slot '{slot}'")));
        }
        if let Some(value) = reading.value {
            if !(0..=10).contains(&value) {
                return Err(AppError::bad_request(format!(
                    "value {value} for slot '{slot}' must be between 0 and 10"
                )));
            }
        }
    }
    Ok(())
}
