use crate::errors::AppError;
use crate::models::AppData;
use reqwest::Client;
use serde::Deserialize;

const BASE_URL: &str = "https://api.jsonbin.io/v3/b";

/// Document-store reads wrap the stored document in a `record` envelope.
#[derive(Debug, Deserialize)]
struct BinEnvelope {
    record: AppData,
}

/// Fetches the whole document from the remote bin.
pub async fn fetch_document(api_key: &str, bin_id: &str) -> Result<AppData, AppError> {
    let response = Client::new()
        .get(format!("{BASE_URL}/{bin_id}/latest"))
        .header("X-Master-Key", api_key)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(AppError::bad_gateway(format!(
            "remote load failed: {}",
            response.status()
        )));
    }

    let envelope: BinEnvelope = response.json().await?;
    Ok(envelope.record)
}

/// Replaces the remote bin's document wholesale.
pub async fn push_document(api_key: &str, bin_id: &str, data: &AppData) -> Result<(), AppError> {
    let response = Client::new()
        .put(format!("{BASE_URL}/{bin_id}"))
        .header("X-Master-Key", api_key)
        .json(data)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(AppError::bad_gateway(format!(
            "remote save failed: {}",
            response.status()
        )));
    }

    Ok(())
}
