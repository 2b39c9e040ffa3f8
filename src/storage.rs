use crate::errors::AppError;
use crate::models::AppData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/health.json"))
}

/// Strict parse of a whole document. Used both at startup and for uploaded
/// imports, so a rejected import leaves the in-memory store untouched.
pub fn parse_document(bytes: &[u8]) -> Result<AppData, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Loads the document from disk, degrading to an empty one when the file is
/// missing or unreadable. User data is sparse by nature; a fresh store is the
/// correct fallback, not a startup failure.
pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match parse_document(&bytes) {
            Ok(data) => {
                info!("loaded {} recorded days", data.records.len());
                data
            }
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
