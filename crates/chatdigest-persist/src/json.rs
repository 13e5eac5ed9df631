// Whole-file JSON reads and writes with path-annotated errors

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{PersistError, Result};

pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| PersistError::io(path, e))?;
    serde_json::from_slice(&bytes).map_err(|e| PersistError::json(path, e))
}

pub async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).map_err(|e| PersistError::json(path, e))?;
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| PersistError::io(path, e))
}
