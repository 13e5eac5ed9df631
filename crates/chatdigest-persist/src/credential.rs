use std::path::Path;

use crate::error::{PersistError, Result};

/// Read a single-line API key, surrounding newlines stripped
pub async fn load_api_key(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| PersistError::io(path, e))?;

    let key = raw.trim_matches(|c| c == '\n' || c == '\r');
    if key.is_empty() {
        return Err(PersistError::EmptyCredential(path.to_path_buf()));
    }
    Ok(key.to_string())
}
