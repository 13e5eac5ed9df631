use std::path::Path;

use chatdigest_types::MonthSummaryRecord;

use crate::error::Result;
use crate::json::write_json;

/// Write the combined digest as a JSON array of month summaries
pub async fn save_digest(path: impl AsRef<Path>, records: &[MonthSummaryRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| crate::PersistError::io(parent, e))?;
    }
    write_json(path, records).await?;

    tracing::info!(path = %path.display(), months = records.len(), "digest written");
    Ok(())
}
