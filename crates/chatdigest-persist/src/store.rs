use std::path::{Path, PathBuf};

use chatdigest_types::{MonthSummaryFile, YearMonth};

use crate::error::{PersistError, Result};
use crate::json::{read_json, write_json};

/// Directory of per-month summary files.
///
/// File names only need to be unique; the month is read back from each file's body.
pub struct SummaryStore {
    dir: PathBuf,
}

impl SummaryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn month_path(&self, period: YearMonth) -> PathBuf {
        self.dir
            .join(format!("summary_{}_{}.json", period.year, period.month))
    }

    pub async fn save_month(&self, file: &MonthSummaryFile) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| PersistError::io(&self.dir, e))?;

        let path = self.month_path(file.period());
        write_json(&path, file).await?;

        tracing::info!(
            path = %path.display(),
            period = %file.period(),
            records = file.records.len(),
            "month summaries saved"
        );
        Ok(path)
    }

    pub async fn load_month(&self, path: impl AsRef<Path>) -> Result<MonthSummaryFile> {
        read_json(path.as_ref()).await
    }

    /// Every `*.json` file in the directory, in ascending month order
    pub async fn list_months(&self) -> Result<Vec<MonthSummaryFile>> {
        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|e| PersistError::io(&self.dir, e))?;

        let mut paths = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| PersistError::io(&self.dir, e))?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            } else {
                tracing::debug!(path = %path.display(), "skipping non-json entry");
            }
        }
        // read_dir order is platform-defined
        paths.sort();

        let mut months = Vec::with_capacity(paths.len());
        for path in paths {
            months.push(self.load_month(&path).await?);
        }
        months.sort_by_key(|m| m.period());

        Ok(months)
    }
}
