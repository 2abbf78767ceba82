use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::papers::PaperRecord;

/// Read-only source of paper records backed by a JSON file
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Read and parse the whole file
    ///
    /// Either every record is returned or none: a read or parse failure is
    /// logged once and returned as an error.
    pub async fn load(&self) -> Result<Vec<PaperRecord>> {
        match self.read_records().await {
            Ok(records) => {
                for record in &records {
                    if let Err(e) = record.first_read_key() {
                        warn!(title = %record.title, "record excluded from date views: {}", e);
                    }
                }
                info!(
                    path = %self.file_path.display(),
                    count = records.len(),
                    "loaded papers"
                );
                Ok(records)
            }
            Err(e) => {
                error!(path = %self.file_path.display(), "failed to load papers: {:#}", e);
                Err(e)
            }
        }
    }

    async fn read_records(&self) -> Result<Vec<PaperRecord>> {
        let content = tokio::fs::read_to_string(&self.file_path)
            .await
            .with_context(|| format!("failed to read {}", self.file_path.display()))?;
        let records: Vec<PaperRecord> = serde_json::from_str(&content)
            .with_context(|| format!("invalid paper data in {}", self.file_path.display()))?;
        Ok(records)
    }
}
