use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::TradeRecord;
use crate::source::TradeSource;

/// Reads a JSON array of trade records, as returned by the history endpoint.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TradeSource for JsonFileSource {
    async fn fetch_trades(&self) -> Result<Vec<TradeRecord>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading trades from {}", self.path.display()))?;

        let records: Vec<TradeRecord> = serde_json::from_str(&content)
            .with_context(|| format!("parsing trades in {}", self.path.display()))?;

        info!("Loaded {} trade records from {}", records.len(), self.path.display());
        Ok(records)
    }
}
