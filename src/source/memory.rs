use anyhow::Result;
use async_trait::async_trait;

use crate::models::TradeRecord;
use crate::source::TradeSource;

/// Serves a fixed snapshot of records.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<TradeRecord>,
}

impl MemorySource {
    pub fn new(records: Vec<TradeRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl TradeSource for MemorySource {
    async fn fetch_trades(&self) -> Result<Vec<TradeRecord>> {
        Ok(self.records.clone())
    }
}
