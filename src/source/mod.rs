pub mod json_file;
pub mod memory;

pub use json_file::JsonFileSource;
pub use memory::MemorySource;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::TradeRecord;

/// Where trade history comes from. The remote repository lives behind
/// this trait; the crate itself only consumes the snapshot it returns.
#[async_trait]
pub trait TradeSource: Send + Sync {
    async fn fetch_trades(&self) -> Result<Vec<TradeRecord>>;
}
