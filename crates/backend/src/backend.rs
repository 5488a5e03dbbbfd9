use crate::error::Result;
use crate::record::Record;
use crate::settings::IndexSettings;
use async_trait::async_trait;

/// Narrow write-side interface of the search service.
///
/// Index slots are addressed by name. An indexing run writes only to its
/// staging slot and makes the result visible through [`publish`], a single
/// move of the staging slot over the production slot. Nothing here reads
/// the production slot, and nothing here mutates it except the swap.
///
/// [`publish`]: SearchBackend::publish
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Create (or reset) the staging slot for a run.
    async fn init_staging(&self, name: &str) -> Result<()>;

    /// Append one document's records to the staging slot.
    async fn write_batch(&self, name: &str, records: &[Record]) -> Result<()>;

    /// Configure the staging slot. Settings travel with the slot through
    /// the publish swap.
    async fn apply_settings(&self, name: &str, settings: &IndexSettings) -> Result<()>;

    /// Atomically replace `production` with the contents of `staging`.
    /// After this returns, `staging` no longer exists.
    async fn publish(&self, staging: &str, production: &str) -> Result<()>;
}
