// Repository trait for trend data access
use crate::domain::trend::TrendRecord;
use async_trait::async_trait;

/// The fetch collaborator boundary. Retry, caching, and revalidation policy
/// belong to implementations, never to the chart core.
#[async_trait]
pub trait TrendRepository: Send + Sync {
    /// Fetch the full event-trend record sequence, ordered by time ascending.
    async fn fetch_event_trends(&self) -> anyhow::Result<Vec<TrendRecord>>;
}

/// The collaborator's externally-observable state, as seen by the view on a
/// given render pass.
#[derive(Debug)]
pub enum FetchState {
    /// No fetch has completed yet.
    Pending,
    /// The fetch failed; carries the underlying error message.
    Failed(String),
    /// The fetch succeeded, possibly with zero records.
    Loaded(Vec<TrendRecord>),
}
