// Chart service - Use case for fetching and filtering trend records
use crate::application::trend_repository::{FetchState, TrendRepository};
use crate::domain::trend::TrendRecord;
use std::sync::Arc;

/// Optional per-record predicate applied before transformation.
pub type RecordFilter = Arc<dyn Fn(&TrendRecord) -> bool + Send + Sync>;

/// Composes the fetch collaborator with an optional record filter and
/// exposes the outcome as the state the view renders from. All fetch errors
/// stop here; none propagate into the transformer.
#[derive(Clone)]
pub struct ChartService {
    repository: Arc<dyn TrendRepository>,
    filter: Option<RecordFilter>,
}

impl ChartService {
    pub fn new(repository: Arc<dyn TrendRepository>) -> Self {
        Self {
            repository,
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: RecordFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub async fn fetch(&self) -> FetchState {
        match self.repository.fetch_event_trends().await {
            Ok(mut records) => {
                if let Some(filter) = &self.filter {
                    records.retain(|record| filter(record));
                }
                FetchState::Loaded(records)
            }
            Err(e) => {
                tracing::error!("Error fetching event trends: {:#}", e);
                FetchState::Failed(format!("{:#}", e))
            }
        }
    }
}
