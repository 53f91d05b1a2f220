use crate::domain::model::{DepartureQuery, Selection, StopName};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Autocomplete lookup of stop names.
#[async_trait]
pub trait StopSuggester: Send + Sync {
    async fn suggest(&self, query: &str) -> Result<Vec<StopName>>;
}

/// Fetches the raw trip-planner response body for a query.
#[async_trait]
pub trait DepartureSource: Send + Sync {
    async fn fetch(&self, query: &DepartureQuery) -> Result<String>;
}

/// Lets the operator pick one stop out of several candidates.
///
/// Blocks until a choice is made or the selection is cancelled.
pub trait StopPicker: Send + Sync {
    fn choose_one(&self, field: &str, candidates: &[StopName]) -> Result<Selection>;
}
