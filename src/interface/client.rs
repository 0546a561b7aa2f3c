use crate::{ResultItem, SearchRequest, StdResult};

/// A trait for querying the code search API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CodeSearch: Sync + Send {
    /// Returns all files matching the given search request, aggregated across every
    /// result page in the order the server sent them.
    async fn search(&self, request: &SearchRequest) -> StdResult<Vec<ResultItem>>;
}
