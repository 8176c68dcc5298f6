use std::time::Duration;

use super::error::{CancelReason, SearchError, SearchResult};
use crate::sri::{SearchQuery, TaxpayerLookup, TaxpayerRecord, ValidQuery};
use crate::utils::config;

/// Informational message shown next to an empty result set.
pub const EMPTY_MESSAGE: &str = "No se encontraron registros";

/// State of the search form. Exactly one variant is active at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchOutcome {
    #[default]
    Idle,
    Loading,
    Success(Vec<TaxpayerRecord>),
    Empty,
    Error(String),
}

impl SearchOutcome {
    fn from_result(result: SearchResult<Vec<TaxpayerRecord>>) -> Self {
        match result {
            Ok(records) if records.is_empty() => SearchOutcome::Empty,
            Ok(records) => SearchOutcome::Success(records),
            Err(err) => SearchOutcome::Error(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchOutcome::Loading)
    }

    /// Text for the alert banner, if this state has one.
    pub fn message(&self) -> Option<&str> {
        match self {
            SearchOutcome::Error(msg) => Some(msg.as_str()),
            SearchOutcome::Empty => Some(EMPTY_MESSAGE),
            _ => None,
        }
    }

    pub fn records(&self) -> &[TaxpayerRecord] {
        match self {
            SearchOutcome::Success(records) => records,
            _ => &[],
        }
    }
}

/// Identifies one `begin` call. Only the newest token may settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// What `settle` did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    Discarded(CancelReason),
}

/// A validated search waiting for its network call.
#[derive(Debug, Clone)]
pub struct PendingSearch {
    pub token: RequestToken,
    pub query: ValidQuery,
    timeout: Duration,
}

impl PendingSearch {
    /// Runs the lookup, dropping the request if it outlives the timeout.
    pub async fn run(&self, lookup: &dyn TaxpayerLookup) -> SearchResult<Vec<TaxpayerRecord>> {
        match tokio::time::timeout(self.timeout, lookup.lookup(&self.query)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    reason = %CancelReason::Timeout,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "taxpayer lookup timed out, request aborted"
                );
                Err(SearchError::Cancelled(CancelReason::Timeout))
            }
        }
    }
}

/// Owns the search lifecycle: Idle -> Loading -> Success | Empty | Error.
///
/// The work is split in two so a UI can hold the controller in a signal and
/// await the network call without keeping it borrowed:
///
/// ```ignore
/// let pending = controller.begin(&query)?;
/// let result = pending.run(lookup).await;
/// controller.settle(pending.token, result);
/// ```
#[derive(Debug, Clone)]
pub struct SearchController {
    outcome: SearchOutcome,
    latest: u64,
    timeout: Duration,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::with_timeout(Duration::from_millis(config::REQUEST_TIMEOUT_MS))
    }
}

impl SearchController {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            outcome: SearchOutcome::Idle,
            latest: 0,
            timeout,
        }
    }

    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Validates `query` and moves to `Loading`.
    ///
    /// On invalid input the outcome becomes `Error` right away and no token is
    /// issued; a search already in flight keeps its token and may still settle.
    /// A valid query makes any earlier token stale.
    pub fn begin(&mut self, query: &SearchQuery) -> SearchResult<PendingSearch> {
        let query = match query.validate() {
            Ok(query) => query,
            Err(err) => {
                tracing::debug!("rejected search with blank names");
                self.outcome = SearchOutcome::Error(err.to_string());
                return Err(err);
            }
        };

        self.latest += 1;
        self.outcome = SearchOutcome::Loading;
        tracing::info!(
            token = self.latest,
            given_names = query.given_names(),
            surnames = query.surnames(),
            "search started"
        );

        Ok(PendingSearch {
            token: RequestToken(self.latest),
            query,
            timeout: self.timeout,
        })
    }

    /// Records the result for `token`, unless a newer search has started.
    pub fn settle(
        &mut self,
        token: RequestToken,
        result: SearchResult<Vec<TaxpayerRecord>>,
    ) -> Settlement {
        if token.0 != self.latest {
            tracing::debug!(
                token = token.0,
                latest = self.latest,
                reason = %CancelReason::Superseded,
                "discarding stale search result"
            );
            return Settlement::Discarded(CancelReason::Superseded);
        }

        self.outcome = SearchOutcome::from_result(result);
        match &self.outcome {
            SearchOutcome::Success(records) => {
                tracing::info!(token = token.0, count = records.len(), "search settled")
            }
            SearchOutcome::Empty => tracing::info!(token = token.0, "search returned no records"),
            SearchOutcome::Error(msg) => tracing::warn!(token = token.0, error = %msg, "search failed"),
            _ => {}
        }
        Settlement::Applied
    }

    /// Full search in one call: validate, request, classify.
    pub async fn search(
        &mut self,
        lookup: &dyn TaxpayerLookup,
        query: &SearchQuery,
    ) -> SearchOutcome {
        if let Ok(pending) = self.begin(query) {
            let result = pending.run(lookup).await;
            self.settle(pending.token, result);
        }
        self.outcome.clone()
    }
}
