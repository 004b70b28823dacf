//! Archive fetch orchestration
//!
//! The orchestrator behind the consumer-facing entry point: build the month
//! URL, perform the GET, map transport failures, and hand the body to the
//! response parser. One attempt per invocation, no retries, and exactly one
//! suspension point (awaiting the transfer). Overlapping fetches are handled
//! with a last-request-wins generation counter so consumers can discard
//! stale outcomes without bookkeeping of their own.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::parser;
use crate::query;
use crate::types::{ArchiveOutcome, MonthInfo};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Asynchronous source of monthly archive documents
///
/// The explicit contract between the pipeline and its UI consumer. Consumers
/// depend on this trait and mock it in their tests instead of standing up a
/// real transport.
#[async_trait]
pub trait ArchiveSource: Send + Sync {
    /// Fetch and decode one month of archive documents
    async fn fetch_month(&self, month: MonthInfo) -> ArchiveOutcome;
}

/// Fetches and decodes monthly article lists from the archive API
///
/// Holds the HTTP client (built once, with the configured timeout and user
/// agent) and no other mutable state besides the request-generation counter,
/// so every fetch is independent and side-effect-free beyond the network
/// call itself.
#[derive(Debug)]
pub struct ArchiveFetcher {
    /// HTTP client for archive requests
    client: reqwest::Client,

    /// Validated configuration this fetcher was built with
    config: Config,

    /// Monotone counter backing the last-request-wins staleness policy
    generation: AtomicU64,
}

impl ArchiveFetcher {
    /// Create a fetcher from a configuration
    ///
    /// Validates the configuration first, so a missing API key fails here,
    /// at startup, rather than producing malformed requests later.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an invalid configuration and
    /// [`Error::Transport`] if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            generation: AtomicU64::new(0),
        })
    }

    /// Borrow the configuration this fetcher was built with
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch and decode one month of archive documents
    ///
    /// A single attempt: transport failures (unreachable host, timeout,
    /// non-success HTTP status) are reported without touching the body, and
    /// otherwise the outcome is exactly what the response parser produced.
    /// The timeout is the one configured on the HTTP client.
    pub async fn fetch_month(&self, month: MonthInfo) -> ArchiveOutcome {
        let url = query::build_request(&self.config.endpoint, month, &self.config.api_key)?;
        debug!(year = month.year, month = month.month, "fetching archive month");

        // without_url keeps the api-key query parameter out of user-facing messages
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("failed to reach archive API: {}", e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                %status,
                year = month.year,
                month = month.month,
                "archive API returned non-success status"
            );
            return Err(Error::Transport(format!(
                "archive API returned HTTP {}",
                status.as_u16()
            )));
        }

        let bytes = response.bytes().await.map_err(|e| {
            Error::Transport(format!(
                "failed to read archive response body: {}",
                e.without_url()
            ))
        })?;

        parser::parse(&bytes)
    }

    /// Fetch one month under the last-request-wins staleness policy
    ///
    /// Each call advances the request generation. If a newer call was issued
    /// while this one was in flight, the stale outcome is dropped and `None`
    /// is returned, so callers never observe a result for a month the user
    /// has already navigated away from. In-flight requests are not cancelled;
    /// only their results are discarded.
    pub async fn fetch_month_latest(&self, month: MonthInfo) -> Option<ArchiveOutcome> {
        let issued = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = self.fetch_month(month).await;

        if self.generation.load(Ordering::SeqCst) == issued {
            Some(outcome)
        } else {
            debug!(
                year = month.year,
                month = month.month,
                "discarding stale archive outcome"
            );
            None
        }
    }
}

#[async_trait]
impl ArchiveSource for ArchiveFetcher {
    async fn fetch_month(&self, month: MonthInfo) -> ArchiveOutcome {
        ArchiveFetcher::fetch_month(self, month).await
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
