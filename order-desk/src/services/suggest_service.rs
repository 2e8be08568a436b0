//! Address suggestion service
//!
//! The one outbound network call in the system: partial address text goes
//! out, an ordered list of candidate full addresses comes back. The trait
//! is the seam; [`DadataSuggester`] is the production implementation
//! against the DaData REST API. Failures are recoverable by design: the
//! draft engine turns them into an empty suggestion list.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// DaData address suggestion endpoint
pub const DADATA_SUGGEST_URL: &str =
    "https://suggestions.dadata.ru/suggestions/api/4_1/rs/suggest/address";

/// Candidate count requested per lookup
const DEFAULT_COUNT: u8 = 5;

/// A single candidate address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub value: String,
}

/// Suggestion lookup errors
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("suggestion request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[async_trait]
pub trait AddressSuggester: Send + Sync {
    async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>, SuggestError>;
}

#[derive(Debug, Serialize)]
struct SuggestRequestBody<'a> {
    query: &'a str,
    count: u8,
}

#[derive(Debug, Deserialize)]
struct SuggestResponseBody {
    #[serde(default)]
    suggestions: Vec<Suggestion>,
}

/// DaData-backed suggester.
#[derive(Debug, Clone)]
pub struct DadataSuggester {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    count: u8,
}

impl DadataSuggester {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: DADATA_SUGGEST_URL.to_string(),
            api_key: api_key.into(),
            count: DEFAULT_COUNT,
        }
    }

    /// Override the endpoint, mainly for tests against a local server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_count(mut self, count: u8) -> Self {
        self.count = count;
        self
    }
}

#[async_trait]
impl AddressSuggester for DadataSuggester {
    async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>, SuggestError> {
        let body: SuggestResponseBody = self
            .http
            .post(&self.endpoint)
            .header("Authorization", format!("Token {}", self.api_key))
            .json(&SuggestRequestBody {
                query,
                count: self.count,
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        tracing::debug!(query, count = body.suggestions.len(), "address suggestions fetched");
        Ok(body.suggestions)
    }
}
