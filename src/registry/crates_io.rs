//! crates.io registry client.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::client::{CrateEntry, RegistryClient};
use super::error::RegistryError;
use crate::types::PageQuery;

const CRATES_API: &str = "https://crates.io/api/v1";

// crates.io rejects requests without a user agent
const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CARGO_PKG_REPOSITORY"),
    ")"
);

/// crates.io registry client.
pub struct CratesIoClient {
    client: Client,
    api_url: String,
}

impl CratesIoClient {
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_api_url(CRATES_API)
    }

    pub fn with_api_url(api_url: impl Into<String>) -> Result<Self, RegistryError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    fn listing_url(&self, query: &PageQuery) -> String {
        format!("{}/crates?{}", self.api_url, query.query_string())
    }
}

// crates.io API response types
#[derive(Debug, Deserialize)]
struct CrateRecord {
    id: String,
    // Required key, nullable value
    #[serde(deserialize_with = "Option::deserialize")]
    recent_downloads: Option<u64>,
    repository: Option<String>,
}

impl From<CrateRecord> for CrateEntry {
    fn from(record: CrateRecord) -> Self {
        Self {
            id: record.id,
            recent_downloads: record.recent_downloads,
            repository: record.repository,
        }
    }
}

impl RegistryClient for CratesIoClient {
    async fn list_page(&self, query: &PageQuery) -> Result<Vec<CrateEntry>, RegistryError> {
        let url = self.listing_url(query);
        debug!(url = %url, "fetching crate listing");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::Status { status, url });
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "received crate listing");

        parse_listing(&body)
    }
}

/// Decode a listing body into entries, keeping the registry's order.
fn parse_listing(body: &[u8]) -> Result<Vec<CrateEntry>, RegistryError> {
    let text = std::str::from_utf8(body)?;
    let value: serde_json::Value = serde_json::from_str(text)?;

    // Well-formed JSON of the wrong shape is a schema problem, not a parse one
    let records = value
        .get("crates")
        .ok_or_else(|| RegistryError::Schema("missing field `crates`".to_string()))?
        .as_array()
        .ok_or_else(|| RegistryError::Schema("field `crates` is not a list".to_string()))?;

    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            CrateRecord::deserialize(record)
                .map(CrateEntry::from)
                .map_err(|e| RegistryError::Schema(format!("crates[{}]: {}", i, e)))
        })
        .collect()
}
