pub mod error;
pub use error::ApiError;

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::cache::ResponseCache;
use crate::config::constants::REQUEST_TIMEOUT_SECS;
use crate::schemas::{LocationAreaDetail, LocationAreaPage, PokemonDetail};

/// PokeAPI client that consults the response cache before every GET.
///
/// Cache keys are the full request URLs, so paginated listings with different
/// query strings are cached independently.
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: Arc<dyn ResponseCache>,
}

impl PokeApiClient {
    pub fn new(base_url: &str, cache: Arc<dyn ResponseCache>) -> Result<Self, ApiError> {
        let http = reqwest::ClientBuilder::new()
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache,
        })
    }

    /// Fetches a page of location areas.
    ///
    /// `page` is a `next`/`previous` URL from an earlier page; only its query
    /// string is reused, against this client's base URL.
    pub async fn location_areas(&self, page: Option<&str>) -> Result<LocationAreaPage, ApiError> {
        let url = self.location_areas_url(page);
        let body = self.fetch(&url).await?;
        decode(&url, &body)
    }

    pub async fn location_area(&self, name: &str) -> Result<LocationAreaDetail, ApiError> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        let body = self.fetch(&url).await?;
        decode(&url, &body)
    }

    pub async fn pokemon(&self, name: &str) -> Result<PokemonDetail, ApiError> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        let body = self.fetch(&url).await?;
        decode(&url, &body)
    }

    /// Returns the raw body for `url`, from the cache when possible.
    #[tracing::instrument(level = "debug", name = "FetchResource", skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<Bytes, ApiError> {
        if let Some(body) = self.cache.lookup(url) {
            tracing::debug!("Cache hit ({} bytes)", body.len());
            return Ok(body);
        }

        tracing::debug!("Cache miss, requesting from PokeAPI");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("PokeAPI responded with status {}", status);
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(|source| ApiError::Http {
            url: url.to_string(),
            source,
        })?;

        self.cache.insert(url, body.clone());

        Ok(body)
    }

    fn location_areas_url(&self, page: Option<&str>) -> String {
        let query = page
            .and_then(|page| Url::parse(page).ok())
            .and_then(|url| url.query().map(str::to_string));

        match query {
            Some(query) => format!("{}/location-area?{}", self.base_url, query),
            None => format!("{}/location-area", self.base_url),
        }
    }
}

fn decode<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}
