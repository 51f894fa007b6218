//! HTTP client for the external Pokémon catalog (PokéAPI).

use crate::error::CatalogError;
use crate::http;

/// Public catalog listing endpoint.
pub const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

pub struct PokeApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl PokeApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: http::shared_client().clone(),
        }
    }

    /// Default client pointing at the public PokéAPI.
    pub fn default_remote() -> Self {
        Self::new(POKEAPI_BASE_URL)
    }

    /// Fetch one page of the upstream catalog listing. `offset` and `limit`
    /// are forwarded as-is; the response body is returned untouched so
    /// callers can serve it verbatim.
    pub async fn list(&self, offset: i64, limit: i64) -> Result<String, CatalogError> {
        let body = self
            .client
            .get(&self.base_url)
            .query(&[("offset", offset), ("limit", limit)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}
