//! Remote catalog client
//!
//! Thin reqwest wrapper for the three endpoint families the terminal uses:
//! paginated location-area listing, per-area encounter detail, and pokemon
//! records. Bodies are read as text and decoded separately so transport and
//! decode failures stay distinct. No caching happens here.

use reqwest::Client;
use tracing::debug;

use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage, Pokemon};

/// Default base URL of the remote catalog API.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client for the remote catalog API.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PokeApiClient {
    /// Creates a client against the default base URL.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Replaces the base URL, trimming any trailing slash.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    // == URL Builders ==
    // Public so callers can derive cache keys from the exact URLs fetched.

    /// URL of the first location-area page.
    pub fn first_page_url(&self, page_limit: u32) -> String {
        format!(
            "{}/location-area/?offset=0&limit={}",
            self.base_url, page_limit
        )
    }

    /// URL of one location area's detail record.
    pub fn location_area_url(&self, area: &str) -> String {
        format!("{}/location-area/{}", self.base_url, area)
    }

    /// URL of one pokemon record.
    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    // == Fetches ==

    /// Fetches one page of the location-area listing.
    ///
    /// Takes the full page URL because pagination follows the link tokens the
    /// API hands back verbatim.
    pub async fn fetch_location_page(&self, url: &str) -> Result<LocationAreaPage> {
        let body = self.fetch_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches the encounter detail of one location area.
    pub async fn fetch_location_detail(&self, area: &str) -> Result<LocationAreaDetail> {
        let url = self.location_area_url(area);
        let body = self.fetch_text(&url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches one pokemon record by name.
    pub async fn fetch_pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = self.pokemon_url(name);
        let body = self.fetch_text(&url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GETs `url` and returns the body text, rejecting non-success statuses.
    async fn fetch_text(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::UnexpectedStatus {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_url_includes_offset_and_limit() {
        let client = PokeApiClient::new();
        assert_eq!(
            client.first_page_url(20),
            "https://pokeapi.co/api/v2/location-area/?offset=0&limit=20"
        );
    }

    #[test]
    fn test_resource_urls() {
        let client = PokeApiClient::new();
        assert_eq!(
            client.location_area_url("pastoria-city-area"),
            "https://pokeapi.co/api/v2/location-area/pastoria-city-area"
        );
        assert_eq!(
            client.pokemon_url("pikachu"),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client = PokeApiClient::new().with_base_url("http://localhost:8080/");
        assert_eq!(
            client.pokemon_url("ditto"),
            "http://localhost:8080/pokemon/ditto"
        );
    }
}
