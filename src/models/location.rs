//! Location-area response schemas
//!
//! Deserialized shapes for the paginated location-area listing and the
//! per-area encounter detail, plus the line-oriented rendering of each.

use serde::Deserialize;

/// A name/URL pair, the way the remote API references any resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[allow(dead_code)]
    pub url: String,
}

/// One page of the location-area listing (GET /location-area/?offset=N&limit=N)
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas known to the API
    #[allow(dead_code)]
    pub count: u32,
    /// URL of the next page; absent on the last page
    pub next: Option<String>,
    /// URL of the previous page; absent on the first page
    pub previous: Option<String>,
    /// The areas on this page
    pub results: Vec<NamedResource>,
}

impl LocationAreaPage {
    /// Renders the page as the terminal shows it: one area name per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for area in &self.results {
            out.push_str(&area.name);
            out.push('\n');
        }
        out
    }

    /// Forward link token for the cache: the next-page URL, empty when absent.
    pub fn next_token(&self) -> String {
        self.next.clone().unwrap_or_default()
    }

    /// Backward link token for the cache: the previous-page URL, empty when
    /// absent.
    pub fn previous_token(&self) -> String {
        self.previous.clone().unwrap_or_default()
    }
}

/// Encounter list for one location area (GET /location-area/{name})
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaDetail {
    /// Pokemon that can be encountered in this area
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// One possible encounter in an area.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

impl LocationAreaDetail {
    /// Renders the encounters as the terminal shows them: `- name` per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for encounter in &self.pokemon_encounters {
            out.push_str("- ");
            out.push_str(&encounter.pokemon.name);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_JSON: &str = r#"{
        "count": 1089,
        "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20",
        "previous": null,
        "results": [
            {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
            {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
        ]
    }"#;

    #[test]
    fn test_page_deserialize() {
        let page: LocationAreaPage = serde_json::from_str(PAGE_JSON).unwrap();
        assert_eq!(page.count, 1089);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "canalave-city-area");
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
    }

    #[test]
    fn test_page_link_tokens_map_absent_to_empty() {
        let page: LocationAreaPage = serde_json::from_str(PAGE_JSON).unwrap();
        assert_eq!(
            page.next_token(),
            "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20"
        );
        assert_eq!(page.previous_token(), "");
    }

    #[test]
    fn test_page_render_one_name_per_line() {
        let page: LocationAreaPage = serde_json::from_str(PAGE_JSON).unwrap();
        assert_eq!(page.render(), "canalave-city-area\neterna-city-area\n");
    }

    #[test]
    fn test_last_page_has_no_next() {
        let json = r#"{
            "count": 1089,
            "next": null,
            "previous": "https://pokeapi.co/api/v2/location-area/?offset=1060&limit=20",
            "results": [
                {"name": "unknown-all-cave", "url": "https://pokeapi.co/api/v2/location-area/1089/"}
            ]
        }"#;

        let page: LocationAreaPage = serde_json::from_str(json).unwrap();
        assert!(page.next.is_none());
        assert_eq!(page.next_token(), "");
        assert_eq!(
            page.previous_token(),
            "https://pokeapi.co/api/v2/location-area/?offset=1060&limit=20"
        );
    }

    #[test]
    fn test_detail_deserialize_and_render() {
        let json = r#"{
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}},
                {"pokemon": {"name": "magikarp", "url": "https://pokeapi.co/api/v2/pokemon/129/"}}
            ]
        }"#;

        let detail: LocationAreaDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.pokemon_encounters.len(), 2);
        assert_eq!(detail.render(), "- tentacool\n- magikarp\n");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result: Result<LocationAreaPage, _> = serde_json::from_str("{not json");
        assert!(result.is_err());
    }
}
