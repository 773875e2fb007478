use serde::Deserialize;

use super::NamedResource;

/// One page of `/location-area`.
#[derive(Deserialize, Debug, Clone)]
pub struct LocationAreaPage {
    pub count: u32,

    /// Absolute URL of the following page, if any.
    pub next: Option<String>,

    /// Absolute URL of the preceding page, if any.
    pub previous: Option<String>,

    pub results: Vec<NamedResource>,
}

/// `/location-area/{name}`, reduced to what the explore command prints.
#[derive(Deserialize, Debug, Clone)]
pub struct LocationAreaDetail {
    pub id: u32,
    pub name: String,
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_no_previous() {
        let body = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;

        let page: LocationAreaPage = serde_json::from_str(body).unwrap();

        assert_eq!(page.count, 1089);
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1].name, "eterna-city-area");
    }

    #[test]
    fn detail_ignores_unused_fields() {
        let body = r#"{
            "id": 1,
            "name": "canalave-city-area",
            "game_index": 1,
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"},
                 "version_details": []}
            ]
        }"#;

        let detail: LocationAreaDetail = serde_json::from_str(body).unwrap();

        assert_eq!(detail.pokemon_encounters.len(), 1);
        assert_eq!(detail.pokemon_encounters[0].pokemon.name, "tentacool");
    }
}
