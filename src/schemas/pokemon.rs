use serde::Deserialize;

use super::NamedResource;

/// `/pokemon/{name}`, reduced to what catch and inspect need.
#[derive(Deserialize, Debug, Clone)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,

    // Null for some alternate forms upstream.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub base_experience: u32,

    pub height: u32,
    pub weight: u32,

    #[serde(default)]
    pub stats: Vec<PokemonStat>,

    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PokemonType {
    pub slot: u32,

    #[serde(rename = "type")]
    pub kind: NamedResource,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_base_experience_reads_as_zero() {
        let body = r#"{
            "id": 10001, "name": "deoxys-attack", "base_experience": null,
            "height": 17, "weight": 608, "stats": [], "types": []
        }"#;

        let pokemon: PokemonDetail = serde_json::from_str(body).unwrap();
        assert_eq!(pokemon.base_experience, 0);
    }

    #[test]
    fn stats_and_types_are_decoded() {
        let body = r#"{
            "id": 25, "name": "pikachu", "base_experience": 112,
            "height": 4, "weight": 60,
            "stats": [{"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "u"}}],
            "types": [{"slot": 1, "type": {"name": "electric", "url": "u"}}]
        }"#;

        let pokemon: PokemonDetail = serde_json::from_str(body).unwrap();

        assert_eq!(pokemon.base_experience, 112);
        assert_eq!(pokemon.stats[0].stat.name, "hp");
        assert_eq!(pokemon.stats[0].base_stat, 35);
        assert_eq!(pokemon.types[0].kind.name, "electric");
    }
}
