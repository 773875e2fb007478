pub mod location;
pub mod pokemon;

pub use location::{LocationAreaDetail, LocationAreaPage, PokemonEncounter};
pub use pokemon::{PokemonDetail, PokemonStat, PokemonType};

use serde::Deserialize;

/// A `{ name, url }` reference as PokeAPI returns it for linked resources.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}
