use std::collections::BTreeMap;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::client::PokeApiClient;
use crate::schemas::PokemonDetail;

/// State carried between commands of one prompt session.
pub struct Session {
    pub(crate) client: PokeApiClient,

    // Absolute page URLs as returned by the last listing.
    pub(crate) next: Option<String>,
    pub(crate) previous: Option<String>,

    pub(crate) caught: BTreeMap<String, PokemonDetail>,
    pub(crate) rng: StdRng,
}

impl Session {
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, StdRng::from_os_rng())
    }

    pub fn with_rng(client: PokeApiClient, rng: StdRng) -> Self {
        Self {
            client,
            next: None,
            previous: None,
            caught: BTreeMap::new(),
            rng,
        }
    }

    pub fn caught(&self) -> impl Iterator<Item = &PokemonDetail> {
        self.caught.values()
    }

    pub fn has_caught(&self, name: &str) -> bool {
        self.caught.contains_key(name)
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn previous_page(&self) -> Option<&str> {
        self.previous.as_deref()
    }
}
