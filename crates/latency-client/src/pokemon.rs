//! `PokeAPI` lookups.
//!
//! Pages that show a Pokemon treat a failed lookup as "nothing to show",
//! so [`LatencyClient::get_pokemon`] never returns an error: transport
//! failures, non-2xx statuses, and malformed bodies are logged and become
//! `None`.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::client::LatencyClient;
use crate::error::ClientError;

/// Highest Pokemon id handed out by [`random_pokemon_id`].
pub const MAX_POKEMON_ID: u32 = 150;

/// Pick a random Pokemon id, uniform in `1..=150`.
pub fn random_pokemon_id() -> u32 {
    rand::rng().random_range(1..=MAX_POKEMON_ID)
}

/// The subset of a `PokeAPI` Pokemon resource the demos display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Lowercase Pokemon name.
    pub name: String,
    /// Sprite images.
    pub sprites: Sprites,
    /// The species this Pokemon belongs to.
    pub species: Species,
}

/// Sprite URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    /// Default front-facing sprite.
    pub front_default: String,
}

/// Named link to a species resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    /// Species name.
    pub name: String,
    /// Species resource URL.
    pub url: String,
}

impl LatencyClient {
    /// Look up a Pokemon by id.
    ///
    /// Returns `None` on any failure.
    pub async fn get_pokemon(&self, id: u32) -> Option<Pokemon> {
        match self.try_get_pokemon(id).await {
            Ok(pokemon) => Some(pokemon),
            Err(e) => {
                warn!(id, error = %e, "pokemon lookup failed");
                None
            }
        }
    }

    /// Look up a random Pokemon from the first 150.
    pub async fn get_random_pokemon(&self) -> Option<Pokemon> {
        self.get_pokemon(random_pokemon_id()).await
    }

    async fn try_get_pokemon(&self, id: u32) -> Result<Pokemon, ClientError> {
        let url = format!("{}/pokemon/{id}", self.config.pokeapi_url);
        self.get_json(&url).await
    }
}
