//! Pokémon lookups against the PokeAPI.
//!
//! Two lookup policies live here. `fetch_random` has no fallback, so every
//! failure propagates as a [`FetchError`]. `fetch_by_name` is the soft path:
//! not-found statuses, transport errors and bad payloads all collapse to
//! `None`, and the caller falls back to a random pick.

use crate::error::{FetchError, Result};
use crate::models::{Pokemon, Stat};
use async_trait::async_trait;
use rand::Rng;
use serde::Deserialize;

/// Ids of the original 151 Pokémon; random picks draw from this range.
const MIN_ID: u32 = 1;
const MAX_ID: u32 = 151;

/// PokeAPI response shape, limited to the fields the game reads.
#[derive(Debug, Deserialize)]
struct ApiPokemon {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    abilities: Vec<ApiAbilitySlot>,
    types: Vec<ApiTypeSlot>,
    stats: Vec<ApiStatSlot>,
}

#[derive(Debug, Deserialize)]
struct ApiAbilitySlot {
    ability: NamedResource,
}

#[derive(Debug, Deserialize)]
struct ApiTypeSlot {
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct ApiStatSlot {
    stat: NamedResource,
    base_stat: u32,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

impl From<ApiPokemon> for Pokemon {
    fn from(raw: ApiPokemon) -> Self {
        Pokemon {
            id: raw.id,
            name: raw.name,
            types: raw.types.into_iter().map(|t| t.kind.name).collect(),
            abilities: raw.abilities.into_iter().map(|a| a.ability.name).collect(),
            height: raw.height,
            weight: raw.weight,
            stats: raw
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    base: s.base_stat,
                })
                .collect(),
        }
    }
}

/// Source of Pokémon records. The game loop only sees this trait, so tests
/// drive it with a stub instead of the network.
#[async_trait]
pub trait Fetcher {
    /// Fetch a uniformly random Pokémon. Failures propagate; no retry.
    async fn fetch_random(&mut self) -> Result<Pokemon>;

    /// Fetch by name, lowercased. Any failure collapses to `None`.
    async fn fetch_by_name(&mut self, name: &str) -> Option<Pokemon>;
}

/// PokeAPI client. The randomness source is injected so selections are
/// reproducible under a seeded generator.
pub struct PokeClient<R: Rng> {
    http: reqwest::Client,
    base_url: String,
    rng: R,
}

impl<R: Rng> PokeClient<R> {
    pub fn new(base_url: impl Into<String>, rng: R) -> Self {
        PokeClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            rng,
        }
    }

    async fn get_pokemon(&self, path: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}/", self.base_url, path);
        log::debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let raw: ApiPokemon = response.json().await?;
        Ok(raw.into())
    }
}

#[async_trait]
impl<R: Rng + Send + Sync> Fetcher for PokeClient<R> {
    async fn fetch_random(&mut self) -> Result<Pokemon> {
        let id = self.rng.gen_range(MIN_ID..=MAX_ID);
        self.get_pokemon(&id.to_string()).await
    }

    async fn fetch_by_name(&mut self, name: &str) -> Option<Pokemon> {
        match self.get_pokemon(&name.to_lowercase()).await {
            Ok(pokemon) => Some(pokemon),
            Err(err) => {
                log::debug!("name lookup for {:?} failed: {}", name, err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULBASAUR_JSON: &str = r#"{
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "weight": 69,
        "abilities": [
            {"ability": {"name": "overgrow"}},
            {"ability": {"name": "chlorophyll"}}
        ],
        "types": [
            {"type": {"name": "grass"}},
            {"type": {"name": "poison"}}
        ],
        "stats": [
            {"base_stat": 45, "stat": {"name": "hp"}},
            {"base_stat": 49, "stat": {"name": "attack"}},
            {"base_stat": 49, "stat": {"name": "defense"}},
            {"base_stat": 45, "stat": {"name": "speed"}}
        ]
    }"#;

    #[test]
    fn api_payload_flattens_into_record() {
        let raw: ApiPokemon = serde_json::from_str(BULBASAUR_JSON).unwrap();
        let pokemon: Pokemon = raw.into();

        assert_eq!(pokemon.id, 1);
        assert_eq!(pokemon.name, "bulbasaur");
        assert_eq!(pokemon.types, vec!["grass", "poison"]);
        assert_eq!(pokemon.abilities[0], "overgrow");
        assert_eq!(pokemon.height, 7);
        assert_eq!(pokemon.weight, 69);
        assert_eq!(pokemon.stats.len(), 4);
        assert_eq!(pokemon.stats[1].name, "attack");
        assert_eq!(pokemon.stats[1].base, 49);
    }

    #[test]
    fn extra_api_fields_are_ignored() {
        let with_extras = BULBASAUR_JSON.replacen('{', r#"{"base_experience": 64,"#, 1);
        let raw: ApiPokemon = serde_json::from_str(&with_extras).unwrap();
        assert_eq!(raw.name, "bulbasaur");
    }
}
