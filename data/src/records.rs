//! Raw records as they appear in the JSON data files

use std::collections::HashMap;

use anyhow::Result;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::DataError;
use crate::id::{deserialize_id, deserialize_ids};

/// An elemental type and its outgoing damage relations
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: u32,

    /// Localization key
    pub key: String,

    /// Types this type hits for bonus damage
    #[serde(default, deserialize_with = "deserialize_ids")]
    pub double_damage_to: Vec<u32>,

    /// Types this type hits for reduced damage
    #[serde(default, deserialize_with = "deserialize_ids")]
    pub half_damage_to: Vec<u32>,

    /// Types this type cannot damage
    #[serde(default, deserialize_with = "deserialize_ids")]
    pub no_damage_to: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoveRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: u32,

    pub key: String,

    /// Id of the move's elemental type
    #[serde(rename = "type", deserialize_with = "deserialize_id")]
    pub type_id: u32,
}

/// A creature's two move pools, by move id
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovesRecord {
    #[serde(deserialize_with = "deserialize_ids")]
    pub quick: Vec<u32>,

    /// Charge moves (named `special` in the data files)
    #[serde(rename = "special", deserialize_with = "deserialize_ids")]
    pub charge: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: u32,

    pub key: String,

    /// Type ids, primary first
    #[serde(deserialize_with = "deserialize_ids")]
    pub types: Vec<u32>,

    pub moves: MovesRecord,

    /// Tier placement, passed through untouched
    #[serde(default)]
    pub tiers: serde_json::Value,

    pub cp_max: u32,
}

/// Parse the contents of `types.json`
pub fn parse_types(json: &str) -> Result<Vec<TypeRecord>> {
    parse_collection("types", json)
}

/// Parse the contents of `moves.json`
pub fn parse_moves(json: &str) -> Result<Vec<MoveRecord>> {
    parse_collection("moves", json)
}

/// Parse the contents of `pokemons.json`
pub fn parse_pokemons(json: &str) -> Result<Vec<PokemonRecord>> {
    parse_collection("pokemons", json)
}

/// Parse a flat `{ "key": "display text" }` dictionary
pub fn parse_dictionary(json: &str) -> Result<HashMap<String, String>> {
    parse_collection("dictionary", json)
}

fn parse_collection<T>(collection: &'static str, json: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(json).map_err(|source| {
        let err = DataError::Malformed { collection, source };
        err.into()
    })
}
