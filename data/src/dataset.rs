//! Loading all three collections together

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};

use crate::DataError;
use crate::records::{
    MoveRecord, PokemonRecord, TypeRecord, parse_dictionary, parse_moves, parse_pokemons,
    parse_types,
};

pub const TYPES_FILE: &str = "types.json";
pub const MOVES_FILE: &str = "moves.json";
pub const POKEMONS_FILE: &str = "pokemons.json";
pub const DICTIONARY_FILE: &str = "dictionary.json";

/// The full set of reference data, unresolved
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSet {
    pub types: Vec<TypeRecord>,
    pub moves: Vec<MoveRecord>,
    pub pokemons: Vec<PokemonRecord>,
}

impl DataSet {
    /// Parse the three collections from their JSON text
    pub fn from_json(types: &str, moves: &str, pokemons: &str) -> Result<Self> {
        let data = Self {
            types: parse_types(types)?,
            moves: parse_moves(moves)?,
            pokemons: parse_pokemons(pokemons)?,
        };

        tracing::debug!(
            types = data.types.len(),
            moves = data.moves.len(),
            pokemons = data.pokemons.len(),
            "Parsed reference data"
        );

        Ok(data)
    }

    /// Read `types.json`, `moves.json` and `pokemons.json` from a directory
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let types = read_file(dir, TYPES_FILE)?;
        let moves = read_file(dir, MOVES_FILE)?;
        let pokemons = read_file(dir, POKEMONS_FILE)?;

        Self::from_json(&types, &moves, &pokemons)
            .with_context(|| format!("Failed to load reference data from {}", dir.display()))
    }
}

/// Read `dictionary.json` from a directory
///
/// The dictionary is optional. A missing file gives an empty dictionary.
pub fn load_dictionary(dir: impl AsRef<Path>) -> Result<HashMap<String, String>> {
    let path = dir.as_ref().join(DICTIONARY_FILE);
    let json = match fs::read_to_string(&path) {
        Ok(json) => json,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No dictionary, showing keys");
            return Ok(HashMap::new());
        }
        Err(source) => {
            let file = path.display().to_string();
            return Err(DataError::Read { file, source }.into());
        }
    };

    let dictionary = parse_dictionary(&json)
        .with_context(|| format!("Failed to load dictionary from {}", path.display()))?;
    tracing::debug!(entries = dictionary.len(), "Loaded dictionary");

    Ok(dictionary)
}

fn read_file(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    fs::read_to_string(&path).map_err(|source| {
        DataError::Read {
            file: path.display().to_string(),
            source,
        }
        .into()
    })
}
