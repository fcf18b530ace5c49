//! Reference data formats for the counterdex engine.
//!
//! The three collections are plain JSON arrays, one file each:
//!
//! ```text
//! data/
//! ├── types.json       [{ "id", "key", "doubleDamageTo", "halfDamageTo", "noDamageTo" }]
//! ├── moves.json       [{ "id", "key", "type" }]
//! ├── pokemons.json    [{ "id", "key", "types", "moves", "tiers", "cpMax" }]
//! └── dictionary.json  { "key": "display text" }   (optional)
//! ```
//!
//! `moves` holds the two pools as `{ "quick": [..], "special": [..] }`.
//!
//! Records hold raw ids only. Resolving them against each other is the
//! engine's job (`counterdex_engine::Pokedex`).

use thiserror::Error;

mod dataset;
mod id;
pub mod records;

pub use dataset::{
    DICTIONARY_FILE, DataSet, MOVES_FILE, POKEMONS_FILE, TYPES_FILE, load_dictionary,
};
pub use records::{
    MoveRecord, MovesRecord, PokemonRecord, TypeRecord, parse_dictionary, parse_moves,
    parse_pokemons, parse_types,
};

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read {file}: {source}")]
    Read {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed {collection} data: {source}")]
    Malformed {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
