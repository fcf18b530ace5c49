//! Counter-efficiency calculation for a Pokemon GO roster.
//!
//! Given a defender, find every creature that beats it efficiently and the
//! lowest CP at which each one does.
//!
//! # Overview
//!
//! ```text
//! counterdex-data (JSON records)
//!        │
//!        ▼
//! Pokedex (resolved + validated, built once)
//!        │
//!        ▼
//! matchup → efficiency → counters
//!        │
//!        ▼
//! presentation (translates keys, renders results)
//! ```
//!
//! # Scoring
//!
//! - A move gets 1.25x when its type is one of its user's types (STAB).
//! - Against each defending type it gets 1.25x if efficient, otherwise
//!   0.8x if weak (half or no damage), otherwise 1x.
//! - A move's efficiency is its multiplier divided by the mean multiplier
//!   of the defender's whole move pool against the attacker, rounded to
//!   3 decimals.
//! - A creature counters the defender with its best move scoring at least
//!   1.25, provided `round(2400 / efficiency)` is within its max CP.
//!
//! # Example Usage
//!
//! ```ignore
//! use counterdex_data::DataSet;
//! use counterdex_engine::{CreatureId, Pokedex};
//!
//! let data = DataSet::load_dir("data")?;
//! let pokedex = Pokedex::from_data(&data)?;
//!
//! for counter in pokedex.counters(CreatureId(6))? {
//!     let (key, best_move) = (&counter.attacker_key, &counter.best_move.key);
//!     println!("{} with {} from {} CP", key, best_move, counter.required_cp);
//! }
//! ```

mod error;
pub mod locale;
mod pokedex;
pub mod query;
pub mod types;

pub use error::IntegrityError;
pub use locale::{KeyTranslator, Translate};
pub use pokedex::Pokedex;
pub use query::{
    BestMove, CounterOptions, CounterResult, MoveEfficiency, best_attack, move_efficiency,
    pairwise_efficiency, select_counters,
};
pub use types::{Creature, CreatureId, ElementalType, Move, MoveId, TypeId};

// Re-export the raw data entry point
pub use counterdex_data::DataSet;
