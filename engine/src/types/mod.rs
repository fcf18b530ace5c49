//! Resolved domain types
//!
//! Everything here is immutable once built and shared through `Arc`, so a
//! single roster can back any number of concurrent counter selections.

mod creature;
mod elemental_type;
mod moves;

pub use creature::{Creature, CreatureId, MAX_TYPES};
pub use elemental_type::{ElementalType, TypeId};
pub use moves::{Move, MoveId};
