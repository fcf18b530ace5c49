//! Reference data integrity errors

use thiserror::Error;

use crate::types::{CreatureId, MoveId, TypeId};

/// Malformed reference data
///
/// None of these can be triggered by a user selection; they mean the data
/// loaded at startup is broken and the request has to fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("Duplicate {collection} id: {id}")]
    DuplicateId { collection: &'static str, id: u32 },

    #[error("Unknown type {type_id} referenced by {referenced_by}")]
    UnknownType {
        type_id: TypeId,
        referenced_by: String,
    },

    #[error("Unknown move {move_id} referenced by creature {creature}")]
    UnknownMove {
        move_id: MoveId,
        creature: CreatureId,
    },

    #[error("Unknown creature: {0}")]
    UnknownCreature(CreatureId),

    #[error("Creature {creature} has {count} types (expected 1 or 2)")]
    InvalidTypeCount { creature: CreatureId, count: usize },

    #[error("Creature {creature} lists type {type_id} twice")]
    DuplicateType {
        creature: CreatureId,
        type_id: TypeId,
    },

    #[error("Creature {creature} has an empty {pool} move pool")]
    EmptyMovePool {
        creature: CreatureId,
        pool: &'static str,
    },
}
