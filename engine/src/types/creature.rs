//! Creatures on the roster

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::elemental_type::{ElementalType, TypeId};
use super::moves::Move;
use crate::error::IntegrityError;

/// Maximum number of elemental types a creature can have
pub const MAX_TYPES: usize = 2;

/// Identifier of a creature in the reference data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CreatureId(pub u32);

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A creature with resolved types and move pools
///
/// Construction checks the invariants every efficiency calculation relies
/// on: one or two distinct types and at least one move. The stricter rule
/// that both pools are filled is a data-file rule, enforced by `Pokedex`.
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    id: CreatureId,
    key: String,
    types: Vec<Arc<ElementalType>>,
    quick_moves: Vec<Arc<Move>>,
    charge_moves: Vec<Arc<Move>>,
    cp_max: u32,
    tiers: Value,
}

impl Creature {
    pub fn new(
        id: u32,
        key: impl Into<String>,
        types: Vec<Arc<ElementalType>>,
        quick_moves: Vec<Arc<Move>>,
        charge_moves: Vec<Arc<Move>>,
        cp_max: u32,
    ) -> Result<Self, IntegrityError> {
        let id = CreatureId(id);

        if types.is_empty() || types.len() > MAX_TYPES {
            return Err(IntegrityError::InvalidTypeCount {
                creature: id,
                count: types.len(),
            });
        }
        if let [first, second] = types.as_slice()
            && first.id == second.id
        {
            return Err(IntegrityError::DuplicateType {
                creature: id,
                type_id: first.id,
            });
        }
        if quick_moves.is_empty() && charge_moves.is_empty() {
            return Err(IntegrityError::EmptyMovePool {
                creature: id,
                pool: "combined",
            });
        }

        Ok(Self {
            id,
            key: key.into(),
            types,
            quick_moves,
            charge_moves,
            cp_max,
            tiers: Value::Null,
        })
    }

    /// Attach tier placement data, carried along untouched
    pub fn with_tiers(mut self, tiers: Value) -> Self {
        self.tiers = tiers;
        self
    }

    pub fn id(&self) -> CreatureId {
        self.id
    }

    /// Localization key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Elemental types, primary first
    pub fn types(&self) -> &[Arc<ElementalType>] {
        &self.types
    }

    pub fn quick_moves(&self) -> &[Arc<Move>] {
        &self.quick_moves
    }

    pub fn charge_moves(&self) -> &[Arc<Move>] {
        &self.charge_moves
    }

    /// Highest combat power this creature can reach
    pub fn cp_max(&self) -> u32 {
        self.cp_max
    }

    /// Tier placement from the data files (`Null` when absent)
    pub fn tiers(&self) -> &Value {
        &self.tiers
    }

    /// Quick moves followed by charge moves
    pub fn move_pool(&self) -> impl Iterator<Item = &Arc<Move>> + '_ {
        self.quick_moves.iter().chain(&self.charge_moves)
    }

    /// Size of the full move pool (never zero)
    pub fn move_count(&self) -> usize {
        self.quick_moves.len() + self.charge_moves.len()
    }

    /// Whether one of this creature's own types is `type_id`
    pub fn has_type(&self, type_id: TypeId) -> bool {
        self.types.iter().any(|t| t.id == type_id)
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.key, self.id)
    }
}
