//! Attack moves

use std::fmt;
use std::sync::Arc;

use super::elemental_type::ElementalType;

/// Identifier of a move in the reference data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MoveId(pub u32);

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A move and the single elemental type it deals damage as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub id: MoveId,

    /// Localization key
    pub key: String,

    /// Shared with every other move of the same type
    pub elemental_type: Arc<ElementalType>,
}

impl Move {
    pub fn new(id: u32, key: impl Into<String>, elemental_type: Arc<ElementalType>) -> Self {
        Self {
            id: MoveId(id),
            key: key.into(),
            elemental_type,
        }
    }
}
