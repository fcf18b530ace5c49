//! Elemental types and their damage relations

use std::collections::HashSet;
use std::fmt;

use counterdex_data::TypeRecord;

/// Identifier of an elemental type in the reference data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeId(pub u32);

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An elemental type with its outgoing damage relations
///
/// Relations are directed: Fire listing Grass in `double_damage_to` says
/// nothing about what Grass does to Fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementalType {
    pub id: TypeId,

    /// Localization key
    pub key: String,

    /// Types this type hits for bonus damage
    pub double_damage_to: HashSet<TypeId>,

    /// Types this type hits for reduced damage
    pub half_damage_to: HashSet<TypeId>,

    /// Types this type cannot damage
    pub no_damage_to: HashSet<TypeId>,
}

impl ElementalType {
    /// Create a type with no damage relations
    pub fn new(id: u32, key: impl Into<String>) -> Self {
        Self {
            id: TypeId(id),
            key: key.into(),
            double_damage_to: HashSet::new(),
            half_damage_to: HashSet::new(),
            no_damage_to: HashSet::new(),
        }
    }

    /// Create from a raw data record (relation ids are not checked here)
    pub fn from_record(record: &TypeRecord) -> Self {
        Self {
            id: TypeId(record.id),
            key: record.key.clone(),
            double_damage_to: type_ids(&record.double_damage_to),
            half_damage_to: type_ids(&record.half_damage_to),
            no_damage_to: type_ids(&record.no_damage_to),
        }
    }

    pub fn with_double_damage_to(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.double_damage_to.extend(ids.into_iter().map(TypeId));
        self
    }

    pub fn with_half_damage_to(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.half_damage_to.extend(ids.into_iter().map(TypeId));
        self
    }

    pub fn with_no_damage_to(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.no_damage_to.extend(ids.into_iter().map(TypeId));
        self
    }

    /// Whether this type deals bonus damage to `defender`
    pub fn is_efficient_against(&self, defender: &ElementalType) -> bool {
        self.double_damage_to.contains(&defender.id)
    }

    /// Whether this type deals reduced damage to `defender`
    ///
    /// "No damage" is deliberately folded into the same classification as
    /// "half damage".
    pub fn is_weak_against(&self, defender: &ElementalType) -> bool {
        self.half_damage_to.contains(&defender.id) || self.no_damage_to.contains(&defender.id)
    }

    /// Every type id referenced by this type's relations
    pub fn related_ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.double_damage_to
            .iter()
            .chain(&self.half_damage_to)
            .chain(&self.no_damage_to)
            .copied()
    }
}

fn type_ids(ids: &[u32]) -> HashSet<TypeId> {
    ids.iter().copied().map(TypeId).collect()
}

impl fmt::Display for ElementalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}
