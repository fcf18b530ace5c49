//! Resolved, validated reference data

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use counterdex_data::{DataSet, MoveRecord, PokemonRecord};

use crate::error::IntegrityError;
use crate::query::{CounterOptions, CounterResult, select_counters};
use crate::types::{Creature, CreatureId, ElementalType, Move, MoveId, TypeId};

/// Types, moves and roster with every id reference resolved
///
/// Built once at startup. Every dangling reference is rejected here so the
/// counter queries never meet missing data.
#[derive(Debug, Clone)]
pub struct Pokedex {
    types: HashMap<TypeId, Arc<ElementalType>>,
    moves: HashMap<MoveId, Arc<Move>>,
    roster: Vec<Arc<Creature>>,
    index: HashMap<CreatureId, usize>,
}

impl Pokedex {
    /// Resolve and validate raw reference data
    pub fn from_data(data: &DataSet) -> Result<Self, IntegrityError> {
        let types = resolve_types(data)?;
        let moves = resolve_moves(&data.moves, &types)?;

        let mut roster = Vec::with_capacity(data.pokemons.len());
        let mut index = HashMap::with_capacity(data.pokemons.len());
        for record in &data.pokemons {
            let creature = resolve_creature(record, &types, &moves)?;
            if index.insert(creature.id(), roster.len()).is_some() {
                return Err(IntegrityError::DuplicateId {
                    collection: "pokemon",
                    id: record.id,
                });
            }
            roster.push(Arc::new(creature));
        }

        tracing::debug!(
            types = types.len(),
            moves = moves.len(),
            creatures = roster.len(),
            "Resolved reference data"
        );

        Ok(Self {
            types,
            moves,
            roster,
            index,
        })
    }

    /// All creatures, in data file order
    pub fn roster(&self) -> &[Arc<Creature>] {
        &self.roster
    }

    pub fn creature(&self, id: CreatureId) -> Option<&Arc<Creature>> {
        self.index.get(&id).map(|&i| &self.roster[i])
    }

    pub fn elemental_type(&self, id: TypeId) -> Option<&Arc<ElementalType>> {
        self.types.get(&id)
    }

    pub fn move_by_id(&self, id: MoveId) -> Option<&Arc<Move>> {
        self.moves.get(&id)
    }

    /// Counters for `defender` with the default threshold and reference CP
    pub fn counters(&self, defender: CreatureId) -> Result<Vec<CounterResult>, IntegrityError> {
        self.counters_with(defender, &CounterOptions::default())
    }

    pub fn counters_with(
        &self,
        defender: CreatureId,
        options: &CounterOptions,
    ) -> Result<Vec<CounterResult>, IntegrityError> {
        let defender = self
            .creature(defender)
            .ok_or(IntegrityError::UnknownCreature(defender))?;

        Ok(select_counters(defender, &self.roster, options))
    }
}

fn resolve_types(data: &DataSet) -> Result<HashMap<TypeId, Arc<ElementalType>>, IntegrityError> {
    let mut types = HashMap::with_capacity(data.types.len());
    for record in &data.types {
        match types.entry(TypeId(record.id)) {
            Entry::Occupied(_) => {
                return Err(IntegrityError::DuplicateId {
                    collection: "type",
                    id: record.id,
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(ElementalType::from_record(record)));
            }
        }
    }

    // Relations may point at types defined later, so check after indexing
    for t in types.values() {
        if let Some(type_id) = t.related_ids().find(|id| !types.contains_key(id)) {
            return Err(IntegrityError::UnknownType {
                type_id,
                referenced_by: format!("type {}", t.key),
            });
        }
    }

    Ok(types)
}

fn resolve_moves(
    records: &[MoveRecord],
    types: &HashMap<TypeId, Arc<ElementalType>>,
) -> Result<HashMap<MoveId, Arc<Move>>, IntegrityError> {
    let mut moves = HashMap::with_capacity(records.len());
    for record in records {
        let elemental_type = lookup_type(types, record.type_id, || format!("move {}", record.key))?;
        let resolved = Arc::new(Move::new(record.id, record.key.clone(), elemental_type));
        if moves.insert(resolved.id, resolved).is_some() {
            return Err(IntegrityError::DuplicateId {
                collection: "move",
                id: record.id,
            });
        }
    }
    Ok(moves)
}

fn resolve_creature(
    record: &PokemonRecord,
    types: &HashMap<TypeId, Arc<ElementalType>>,
    moves: &HashMap<MoveId, Arc<Move>>,
) -> Result<Creature, IntegrityError> {
    let id = CreatureId(record.id);
    let referenced_by = || format!("creature {}", record.key);

    let creature_types = record
        .types
        .iter()
        .map(|&type_id| lookup_type(types, type_id, referenced_by))
        .collect::<Result<Vec<_>, _>>()?;

    let pools = [
        ("quick", &record.moves.quick),
        ("charge", &record.moves.charge),
    ];
    for (pool, ids) in pools {
        if ids.is_empty() {
            return Err(IntegrityError::EmptyMovePool { creature: id, pool });
        }
    }
    let quick = resolve_pool(id, &record.moves.quick, moves)?;
    let charge = resolve_pool(id, &record.moves.charge, moves)?;

    let creature = Creature::new(
        record.id,
        record.key.clone(),
        creature_types,
        quick,
        charge,
        record.cp_max,
    )?;
    Ok(creature.with_tiers(record.tiers.clone()))
}

fn resolve_pool(
    creature: CreatureId,
    ids: &[u32],
    moves: &HashMap<MoveId, Arc<Move>>,
) -> Result<Vec<Arc<Move>>, IntegrityError> {
    ids.iter()
        .map(|&id| {
            let move_id = MoveId(id);
            moves
                .get(&move_id)
                .cloned()
                .ok_or(IntegrityError::UnknownMove { move_id, creature })
        })
        .collect()
}

fn lookup_type(
    types: &HashMap<TypeId, Arc<ElementalType>>,
    id: u32,
    referenced_by: impl FnOnce() -> String,
) -> Result<Arc<ElementalType>, IntegrityError> {
    let type_id = TypeId(id);
    types
        .get(&type_id)
        .cloned()
        .ok_or_else(|| IntegrityError::UnknownType {
            type_id,
            referenced_by: referenced_by(),
        })
}
