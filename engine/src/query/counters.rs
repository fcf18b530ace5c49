//! Counter selection over a roster

use std::sync::Arc;

use serde_json::Value;

use super::efficiency::{MoveEfficiency, defense_efficiency, relative_efficiency};
use crate::types::{Creature, CreatureId, MoveId, TypeId};

/// Minimum efficiency for a move to make its user a counter
pub const COUNTER_EFFICIENCY_THRESHOLD: f64 = 1.25;

/// Reference combat power budget; required CP is this divided by efficiency
pub const REFERENCE_CP: f64 = 2400.0;

/// Tunables for counter selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterOptions {
    /// Moves scoring strictly below this are discarded
    pub threshold: f64,

    pub reference_cp: f64,
}

impl Default for CounterOptions {
    fn default() -> Self {
        Self {
            threshold: COUNTER_EFFICIENCY_THRESHOLD,
            reference_cp: REFERENCE_CP,
        }
    }
}

/// The move a counter should use
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BestMove {
    pub id: MoveId,
    pub key: String,
    pub type_id: TypeId,
    pub type_key: String,
}

/// One creature that counters the selected defender
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CounterResult {
    pub attacker_id: CreatureId,
    pub attacker_key: String,
    pub cp_max: u32,
    pub best_move: BestMove,

    /// Rounded to 3 decimals
    pub efficiency: f64,

    /// Lowest CP at which this counter is worth fielding
    pub required_cp: u32,

    /// The attacker's tier placement, as found in the data files
    pub tiers: Value,
}

/// CP needed to realize `efficiency`
pub fn required_cp(efficiency: f64, reference_cp: f64) -> u32 {
    (reference_cp / efficiency).round() as u32
}

/// The candidate's highest-scoring qualifying move against `defender`
///
/// Ties go to the move listed first (quick moves before charge moves).
pub fn best_attack(
    candidate: &Creature,
    defender: &Creature,
    options: &CounterOptions,
) -> Option<MoveEfficiency> {
    // The defender's retaliation only depends on the candidate's types
    let defense = defense_efficiency(defender, candidate);

    candidate
        .move_pool()
        .map(|m| relative_efficiency(candidate, m, defender, defense))
        .filter(|scored| scored.efficiency >= options.threshold)
        .fold(None, |best: Option<MoveEfficiency>, scored| match best {
            Some(current) if current.efficiency >= scored.efficiency => Some(current),
            _ => Some(scored),
        })
}

/// Every creature in `roster` that counters `defender`, cheapest first
///
/// The defender itself is not excluded. Counters needing the same CP keep
/// their roster order.
pub fn select_counters(
    defender: &Creature,
    roster: &[Arc<Creature>],
    options: &CounterOptions,
) -> Vec<CounterResult> {
    let mut counters: Vec<CounterResult> = roster
        .iter()
        .filter_map(|candidate| counter_for(candidate, defender, options))
        .collect();

    counters.sort_by_key(|c| c.required_cp);

    tracing::debug!(
        defender = %defender,
        candidates = roster.len(),
        counters = counters.len(),
        "Selected counters"
    );

    counters
}

fn counter_for(
    candidate: &Creature,
    defender: &Creature,
    options: &CounterOptions,
) -> Option<CounterResult> {
    let best = best_attack(candidate, defender, options)?;
    let required_cp = required_cp(best.efficiency, options.reference_cp);

    if required_cp > candidate.cp_max() {
        tracing::trace!(
            candidate = %candidate,
            required_cp,
            cp_max = candidate.cp_max(),
            "Counter out of CP reach"
        );
        return None;
    }

    let attack_move = &best.attack_move;
    Some(CounterResult {
        attacker_id: candidate.id(),
        attacker_key: candidate.key().to_string(),
        cp_max: candidate.cp_max(),
        best_move: BestMove {
            id: attack_move.id,
            key: attack_move.key.clone(),
            type_id: attack_move.elemental_type.id,
            type_key: attack_move.elemental_type.key.clone(),
        },
        efficiency: best.efficiency,
        required_cp,
        tiers: candidate.tiers().clone(),
    })
}
