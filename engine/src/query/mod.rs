//! Matchup and counter queries
//!
//! Data flows one way through these modules:
//!
//! ```text
//! matchup (type vs type) → efficiency (move vs creature) → counters (roster vs creature)
//! ```

mod counters;
mod efficiency;
mod matchup;


pub use counters::{
    BestMove, COUNTER_EFFICIENCY_THRESHOLD, CounterOptions, CounterResult, REFERENCE_CP,
    best_attack, required_cp, select_counters,
};
pub use efficiency::{
    MoveEfficiency, STAB_MULTIPLIER, defense_efficiency, move_efficiency, pairwise_efficiency,
    round_efficiency,
};
pub use matchup::{EFFICIENT_MULTIPLIER, Effect, WEAK_MULTIPLIER, type_multiplier};
