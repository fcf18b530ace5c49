//! Move and pairwise efficiency

use std::sync::Arc;

use super::matchup::type_multiplier;
use crate::types::{Creature, ElementalType, Move};

/// Same-type attack bonus
pub const STAB_MULTIPLIER: f64 = 1.25;

/// One attacker move scored against a defender
#[derive(Debug, Clone, PartialEq)]
pub struct MoveEfficiency {
    pub attack_move: Arc<Move>,

    /// Attacker multiplier over the defender's mean multiplier, 3 decimals
    pub efficiency: f64,
}

/// Damage multiplier of `attack_move`, used by `attacker`, against `defender_types`
///
/// Not rounded.
pub fn move_efficiency(
    attacker: &Creature,
    attack_move: &Move,
    defender_types: &[Arc<ElementalType>],
) -> f64 {
    let move_type = &attack_move.elemental_type;
    let stab = if attacker.has_type(move_type.id) {
        STAB_MULTIPLIER
    } else {
        1.0
    };

    stab * type_multiplier(move_type, defender_types)
}

/// Mean multiplier of the defender's whole move pool against the attacker
///
/// The defender's equipped moves are unknown, so every quick and charge
/// move counts once.
pub fn defense_efficiency(defender: &Creature, attacker: &Creature) -> f64 {
    let total: f64 = defender
        .move_pool()
        .map(|m| move_efficiency(defender, m, attacker.types()))
        .sum();

    total / defender.move_count() as f64
}

/// Score one attacker move against a defender's averaged retaliation
pub fn pairwise_efficiency(
    attacker: &Creature,
    attack_move: &Arc<Move>,
    defender: &Creature,
) -> MoveEfficiency {
    relative_efficiency(
        attacker,
        attack_move,
        defender,
        defense_efficiency(defender, attacker),
    )
}

/// Pairwise efficiency with a precomputed defense mean
pub(crate) fn relative_efficiency(
    attacker: &Creature,
    attack_move: &Arc<Move>,
    defender: &Creature,
    defense: f64,
) -> MoveEfficiency {
    let attack = move_efficiency(attacker, attack_move, defender.types());

    MoveEfficiency {
        attack_move: Arc::clone(attack_move),
        efficiency: round_efficiency(attack / defense),
    }
}

/// Round to 3 decimal places
pub fn round_efficiency(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Chart {
        fire: Arc<ElementalType>,
        water: Arc<ElementalType>,
        grass: Arc<ElementalType>,
        ice: Arc<ElementalType>,
        normal: Arc<ElementalType>,
    }

    fn chart() -> Chart {
        Chart {
            fire: Arc::new(ElementalType::new(1, "fire").with_double_damage_to([3, 4])),
            water: Arc::new(
                ElementalType::new(2, "water")
                    .with_double_damage_to([1])
                    .with_half_damage_to([3]),
            ),
            grass: Arc::new(ElementalType::new(3, "grass").with_double_damage_to([2])),
            ice: Arc::new(ElementalType::new(4, "ice")),
            normal: Arc::new(ElementalType::new(5, "normal")),
        }
    }

    fn attack(id: u32, key: &str, t: &Arc<ElementalType>) -> Arc<Move> {
        Arc::new(Move::new(id, key, Arc::clone(t)))
    }

    /// The first move of `pool` is the quick move, the rest are charge moves
    fn creature(id: u32, types: &[&Arc<ElementalType>], pool: &[&Arc<Move>]) -> Creature {
        let types = types.iter().map(|&t| Arc::clone(t)).collect();
        let moves = |moves: &[&Arc<Move>]| -> Vec<Arc<Move>> {
            moves.iter().map(|&m| Arc::clone(m)).collect()
        };
        let (quick, charge) = pool.split_at(1);
        let key = format!("creature_{}", id);

        Creature::new(id, key, types, moves(quick), moves(charge), 3000)
            .unwrap()
    }

    #[test]
    fn test_fire_stab_against_water() {
        let c = chart();
        let ember = attack(10, "ember", &c.fire);
        let charmander = creature(4, &[&c.fire], &[&ember, &ember]);

        // Fire lists nothing against Water, so only STAB applies
        let scored = move_efficiency(&charmander, &ember, &[c.water.clone()]);
        assert_eq!(scored, 1.25);
    }

    #[test]
    fn test_water_against_fire_is_directional() {
        let c = chart();
        let bubble = attack(11, "bubble", &c.water);
        let squirtle = creature(7, &[&c.water], &[&bubble, &bubble]);

        let against_fire = move_efficiency(&squirtle, &bubble, &[c.fire.clone()]);
        let against_grass = move_efficiency(&squirtle, &bubble, &[c.grass.clone()]);
        assert_eq!(against_fire, 1.25 * 1.25);
        assert_eq!(against_grass, 1.25 * 0.8);
    }

    #[test]
    fn test_no_stab_for_off_type_move() {
        let c = chart();
        let ember = attack(10, "ember", &c.fire);
        let tackle = attack(12, "tackle", &c.normal);
        let rattata = creature(19, &[&c.normal], &[&tackle, &ember]);

        assert_eq!(move_efficiency(&rattata, &ember, &[c.grass.clone()]), 1.25);
        assert_eq!(move_efficiency(&rattata, &ember, &[c.normal.clone()]), 1.0);
    }

    #[test]
    fn test_stab_never_decreases() {
        let c = chart();
        let ember = attack(10, "ember", &c.fire);
        let tackle = attack(12, "tackle", &c.normal);
        let with_stab = creature(1, &[&c.fire], &[&ember, &ember]);
        let without_stab = creature(2, &[&c.normal], &[&tackle, &ember]);

        let defender_sets = [
            vec![c.water.clone()],
            vec![c.grass.clone(), c.ice.clone()],
            vec![],
        ];
        for defenders in defender_sets {
            assert!(
                move_efficiency(&with_stab, &ember, &defenders)
                    >= move_efficiency(&without_stab, &ember, &defenders)
            );
        }
    }

    #[test]
    fn test_extra_defending_types_are_monotonic() {
        let c = chart();
        let bubble = attack(11, "bubble", &c.water);
        let squirtle = creature(7, &[&c.water], &[&bubble, &bubble]);
        let score = |defenders: &[Arc<ElementalType>]| {
            move_efficiency(&squirtle, &bubble, defenders)
        };

        let base = score(&[c.normal.clone()]);
        let with_efficient = score(&[c.normal.clone(), c.fire.clone()]);
        let with_weak = score(&[c.normal.clone(), c.grass.clone()]);

        assert!(with_efficient >= base);
        assert!(with_weak <= base);
    }

    #[test]
    fn test_defense_efficiency_is_mean() {
        let c = chart();
        let bubble = attack(11, "bubble", &c.water);
        let tackle = attack(12, "tackle", &c.normal);
        let ember = attack(10, "ember", &c.fire);
        let squirtle = creature(7, &[&c.water], &[&bubble, &tackle, &bubble]);
        let charmander = creature(4, &[&c.fire], &[&ember, &ember]);

        // bubble: 1.25 * 1.25, tackle: 1.0, bubble again: 1.25 * 1.25
        let expected = (1.5625 + 1.0 + 1.5625) / 3.0;
        let mean = defense_efficiency(&squirtle, &charmander);
        assert!((mean - expected).abs() < 1e-12);
    }

    #[test]
    fn test_defense_efficiency_single_move() {
        let c = chart();
        let ember = attack(10, "ember", &c.fire);
        let tackle = attack(12, "tackle", &c.normal);
        let attacker = creature(1, &[&c.grass], &[&tackle, &tackle]);

        let one_move = creature(2, &[&c.fire], &[&ember]);
        assert_eq!(one_move.move_count(), 1);
        assert_eq!(defense_efficiency(&one_move, &attacker), 1.25 * 1.25);
    }

    #[test]
    fn test_defense_efficiency_order_invariant() {
        let c = chart();
        let pool = vec![
            attack(10, "ember", &c.fire),
            attack(11, "bubble", &c.water),
            attack(12, "tackle", &c.normal),
            attack(13, "vine_whip", &c.grass),
            attack(14, "ice_beam", &c.ice),
        ];
        let attacker = creature(1, &[&c.grass, &c.ice], &[&pool[2], &pool[2]]);
        let defender = |quick: &[Arc<Move>], charge: &[Arc<Move>]| {
            let types = vec![c.water.clone()];
            Creature::new(2, "defender", types, quick.to_vec(), charge.to_vec(), 3000)
                .unwrap()
        };
        let reference = defense_efficiency(&defender(&pool[..2], &pool[2..]), &attacker);

        for rotation in 0..pool.len() {
            let mut shuffled = pool.clone();
            shuffled.rotate_left(rotation);
            if rotation % 2 == 1 {
                shuffled.reverse();
            }
            let split = 1 + rotation % (pool.len() - 1);
            let (quick, charge) = shuffled.split_at(split);
            let mean = defense_efficiency(&defender(quick, charge), &attacker);

            assert!((mean - reference).abs() < 1e-12);
        }
    }

    #[test]
    fn test_pairwise_efficiency() {
        let c = chart();
        let bubble = attack(11, "bubble", &c.water);
        let ember = attack(10, "ember", &c.fire);
        let tackle = attack(12, "tackle", &c.normal);
        let squirtle = creature(7, &[&c.water], &[&bubble, &bubble]);
        let charmander = creature(4, &[&c.fire], &[&ember, &tackle]);

        // Attack: 1.25 STAB * 1.25 efficient. Defense: mean(ember 1.25 STAB, tackle 1.0)
        let scored = pairwise_efficiency(&squirtle, &bubble, &charmander);
        assert_eq!(scored.attack_move.key, "bubble");
        assert_eq!(scored.efficiency, round_efficiency(1.5625 / 1.125));
        assert_eq!(scored.efficiency, 1.389);
    }

    #[test]
    fn test_round_efficiency() {
        assert_eq!(round_efficiency(1.0), 1.0);
        assert_eq!(round_efficiency(1.38888), 1.389);
        assert_eq!(round_efficiency(0.6666666), 0.667);
        assert_eq!(round_efficiency(1.2494), 1.249);
    }
}
