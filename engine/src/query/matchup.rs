//! Type-vs-type matchup classification

use std::sync::Arc;

use crate::types::ElementalType;

/// Multiplier for a move type that deals bonus damage to a defending type
pub const EFFICIENT_MULTIPLIER: f64 = 1.25;

/// Multiplier for a move type that deals reduced (or no) damage to a defending type
pub const WEAK_MULTIPLIER: f64 = 0.8;

/// How one attacking type fares against one defending type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Efficient,
    Neutral,
    Weak,
}

impl Effect {
    /// Classify `attack` against `defend`
    ///
    /// Data may list a type as both efficient and weak; efficient wins.
    pub fn classify(attack: &ElementalType, defend: &ElementalType) -> Self {
        if attack.is_efficient_against(defend) {
            Effect::Efficient
        } else if attack.is_weak_against(defend) {
            Effect::Weak
        } else {
            Effect::Neutral
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Effect::Efficient => EFFICIENT_MULTIPLIER,
            Effect::Neutral => 1.0,
            Effect::Weak => WEAK_MULTIPLIER,
        }
    }
}

/// Combined multiplier of `attack` against every defending type
pub fn type_multiplier(attack: &ElementalType, defenders: &[Arc<ElementalType>]) -> f64 {
    defenders
        .iter()
        .map(|defend| Effect::classify(attack, defend).multiplier())
        .product()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire() -> ElementalType {
        ElementalType::new(1, "fire")
            .with_double_damage_to([3])
            .with_half_damage_to([2])
    }

    fn water() -> Arc<ElementalType> {
        Arc::new(ElementalType::new(2, "water"))
    }

    fn grass() -> Arc<ElementalType> {
        Arc::new(ElementalType::new(3, "grass"))
    }

    #[test]
    fn test_classify() {
        assert_eq!(Effect::classify(&fire(), &grass()), Effect::Efficient);
        assert_eq!(Effect::classify(&fire(), &water()), Effect::Weak);
        assert_eq!(Effect::classify(&fire(), &fire()), Effect::Neutral);
    }

    #[test]
    fn test_classify_efficient_checked_first() {
        let confused = ElementalType::new(7, "confused")
            .with_double_damage_to([3])
            .with_half_damage_to([3])
            .with_no_damage_to([3]);

        assert_eq!(Effect::classify(&confused, &grass()), Effect::Efficient);
        assert_eq!(type_multiplier(&confused, &[grass()]), 1.25);
    }

    #[test]
    fn test_type_multiplier_dual_type() {
        // Efficient and weak cancel out
        assert_eq!(type_multiplier(&fire(), &[grass(), water()]), 1.25 * 0.8);
        assert_eq!(type_multiplier(&fire(), &[grass()]), 1.25);
        assert_eq!(type_multiplier(&fire(), &[water()]), 0.8);
    }

    #[test]
    fn test_type_multiplier_order_irrelevant() {
        assert_eq!(
            type_multiplier(&fire(), &[grass(), water()]),
            type_multiplier(&fire(), &[water(), grass()])
        );
    }

    #[test]
    fn test_type_multiplier_no_defenders() {
        assert_eq!(type_multiplier(&fire(), &[]), 1.0);
    }
}
