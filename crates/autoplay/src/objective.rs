use dicecourt_core::{best_group, CardKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ObjectiveWeights {
    /// Per die in the largest group of fixed dice.
    pub group: f64,
    /// Scaled by the group's face, breaks ties toward high faces.
    pub face: f64,
    /// Per die left to reroll after a fix.
    pub reroll: f64,
    /// Flat value of invoking an ability before fixing.
    pub ability: f64,
    pub level: f64,
    pub king: f64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self {
            group: 1.0,
            face: 0.3,
            reroll: 0.45,
            ability: 2.5,
            level: 1.0,
            king: 100.0,
        }
    }
}

/// Value of fixing `chosen` on top of the already fixed dice, leaving `left`
/// dice to reroll.
pub fn fix_value(fixed: &[u8], chosen: &[u8], left: usize, weights: ObjectiveWeights) -> f64 {
    let mut all = fixed.to_vec();
    all.extend_from_slice(chosen);
    let (size, face) = best_group(&all);
    weights.group * size as f64
        + weights.face * face as f64 / 6.0
        + weights.reroll * left as f64
}

/// Value of taking `card` at the choice step. Not taking a card scores 0.
pub fn card_value(card: CardKind, weights: ObjectiveWeights) -> f64 {
    let base = weights.level * (card.level() as f64 + 1.0);
    match card {
        CardKind::King => base + weights.king,
        // Dice growth compounds over the match.
        CardKind::Farmer | CardKind::Charlatan | CardKind::General => base + weights.level,
        _ => base,
    }
}
