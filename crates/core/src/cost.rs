use crate::{CardKind, HeldCard};

/// Occurrences of each face; index 0 is unused.
pub fn face_counts(dice: &[u8]) -> [usize; 7] {
    let mut counts = [0usize; 7];
    for &face in dice {
        if let Some(slot) = counts.get_mut(face as usize) {
            *slot += 1;
        }
    }
    counts
}

pub fn has_same_faces(dice: &[u8], wanted: usize) -> bool {
    face_counts(dice).iter().skip(1).any(|&count| count >= wanted)
}

/// Disjoint pairs; five of a kind makes two.
pub fn pair_count(dice: &[u8]) -> usize {
    face_counts(dice).iter().skip(1).map(|count| count / 2).sum()
}

pub fn triple_count(dice: &[u8]) -> usize {
    face_counts(dice).iter().skip(1).map(|count| count / 3).sum()
}

pub fn pip_total(dice: &[u8]) -> u32 {
    dice.iter().map(|&face| face as u32).sum()
}

fn distinct_faces(counts: &[usize; 7]) -> usize {
    counts.iter().skip(1).filter(|&&count| count > 0).count()
}

fn pair_and_triple(dice: &[u8]) -> bool {
    let counts = face_counts(dice);
    if counts.iter().skip(1).any(|&count| count >= 5) {
        return true;
    }
    (1..=6).any(|triple| {
        counts[triple] >= 3 && (1..=6).any(|pair| pair != triple && counts[pair] >= 2)
    })
}

fn straight_for_magician(dice: &[u8]) -> bool {
    let counts = face_counts(dice);
    distinct_faces(&counts) >= 5 && (2..=5).all(|face| counts[face] > 0)
}

impl CardKind {
    /// Dry-run cost check. Looks only at the fixed dice and, for the
    /// Charlatan, the cards in hand.
    pub fn cost_met(self, fixed: &[u8], cards: &[HeldCard]) -> bool {
        match self {
            CardKind::Fool => true,
            CardKind::Charlatan => cards.iter().any(|held| held.card == CardKind::Fool),
            CardKind::Farmer => has_same_faces(fixed, 2),
            CardKind::Guard => has_same_faces(fixed, 3),
            CardKind::Hunter => has_same_faces(fixed, 4),
            CardKind::Knight => has_same_faces(fixed, 5),
            CardKind::General => has_same_faces(fixed, 6),
            CardKind::King => has_same_faces(fixed, 7),
            CardKind::Astronomer => pair_count(fixed) >= 2,
            CardKind::Bishop => pair_count(fixed) >= 3,
            CardKind::Laborer => pip_total(fixed) >= 15,
            CardKind::Merchant => pip_total(fixed) >= 20,
            CardKind::PawnBroker => pip_total(fixed) >= 30,
            CardKind::Philosopher => fixed.iter().all(|face| face % 2 == 0),
            CardKind::Maid => fixed.iter().all(|face| face % 2 == 1),
            CardKind::Magician => straight_for_magician(fixed),
            CardKind::Alchemist => distinct_faces(&face_counts(fixed)) == 6,
            CardKind::Noblewoman => pair_and_triple(fixed),
            CardKind::Nobleman => triple_count(fixed) >= 2,
            CardKind::Queen => false,
        }
    }

    /// Consumes whatever the cost takes out of the hand. Only the
    /// Charlatan takes anything: one Fool.
    pub fn pay_cost(self, fixed: &[u8], cards: &mut Vec<HeldCard>) -> bool {
        if !self.cost_met(fixed, cards) {
            return false;
        }
        if self == CardKind::Charlatan {
            if let Some(pos) = cards.iter().position(|held| held.card == CardKind::Fool) {
                cards.remove(pos);
            }
        }
        true
    }
}
