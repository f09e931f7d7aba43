use crate::face_counts;
use std::cmp::Ordering;

/// Largest group of equal faces as `(size, face)`; ties go to the higher face.
/// An empty roll is `(0, 0)`.
pub fn best_group(dice: &[u8]) -> (usize, u8) {
    let counts = face_counts(dice);
    let mut best = (0usize, 0u8);
    for face in 1..=6u8 {
        let size = counts[face as usize];
        if size > 0 && size >= best.0 {
            best = (size, face);
        }
    }
    best
}

/// Sudden-death comparison: bigger group first, then higher face.
/// `Greater` means `challenger` beats `leader`.
pub fn compare_dice(challenger: &[u8], leader: &[u8]) -> Ordering {
    best_group(challenger).cmp(&best_group(leader))
}

/// Whether a challenger takes the lead; a Queen holder wins exact ties.
pub fn takes_lead(challenger: &[u8], leader: &[u8], challenger_has_queen: bool) -> bool {
    match compare_dice(challenger, leader) {
        Ordering::Greater => true,
        Ordering::Equal => challenger_has_queen,
        Ordering::Less => false,
    }
}
