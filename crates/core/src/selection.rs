use crate::{CardKind, EngineError, SelectionShape, DIE_FACES};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Player input accompanying an ability. The variant must match the card's
/// [`SelectionShape`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Selection {
    #[default]
    None,
    Reroll { index: usize },
    Shift { indices: Vec<usize>, deltas: Vec<i8> },
    SetFace { index: usize, face: u8 },
    Flags(Vec<u8>),
    NewDie { face: u8 },
}

pub fn is_face(value: i16) -> bool {
    (1..=DIE_FACES as i16).contains(&value)
}

fn check_index(index: usize, active: &[u8]) -> Result<(), EngineError> {
    if index < active.len() {
        Ok(())
    } else {
        Err(EngineError::InvalidSelection)
    }
}

fn check_distinct(indices: &[usize], active: &[u8]) -> Result<(), EngineError> {
    let mut seen = HashSet::new();
    for &index in indices {
        check_index(index, active)?;
        if !seen.insert(index) {
            return Err(EngineError::InvalidSelection);
        }
    }
    Ok(())
}

/// Faces after applying `deltas`; fails if any die would leave 1..=6.
pub fn shifted_faces(
    active: &[u8],
    indices: &[usize],
    deltas: &[i8],
) -> Result<Vec<u8>, EngineError> {
    let mut next = active.to_vec();
    for (&index, &delta) in indices.iter().zip(deltas) {
        let face = *active.get(index).ok_or(EngineError::InvalidSelection)?;
        let value = face as i16 + delta as i16;
        if !is_face(value) {
            return Err(EngineError::InvalidSelection);
        }
        next[index] = value as u8;
    }
    Ok(next)
}

/// Checks a selection against a card's shape and rules. Never mutates.
pub fn validate_selection(
    card: CardKind,
    selection: &Selection,
    active: &[u8],
    fixed: &[u8],
) -> Result<(), EngineError> {
    match (card.selection_shape(), selection) {
        (SelectionShape::None, Selection::None) => Ok(()),
        (SelectionShape::Reroll, Selection::Reroll { index }) => check_index(*index, active),
        (SelectionShape::Shift { count }, Selection::Shift { indices, deltas }) => {
            if indices.len() != count || deltas.len() != count {
                return Err(EngineError::InvalidSelection);
            }
            check_distinct(indices, active)?;
            if card == CardKind::Maid {
                if deltas.iter().any(|delta| !(1..=3).contains(delta)) {
                    return Err(EngineError::InvalidSelection);
                }
            } else if deltas.iter().map(|&delta| delta as i32).sum::<i32>() != 0 {
                return Err(EngineError::InvalidSelection);
            }
            shifted_faces(active, indices, deltas).map(|_| ())
        }
        (SelectionShape::SetFace, Selection::SetFace { index, face }) => {
            check_index(*index, active)?;
            if !is_face(*face as i16) {
                return Err(EngineError::InvalidSelection);
            }
            if card == CardKind::Astronomer && !fixed.contains(face) {
                return Err(EngineError::InvalidSelection);
            }
            Ok(())
        }
        (SelectionShape::Flags { step }, Selection::Flags(flags)) => {
            if flags.len() != active.len() {
                return Err(EngineError::InvalidSelection);
            }
            for (&flag, &face) in flags.iter().zip(active) {
                if flag == 0 {
                    continue;
                }
                if flag != step {
                    return Err(EngineError::InvalidSelection);
                }
                if card != CardKind::Merchant && !is_face(face as i16 + step as i16) {
                    return Err(EngineError::InvalidSelection);
                }
            }
            Ok(())
        }
        (SelectionShape::NewDie, Selection::NewDie { face }) => {
            if is_face(*face as i16) {
                Ok(())
            } else {
                Err(EngineError::InvalidSelection)
            }
        }
        _ => Err(EngineError::InvalidSelection),
    }
}
