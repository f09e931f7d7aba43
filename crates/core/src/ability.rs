use crate::{
    shifted_faces, validate_selection, CardKind, DiceRoller, EngineError, HeldCard, Player,
    Selection, Timing,
};

impl CardKind {
    /// Face of the die an "add a die" card appends.
    pub fn added_face(self) -> Option<u8> {
        match self {
            CardKind::Laborer => Some(1),
            CardKind::Guard => Some(2),
            CardKind::Hunter => Some(3),
            CardKind::PawnBroker => Some(4),
            CardKind::Knight => Some(5),
            CardKind::Bishop => Some(6),
            _ => None,
        }
    }
}

/// Validates `selection` then applies `card`'s ability to the player's active
/// dice. Nothing is touched when validation fails.
pub fn apply_ability(
    player: &mut Player,
    card: CardKind,
    selection: &Selection,
    dice: &mut dyn DiceRoller,
) -> Result<(), EngineError> {
    if card.timing() != Timing::Ability {
        return Err(EngineError::CardUnavailable);
    }
    validate_selection(card, selection, &player.active_dice, &player.fixed_dice)?;

    if let Some(face) = card.added_face() {
        player.active_dice.push(face);
        return Ok(());
    }
    match (card, selection) {
        (CardKind::Fool, Selection::Reroll { index }) => {
            player.active_dice[*index] = dice.roll_die();
        }
        (_, Selection::Shift { indices, deltas }) => {
            player.active_dice = shifted_faces(&player.active_dice, indices, deltas)?;
        }
        (_, Selection::SetFace { index, face }) => {
            player.active_dice[*index] = *face;
        }
        (CardKind::Merchant, Selection::Flags(flags)) => {
            for (slot, &flag) in player.active_dice.iter_mut().zip(flags) {
                if flag != 0 {
                    *slot = dice.roll_die();
                }
            }
        }
        (_, Selection::Flags(flags)) => {
            for (slot, &flag) in player.active_dice.iter_mut().zip(flags) {
                *slot += flag;
            }
        }
        (CardKind::Queen, Selection::NewDie { face }) => {
            player.active_dice.push(*face);
        }
        _ => return Err(EngineError::InvalidSelection),
    }
    Ok(())
}

/// Fires an immediate-timing card. Returns false for ability cards.
pub fn fire_immediate(player: &mut Player, card: CardKind) -> bool {
    match card {
        CardKind::Charlatan | CardKind::Farmer => player.dice_num += 1,
        CardKind::General => player.dice_num += 2,
        CardKind::King => {
            if !player.has_queen() {
                player.cards.push(HeldCard {
                    card: CardKind::Queen,
                    available: true,
                });
            }
        }
        _ => return false,
    }
    true
}
