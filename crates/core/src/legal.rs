use crate::{CardKind, MatchState, Phase};

/// Dry run: may the active player take `card` with their current fixed
/// dice? Never mutates.
pub fn is_choosable(state: &MatchState, card: CardKind) -> bool {
    let Some(player) = state.active_player() else {
        return false;
    };
    state.round.allows_level(card.level())
        && state.remaining_of(card) > 0
        && (card.stackable() || !player.has_card(card))
        && card.cost_met(&player.fixed_dice, &player.cards)
}

/// Every card the active player could take at the choice step.
pub fn choosable_cards(state: &MatchState) -> Vec<CardKind> {
    if state.phase != Phase::Choice {
        return Vec::new();
    }
    CardKind::ALL
        .iter()
        .copied()
        .filter(|&card| is_choosable(state, card))
        .collect()
}

/// Indices of the active player's cards that can be invoked during the fix
/// step.
pub fn usable_cards(state: &MatchState) -> Vec<usize> {
    if state.phase != Phase::Fix {
        return Vec::new();
    }
    state
        .active_player()
        .map(|player| player.usable_cards())
        .unwrap_or_default()
}
