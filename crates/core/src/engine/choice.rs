use super::{Engine, EngineError};
use crate::*;

impl Engine {
    pub(super) fn choose(
        &self,
        state: &mut MatchState,
        card: Option<CardKind>,
        events: &mut EventBus,
    ) -> Result<(), EngineError> {
        if let Some(card) = card {
            if !is_choosable(state, card) {
                return Err(EngineError::IllegalCardChoice(card));
            }
        }
        let seat = state.active;
        let player = state
            .players
            .get_mut(seat)
            .ok_or(EngineError::InvalidPhase(Phase::Choice))?;
        let recorded = player.fixed_dice.clone();
        if let Some(card) = card {
            if !card.pay_cost(&player.fixed_dice, &mut player.cards) {
                return Err(EngineError::IllegalCardChoice(card));
            }
            player.cards.push(HeldCard::acquired(card));
        }
        let fired = player.reset_turn(self.config.initial_dice);
        let player_id = player.id.clone();

        events.push(Event::CardTaken {
            player: player_id.clone(),
            card,
        });
        for fired_card in fired {
            events.push(Event::ImmediateFired {
                player: player_id.clone(),
                card: fired_card,
            });
        }

        if let Some(card) = card {
            if let Some(left) = state.remaining.get_mut(&card) {
                *left = left.saturating_sub(1);
            }
            log::info!("{player_id} took {card}");
        }
        if card == Some(CardKind::King) {
            if let Some(left) = state.remaining.get_mut(&CardKind::Queen) {
                *left = left.saturating_sub(1);
            }
            log::info!("{player_id} holds the King; sudden death is coming");
            events.push(Event::LeaderChanged {
                player: player_id.clone(),
                dice: recorded.clone(),
            });
            state.top = Some(Leader {
                player_id: player_id.clone(),
                dice: recorded,
            });
        }
        state.last_player_id = Some(player_id);
        self.pass_turn(state, events);
        Ok(())
    }
}
