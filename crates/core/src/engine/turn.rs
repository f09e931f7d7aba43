use super::{Engine, EngineError};
use crate::*;

impl Engine {
    pub(super) fn roll(
        &self,
        state: &mut MatchState,
        dice: &mut dyn DiceRoller,
        events: &mut EventBus,
    ) -> Result<(), EngineError> {
        let player = state
            .players
            .get_mut(state.active)
            .ok_or(EngineError::InvalidPhase(Phase::Roll))?;
        player.roll(dice);
        log::debug!("{} rolled {:?}", player.id, player.active_dice);
        events.push(Event::DiceRolled {
            player: player.id.clone(),
            dice: player.active_dice.clone(),
        });
        state.phase = Phase::Fix;
        Ok(())
    }

    pub(super) fn use_card(
        &self,
        state: &mut MatchState,
        card_index: usize,
        selection: &Selection,
        dice: &mut dyn DiceRoller,
        events: &mut EventBus,
    ) -> Result<(), EngineError> {
        let player = state
            .players
            .get_mut(state.active)
            .ok_or(EngineError::CardUnavailable)?;
        let card = player.use_card(card_index, selection, dice)?;
        log::debug!("{} used {card}: {:?}", player.id, player.active_dice);
        events.push(Event::AbilityUsed {
            player: player.id.clone(),
            card,
        });
        Ok(())
    }

    pub(super) fn fix(
        &self,
        state: &mut MatchState,
        indices: &[usize],
        events: &mut EventBus,
    ) -> Result<(), EngineError> {
        let seat = state.active;
        let player = state
            .players
            .get_mut(seat)
            .ok_or(EngineError::InvalidPhase(Phase::Fix))?;
        let faces = player.fix(indices)?;
        events.push(Event::DiceFixed {
            player: player.id.clone(),
            faces,
            remaining: player.dice_num,
        });
        if player.dice_num > 0 {
            state.phase = Phase::Roll;
            return Ok(());
        }
        if !state.round.is_final() {
            state.phase = Phase::Choice;
            return Ok(());
        }

        let challenger = player.fixed_dice.clone();
        let player_id = player.id.clone();
        let leads = match &state.top {
            None => true,
            Some(leader) => takes_lead(&challenger, &leader.dice, player.has_queen()),
        };
        if leads {
            log::info!("{player_id} takes the lead with {challenger:?}");
            events.push(Event::LeaderChanged {
                player: player_id.clone(),
                dice: challenger.clone(),
            });
            state.top = Some(Leader {
                player_id: player_id.clone(),
                dice: challenger,
            });
        }
        state.last_player_id = Some(player_id);
        self.pass_turn(state, events);
        Ok(())
    }
}
