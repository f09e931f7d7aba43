use super::Engine;
use crate::*;

impl Engine {
    /// Hands the turn to the next seat, opening a new round (or the final
    /// one) after the last seat, or ends the match during sudden death.
    pub(super) fn pass_turn(&self, state: &mut MatchState, events: &mut EventBus) {
        let order = state.turn_order();
        let Some(pos) = order.iter().position(|&seat| seat == state.active) else {
            return;
        };
        let from = state.players[state.active].id.clone();
        let next_seat = order.get(pos + 1).copied();

        if state.round.is_final() {
            let leader_is_next = match (next_seat, &state.top) {
                (Some(seat), Some(leader)) => state.players[seat].id == leader.player_id,
                _ => false,
            };
            if next_seat.is_none() || leader_is_next {
                state.phase = Phase::End;
                let winner = state.top.as_ref().map(|leader| leader.player_id.clone());
                log::info!("match over, winner {winner:?}");
                events.push(Event::MatchEnded { winner });
                return;
            }
        }

        state.phase = Phase::Roll;
        match next_seat {
            Some(seat) => state.active = seat,
            None => self.start_round(state, events),
        }
        events.push(Event::TurnPassed {
            from,
            to: state.players[state.active].id.clone(),
        });
    }

    fn start_round(&self, state: &mut MatchState, events: &mut EventBus) {
        state.direction = state.direction.flipped();
        match (&state.top, state.round) {
            (Some(leader), Round::Number(_)) => {
                let closer = state
                    .players
                    .iter()
                    .position(Player::has_queen)
                    .or_else(|| state.seat_of(&leader.player_id));
                state.closer = closer;
                state.round = Round::Final;
                let closer_id = closer
                    .map(|seat| state.players[seat].id.clone())
                    .unwrap_or_default();
                log::info!("final round, {closer_id} plays last");
                events.push(Event::FinalRoundStarted { closer: closer_id });
            }
            (_, Round::Number(n)) => {
                state.round = Round::Number(n + 1);
                log::debug!("round {} begins {:?}", n + 1, state.direction);
                events.push(Event::RoundStarted {
                    round: n + 1,
                    direction: state.direction,
                });
            }
            (_, Round::Final) => {}
        }
        if let Some(&first) = state.turn_order().first() {
            state.active = first;
        }
    }
}
