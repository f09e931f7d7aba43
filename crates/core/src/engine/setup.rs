use super::{Engine, EngineError};
use crate::*;
use std::collections::{BTreeMap, HashSet};

impl Engine {
    pub(super) fn initialize(
        &self,
        state: &mut MatchState,
        roster: &[RosterEntry],
        events: &mut EventBus,
    ) -> Result<(), EngineError> {
        let mut seen = HashSet::new();
        let mut players = Vec::new();
        for (id, name) in roster.iter().filter_map(RosterEntry::complete) {
            if seen.insert(id.to_string()) {
                players.push(Player::new(id, name, self.config.initial_dice));
            }
        }
        let count = players.len();
        if !self.config.accepts_player_count(count) {
            return Err(EngineError::InvalidPlayerCount(count));
        }

        let mut remaining = BTreeMap::new();
        for card in CardKind::ALL {
            let supply = self.config.supply_for(count, card).unwrap_or(0);
            remaining.insert(card, supply);
        }

        *state = MatchState {
            players,
            remaining,
            phase: Phase::Roll,
            ..MatchState::new()
        };
        log::info!("match started with {count} players");
        events.push(Event::MatchStarted { players: count });
        Ok(())
    }
}
