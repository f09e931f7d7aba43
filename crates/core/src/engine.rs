use crate::{Action, CardKind, DiceRoller, EventBus, MatchConfig, MatchState, Phase};
use thiserror::Error;

mod choice;
mod rotation;
mod setup;
mod turn;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid player count: {0}")]
    InvalidPlayerCount(usize),
    #[error("invalid selection")]
    InvalidSelection,
    #[error("card not available")]
    CardUnavailable,
    #[error("need at least one die")]
    EmptyFixSelection,
    #[error("illegal card choice: {0}")]
    IllegalCardChoice(CardKind),
    #[error("action not allowed in phase {0:?}")]
    InvalidPhase(Phase),
}

impl EngineError {
    /// Stable identifier handed to callers for re-prompting.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidPlayerCount(_) => "invalid_player_count",
            EngineError::InvalidSelection => "invalid_selection",
            EngineError::CardUnavailable => "card_unavailable",
            EngineError::EmptyFixSelection => "empty_fix_selection",
            EngineError::IllegalCardChoice(_) => "illegal_card_choice",
            EngineError::InvalidPhase(_) => "invalid_phase",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: MatchConfig,
}

impl Engine {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Applies one action and returns the next state. On error the input
    /// state is untouched and no events are emitted.
    pub fn advance(
        &self,
        state: &MatchState,
        action: &Action,
        dice: &mut dyn DiceRoller,
        events: &mut EventBus,
    ) -> Result<MatchState, EngineError> {
        let mut next = state.clone();
        let mut pending = EventBus::default();
        match (state.phase, action) {
            (Phase::Initialize, Action::Initialize { roster }) => {
                self.initialize(&mut next, roster, &mut pending)?
            }
            (Phase::Roll, Action::Roll) => self.roll(&mut next, dice, &mut pending)?,
            (
                Phase::Fix,
                Action::UseCard {
                    card_index,
                    selection,
                },
            ) => self.use_card(&mut next, *card_index, selection, dice, &mut pending)?,
            (Phase::Fix, Action::Fix { indices }) => self.fix(&mut next, indices, &mut pending)?,
            (Phase::Choice, Action::Choose { card }) => {
                self.choose(&mut next, *card, &mut pending)?
            }
            (phase, action) => {
                log::debug!("rejected {} during {:?}", action.label(), phase);
                return Err(EngineError::InvalidPhase(phase));
            }
        }
        events.append(&mut pending);
        Ok(next)
    }
}

/// Advances with the standard configuration, discarding events.
pub fn advance(
    state: &MatchState,
    action: &Action,
    dice: &mut dyn DiceRoller,
) -> Result<MatchState, EngineError> {
    Engine::default().advance(state, action, dice, &mut EventBus::default())
}
