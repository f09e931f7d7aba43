use crate::{CardKind, Direction};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    MatchStarted { players: usize },
    DiceRolled { player: String, dice: Vec<u8> },
    AbilityUsed { player: String, card: CardKind },
    DiceFixed {
        player: String,
        faces: Vec<u8>,
        remaining: usize,
    },
    CardTaken {
        player: String,
        card: Option<CardKind>,
    },
    ImmediateFired { player: String, card: CardKind },
    TurnPassed { from: String, to: String },
    RoundStarted { round: u32, direction: Direction },
    FinalRoundStarted { closer: String },
    LeaderChanged { player: String, dice: Vec<u8> },
    MatchEnded { winner: Option<String> },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn append(&mut self, other: &mut EventBus) {
        self.queue.append(&mut other.queue);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
