use crate::{CardKind, Player};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Initialize,
    Roll,
    Fix,
    Choice,
    End,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Round {
    Number(u32),
    /// Sudden death; once here the match never returns to a numbered round.
    Final,
}

impl Round {
    pub fn is_final(self) -> bool {
        matches!(self, Round::Final)
    }

    pub fn number(self) -> Option<u32> {
        match self {
            Round::Number(n) => Some(n),
            Round::Final => None,
        }
    }

    /// Cards of `level` may be taken from this round on.
    pub fn allows_level(self, level: u8) -> bool {
        match self {
            Round::Number(n) => level as u32 <= n,
            Round::Final => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// Current sudden-death leader and the dice that put them there.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Leader {
    pub player_id: String,
    pub dice: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchState {
    /// Seating order. Turn order is derived from `direction` and `closer`.
    pub players: Vec<Player>,
    /// Seat of the player whose turn it is.
    pub active: usize,
    pub remaining: BTreeMap<CardKind, u32>,
    pub phase: Phase,
    pub round: Round,
    #[serde(default)]
    pub top: Option<Leader>,
    #[serde(default)]
    pub last_player_id: Option<String>,
    pub direction: Direction,
    /// Seat that plays last in the final round.
    #[serde(default)]
    pub closer: Option<usize>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            active: 0,
            remaining: BTreeMap::new(),
            phase: Phase::Initialize,
            round: Round::Number(1),
            top: None,
            last_player_id: None,
            direction: Direction::Forward,
            closer: None,
        }
    }

    pub fn active_player(&self) -> Option<&Player> {
        self.players.get(self.active)
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    pub fn seat_of(&self, id: &str) -> Option<usize> {
        self.players.iter().position(|player| player.id == id)
    }

    pub fn remaining_of(&self, card: CardKind) -> u32 {
        self.remaining.get(&card).copied().unwrap_or(0)
    }

    /// Seats in the order they play this round.
    pub fn turn_order(&self) -> Vec<usize> {
        let count = self.players.len();
        let mut order: Vec<usize> = match self.direction {
            Direction::Forward => (0..count).collect(),
            Direction::Reverse => (0..count).rev().collect(),
        };
        if let Some(closer) = self.closer {
            if let Some(pos) = order.iter().position(|&seat| seat == closer) {
                let seat = order.remove(pos);
                order.push(seat);
            }
        }
        order
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::End
    }

    /// The leader once the match has ended.
    pub fn winner(&self) -> Option<&Player> {
        if !self.is_over() {
            return None;
        }
        let leader = self.top.as_ref()?;
        self.player(&leader.player_id)
    }
}
