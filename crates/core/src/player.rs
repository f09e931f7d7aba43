use crate::{
    apply_ability, fire_immediate, CardKind, DiceRoller, EngineError, HeldCard, Selection, Timing,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub dice_num: usize,
    #[serde(default)]
    pub active_dice: Vec<u8>,
    #[serde(default)]
    pub fixed_dice: Vec<u8>,
    #[serde(default)]
    pub cards: Vec<HeldCard>,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, initial_dice: u8) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            dice_num: initial_dice as usize,
            active_dice: Vec::new(),
            fixed_dice: Vec::new(),
            cards: Vec::new(),
        }
    }

    pub fn has_card(&self, card: CardKind) -> bool {
        self.cards.iter().any(|held| held.card == card)
    }

    pub fn has_queen(&self) -> bool {
        self.has_card(CardKind::Queen)
    }

    /// Rolls `dice_num` fresh dice. The first roll of a turn also makes the
    /// player's ability cards usable again.
    pub fn roll(&mut self, dice: &mut dyn DiceRoller) {
        if self.fixed_dice.is_empty() {
            self.refresh_abilities();
        }
        self.active_dice = (0..self.dice_num).map(|_| dice.roll_die()).collect();
    }

    pub fn refresh_abilities(&mut self) {
        for held in &mut self.cards {
            if held.card.timing() == Timing::Ability {
                held.available = true;
            }
        }
    }

    /// Indices into `cards` the player may invoke right now.
    pub fn usable_cards(&self) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, held)| held.available && held.card.timing() == Timing::Ability)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Invokes the ability card at `card_index` and spends it for the turn.
    pub fn use_card(
        &mut self,
        card_index: usize,
        selection: &Selection,
        dice: &mut dyn DiceRoller,
    ) -> Result<CardKind, EngineError> {
        let held = self
            .cards
            .get(card_index)
            .copied()
            .filter(|held| held.available && held.card.timing() == Timing::Ability)
            .ok_or(EngineError::CardUnavailable)?;
        apply_ability(self, held.card, selection, dice)?;
        self.cards[card_index].available = false;
        Ok(held.card)
    }

    /// Moves the dice at `indices` from active to fixed and returns their
    /// faces. `dice_num` becomes the number of dice left to reroll.
    pub fn fix(&mut self, indices: &[usize]) -> Result<Vec<u8>, EngineError> {
        if indices.is_empty() {
            return Err(EngineError::EmptyFixSelection);
        }
        let mut seen = HashSet::new();
        for &idx in indices {
            if idx >= self.active_dice.len() || !seen.insert(idx) {
                return Err(EngineError::InvalidSelection);
            }
        }
        let faces: Vec<u8> = indices.iter().map(|&idx| self.active_dice[idx]).collect();
        let mut kept = Vec::with_capacity(self.active_dice.len() - indices.len());
        for (idx, face) in self.active_dice.iter().enumerate() {
            if !seen.contains(&idx) {
                kept.push(*face);
            }
        }
        self.fixed_dice.extend_from_slice(&faces);
        self.active_dice = kept;
        self.dice_num = self.active_dice.len();
        Ok(faces)
    }

    /// Closes the turn: back to the starting dice count, every immediate
    /// card fires once, fixed dice are cleared. Returns the cards fired.
    pub fn reset_turn(&mut self, initial_dice: u8) -> Vec<CardKind> {
        self.dice_num = initial_dice as usize;
        let immediate: Vec<CardKind> = self
            .cards
            .iter()
            .map(|held| held.card)
            .filter(|card| card.timing() == Timing::Immediate)
            .collect();
        let fired: Vec<CardKind> = immediate
            .into_iter()
            .filter(|&card| fire_immediate(self, card))
            .collect();
        self.fixed_dice.clear();
        self.active_dice.clear();
        fired
    }
}
