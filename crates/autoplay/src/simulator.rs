use crate::{AutoplayConfig, AutoplayError};
use dicecourt_core::{
    best_group, choosable_cards, usable_cards, validate_selection, Action, CardKind, Engine, Event,
    EventBus, MatchConfig, MatchState, Phase, Player, RngState, RosterEntry, Round, Selection,
    SelectionShape, DIE_FACES,
};

#[derive(Debug)]
pub struct Simulator {
    pub engine: Engine,
    pub state: MatchState,
    pub dice: RngState,
    pub events: EventBus,
}

impl Simulator {
    /// Seats `players` bots named `p1..pN` and starts the match.
    pub fn new(config: MatchConfig, players: usize, seed: u64) -> Result<Self, AutoplayError> {
        let roster = (1..=players)
            .map(|seat| RosterEntry::new(format!("p{seat}"), format!("Bot {seat}")))
            .collect();
        let mut sim = Self::from_state(config, MatchState::new(), seed);
        sim.apply_action(&Action::Initialize { roster })
            .map_err(|err| AutoplayError::Setup(err.to_string()))?;
        Ok(sim)
    }

    /// Resumes from an existing state, e.g. a saved or hand-built one.
    pub fn from_state(config: MatchConfig, state: MatchState, seed: u64) -> Self {
        Self {
            engine: Engine::new(config),
            state,
            dice: RngState::from_seed(seed),
            events: EventBus::default(),
        }
    }

    pub fn phase_name(&self) -> String {
        format!("{:?}", self.state.phase)
    }

    pub fn round_name(&self) -> String {
        round_label(self.state.round)
    }

    pub fn leader_id(&self) -> Option<String> {
        self.state.top.as_ref().map(|leader| leader.player_id.clone())
    }

    pub fn describe_action(&self, action: &Action) -> Option<String> {
        let player = self.state.active_player()?;
        match action {
            Action::Roll => Some(format!("roll {} dice", player.dice_num)),
            Action::Fix { indices } => {
                let faces: Vec<u8> = indices
                    .iter()
                    .filter_map(|idx| player.active_dice.get(*idx).copied())
                    .collect();
                Some(format!(
                    "fix {faces:?} from {:?}, fixed so far {:?}",
                    player.active_dice, player.fixed_dice
                ))
            }
            Action::UseCard {
                card_index,
                selection,
            } => {
                let held = player.cards.get(*card_index)?;
                Some(format!(
                    "{}: {} with {selection:?}",
                    held.card,
                    held.card.ability_text()
                ))
            }
            Action::Choose { card: Some(card) } => Some(format!(
                "take {card} (level {}, paid with {:?})",
                card.level(),
                player.fixed_dice
            )),
            Action::Choose { card: None } => Some("take nothing".to_string()),
            Action::Initialize { .. } => None,
        }
    }

    /// Applies one action and returns the events it produced.
    pub fn apply_action(&mut self, action: &Action) -> Result<Vec<Event>, AutoplayError> {
        self.state = self
            .engine
            .advance(&self.state, action, &mut self.dice, &mut self.events)?;
        Ok(self.events.drain().collect())
    }

    pub fn legal_actions(&self, cfg: &AutoplayConfig) -> Vec<Action> {
        let Some(player) = self.state.active_player() else {
            return Vec::new();
        };
        let mut actions = Vec::new();
        match self.state.phase {
            Phase::Roll => actions.push(Action::Roll),
            Phase::Fix => {
                for card_index in usable_cards(&self.state) {
                    let card = player.cards[card_index].card;
                    if let Some(selection) = selection_for(card, player) {
                        actions.push(Action::UseCard {
                            card_index,
                            selection,
                        });
                    }
                }
                for indices in fix_candidates(&player.active_dice, cfg.max_fix_candidates) {
                    actions.push(Action::Fix { indices });
                }
            }
            Phase::Choice => {
                actions.push(Action::Choose { card: None });
                for card in choosable_cards(&self.state) {
                    actions.push(Action::Choose { card: Some(card) });
                }
            }
            Phase::Initialize | Phase::End => {}
        }
        actions
    }
}

pub fn round_label(round: Round) -> String {
    match round.number() {
        Some(n) => format!("round {n}"),
        None => "final".to_string(),
    }
}

/// Fixing every die always comes first so the turn can finish; then one
/// candidate per face showing.
fn fix_candidates(active: &[u8], cap: usize) -> Vec<Vec<usize>> {
    if active.is_empty() {
        return Vec::new();
    }
    let mut out = vec![(0..active.len()).collect::<Vec<usize>>()];
    for face in (1..=DIE_FACES).rev() {
        let group: Vec<usize> = active
            .iter()
            .enumerate()
            .filter(|(_, value)| **value == face)
            .map(|(idx, _)| idx)
            .collect();
        if !group.is_empty() && !out.contains(&group) {
            out.push(group);
        }
    }
    out.truncate(cap.max(1));
    out
}

/// Face the player is collecting: the best fixed group, else the best group
/// showing.
fn target_face(player: &Player) -> u8 {
    let (_, fixed_face) = best_group(&player.fixed_dice);
    if fixed_face > 0 {
        return fixed_face;
    }
    match best_group(&player.active_dice) {
        (_, 0) => DIE_FACES,
        (_, face) => face,
    }
}

/// A selection pushing the player's dice toward their target face, if the
/// card can do anything useful right now.
fn selection_for(card: CardKind, player: &Player) -> Option<Selection> {
    let active = &player.active_dice;
    let target = target_face(player);
    let stray = active.iter().position(|&face| face != target);
    let selection = match card.selection_shape() {
        SelectionShape::None => Selection::None,
        SelectionShape::Reroll => Selection::Reroll { index: stray? },
        SelectionShape::NewDie => Selection::NewDie { face: target },
        SelectionShape::SetFace => Selection::SetFace {
            index: stray?,
            face: target,
        },
        SelectionShape::Flags { step } => {
            let flags: Vec<u8> = active
                .iter()
                .map(|&face| {
                    let hit = if card == CardKind::Merchant {
                        face != target
                    } else {
                        face + step == target
                    };
                    if hit {
                        step
                    } else {
                        0
                    }
                })
                .collect();
            if flags.iter().all(|&flag| flag == 0) {
                return None;
            }
            Selection::Flags(flags)
        }
        SelectionShape::Shift { count: 1 } => {
            let (index, delta) = active.iter().enumerate().find_map(|(idx, &face)| {
                let delta = target as i16 - face as i16;
                (1..=3).contains(&delta).then_some((idx, delta as i8))
            })?;
            Selection::Shift {
                indices: vec![index],
                deltas: vec![delta],
            }
        }
        SelectionShape::Shift { count } => {
            let (mut indices, mut deltas) = balanced_shift(active, target)?;
            while indices.len() < count {
                let spare = (0..active.len()).find(|idx| !indices.contains(idx))?;
                indices.push(spare);
                deltas.push(0);
            }
            Selection::Shift { indices, deltas }
        }
    };
    validate_selection(card, &selection, active, &player.fixed_dice)
        .ok()
        .map(|_| selection)
}

/// Moves one stray die onto `target` and offsets the change on another die.
fn balanced_shift(active: &[u8], target: u8) -> Option<(Vec<usize>, Vec<i8>)> {
    for (i, &face) in active.iter().enumerate() {
        if face == target {
            continue;
        }
        let delta = target as i16 - face as i16;
        for (j, &other) in active.iter().enumerate() {
            let moved = other as i16 - delta;
            if i != j && other != target && (1..=DIE_FACES as i16).contains(&moved) {
                return Some((vec![i, j], vec![delta as i8, -delta as i8]));
            }
        }
    }
    None
}
