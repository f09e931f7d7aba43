use crate::CardKind;
use serde::{Deserialize, Serialize};

pub const INITIAL_DICE: u8 = 3;
pub const CARD_LEVELS: usize = 6;

/// Copies of each card per level for one player count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupplyRule {
    pub players: usize,
    pub per_level: [u32; CARD_LEVELS],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    #[serde(default = "default_initial_dice")]
    pub initial_dice: u8,
    #[serde(default = "default_min_players")]
    pub min_players: usize,
    #[serde(default = "default_max_players")]
    pub max_players: usize,
    pub supply: Vec<SupplyRule>,
}

fn default_initial_dice() -> u8 {
    INITIAL_DICE
}

fn default_min_players() -> usize {
    2
}

fn default_max_players() -> usize {
    5
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            initial_dice: INITIAL_DICE,
            min_players: default_min_players(),
            max_players: default_max_players(),
            supply: vec![
                SupplyRule {
                    players: 2,
                    per_level: [2, 2, 1, 1, 1, 1],
                },
                SupplyRule {
                    players: 3,
                    per_level: [3, 2, 2, 2, 2, 1],
                },
                SupplyRule {
                    players: 4,
                    per_level: [4, 3, 3, 2, 2, 1],
                },
                SupplyRule {
                    players: 5,
                    per_level: [5, 4, 3, 3, 3, 1],
                },
            ],
        }
    }
}

impl MatchConfig {
    pub fn accepts_player_count(&self, count: usize) -> bool {
        (self.min_players..=self.max_players).contains(&count)
            && self.supply_rule(count).is_some()
    }

    pub fn supply_rule(&self, players: usize) -> Option<&SupplyRule> {
        self.supply.iter().find(|rule| rule.players == players)
    }

    pub fn supply_for(&self, players: usize, card: CardKind) -> Option<u32> {
        let rule = self.supply_rule(players)?;
        rule.per_level.get(card.level() as usize).copied()
    }
}
