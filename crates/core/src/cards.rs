use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Fool,
    Charlatan,
    Farmer,
    Philosopher,
    Laborer,
    Guard,
    Maid,
    Merchant,
    Astronomer,
    Hunter,
    PawnBroker,
    Noblewoman,
    Magician,
    Knight,
    Bishop,
    Alchemist,
    General,
    Nobleman,
    King,
    Queen,
}

/// When a card's ability fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timing {
    /// Fires on its own every time the holder's turn is reset.
    Immediate,
    /// Invoked by the holder during the fix step, once per turn.
    Ability,
}

/// What a player has to submit when invoking an ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionShape {
    None,
    /// One active die to reroll.
    Reroll,
    /// `count` distinct active dice with one delta each.
    Shift { count: usize },
    /// One active die and the face it becomes.
    SetFace,
    /// One flag per active die; a flag is `0` or `step`.
    Flags { step: u8 },
    /// Face of a brand new die.
    NewDie,
}

impl CardKind {
    pub const ALL: [CardKind; 20] = [
        CardKind::Fool,
        CardKind::Charlatan,
        CardKind::Farmer,
        CardKind::Philosopher,
        CardKind::Laborer,
        CardKind::Guard,
        CardKind::Maid,
        CardKind::Merchant,
        CardKind::Astronomer,
        CardKind::Hunter,
        CardKind::PawnBroker,
        CardKind::Noblewoman,
        CardKind::Magician,
        CardKind::Knight,
        CardKind::Bishop,
        CardKind::Alchemist,
        CardKind::General,
        CardKind::Nobleman,
        CardKind::King,
        CardKind::Queen,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CardKind::Fool => "Fool",
            CardKind::Charlatan => "Charlatan",
            CardKind::Farmer => "Farmer",
            CardKind::Philosopher => "Philosopher",
            CardKind::Laborer => "Laborer",
            CardKind::Guard => "Guard",
            CardKind::Maid => "Maid",
            CardKind::Merchant => "Merchant",
            CardKind::Astronomer => "Astronomer",
            CardKind::Hunter => "Hunter",
            CardKind::PawnBroker => "PawnBroker",
            CardKind::Noblewoman => "Noblewoman",
            CardKind::Magician => "Magician",
            CardKind::Knight => "Knight",
            CardKind::Bishop => "Bishop",
            CardKind::Alchemist => "Alchemist",
            CardKind::General => "General",
            CardKind::Nobleman => "Nobleman",
            CardKind::King => "King",
            CardKind::Queen => "Queen",
        }
    }

    pub fn from_name(name: &str) -> Option<CardKind> {
        let wanted = name.trim();
        CardKind::ALL
            .iter()
            .copied()
            .find(|card| card.name().eq_ignore_ascii_case(wanted))
    }

    pub fn level(self) -> u8 {
        match self {
            CardKind::Fool | CardKind::Charlatan => 0,
            CardKind::Farmer
            | CardKind::Philosopher
            | CardKind::Laborer
            | CardKind::Guard
            | CardKind::Maid => 1,
            CardKind::Merchant | CardKind::Astronomer | CardKind::Hunter => 2,
            CardKind::PawnBroker
            | CardKind::Noblewoman
            | CardKind::Magician
            | CardKind::Knight => 3,
            CardKind::Bishop | CardKind::Alchemist | CardKind::General | CardKind::Nobleman => 4,
            CardKind::King | CardKind::Queen => 5,
        }
    }

    pub fn timing(self) -> Timing {
        match self {
            CardKind::Charlatan | CardKind::Farmer | CardKind::General | CardKind::King => {
                Timing::Immediate
            }
            _ => Timing::Ability,
        }
    }

    pub fn selection_shape(self) -> SelectionShape {
        match self {
            CardKind::Fool => SelectionShape::Reroll,
            CardKind::Philosopher => SelectionShape::Shift { count: 2 },
            CardKind::Maid => SelectionShape::Shift { count: 1 },
            CardKind::Alchemist => SelectionShape::Shift { count: 3 },
            CardKind::Astronomer | CardKind::Magician => SelectionShape::SetFace,
            CardKind::Merchant | CardKind::Noblewoman => SelectionShape::Flags { step: 1 },
            CardKind::Nobleman => SelectionShape::Flags { step: 2 },
            CardKind::Queen => SelectionShape::NewDie,
            CardKind::Charlatan
            | CardKind::Farmer
            | CardKind::General
            | CardKind::King
            | CardKind::Laborer
            | CardKind::Guard
            | CardKind::Hunter
            | CardKind::PawnBroker
            | CardKind::Knight
            | CardKind::Bishop => SelectionShape::None,
        }
    }

    /// Charlatan is the only card a player may hold more than once.
    pub fn stackable(self) -> bool {
        self == CardKind::Charlatan
    }

    pub fn cost_text(self) -> &'static str {
        match self {
            CardKind::Fool => "free",
            CardKind::Charlatan => "hand over a Fool",
            CardKind::Farmer => "2 dice of the same face",
            CardKind::Philosopher => "every fixed die even",
            CardKind::Laborer => "fixed dice total 15+",
            CardKind::Guard => "3 dice of the same face",
            CardKind::Maid => "every fixed die odd",
            CardKind::Merchant => "fixed dice total 20+",
            CardKind::Astronomer => "2 pairs",
            CardKind::Hunter => "4 dice of the same face",
            CardKind::PawnBroker => "fixed dice total 30+",
            CardKind::Noblewoman => "a pair and a triple",
            CardKind::Magician => "straight 2-3-4-5 with a 1 or 6",
            CardKind::Knight => "5 dice of the same face",
            CardKind::Bishop => "3 pairs",
            CardKind::Alchemist => "every face 1 to 6",
            CardKind::General => "6 dice of the same face",
            CardKind::Nobleman => "2 triples",
            CardKind::King => "7 dice of the same face",
            CardKind::Queen => "granted by the King",
        }
    }

    pub fn ability_text(self) -> &'static str {
        match self {
            CardKind::Fool => "reroll one die",
            CardKind::Charlatan | CardKind::Farmer => "+1 die every turn",
            CardKind::Philosopher => "move X pips from one die to another",
            CardKind::Laborer => "add a die showing 1",
            CardKind::Guard => "add a die showing 2",
            CardKind::Maid => "add 1, 2 or 3 to one die",
            CardKind::Merchant => "reroll any number of dice",
            CardKind::Astronomer => "turn one die into a face already fixed",
            CardKind::Hunter => "add a die showing 3",
            CardKind::PawnBroker => "add a die showing 4",
            CardKind::Noblewoman => "add 1 to any number of dice",
            CardKind::Magician => "turn one die into any face",
            CardKind::Knight => "add a die showing 5",
            CardKind::Bishop => "add a die showing 6",
            CardKind::Alchemist => "move pips among three dice",
            CardKind::General => "+2 dice every turn",
            CardKind::Nobleman => "add 2 to any number of dice",
            CardKind::King => "gain the Queen; the final round begins",
            CardKind::Queen => "add a die of any face",
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldCard {
    pub card: CardKind,
    pub available: bool,
}

impl HeldCard {
    pub fn acquired(card: CardKind) -> Self {
        Self {
            card,
            available: card.timing() == Timing::Ability,
        }
    }
}
