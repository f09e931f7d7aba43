use crate::{CardKind, Selection};
use serde::{Deserialize, Serialize};

/// One roster line as submitted by the lobby. Entries missing either field
/// are dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl RosterEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
        }
    }

    pub(crate) fn complete(&self) -> Option<(&str, &str)> {
        let id = self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())?;
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())?;
        Some((id, name))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Action {
    Initialize { roster: Vec<RosterEntry> },
    Roll,
    UseCard { card_index: usize, selection: Selection },
    Fix { indices: Vec<usize> },
    Choose { card: Option<CardKind> },
}

impl Action {
    pub fn label(&self) -> String {
        match self {
            Action::Initialize { roster } => format!("initialize {} players", roster.len()),
            Action::Roll => "roll".to_string(),
            Action::UseCard {
                card_index,
                selection,
            } => format!("use {card_index} {selection:?}"),
            Action::Fix { indices } => format!("fix {indices:?}"),
            Action::Choose { card: Some(card) } => format!("choose {card}"),
            Action::Choose { card: None } => "choose none".to_string(),
        }
    }
}
