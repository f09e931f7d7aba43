use crate::AutoplayError;
use dicecourt_core::{Action, Event, MatchState};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatchStatus {
    Finished,
    MaxSteps,
    NoLegalAction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    pub step: u32,
    pub player: String,
    pub phase_before: String,
    pub round_before: String,
    pub action: Action,
    #[serde(default)]
    pub action_detail: Option<String>,
    pub phase_after: String,
    pub round_after: String,
    #[serde(default)]
    pub leader_after: Option<String>,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    pub steps: u32,
    pub rounds: u32,
    pub wall_time_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoplayResult {
    pub status: MatchStatus,
    pub winner: Option<String>,
    pub final_state: MatchState,
    pub steps: Vec<StepRecord>,
    pub summary: SummaryStats,
}

impl AutoplayResult {
    pub fn to_text_report(&self) -> String {
        let mut lines = vec![
            format!("status: {}", status_label(self.status)),
            format!(
                "winner: {}",
                self.winner.as_deref().unwrap_or("(none)")
            ),
            format!(
                "summary: steps={} rounds={} wall_ms={}",
                self.summary.steps, self.summary.rounds, self.summary.wall_time_ms
            ),
            String::new(),
            "players:".to_string(),
        ];
        for player in &self.final_state.players {
            let cards: Vec<&str> = player.cards.iter().map(|held| held.card.name()).collect();
            lines.push(format!(
                "  {:<8} dice={} cards=[{}]",
                player.id,
                player.dice_num,
                cards.join(", ")
            ));
        }
        lines.push(String::new());
        lines.push("steps:".to_string());
        for step in &self.steps {
            lines.push(format!(
                "  step {:>4} | {} | {}",
                step.step,
                step.player,
                step.action.label()
            ));
            lines.push(format!(
                "    state: {} {} -> {} {}",
                step.phase_before, step.round_before, step.phase_after, step.round_after
            ));
            if let Some(detail) = step.action_detail.as_ref() {
                lines.push(format!("    detail: {detail}"));
            }
            if let Some(leader) = step.leader_after.as_ref() {
                lines.push(format!("    leader: {leader}"));
            }
            lines.push(format!("    events: {}", step.events.len()));
        }
        lines.join("\n")
    }
}

fn status_label(status: MatchStatus) -> &'static str {
    match status {
        MatchStatus::Finished => "Finished",
        MatchStatus::MaxSteps => "MaxSteps",
        MatchStatus::NoLegalAction => "NoLegalAction",
    }
}

pub fn write_json(path: &Path, result: &AutoplayResult) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(result)?;
    fs::write(path, body)?;
    Ok(())
}

pub fn write_text(path: &Path, result: &AutoplayResult) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, result.to_text_report())?;
    Ok(())
}
