use crate::{
    card_value, fix_value, AutoplayConfig, AutoplayError, AutoplayResult, MatchStatus,
    ObjectiveWeights, Simulator, StepRecord, SummaryStats,
};
use dicecourt_core::{Action, Phase, Player, RngState};
use std::collections::HashSet;
use std::time::Instant;

/// Scores a legal action for the active player. Higher is better.
pub fn score_action(player: &Player, action: &Action, weights: ObjectiveWeights) -> f64 {
    match action {
        Action::Roll => 0.0,
        Action::UseCard { .. } => weights.ability,
        Action::Fix { indices } => {
            let chosen: Vec<u8> = indices
                .iter()
                .filter_map(|idx| player.active_dice.get(*idx).copied())
                .collect();
            let left = player.active_dice.len().saturating_sub(chosen.len());
            fix_value(&player.fixed_dice, &chosen, left, weights)
        }
        Action::Choose { card: Some(card) } => card_value(*card, weights),
        Action::Choose { card: None } => 0.0,
        Action::Initialize { .. } => f64::NEG_INFINITY,
    }
}

/// Picks the best scored candidate, or a random one with probability
/// `cfg.explore`. Ties keep the earliest candidate.
pub fn pick_action(
    player: &Player,
    candidates: &[Action],
    cfg: &AutoplayConfig,
    rng: &mut RngState,
) -> Option<Action> {
    if candidates.is_empty() {
        return None;
    }
    if rng.chance(cfg.explore) {
        return candidates.get(rng.next_index(candidates.len())).cloned();
    }
    let mut best: Option<(&Action, f64)> = None;
    for action in candidates {
        let score = score_action(player, action, cfg.weights);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((action, score));
        }
    }
    best.map(|(action, _)| action.clone())
}

/// Plays the match in `sim` until it ends or `cfg.max_steps` actions were
/// committed. Bot decisions draw from their own seeded stream so the dice
/// stay independent of exploration.
pub fn run_autoplay(
    mut sim: Simulator,
    cfg: &AutoplayConfig,
) -> Result<AutoplayResult, AutoplayError> {
    let started_at = Instant::now();
    let mut rng = RngState::from_seed(cfg.seed ^ 0x5EED_B07);
    let mut records: Vec<StepRecord> = Vec::new();
    let mut rounds_played: u32 = 1;
    let mut status = None;

    for step in 0..cfg.max_steps {
        if sim.state.phase == Phase::End {
            status = Some(MatchStatus::Finished);
            break;
        }

        let mut blocked: HashSet<String> = HashSet::new();
        let mut committed = false;
        for _ in 0..cfg.action_retry_limit.max(1) {
            let candidates: Vec<Action> = sim
                .legal_actions(cfg)
                .into_iter()
                .filter(|action| !blocked.contains(&action.label()))
                .collect();
            let Some(player) = sim.state.active_player() else {
                break;
            };
            let Some(action) = pick_action(player, &candidates, cfg, &mut rng) else {
                break;
            };

            let player_id = player.id.clone();
            let phase_before = sim.phase_name();
            let round_before = sim.round_name();
            let action_detail = sim.describe_action(&action);
            match sim.apply_action(&action) {
                Ok(events) => {
                    if sim.round_name() != round_before {
                        rounds_played += 1;
                    }
                    records.push(StepRecord {
                        step,
                        player: player_id,
                        phase_before,
                        round_before,
                        action,
                        action_detail,
                        phase_after: sim.phase_name(),
                        round_after: sim.round_name(),
                        leader_after: sim.leader_id(),
                        events,
                    });
                    committed = true;
                    break;
                }
                Err(err) if err.is_recoverable() => {
                    log::debug!("bot {player_id} blocked {}: {err}", action.label());
                    blocked.insert(action.label());
                }
                Err(err) => return Err(err),
            }
        }

        if !committed {
            status = Some(MatchStatus::NoLegalAction);
            break;
        }
    }

    let status = match status {
        Some(status) => status,
        None if sim.state.phase == Phase::End => MatchStatus::Finished,
        None => MatchStatus::MaxSteps,
    };
    let winner = sim.state.winner().map(|player| player.id.clone());
    log::info!(
        "autoplay seed {} finished as {status:?} after {} steps, winner {winner:?}",
        cfg.seed,
        records.len()
    );
    Ok(AutoplayResult {
        status,
        winner,
        final_state: sim.state,
        summary: SummaryStats {
            steps: records.len() as u32,
            rounds: rounds_played,
            wall_time_ms: started_at.elapsed().as_millis() as u64,
        },
        steps: records,
    })
}
