use anyhow::{bail, Context};
use dicecourt_core::{MatchConfig, RosterEntry};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const MATCH_CONFIG_FILE: &str = "match.json";

/// Reads `match.json` from the assets directory and validates it.
pub fn load_match_config(dir: &Path) -> anyhow::Result<MatchConfig> {
    let config: MatchConfig = load_json(dir.join(MATCH_CONFIG_FILE))?;
    validate_match_config(&config)
        .with_context(|| format!("validate {}", dir.join(MATCH_CONFIG_FILE).display()))?;
    Ok(config)
}

/// Like [`load_match_config`] but falls back to the built-in table when the
/// file does not exist.
pub fn load_match_config_or_default(dir: &Path) -> anyhow::Result<MatchConfig> {
    if dir.join(MATCH_CONFIG_FILE).exists() {
        load_match_config(dir)
    } else {
        Ok(MatchConfig::default())
    }
}

pub fn validate_match_config(config: &MatchConfig) -> anyhow::Result<()> {
    if config.initial_dice == 0 {
        bail!("initial_dice must be positive");
    }
    if config.min_players < 2 {
        bail!("min_players must be at least 2, got {}", config.min_players);
    }
    if config.min_players > config.max_players {
        bail!(
            "min_players {} exceeds max_players {}",
            config.min_players,
            config.max_players
        );
    }
    let mut seen = HashSet::new();
    for rule in &config.supply {
        if !seen.insert(rule.players) {
            bail!("duplicate supply rule for {} players", rule.players);
        }
    }
    for players in config.min_players..=config.max_players {
        if config.supply_rule(players).is_none() {
            bail!("missing supply rule for {players} players");
        }
    }
    Ok(())
}

/// Reads a roster file: a JSON array of `{ "id": .., "name": .. }` entries.
/// Incomplete entries are kept; the engine drops them at initialization.
pub fn load_roster(path: &Path) -> anyhow::Result<Vec<RosterEntry>> {
    load_json(path)
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
