mod logger;
mod play;

use anyhow::Context;
use dicecourt_autoplay::{run_autoplay, write_json, write_text, AutoplayConfig, Simulator};
use dicecourt_core::{CardKind, MatchConfig, RosterEntry, Timing};
use dicecourt_data::{load_match_config_or_default, load_roster};
use std::path::{Path, PathBuf};

const DEFAULT_SEED: u64 = 0xC0FFEE;
const DEFAULT_PLAYERS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Play,
    Auto,
    Cards,
}

#[derive(Debug, Clone)]
struct CliOptions {
    mode: Mode,
    seed: u64,
    players: usize,
    assets: PathBuf,
    roster: Option<PathBuf>,
    trace: Option<PathBuf>,
    report: Option<PathBuf>,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        mode: Mode::Play,
        seed: DEFAULT_SEED,
        players: DEFAULT_PLAYERS,
        assets: PathBuf::from("assets"),
        roster: None,
        trace: None,
        report: None,
    };
    let mut idx = 0usize;
    while idx < args.len() {
        let value = args.get(idx + 1);
        let mut consumed = false;
        match args[idx].as_str() {
            "--auto" => options.mode = Mode::Auto,
            "--cards" => options.mode = Mode::Cards,
            "--seed" => {
                if let Some(seed) = value.and_then(|raw| raw.parse::<u64>().ok()) {
                    options.seed = seed;
                    consumed = true;
                }
            }
            "--players" | "-n" => {
                if let Some(players) = value.and_then(|raw| raw.parse::<usize>().ok()) {
                    options.players = players;
                    consumed = true;
                }
            }
            "--assets" => {
                if let Some(path) = value {
                    options.assets = PathBuf::from(path);
                    consumed = true;
                }
            }
            "--roster" => {
                if let Some(path) = value {
                    options.roster = Some(PathBuf::from(path));
                    consumed = true;
                }
            }
            "--trace" => {
                if let Some(path) = value {
                    options.trace = Some(PathBuf::from(path));
                    consumed = true;
                }
            }
            "--report" => {
                if let Some(path) = value {
                    options.report = Some(PathBuf::from(path));
                    consumed = true;
                }
            }
            other => log::warn!("ignoring argument {other}"),
        }
        if consumed {
            idx += 1;
        }
        idx += 1;
    }
    options
}

fn main() {
    logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    let result = match options.mode {
        Mode::Cards => {
            print_cards();
            Ok(())
        }
        Mode::Auto => run_auto(&options),
        Mode::Play => run_play(&options),
    };
    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn load_config(assets: &Path) -> anyhow::Result<MatchConfig> {
    load_match_config_or_default(assets)
        .with_context(|| format!("load match config from {}", assets.display()))
}

fn build_roster(options: &CliOptions) -> anyhow::Result<Vec<RosterEntry>> {
    match options.roster.as_deref() {
        Some(path) => load_roster(path),
        None => Ok((1..=options.players)
            .map(|seat| RosterEntry::new(format!("p{seat}"), format!("Player {seat}")))
            .collect()),
    }
}

fn run_play(options: &CliOptions) -> anyhow::Result<()> {
    let config = load_config(&options.assets)?;
    let roster = build_roster(options)?;
    play::run(config, roster, options.seed)
}

fn run_auto(options: &CliOptions) -> anyhow::Result<()> {
    let config = load_config(&options.assets)?;
    let cfg = AutoplayConfig {
        seed: options.seed,
        players: options.players,
        ..AutoplayConfig::default()
    };
    let sim = Simulator::new(config, cfg.players, cfg.seed)?;
    let result = run_autoplay(sim, &cfg)?;
    println!("status: {:?}", result.status);
    println!(
        "winner: {}",
        result.winner.as_deref().unwrap_or("(none)")
    );
    println!(
        "steps: {} rounds: {} wall_ms: {}",
        result.summary.steps, result.summary.rounds, result.summary.wall_time_ms
    );
    if let Some(path) = options.trace.as_deref() {
        write_json(path, &result).with_context(|| format!("write {}", path.display()))?;
        println!("trace: {}", path.display());
    }
    if let Some(path) = options.report.as_deref() {
        write_text(path, &result).with_context(|| format!("write {}", path.display()))?;
        println!("report: {}", path.display());
    }
    Ok(())
}

fn print_cards() {
    println!("{:<12} {:>5}  {:<9}  {:<34}  ability", "card", "level", "timing", "cost");
    for card in CardKind::ALL {
        let timing = match card.timing() {
            Timing::Immediate => "immediate",
            Timing::Ability => "ability",
        };
        println!(
            "{:<12} {:>5}  {:<9}  {:<34}  {}",
            card.name(),
            card.level(),
            timing,
            card.cost_text(),
            card.ability_text()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn defaults_to_interactive_play() {
        let options = parse_cli_options(&[]);
        assert_eq!(options.mode, Mode::Play);
        assert_eq!(options.seed, DEFAULT_SEED);
        assert_eq!(options.players, DEFAULT_PLAYERS);
        assert_eq!(options.assets, PathBuf::from("assets"));
    }

    #[test]
    fn auto_options_take_values() {
        let options = parse_cli_options(&args(&[
            "--auto", "--seed", "7", "-n", "4", "--trace", "out/t.json",
        ]));
        assert_eq!(options.mode, Mode::Auto);
        assert_eq!(options.seed, 7);
        assert_eq!(options.players, 4);
        assert_eq!(options.trace, Some(PathBuf::from("out/t.json")));
    }

    #[test]
    fn bad_number_is_not_swallowed() {
        let options = parse_cli_options(&args(&["--seed", "--cards"]));
        assert_eq!(options.seed, DEFAULT_SEED);
        assert_eq!(options.mode, Mode::Cards);
    }
}
