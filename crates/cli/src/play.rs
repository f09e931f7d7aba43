use anyhow::{bail, Context};
use dicecourt_core::{
    choosable_cards, usable_cards, Action, CardKind, Engine, EngineError, Event, EventBus,
    MatchConfig, MatchState, Phase, RngState, RosterEntry, Round, Selection, SelectionShape,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

const SAVE_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SavedMatch {
    version: u32,
    seed: u64,
    state: MatchState,
}

struct Session {
    engine: Engine,
    state: MatchState,
    dice: RngState,
    events: EventBus,
}

impl Session {
    fn apply(&mut self, action: Action) {
        match self
            .engine
            .advance(&self.state, &action, &mut self.dice, &mut self.events)
        {
            Ok(next) => {
                self.state = next;
                for event in self.events.drain() {
                    println!("  {}", describe_event(&event));
                }
            }
            Err(err) => print_engine_error(&err),
        }
    }
}

pub fn run(config: MatchConfig, roster: Vec<RosterEntry>, seed: u64) -> anyhow::Result<()> {
    let mut session = Session {
        engine: Engine::new(config),
        state: MatchState::new(),
        dice: RngState::from_seed(seed),
        events: EventBus::default(),
    };
    session.apply(Action::Initialize { roster });
    if session.state.phase == Phase::Initialize {
        bail!("match could not start");
    }
    println!(
        "seed: {seed}, {} dice per turn",
        session.engine.config().initial_dice
    );
    print_help();
    print_board(&session.state);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if session.state.is_over() {
            let winner = session
                .state
                .winner()
                .map(|player| player.name.as_str())
                .unwrap_or("nobody");
            println!("match over, winner: {winner}");
            return Ok(());
        }
        print!("{}", prompt_text(&session.state));
        io::stdout().flush().context("flush stdout")?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.context("read stdin")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();
        match cmd {
            "help" | "h" | "?" => print_help(),
            "quit" | "exit" | "q" => return Ok(()),
            "board" | "b" | "ls" => print_board(&session.state),
            "options" | "o" => print_options(&session.state),
            "state" => println!("{}", serde_json::to_string_pretty(&session.state)?),
            "roll" | "r" => session.apply(Action::Roll),
            "fix" | "f" => match parse_indices(&args) {
                Ok(indices) => session.apply(Action::Fix { indices }),
                Err(msg) => println!("{msg}"),
            },
            "use" | "u" => match parse_use(&session.state, &args) {
                Ok(action) => session.apply(action),
                Err(msg) => println!("{msg}"),
            },
            "take" | "t" => match args.first().and_then(|name| CardKind::from_name(name)) {
                Some(card) => session.apply(Action::Choose { card: Some(card) }),
                None => println!("usage: take <card name>"),
            },
            "pass" | "p" => session.apply(Action::Choose { card: None }),
            "save" => match args.first() {
                Some(path) => match save_match(Path::new(path), &session) {
                    Ok(()) => println!("saved to {path}"),
                    Err(err) => println!("save failed: {err:#}"),
                },
                None => println!("usage: save <path>"),
            },
            "load" => match args.first() {
                Some(path) => match load_match(Path::new(path)) {
                    Ok(saved) => {
                        session.state = saved.state;
                        session.dice = RngState::from_seed(saved.seed);
                        println!("loaded {path}");
                        print_board(&session.state);
                    }
                    Err(err) => println!("load failed: {err:#}"),
                },
                None => println!("usage: load <path>"),
            },
            other => println!("unknown command: {other} (try help)"),
        }
    }
}

fn save_match(path: &Path, session: &Session) -> anyhow::Result<()> {
    let payload = SavedMatch {
        version: SAVE_SCHEMA_VERSION,
        seed: session.dice.seed(),
        state: session.state.clone(),
    };
    let body = serde_json::to_string_pretty(&payload)?;
    fs::write(path, body).with_context(|| format!("write {}", path.display()))
}

fn load_match(path: &Path) -> anyhow::Result<SavedMatch> {
    let body = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let payload: SavedMatch =
        serde_json::from_str(&body).with_context(|| format!("parse {}", path.display()))?;
    if payload.version != SAVE_SCHEMA_VERSION {
        bail!(
            "unsupported save version {} (expected {})",
            payload.version,
            SAVE_SCHEMA_VERSION
        );
    }
    Ok(payload)
}

fn print_engine_error(err: &EngineError) {
    let hint = match err {
        EngineError::InvalidPhase(Phase::Roll) => " (roll first)",
        EngineError::InvalidPhase(Phase::Fix) => " (fix dice or use a card)",
        EngineError::InvalidPhase(Phase::Choice) => " (take a card or pass)",
        EngineError::IllegalCardChoice(_) => " (see options)",
        _ => "",
    };
    println!("error [{}]: {err}{hint}", err.code());
}

fn print_help() {
    println!("commands:");
    println!("  roll | r                    roll your remaining dice");
    println!("  fix | f <i> [i..]           fix dice by index");
    println!("  use | u <card> [args]       invoke an ability card by hand index");
    println!("      reroll: <die>   shift: <die>:<delta> ..   set: <die> <face>");
    println!("      flags: <flag> per die   new die: <face>");
    println!("  take | t <card name>        take a card at the choice step");
    println!("  pass | p                    take nothing");
    println!("  board | options | state     inspect the match");
    println!("  save <path> | load <path>   persist the match");
    println!("  help | quit");
}

fn prompt_text(state: &MatchState) -> String {
    let name = state
        .active_player()
        .map(|player| player.name.as_str())
        .unwrap_or("?");
    format!("[{} {:?}] {name}> ", round_text(state.round), state.phase)
}

fn round_text(round: Round) -> String {
    match round {
        Round::Number(n) => format!("round {n}"),
        Round::Final => "final round".to_string(),
    }
}

fn print_board(state: &MatchState) {
    println!(
        "{} ({:?}), turn order {:?}",
        round_text(state.round),
        state.direction,
        state
            .turn_order()
            .iter()
            .map(|&seat| state.players[seat].id.as_str())
            .collect::<Vec<_>>()
    );
    if let Some(leader) = state.top.as_ref() {
        println!("leader: {} with {:?}", leader.player_id, leader.dice);
    }
    for (seat, player) in state.players.iter().enumerate() {
        let marker = if seat == state.active { ">" } else { " " };
        let cards: Vec<String> = player
            .cards
            .iter()
            .enumerate()
            .map(|(idx, held)| {
                let spent = if held.available { "" } else { "*" };
                format!("{idx}:{}{spent}", held.card)
            })
            .collect();
        println!(
            "{marker} {:<10} dice={} active={:?} fixed={:?} cards=[{}]",
            player.name,
            player.dice_num,
            player.active_dice,
            player.fixed_dice,
            cards.join(" ")
        );
    }
}

fn print_options(state: &MatchState) {
    match state.phase {
        Phase::Fix => {
            let Some(player) = state.active_player() else {
                return;
            };
            for idx in usable_cards(state) {
                let card = player.cards[idx].card;
                println!("  use {idx}: {card} - {}", card.ability_text());
            }
            println!("  fix any of {:?}", player.active_dice);
        }
        Phase::Choice => {
            for card in choosable_cards(state) {
                println!(
                    "  take {card} (level {}, {} left) - {}",
                    card.level(),
                    state.remaining_of(card),
                    card.ability_text()
                );
            }
            println!("  pass");
        }
        Phase::Roll => println!("  roll"),
        Phase::Initialize | Phase::End => {}
    }
}

fn describe_event(event: &Event) -> String {
    match event {
        Event::MatchStarted { players } => format!("match started with {players} players"),
        Event::DiceRolled { player, dice } => format!("{player} rolled {dice:?}"),
        Event::AbilityUsed { player, card } => format!("{player} used {card}"),
        Event::DiceFixed {
            player,
            faces,
            remaining,
        } => format!("{player} fixed {faces:?}, {remaining} left"),
        Event::CardTaken {
            player,
            card: Some(card),
        } => format!("{player} took {card}"),
        Event::CardTaken { player, card: None } => format!("{player} took nothing"),
        Event::ImmediateFired { player, card } => format!("{player}'s {card} fired"),
        Event::TurnPassed { to, .. } => format!("{to} is up"),
        Event::RoundStarted { round, direction } => {
            format!("round {round} begins ({direction:?})")
        }
        Event::FinalRoundStarted { closer } => format!("final round! {closer} plays last"),
        Event::LeaderChanged { player, dice } => format!("{player} leads with {dice:?}"),
        Event::MatchEnded { winner } => {
            format!("match ended, winner {}", winner.as_deref().unwrap_or("none"))
        }
    }
}

fn parse_indices(args: &[&str]) -> Result<Vec<usize>, String> {
    if args.is_empty() {
        return Err("usage: fix <i> [i..]".to_string());
    }
    args.iter()
        .map(|raw| {
            raw.parse::<usize>()
                .map_err(|_| format!("not a die index: {raw}"))
        })
        .collect()
}

fn parse_use(state: &MatchState, args: &[&str]) -> Result<Action, String> {
    let (first, rest) = args
        .split_first()
        .ok_or_else(|| "usage: use <card> [args]".to_string())?;
    let card_index = first
        .parse::<usize>()
        .map_err(|_| format!("not a card index: {first}"))?;
    let card = state
        .active_player()
        .and_then(|player| player.cards.get(card_index))
        .map(|held| held.card)
        .ok_or_else(|| format!("no card at {card_index}"))?;
    let selection = parse_selection(card.selection_shape(), rest)?;
    Ok(Action::UseCard {
        card_index,
        selection,
    })
}

fn parse_selection(shape: SelectionShape, args: &[&str]) -> Result<Selection, String> {
    let number = |raw: &str| {
        raw.parse::<i16>()
            .map_err(|_| format!("not a number: {raw}"))
    };
    let face = |raw: &str| {
        raw.parse::<u8>()
            .map_err(|_| format!("not a face: {raw}"))
    };
    let index = |raw: &str| {
        raw.parse::<usize>()
            .map_err(|_| format!("not a die index: {raw}"))
    };
    match (shape, args) {
        (SelectionShape::None, []) => Ok(Selection::None),
        (SelectionShape::Reroll, [die]) => Ok(Selection::Reroll { index: index(*die)? }),
        (SelectionShape::SetFace, [die, value]) => Ok(Selection::SetFace {
            index: index(*die)?,
            face: face(*value)?,
        }),
        (SelectionShape::NewDie, [value]) => Ok(Selection::NewDie { face: face(*value)? }),
        (SelectionShape::Flags { .. }, flags) if !flags.is_empty() => flags
            .iter()
            .map(|raw| face(*raw))
            .collect::<Result<Vec<u8>, String>>()
            .map(Selection::Flags),
        (SelectionShape::Shift { .. }, pairs) if !pairs.is_empty() => {
            let mut indices = Vec::new();
            let mut deltas = Vec::new();
            for pair in pairs {
                let (die, delta) = pair
                    .split_once(':')
                    .ok_or_else(|| format!("expected <die>:<delta>, got {pair}"))?;
                indices.push(index(die)?);
                let delta = number(delta)?;
                deltas.push(i8::try_from(delta).map_err(|_| format!("delta too large: {delta}"))?);
            }
            Ok(Selection::Shift { indices, deltas })
        }
        (shape, _) => Err(format!("wrong arguments for a {shape:?} card (try help)")),
    }
}
