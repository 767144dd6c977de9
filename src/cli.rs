use std::fs::File;
use std::io::BufWriter;

use crate::combat::engine::resolve_fight;
use crate::combat::export::{default_export_name, write_fight_csv};
use crate::combat::log::FightResult;
use crate::combat::snapshot::CombatantSnapshot;
use crate::data::catalog::WeaponCatalog;
use crate::data::character::CharacterRecord;
use crate::combat::abilities::AbilitySet;
use crate::matchup::run_matchup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fight,
    Matchup,
    Weapons,
    Export,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("fight") => Some(Command::Fight),
        Some("matchup") => Some(Command::Matchup),
        Some("weapons") => Some(Command::Weapons),
        Some("export") => Some(Command::Export),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Fight) => handle_fight(args),
        Some(Command::Matchup) => handle_matchup(args),
        Some(Command::Weapons) => handle_weapons(),
        Some(Command::Export) => handle_export(args),
        None => {
            eprintln!("usage: arena <fight|matchup|weapons|export>");
            2
        }
    }
}

/// Demo pairing used by the CLI commands: two deterministic characters, so
/// the same invocation always shows the same fight.
fn sample_pair() -> Result<(CombatantSnapshot, CombatantSnapshot), String> {
    let catalog = WeaponCatalog::load_or_builtin();

    let ragnar = CharacterRecord::generate(
        1,
        "Ragnar",
        40,
        AbilitySet::from_aliases(["firstStrike"]).map_err(|err| err.to_string())?,
        vec!["sword".to_string(), "shuriken".to_string()],
    );
    let bjorn = CharacterRecord::generate(
        2,
        "Bjorn",
        35,
        AbilitySet::from_aliases(["resistant", "vitality"]).map_err(|err| err.to_string())?,
        vec!["axe".to_string(), "knife".to_string()],
    );

    let attacker = ragnar.snapshot(&catalog).map_err(|err| err.to_string())?;
    let defender = bjorn.snapshot(&catalog).map_err(|err| err.to_string())?;
    Ok((attacker, defender))
}

fn sample_fight(nonce: u64) -> Result<FightResult, String> {
    let (attacker, defender) = sample_pair()?;
    resolve_fight(&attacker, &defender, Some(nonce)).map_err(|err| err.to_string())
}

fn handle_fight(args: &[String]) -> i32 {
    let nonce = parse_u64_arg(args.get(2), 1);

    match sample_fight(nonce) {
        Ok(result) => match serde_json::to_string_pretty(&result) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize fight result: {err}");
                1
            }
        },
        Err(err) => {
            eprintln!("fight failed: {err}");
            1
        }
    }
}

fn handle_matchup(args: &[String]) -> i32 {
    let iterations = parse_u64_arg(args.get(2), 500);
    let base_nonce = parse_u64_arg(args.get(3), 1);

    let (attacker, defender) = match sample_pair() {
        Ok(pair) => pair,
        Err(err) => {
            eprintln!("matchup failed: {err}");
            return 1;
        }
    };

    match run_matchup(&attacker, &defender, iterations, base_nonce) {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize matchup report: {err}");
                1
            }
        },
        Err(err) => {
            eprintln!("matchup failed: {err}");
            1
        }
    }
}

fn handle_weapons() -> i32 {
    let catalog = WeaponCatalog::load_or_builtin();
    match serde_json::to_string_pretty(&catalog) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize weapon catalog: {err}");
            1
        }
    }
}

fn handle_export(args: &[String]) -> i32 {
    let nonce = parse_u64_arg(args.get(3), 1);

    let result = match sample_fight(nonce) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("export failed: {err}");
            return 1;
        }
    };

    let path = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| default_export_name(result.seed));

    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("failed to create {path}: {err}");
            return 1;
        }
    };
    if let Err(err) = write_fight_csv(&result, BufWriter::new(file)) {
        eprintln!("failed to write {path}: {err}");
        return 1;
    }

    println!("export complete: {} entries -> {path}", result.log.len());
    0
}

fn parse_u64_arg(value: Option<&String>, default: u64) -> u64 {
    value.and_then(|raw| raw.parse().ok()).unwrap_or(default)
}
