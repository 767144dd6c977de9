//! Fight-log export as CSV, one row per log entry. The CSV is an analysis
//! artifact; the JSON `FightResult` stays the persistence format.

use std::io;

use crate::combat::log::{FightAction, FightResult};

const HEADER: [&str; 8] = [
    "turn",
    "attacker_id",
    "defender_id",
    "action",
    "weapon",
    "damage",
    "defender_health_after",
    "message",
];

/// Writes the fight log as CSV with a header row.
pub fn write_fight_csv<W: io::Write>(result: &FightResult, writer: W) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for entry in &result.log {
        let action = match entry.action {
            FightAction::Attack => "attack",
            FightAction::Evade => "evade",
            FightAction::Block => "block",
        };
        csv_writer.write_record([
            entry.turn.to_string(),
            entry.attacker_id.to_string(),
            entry.defender_id.to_string(),
            action.to_string(),
            entry.weapon.clone().unwrap_or_default(),
            entry.damage.to_string(),
            entry.defender_health_after.to_string(),
            entry.message.clone(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Default export file name, stamped with the current UTC time.
pub fn default_export_name(seed: u64) -> String {
    let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
    format!("fight-{seed}-{stamp}.csv")
}
