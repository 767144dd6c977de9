//! Fight log and result types. These are what the caller persists alongside
//! the seed for exact replay; nothing here is mutated after the loop returns.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FightAction {
    Attack,
    Evade,
    Block,
}

/// One turn of the fight. Turn indices are 1-based and increase by exactly
/// one per entry regardless of which side acted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightLogEntry {
    pub turn: u32,
    pub attacker_id: u64,
    pub defender_id: u64,
    pub action: FightAction,
    /// Weapon alias; None means bare hands.
    pub weapon: Option<String>,
    /// Damage actually applied. Zero on evade, possibly zero on block.
    pub damage: i64,
    /// Defender health after the entry, clamped to 0.
    pub defender_health_after: i64,
    pub message: String,
}

/// Outcome of one resolved fight. Immutable once returned; the caller owns
/// persistence and the win/loss/experience updates on the character records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightResult {
    pub winner_id: u64,
    pub loser_id: u64,
    /// Derived fight seed; persist it to replay the identical log.
    pub seed: u64,
    /// Total turns taken (equals the log length).
    pub turns: u32,
    pub attacker_starting_health: i64,
    pub defender_starting_health: i64,
    /// Final health, clamped to 0.
    pub attacker_final_health: i64,
    /// Final health, clamped to 0.
    pub defender_final_health: i64,
    pub winner_experience: u64,
    pub loser_experience: u64,
    pub log: Vec<FightLogEntry>,
}

pub(crate) fn attack_message(attacker: &str, weapon_name: &str, damage: i64) -> String {
    format!("{attacker} attacks with {weapon_name} for {damage} damage!")
}

pub(crate) fn evade_message(defender: &str, attacker: &str) -> String {
    format!("{defender} evades {attacker}'s attack!")
}

pub(crate) fn block_message(defender: &str, attacker: &str, weapon_name: &str, damage: i64) -> String {
    format!("{defender} blocks {attacker}'s {weapon_name}, taking {damage} damage.")
}
