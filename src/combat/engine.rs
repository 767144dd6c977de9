//! Fight loop: validation, seed derivation, turn alternation, termination,
//! and result assembly. One call owns one RNG and its own health copies;
//! nothing is shared between concurrent fights and the caller's snapshots
//! are never mutated.

use std::fmt;

use crate::combat::attack::resolve_attack;
use crate::combat::log::FightResult;
use crate::combat::reward;
use crate::combat::rng::{EmptyChoice, SeededRandom};
use crate::combat::snapshot::CombatantSnapshot;
use crate::combat::turn::{determine_first_actor, FirstActor};

/// Hard turn ceiling. Bounds runtime against degenerate stat combinations;
/// reaching it is a designed outcome, never an error.
pub const MAX_TURNS: u32 = 100;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FightError {
    /// Bad combatant data. Raised before any random number is drawn.
    InvalidInput(String),
    /// A uniform pick over an empty sequence, which is a configuration bug.
    EmptyChoiceSet(String),
}

impl FightError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl fmt::Display for FightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(message) => write!(f, "invalid fight input: {message}"),
            Self::EmptyChoiceSet(message) => write!(f, "empty choice set: {message}"),
        }
    }
}

impl std::error::Error for FightError {}

impl From<EmptyChoice> for FightError {
    fn from(err: EmptyChoice) -> Self {
        Self::EmptyChoiceSet(err.to_string())
    }
}

/// Derives the fight seed from both identities, FNV-1a style, mixed with the
/// caller's per-fight nonce. Without a nonce the identities alone decide, so
/// the same pairing always produces the same fight.
pub fn derive_seed(
    attacker: &CombatantSnapshot,
    defender: &CombatantSnapshot,
    nonce: Option<u64>,
) -> u64 {
    let mut acc = FNV_OFFSET;
    for snapshot in [attacker, defender] {
        for byte in snapshot.id.to_le_bytes() {
            acc = (acc ^ u64::from(byte)).wrapping_mul(FNV_PRIME);
        }
        for byte in snapshot.name.bytes() {
            acc = (acc ^ u64::from(byte)).wrapping_mul(FNV_PRIME);
        }
    }
    if let Some(nonce) = nonce {
        for byte in nonce.to_le_bytes() {
            acc = (acc ^ u64::from(byte)).wrapping_mul(FNV_PRIME);
        }
    }
    acc
}

/// Resolves a fight between two snapshots. The optional `nonce` is the
/// caller's per-fight salt (a fight counter, a timestamp); re-running with
/// the same nonce reproduces the identical result. The derived fight seed is
/// recorded on the result for later replay via [replay_fight].
pub fn resolve_fight(
    attacker: &CombatantSnapshot,
    defender: &CombatantSnapshot,
    nonce: Option<u64>,
) -> Result<FightResult, FightError> {
    validate_pair(attacker, defender)?;
    run_seeded(attacker, defender, derive_seed(attacker, defender, nonce))
}

/// Re-runs a fight from a stored fight seed (the `seed` field of a persisted
/// [FightResult]), producing the identical log.
pub fn replay_fight(
    attacker: &CombatantSnapshot,
    defender: &CombatantSnapshot,
    seed: u64,
) -> Result<FightResult, FightError> {
    validate_pair(attacker, defender)?;
    run_seeded(attacker, defender, seed)
}

/// All input checking happens here, before the RNG exists: a rejected fight
/// has consumed nothing and left no partial state.
fn validate_pair(
    attacker: &CombatantSnapshot,
    defender: &CombatantSnapshot,
) -> Result<(), FightError> {
    if attacker.id == defender.id {
        return Err(FightError::invalid_input(format!(
            "a combatant cannot fight itself (id {})",
            attacker.id
        )));
    }
    attacker.validate()?;
    defender.validate()?;
    Ok(())
}

fn run_seeded(
    attacker: &CombatantSnapshot,
    defender: &CombatantSnapshot,
    seed: u64,
) -> Result<FightResult, FightError> {
    let mut rng = SeededRandom::new(seed);

    let first = determine_first_actor(&mut rng, attacker, defender);
    let mut attacker_acts = first == FirstActor::First;

    let mut attacker_health = attacker.max_health;
    let mut defender_health = defender.max_health;
    let mut log = Vec::new();
    let mut turn: u32 = 1;

    while attacker_health > 0 && defender_health > 0 && turn <= MAX_TURNS {
        let entry = if attacker_acts {
            resolve_attack(&mut rng, attacker, defender, &mut defender_health, turn)?
        } else {
            resolve_attack(&mut rng, defender, attacker, &mut attacker_health, turn)?
        };
        log.push(entry);
        turn += 1;
        // Alternation is unconditional; evades and blocks do not grant extra turns.
        attacker_acts = !attacker_acts;
    }

    let attacker_won = if defender_health <= 0 {
        true
    } else if attacker_health <= 0 {
        false
    } else if attacker_health != defender_health {
        // Turn ceiling with both alive: higher remaining health wins.
        attacker_health > defender_health
    } else {
        // Exact tie at the ceiling: the combatant who acted first wins.
        first == FirstActor::First
    };

    let (winner, loser) = if attacker_won {
        (attacker, defender)
    } else {
        (defender, attacker)
    };

    Ok(FightResult {
        winner_id: winner.id,
        loser_id: loser.id,
        seed,
        turns: log.len() as u32,
        attacker_starting_health: attacker.max_health,
        defender_starting_health: defender.max_health,
        attacker_final_health: attacker_health.max(0),
        defender_final_health: defender_health.max(0),
        winner_experience: reward::experience_gain(winner.level, loser.level, true),
        loser_experience: reward::experience_gain(loser.level, winner.level, false),
        log,
    })
}
