//! Batch matchup estimation: the same pairing fought across many consecutive
//! nonces, in parallel. Useful for answering "how lopsided is this pairing"
//! before the caller commits to it; each iteration is an independent fight
//! with its own RNG, so the sweep parallelizes with no coordination.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::engine::{resolve_fight, FightError};
use crate::combat::snapshot::CombatantSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupReport {
    pub attacker_id: u64,
    pub defender_id: u64,
    pub iterations: u64,
    pub attacker_wins: u64,
    pub defender_wins: u64,
    pub attacker_win_rate: f64,
    pub average_turns: f64,
}

/// Runs `iterations` fights over nonces `base_nonce .. base_nonce + iterations`
/// and aggregates the outcomes. Deterministic for a given base nonce.
pub fn run_matchup(
    attacker: &CombatantSnapshot,
    defender: &CombatantSnapshot,
    iterations: u64,
    base_nonce: u64,
) -> Result<MatchupReport, FightError> {
    let outcomes: Vec<(bool, u32)> = (0..iterations)
        .into_par_iter()
        .map(|iteration| {
            let nonce = base_nonce.wrapping_add(iteration);
            resolve_fight(attacker, defender, Some(nonce))
                .map(|result| (result.winner_id == attacker.id, result.turns))
        })
        .collect::<Result<_, _>>()?;

    let attacker_wins = outcomes.iter().filter(|(won, _)| *won).count() as u64;
    let total_turns: u64 = outcomes.iter().map(|(_, turns)| u64::from(*turns)).sum();

    Ok(MatchupReport {
        attacker_id: attacker.id,
        defender_id: defender.id,
        iterations,
        attacker_wins,
        defender_wins: iterations - attacker_wins,
        attacker_win_rate: if iterations == 0 {
            0.0
        } else {
            attacker_wins as f64 / iterations as f64
        },
        average_turns: if iterations == 0 {
            0.0
        } else {
            total_turns as f64 / iterations as f64
        },
    })
}
