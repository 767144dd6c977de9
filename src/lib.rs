//! Deterministic turn-based duel resolver for a persistent-character browser
//! game. Two combatant snapshots and an optional nonce go in; a fully
//! replayable [combat::FightResult] comes out. Persistence, accounts, and
//! presentation live with the caller; this crate is a pure computation
//! boundary.

pub mod cli;
pub mod combat;
pub mod data;
pub mod matchup;
