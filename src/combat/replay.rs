//! Replay verification for persisted fights.

use crate::combat::engine::{replay_fight, FightError};
use crate::combat::log::FightResult;
use crate::combat::snapshot::CombatantSnapshot;

/// Re-resolves a persisted fight from its stored seed and checks the outcome
/// is byte-for-byte identical. False means the stored result no longer
/// matches what the snapshots produce: tampered data, or snapshots rebuilt
/// from records that have since changed.
pub fn verify_replay(
    result: &FightResult,
    attacker: &CombatantSnapshot,
    defender: &CombatantSnapshot,
) -> Result<bool, FightError> {
    let replayed = replay_fight(attacker, defender, result.seed)?;
    Ok(replayed == *result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::abilities::AbilitySet;
    use crate::combat::engine::resolve_fight;
    use crate::combat::stats::StatBlock;

    fn fighter(id: u64, strength: i32) -> CombatantSnapshot {
        CombatantSnapshot::build(
            id,
            format!("fighter-{id}"),
            0,
            StatBlock {
                strength,
                agility: 2,
                speed: 2,
                armor: 2,
                endurance: 3,
                initiative: 0,
            },
            Vec::new(),
            AbilitySet::new(),
        )
    }

    #[test]
    fn intact_result_verifies() {
        let a = fighter(1, 4);
        let b = fighter(2, 2);
        let result = resolve_fight(&a, &b, Some(7)).unwrap();
        assert!(verify_replay(&result, &a, &b).unwrap());
    }

    #[test]
    fn tampered_log_is_detected() {
        let a = fighter(1, 4);
        let b = fighter(2, 2);
        let mut result = resolve_fight(&a, &b, Some(7)).unwrap();
        result.log[0].damage += 1;
        assert!(!verify_replay(&result, &a, &b).unwrap());
    }

    #[test]
    fn changed_snapshot_is_detected() {
        let a = fighter(1, 4);
        let b = fighter(2, 2);
        let result = resolve_fight(&a, &b, Some(7)).unwrap();

        let buffed = fighter(1, 40);
        assert!(!verify_replay(&result, &buffed, &b).unwrap());
    }
}
