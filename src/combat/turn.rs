//! First-actor determination. Runs exactly once per fight; after it, roles
//! alternate unconditionally with no further initiative logic.

use crate::combat::abilities::Ability;
use crate::combat::rng::SeededRandom;
use crate::combat::snapshot::CombatantSnapshot;

/// Which of the two supplied combatants acts on turn 1. `First` is the
/// caller's attacker, `Second` the defender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstActor {
    First,
    Second,
}

/// Rolls `initiative + int(0, 10)` for both sides (always both, in argument
/// order, so the stream stays replayable), then applies the FirstStrike
/// override. A tie on the rolls is settled by a coin flip rather than by
/// argument order.
pub fn determine_first_actor(
    rng: &mut SeededRandom,
    first: &CombatantSnapshot,
    second: &CombatantSnapshot,
) -> FirstActor {
    let roll_first = first.initiative as i64 + rng.int(0, 10);
    let roll_second = second.initiative as i64 + rng.int(0, 10);

    let strike_first = first.has_ability(Ability::FirstStrike);
    let strike_second = second.has_ability(Ability::FirstStrike);
    if strike_first != strike_second {
        return if strike_first {
            FirstActor::First
        } else {
            FirstActor::Second
        };
    }

    if roll_first != roll_second {
        if roll_first > roll_second {
            FirstActor::First
        } else {
            FirstActor::Second
        }
    } else if rng.bool(0.5) {
        FirstActor::First
    } else {
        FirstActor::Second
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::abilities::AbilitySet;
    use crate::combat::stats::StatBlock;

    fn snapshot(id: u64, initiative: i32, abilities: AbilitySet) -> CombatantSnapshot {
        CombatantSnapshot::build(
            id,
            format!("fighter-{id}"),
            0,
            StatBlock {
                strength: 2,
                agility: 2,
                speed: 2,
                armor: 2,
                endurance: 3,
                initiative,
            },
            Vec::new(),
            abilities,
        )
    }

    #[test]
    fn first_strike_overrides_any_roll() {
        let striker = snapshot(1, 0, AbilitySet::from_aliases(["firstStrike"]).unwrap());
        let fast = snapshot(2, 1_000, AbilitySet::new());

        for seed in 0..200 {
            let mut rng = SeededRandom::new(seed);
            assert_eq!(
                determine_first_actor(&mut rng, &striker, &fast),
                FirstActor::First
            );
            let mut rng = SeededRandom::new(seed);
            assert_eq!(
                determine_first_actor(&mut rng, &fast, &striker),
                FirstActor::Second
            );
        }
    }

    #[test]
    fn mutual_first_strike_falls_back_to_rolls() {
        let both = AbilitySet::from_aliases(["firstStrike"]).unwrap();
        let slow = snapshot(1, 0, both.clone());
        let fast = snapshot(2, 1_000, both);

        let mut rng = SeededRandom::new(3);
        assert_eq!(
            determine_first_actor(&mut rng, &slow, &fast),
            FirstActor::Second
        );
    }

    #[test]
    fn higher_initiative_wins_outside_the_roll_window() {
        // An 11+ point gap cannot be bridged by int(0, 10).
        let slow = snapshot(1, 0, AbilitySet::new());
        let fast = snapshot(2, 11, AbilitySet::new());

        for seed in 0..100 {
            let mut rng = SeededRandom::new(seed);
            assert_eq!(
                determine_first_actor(&mut rng, &slow, &fast),
                FirstActor::Second
            );
        }
    }

    #[test]
    fn equal_initiative_does_not_systematically_favor_one_side() {
        let a = snapshot(1, 5, AbilitySet::new());
        let b = snapshot(2, 5, AbilitySet::new());

        let mut first_wins = 0;
        for seed in 0..500 {
            let mut rng = SeededRandom::new(seed);
            if determine_first_actor(&mut rng, &a, &b) == FirstActor::First {
                first_wins += 1;
            }
        }
        assert!(
            (150..=350).contains(&first_wins),
            "first actor won {first_wins}/500 equal-initiative contests"
        );
    }
}
