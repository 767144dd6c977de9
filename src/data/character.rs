//! Persisted character records: the caller-side shape a fight is requested
//! for. The resolver itself only ever sees the [CombatantSnapshot] built from
//! one of these; records are mutated by the caller between fights, never
//! during one.

use serde::{Deserialize, Serialize};

use crate::combat::abilities::AbilitySet;
use crate::combat::rng::SeededRandom;
use crate::combat::snapshot::CombatantSnapshot;
use crate::combat::stats::{self, StatBlock};
use crate::data::catalog::{CatalogError, WeaponCatalog};

/// Opponents are matched within this many levels in either direction.
pub const OPPONENT_LEVEL_WINDOW: u32 = 2;

const STARTING_STRENGTH: i32 = 2;
const STARTING_AGILITY: i32 = 2;
const STARTING_SPEED: i32 = 2;
const STARTING_ARMOR: i32 = 2;
const STARTING_ENDURANCE: i32 = 3;
const STARTING_INITIATIVE: i32 = 0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: u64,
    pub name: String,
    pub experience: u64,
    pub wins: u32,
    pub losses: u32,
    pub strength: i32,
    pub agility: i32,
    pub speed: i32,
    pub armor: i32,
    pub endurance: i32,
    pub initiative: i32,
    pub abilities: AbilitySet,
    /// Equipped weapon aliases, resolved against the catalog at fight time.
    pub weapons: Vec<String>,
}

impl CharacterRecord {
    /// Creates a record with deterministic stat growth derived from the
    /// character's identity: an affinity roll decides which stats the
    /// character favors, then each level grants one 0-3 point growth roll to
    /// the favored stat. The same name and id always produce the same build.
    pub fn generate(
        id: u64,
        name: impl Into<String>,
        experience: u64,
        abilities: AbilitySet,
        weapons: Vec<String>,
    ) -> Self {
        let name = name.into();
        let mut rng = SeededRandom::new(identity_seed(&name, id));

        // Affinity thresholds: where a growth roll lands decides which stat grows.
        let odds_strength = rng.int(0, 3);
        let odds_agility = rng.int(odds_strength + 1, odds_strength + 5);
        let odds_speed = rng.int(odds_agility + 1, odds_agility + 5);

        let mut strength = STARTING_STRENGTH;
        let mut agility = STARTING_AGILITY;
        let mut speed = STARTING_SPEED;

        let level = stats::level_from_experience(experience);
        for _ in 1..=level {
            let roll = rng.int(0, odds_speed);
            if roll <= odds_strength {
                strength += rng.int(0, 3) as i32;
            } else if roll <= odds_agility {
                agility += rng.int(0, 3) as i32;
            } else {
                speed += rng.int(0, 3) as i32;
            }
        }

        Self {
            id,
            name,
            experience,
            wins: 0,
            losses: 0,
            strength,
            agility,
            speed,
            armor: STARTING_ARMOR,
            endurance: STARTING_ENDURANCE,
            initiative: STARTING_INITIATIVE,
            abilities,
            weapons,
        }
    }

    pub fn level(&self) -> u32 {
        stats::level_from_experience(self.experience)
    }

    /// Experience threshold of the next level.
    pub fn experience_for_next_level(&self) -> u64 {
        stats::experience_for_level(self.level() + 1)
    }

    pub fn can_level_up(&self) -> bool {
        self.experience >= self.experience_for_next_level()
    }

    /// Applies a finished fight to the record: win/loss counter plus earned
    /// experience. Persisting the updated record atomically is the caller's
    /// transactional responsibility.
    pub fn apply_fight_outcome(&mut self, won: bool, experience_gained: u64) {
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.experience += experience_gained;
    }

    /// Level-window opponent filter: true when the other character is within
    /// [OPPONENT_LEVEL_WINDOW] levels.
    pub fn is_opponent_in_window(&self, other: &CharacterRecord) -> bool {
        self.level().abs_diff(other.level()) <= OPPONENT_LEVEL_WINDOW
    }

    fn stat_block(&self) -> StatBlock {
        StatBlock {
            strength: self.strength,
            agility: self.agility,
            speed: self.speed,
            armor: self.armor,
            endurance: self.endurance,
            initiative: self.initiative,
        }
    }

    /// Builds the immutable fight-time view, resolving equipped weapon
    /// aliases against the catalog.
    pub fn snapshot(&self, catalog: &WeaponCatalog) -> Result<CombatantSnapshot, CatalogError> {
        let weapons = catalog.resolve(&self.weapons)?;
        Ok(CombatantSnapshot::build(
            self.id,
            self.name.clone(),
            self.experience,
            self.stat_block(),
            weapons,
            self.abilities.clone(),
        ))
    }
}

/// FNV-1a fold over the character's name and id, mirroring the fight-seed
/// derivation so identical identities always regenerate identical builds.
fn identity_seed(name: &str, id: u64) -> u64 {
    let mut acc = 0xcbf2_9ce4_8422_2325_u64;
    for byte in name.bytes() {
        acc = (acc ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3);
    }
    for byte in id.to_le_bytes() {
        acc = (acc ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic_per_identity() {
        let first = CharacterRecord::generate(9, "Ragnar", 120, AbilitySet::new(), Vec::new());
        let second = CharacterRecord::generate(9, "Ragnar", 120, AbilitySet::new(), Vec::new());
        assert_eq!(first, second);

        let renamed = CharacterRecord::generate(9, "Bjorn", 120, AbilitySet::new(), Vec::new());
        assert!(
            renamed.strength != first.strength
                || renamed.agility != first.agility
                || renamed.speed != first.speed
                || renamed != first
        );
    }

    #[test]
    fn growth_never_lowers_starting_stats() {
        let record = CharacterRecord::generate(3, "Grinder", 5_000, AbilitySet::new(), Vec::new());
        assert!(record.strength >= STARTING_STRENGTH);
        assert!(record.agility >= STARTING_AGILITY);
        assert!(record.speed >= STARTING_SPEED);
    }

    #[test]
    fn level_up_threshold_matches_stat_engine() {
        let mut record = CharacterRecord::generate(1, "Rookie", 0, AbilitySet::new(), Vec::new());
        assert_eq!(record.level(), 1);
        assert!(!record.can_level_up());

        record.experience = record.experience_for_next_level();
        assert!(record.can_level_up());
    }

    #[test]
    fn fight_outcome_updates_counters_and_experience() {
        let mut record = CharacterRecord::generate(2, "Vala", 0, AbilitySet::new(), Vec::new());
        record.apply_fight_outcome(true, 12);
        record.apply_fight_outcome(false, 3);
        assert_eq!(record.wins, 1);
        assert_eq!(record.losses, 1);
        assert_eq!(record.experience, 15);
    }

    #[test]
    fn opponent_window_is_symmetric() {
        let low = CharacterRecord::generate(1, "Low", 0, AbilitySet::new(), Vec::new());
        let near = CharacterRecord::generate(
            2,
            "Near",
            stats::experience_for_level(3),
            AbilitySet::new(),
            Vec::new(),
        );
        let far = CharacterRecord::generate(
            3,
            "Far",
            stats::experience_for_level(8),
            AbilitySet::new(),
            Vec::new(),
        );

        assert!(low.is_opponent_in_window(&near));
        assert!(near.is_opponent_in_window(&low));
        assert!(!low.is_opponent_in_window(&far));
    }

    #[test]
    fn snapshot_resolves_equipped_weapons() {
        let record = CharacterRecord::generate(
            4,
            "Armed",
            0,
            AbilitySet::new(),
            vec!["sword".to_string(), "shuriken".to_string()],
        );
        let snapshot = record.snapshot(&WeaponCatalog::builtin()).unwrap();
        assert_eq!(snapshot.weapons.len(), 2);
        assert_eq!(snapshot.weapons[0].alias, "sword");

        let broken = CharacterRecord::generate(
            5,
            "Broken",
            0,
            AbilitySet::new(),
            vec!["bazooka".to_string()],
        );
        assert!(broken.snapshot(&WeaponCatalog::builtin()).is_err());
    }
}
