//! Fight-time view of a combatant. Built once per fight from the persisted
//! record and never mutated; the loop tracks remaining health separately.

use serde::{Deserialize, Serialize};

use crate::combat::abilities::{Ability, AbilitySet};
use crate::combat::engine::FightError;
use crate::combat::stats::{self, StatBlock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponCategory {
    Melee,
    Fast,
    /// Thrown weapons bypass armor entirely.
    Thrown,
    Sharp,
    Heavy,
    Long,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub alias: String,
    pub name: String,
    pub damage_min: i64,
    pub damage_max: i64,
    pub category: WeaponCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantSnapshot {
    pub id: u64,
    pub name: String,
    pub level: u32,
    /// Total health at the start of the fight.
    pub max_health: i64,
    pub strength: i32,
    pub agility: i32,
    pub speed: i32,
    pub armor: i32,
    pub endurance: i32,
    pub initiative: i32,
    /// Per-hit damage ceiling (20% of max_health with Resistant).
    pub max_hit: i64,
    /// Equipped weapons; empty means bare hands.
    pub weapons: Vec<Weapon>,
    pub abilities: AbilitySet,
}

impl CombatantSnapshot {
    /// Assembles the fight-time view from persisted stats. Order matters:
    /// endurance modifiers land before health is computed (endurance feeds
    /// health), and the per-hit ceiling is derived from the final total.
    pub fn build(
        id: u64,
        name: impl Into<String>,
        experience: u64,
        base: StatBlock,
        weapons: Vec<Weapon>,
        abilities: AbilitySet,
    ) -> Self {
        let level = stats::level_from_experience(experience);
        let modified = stats::apply_ability_modifiers(base, &abilities);
        let max_health = stats::health_for_level(stats::BASE_HEALTH, level, modified.endurance);
        let max_hit = stats::max_damage_per_hit(max_health, abilities.has(Ability::Resistant));

        Self {
            id,
            name: name.into(),
            level,
            max_health,
            strength: modified.strength,
            agility: modified.agility,
            speed: modified.speed,
            armor: modified.armor,
            endurance: modified.endurance,
            initiative: modified.initiative,
            max_hit,
            weapons,
            abilities,
        }
    }

    pub fn has_ability(&self, ability: Ability) -> bool {
        self.abilities.has(ability)
    }

    /// Rejects snapshots the resolver must not run: the checks happen before
    /// any random number is drawn, so a failed fight leaves no partial state.
    pub fn validate(&self) -> Result<(), FightError> {
        if self.name.trim().is_empty() {
            return Err(FightError::invalid_input(format!(
                "combatant {} has an empty name",
                self.id
            )));
        }
        if self.max_health <= 0 {
            return Err(FightError::invalid_input(format!(
                "\"{}\" has non-positive health {}",
                self.name, self.max_health
            )));
        }
        let stat_fields = [
            ("strength", self.strength),
            ("agility", self.agility),
            ("speed", self.speed),
            ("armor", self.armor),
            ("endurance", self.endurance),
            ("initiative", self.initiative),
        ];
        for (field, value) in stat_fields {
            if value < 0 {
                return Err(FightError::invalid_input(format!(
                    "\"{}\" has negative {field} {value}",
                    self.name
                )));
            }
        }
        if self.max_hit < 0 {
            return Err(FightError::invalid_input(format!(
                "\"{}\" has negative per-hit ceiling {}",
                self.name, self.max_hit
            )));
        }
        for weapon in &self.weapons {
            if weapon.damage_min < 0 || weapon.damage_max < weapon.damage_min {
                return Err(FightError::invalid_input(format!(
                    "weapon \"{}\" has invalid damage range {}-{}",
                    weapon.alias, weapon.damage_min, weapon.damage_max
                )));
            }
        }
        Ok(())
    }
}
