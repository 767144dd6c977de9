//! Stat formulas shared by character progression and fight resolution.
//!
//! Everything here is a pure function over named constants, so the snapshot
//! builder and the caller's level-up path agree on the numbers.

use crate::combat::abilities::{Ability, AbilitySet};

/// Exponent of the experience curve.
pub const LEVEL_EXPONENT: f64 = 2.3;
/// Health of a fresh level-1 combatant.
pub const BASE_HEALTH: i64 = 50;
/// Health gained per level above 1.
pub const HEALTH_PER_LEVEL: f64 = 1.5;
/// Endurance points per complementary health point.
pub const ENDURANCE_PER_HEALTH: i32 = 6;
/// Fraction of total health a Resistant combatant can lose to one hit.
pub const RESISTANT_DAMAGE_FRACTION: f64 = 0.2;

/// Stats an ability can modify, before the fight-time view is frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatBlock {
    pub strength: i32,
    pub agility: i32,
    pub speed: i32,
    pub armor: i32,
    pub endurance: i32,
    pub initiative: i32,
}

/// Level for a given experience total: `floor((xp + 1)^(1/2.3))`, never below 1.
pub fn level_from_experience(experience: u64) -> u32 {
    let level = ((experience + 1) as f64).powf(1.0 / LEVEL_EXPONENT) as u32;
    level.max(1)
}

/// Experience threshold of a level: `floor(level^2.3)`.
pub fn experience_for_level(level: u32) -> u64 {
    (level as f64).powf(LEVEL_EXPONENT) as u64
}

/// Total health at a level: `floor(base + (level - 1) * 1.5)` plus one point
/// per 6 endurance.
pub fn health_for_level(base_health: i64, level: u32, endurance: i32) -> i64 {
    let standard = (base_health as f64 + (level.max(1) - 1) as f64 * HEALTH_PER_LEVEL).floor();
    let complementary = (endurance / ENDURANCE_PER_HEALTH) as i64;
    standard as i64 + complementary
}

/// Applies passive-ability stat deltas. Flat increments first, then the
/// endurance percentage multipliers; Vitality resolves before Immortality,
/// which changes the result when both are present.
pub fn apply_ability_modifiers(stats: StatBlock, abilities: &AbilitySet) -> StatBlock {
    let mut modified = stats;

    if abilities.has(Ability::Armor) {
        modified.armor += 5;
    }
    if abilities.has(Ability::ToughenedSkin) {
        modified.armor += 2;
    }
    if abilities.has(Ability::FirstStrike) {
        modified.initiative += 200;
    }
    if abilities.has(Ability::Vitality) {
        modified.endurance = ((modified.endurance + 3) as f64 * 1.5).floor() as i32;
    }
    if abilities.has(Ability::Immortality) {
        modified.endurance = (modified.endurance as f64 * 2.5).floor() as i32;
    }

    modified
}

/// Per-hit damage ceiling: total health, or 20% of it for a Resistant defender.
pub fn max_damage_per_hit(total_health: i64, resistant: bool) -> i64 {
    if resistant {
        (total_health as f64 * RESISTANT_DAMAGE_FRACTION).floor() as i64
    } else {
        total_health
    }
}
