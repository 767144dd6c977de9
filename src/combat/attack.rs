//! Single-turn attack resolution. The roll order here (weapon, evade, block,
//! damage, variance) is part of the replay contract: reordering it changes
//! every persisted fight.

use crate::combat::engine::FightError;
use crate::combat::log::{self, FightAction, FightLogEntry};
use crate::combat::rng::SeededRandom;
use crate::combat::snapshot::{CombatantSnapshot, Weapon, WeaponCategory};

/// Bare-hands damage range when no weapon is equipped.
pub const BARE_HANDS_DAMAGE_MIN: i64 = 0;
pub const BARE_HANDS_DAMAGE_MAX: i64 = 2;
/// Evasion chance in percent per point of agility (50+ agility always evades).
pub const EVASION_PERCENT_PER_AGILITY: i64 = 2;
/// Flat block chance in percent.
pub const BLOCK_CHANCE_PERCENT: i64 = 5;
/// Fraction of computed damage that lands through a block.
pub const BLOCK_DAMAGE_FACTOR: f64 = 0.3;
/// Damage added per point of strength.
pub const STRENGTH_DAMAGE_FACTOR: f64 = 0.5;
/// Random damage variance range.
pub const VARIANCE_MIN: f64 = 1.0;
pub const VARIANCE_MAX: f64 = 1.5;

const BARE_HANDS_NAME: &str = "bare hands";

/// Resolves one turn: the attacker swings, the defender's health is updated
/// in place, and the log entry for the turn is returned.
pub fn resolve_attack(
    rng: &mut SeededRandom,
    attacker: &CombatantSnapshot,
    defender: &CombatantSnapshot,
    defender_health: &mut i64,
    turn: u32,
) -> Result<FightLogEntry, FightError> {
    let weapon: Option<&Weapon> = if attacker.weapons.is_empty() {
        None
    } else {
        Some(rng.pick(&attacker.weapons)?)
    };
    let weapon_alias = weapon.map(|w| w.alias.clone());
    let weapon_name = weapon.map_or(BARE_HANDS_NAME, |w| w.name.as_str());

    let evasion_chance = EVASION_PERCENT_PER_AGILITY * defender.agility as i64;
    if rng.int(1, 100) <= evasion_chance {
        return Ok(FightLogEntry {
            turn,
            attacker_id: attacker.id,
            defender_id: defender.id,
            action: FightAction::Evade,
            weapon: weapon_alias,
            damage: 0,
            defender_health_after: (*defender_health).max(0),
            message: log::evade_message(&defender.name, &attacker.name),
        });
    }

    let blocked = rng.int(1, 100) <= BLOCK_CHANCE_PERCENT;

    let (damage_min, damage_max) = match weapon {
        Some(w) => (w.damage_min, w.damage_max),
        None => (BARE_HANDS_DAMAGE_MIN, BARE_HANDS_DAMAGE_MAX),
    };
    let weapon_damage = rng.int(damage_min, damage_max);
    let strength_bonus = (attacker.strength as f64 * STRENGTH_DAMAGE_FACTOR).floor() as i64;
    let variance = rng.float(VARIANCE_MIN, VARIANCE_MAX);
    let mut damage = ((weapon_damage + strength_bonus) as f64 * variance).floor() as i64;

    // Armor never mitigates thrown weapons.
    if weapon.map_or(true, |w| w.category != WeaponCategory::Thrown) {
        damage -= defender.armor as i64;
    }

    // A landed hit deals at least 1, capped by the defender's per-hit ceiling.
    // The floor wins over a degenerate ceiling below 1.
    damage = damage.min(defender.max_hit).max(1);

    let (action, message) = if blocked {
        damage = (damage as f64 * BLOCK_DAMAGE_FACTOR).floor() as i64;
        (
            FightAction::Block,
            log::block_message(&defender.name, &attacker.name, weapon_name, damage),
        )
    } else {
        (
            FightAction::Attack,
            log::attack_message(&attacker.name, weapon_name, damage),
        )
    };

    *defender_health -= damage;

    Ok(FightLogEntry {
        turn,
        attacker_id: attacker.id,
        defender_id: defender.id,
        action,
        weapon: weapon_alias,
        damage,
        defender_health_after: (*defender_health).max(0),
        message,
    })
}
