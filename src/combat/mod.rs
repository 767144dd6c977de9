pub mod abilities;
pub mod attack;
pub mod engine;
pub mod export;
pub mod log;
pub mod replay;
pub mod reward;
pub mod rng;
pub mod snapshot;
pub mod stats;
pub mod turn;

pub use abilities::{Ability, AbilitySet, UnknownAbility, ALL_ABILITIES};
pub use attack::{
    resolve_attack, BARE_HANDS_DAMAGE_MAX, BARE_HANDS_DAMAGE_MIN, BLOCK_CHANCE_PERCENT,
    BLOCK_DAMAGE_FACTOR, EVASION_PERCENT_PER_AGILITY, STRENGTH_DAMAGE_FACTOR,
};
pub use engine::{derive_seed, replay_fight, resolve_fight, FightError, MAX_TURNS};
pub use export::{default_export_name, write_fight_csv};
pub use log::{FightAction, FightLogEntry, FightResult};
pub use replay::verify_replay;
pub use reward::{experience_gain, LOSER_BASE_EXPERIENCE, WINNER_BASE_EXPERIENCE};
pub use rng::{EmptyChoice, SeededRandom};
pub use snapshot::{CombatantSnapshot, Weapon, WeaponCategory};
pub use stats::{
    apply_ability_modifiers, experience_for_level, health_for_level, level_from_experience,
    max_damage_per_hit, StatBlock, BASE_HEALTH, HEALTH_PER_LEVEL, LEVEL_EXPONENT,
};
pub use turn::{determine_first_actor, FirstActor};
