//! Passive abilities a combatant may carry into a fight. The vocabulary is
//! closed: unknown aliases are rejected at the edge instead of becoming
//! silently inert flags.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ability {
    /// +5 to the armor stat. Not to be confused with the stat itself.
    Armor,
    /// Acts first regardless of rolled initiative; also +200 initiative.
    FirstStrike,
    /// +250% endurance. Applied after Vitality when both are present.
    Immortality,
    /// Caps any single received hit at 20% of total health.
    Resistant,
    /// +2 to the armor stat.
    ToughenedSkin,
    /// +3 endurance, then +50% endurance.
    Vitality,
}

pub const ALL_ABILITIES: [Ability; 6] = [
    Ability::Armor,
    Ability::FirstStrike,
    Ability::Immortality,
    Ability::Resistant,
    Ability::ToughenedSkin,
    Ability::Vitality,
];

impl Ability {
    /// Persistence alias used in stored character data.
    pub const fn alias(self) -> &'static str {
        match self {
            Self::Armor => "armor",
            Self::FirstStrike => "firstStrike",
            Self::Immortality => "immortality",
            Self::Resistant => "resistant",
            Self::ToughenedSkin => "toughenedSkin",
            Self::Vitality => "vitality",
        }
    }

    pub fn from_alias(alias: &str) -> Result<Self, UnknownAbility> {
        ALL_ABILITIES
            .into_iter()
            .find(|ability| ability.alias() == alias)
            .ok_or_else(|| UnknownAbility {
                alias: alias.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAbility {
    pub alias: String,
}

impl fmt::Display for UnknownAbility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the ability \"{}\" does not exist", self.alias)
    }
}

impl std::error::Error for UnknownAbility {}

/// Ordered set of a combatant's passive abilities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilitySet {
    abilities: BTreeSet<Ability>,
}

impl AbilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_aliases<I, S>(aliases: I) -> Result<Self, UnknownAbility>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for alias in aliases {
            set.insert(Ability::from_alias(alias.as_ref())?);
        }
        Ok(set)
    }

    pub fn insert(&mut self, ability: Ability) {
        self.abilities.insert(ability);
    }

    pub fn has(&self, ability: Ability) -> bool {
        self.abilities.contains(&ability)
    }

    pub fn iter(&self) -> impl Iterator<Item = Ability> + '_ {
        self.abilities.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.abilities.len()
    }
}

impl FromIterator<Ability> for AbilitySet {
    fn from_iter<I: IntoIterator<Item = Ability>>(iter: I) -> Self {
        Self {
            abilities: iter.into_iter().collect(),
        }
    }
}
