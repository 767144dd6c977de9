//! Weapon catalog: the closed set of weapons a character can equip.
//!
//! A JSON file at [DEFAULT_WEAPONS_PATH] can override the built-in table
//! (same shape as the built-in serialization); a missing file falls back to
//! the built-in data.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::combat::snapshot::{Weapon, WeaponCategory};

pub const DEFAULT_WEAPONS_PATH: &str = "data/weapons.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponCatalog {
    pub weapons: Vec<Weapon>,
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    UnknownAlias(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read weapon catalog: {err}"),
            Self::Parse(err) => write!(f, "failed to parse weapon catalog: {err}"),
            Self::UnknownAlias(alias) => {
                write!(f, "the weapon \"{alias}\" does not exist in the catalog")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl WeaponCatalog {
    /// The standard weapon table. Bare hands are not listed: an empty
    /// equipped set is the bare-hands fallback, not a catalog entry.
    pub fn builtin() -> Self {
        use WeaponCategory::{Fast, Heavy, Long, Sharp, Thrown};

        fn weapon(
            alias: &str,
            name: &str,
            damage_min: i64,
            damage_max: i64,
            category: WeaponCategory,
        ) -> Weapon {
            Weapon {
                alias: alias.to_string(),
                name: name.to_string(),
                damage_min,
                damage_max,
                category,
            }
        }

        Self {
            weapons: vec![
                weapon("knife", "Knife", 7, 11, Fast),
                weapon("shuriken", "Shuriken", 5, 8, Thrown),
                weapon("sword", "Sword", 15, 25, Sharp),
                weapon("scimitar", "Scimitar", 18, 28, Sharp),
                weapon("axe", "Axe", 25, 40, Heavy),
                weapon("hammer", "Hammer", 30, 50, Heavy),
                weapon("spear", "Spear", 12, 20, Long),
                weapon("mace", "Mace", 20, 35, Heavy),
                weapon("dagger", "Dagger", 5, 9, Fast),
                weapon("whip", "Whip", 8, 15, Long),
                weapon("nunchaku", "Nunchaku", 10, 18, Fast),
                weapon("trident", "Trident", 18, 30, Long),
                weapon("hatchet", "Hatchet", 12, 20, Thrown),
                weapon("flail", "Flail", 22, 38, Heavy),
            ],
        }
    }

    /// Loads a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(CatalogError::Io)?;
        serde_json::from_str(&text).map_err(CatalogError::Parse)
    }

    /// Loads [DEFAULT_WEAPONS_PATH] if present, otherwise the built-in table.
    pub fn load_or_builtin() -> Self {
        if Path::new(DEFAULT_WEAPONS_PATH).exists() {
            Self::load(DEFAULT_WEAPONS_PATH).unwrap_or_else(|_| Self::builtin())
        } else {
            Self::builtin()
        }
    }

    pub fn get(&self, alias: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|weapon| weapon.alias == alias)
    }

    /// Resolves equipped-weapon aliases into fight-ready weapons. Unknown
    /// aliases fail, the same way unknown ability aliases do.
    pub fn resolve<I, S>(&self, aliases: I) -> Result<Vec<Weapon>, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        aliases
            .into_iter()
            .map(|alias| {
                self.get(alias.as_ref())
                    .cloned()
                    .ok_or_else(|| CatalogError::UnknownAlias(alias.as_ref().to_string()))
            })
            .collect()
    }
}

impl Default for WeaponCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
