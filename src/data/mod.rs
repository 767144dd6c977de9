pub mod catalog;
pub mod character;

pub use catalog::{CatalogError, WeaponCatalog, DEFAULT_WEAPONS_PATH};
pub use character::{CharacterRecord, OPPONENT_LEVEL_WINDOW};
