//! Data-driven content for the city yield engine.
//!
//! This crate houses everything the engine reads but never owns:
//! - Rulesets: rule partitions, specialist tables, era city-state bonuses (RON)
//! - Yield tuning constants (TOML)
//! - Difficulty settings (TOML)
//! - City scenarios for tooling and tests (RON)
//!
//! [`RuleCatalog`] and [`ScenarioCity`] implement the city-core oracle traits
//! on top of that data.

pub mod catalog;
pub mod ruleset;
pub mod scenario;
pub mod settings;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::RuleCatalog;
pub use ruleset::{RuleIssue, Ruleset};
pub use scenario::{CityScenario, ScenarioCity, ScenarioTile};
pub use settings::DifficultySettings;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, RulesetLoader, ScenarioLoader, SettingsLoader,
};
