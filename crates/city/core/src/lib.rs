//! Per-turn city yield resolution.
//!
//! `city-core` computes what a city produces each turn from a data-driven
//! catalog of bonus rules. Every cycle goes through [`engine::compute`]:
//! collectors build labeled base, percent and happiness maps, and the final
//! resolution stage applies them in a fixed order to produce an immutable
//! [`StatSnapshot`]. [`CityStats`] keeps the latest snapshot per city.
//!
//! The engine owns no world state; everything it reads comes through the
//! oracle traits in [`env`].
pub mod collect;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod labels;
pub mod resolve;
pub mod rules;
pub mod snapshot;
pub mod stats;

#[cfg(test)]
mod fixture;

pub use config::YieldConfig;
pub use engine::compute;
pub use env::{
    CityEnv, CityFlags, CityOracle, CityProvider, CityStateKind, CityStateView,
    ConditionalOracle, ConstructionOracle, DiplomacyOracle, EraBonus, FilterOracle, OwnerState,
    PopulationOracle, Relationship, RuleOracle, RuleTables, SettingsOracle, TileId, TileOracle,
    TileView,
};
pub use error::{ContentError, ErrorSeverity, YieldError};
pub use rules::{
    Conditional, ConstructionKind, ConstructionTarget, Rule, RuleBook, RuleKind, RuleScope,
    RuleSource, SchemaVersion, StatBlock, StatRef,
};
pub use snapshot::{CityStats, StatSnapshot};
pub use stats::{HappinessMap, Stat, StatMap, Stats};
