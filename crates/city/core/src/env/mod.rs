//! Traits describing the world a city lives in.
//!
//! Oracles expose everything the yield engine reads but does not own: citizen
//! counts, tiles, the construction queue, rule catalogs, filters, diplomacy and
//! difficulty settings. [`CityEnv`] bundles them so the collectors can reach
//! everything without coupling to concrete implementations.
mod city;
mod construction;
mod diplomacy;
mod population;
mod rules;
mod settings;
mod tiles;

pub use city::{CityFlags, CityOracle, OwnerState};
pub use construction::ConstructionOracle;
pub use diplomacy::{CityStateKind, CityStateView, DiplomacyOracle, EraBonus, Relationship};
pub use population::PopulationOracle;
pub use rules::{ConditionalOracle, FilterOracle, RuleOracle, RuleTables};
pub use settings::SettingsOracle;
pub use tiles::{TileId, TileOracle, TileView};

/// Every oracle in one value, for implementors that answer all of them.
pub trait CityProvider:
    CityOracle
    + PopulationOracle
    + TileOracle
    + ConstructionOracle
    + RuleOracle
    + FilterOracle
    + ConditionalOracle
    + DiplomacyOracle
    + SettingsOracle
{
}

impl<T> CityProvider for T where
    T: CityOracle
        + PopulationOracle
        + TileOracle
        + ConstructionOracle
        + RuleOracle
        + FilterOracle
        + ConditionalOracle
        + DiplomacyOracle
        + SettingsOracle
{
}

/// Aggregates the read-only oracles one yield cycle needs.
#[derive(Clone, Copy)]
pub struct CityEnv<'a> {
    city: &'a dyn CityOracle,
    population: &'a dyn PopulationOracle,
    tiles: &'a dyn TileOracle,
    construction: &'a dyn ConstructionOracle,
    rules: &'a dyn RuleOracle,
    filters: &'a dyn FilterOracle,
    conditionals: &'a dyn ConditionalOracle,
    diplomacy: &'a dyn DiplomacyOracle,
    settings: &'a dyn SettingsOracle,
}

impl<'a> CityEnv<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        city: &'a dyn CityOracle,
        population: &'a dyn PopulationOracle,
        tiles: &'a dyn TileOracle,
        construction: &'a dyn ConstructionOracle,
        rules: &'a dyn RuleOracle,
        filters: &'a dyn FilterOracle,
        conditionals: &'a dyn ConditionalOracle,
        diplomacy: &'a dyn DiplomacyOracle,
        settings: &'a dyn SettingsOracle,
    ) -> Self {
        Self {
            city,
            population,
            tiles,
            construction,
            rules,
            filters,
            conditionals,
            diplomacy,
            settings,
        }
    }

    /// Borrows every oracle from a single provider.
    pub fn from_provider<P: CityProvider>(provider: &'a P) -> Self {
        Self::new(
            provider, provider, provider, provider, provider, provider, provider, provider,
            provider,
        )
    }

    pub fn city(&self) -> &'a dyn CityOracle {
        self.city
    }

    pub fn population(&self) -> &'a dyn PopulationOracle {
        self.population
    }

    pub fn tiles(&self) -> &'a dyn TileOracle {
        self.tiles
    }

    pub fn construction(&self) -> &'a dyn ConstructionOracle {
        self.construction
    }

    pub fn rules(&self) -> &'a dyn RuleOracle {
        self.rules
    }

    pub fn filters(&self) -> &'a dyn FilterOracle {
        self.filters
    }

    pub fn conditionals(&self) -> &'a dyn ConditionalOracle {
        self.conditionals
    }

    pub fn diplomacy(&self) -> &'a dyn DiplomacyOracle {
        self.diplomacy
    }

    pub fn settings(&self) -> &'a dyn SettingsOracle {
        self.settings
    }
}

impl core::fmt::Debug for CityEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CityEnv").finish_non_exhaustive()
    }
}
