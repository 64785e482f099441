//! City scenarios: a self-contained description of one city, and the oracle
//! implementation that answers the engine from it.

use std::collections::BTreeMap;
use std::sync::Arc;

use city_core::{
    CityEnv, CityFlags, CityOracle, CityStateView, Conditional, ConditionalOracle,
    ConstructionOracle, ConstructionTarget, DiplomacyOracle, EraBonus, FilterOracle, OwnerState,
    PopulationOracle, RuleOracle, RuleTables, SettingsOracle, Stats, TileId, TileOracle,
    TileView,
};

use crate::catalog::RuleCatalog;
use crate::ruleset::Ruleset;
use crate::settings::DifficultySettings;

/// A tile owned by the scenario city.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScenarioTile {
    pub center: bool,
    pub worked: bool,
    pub yields_without_population: bool,
    pub yields: Stats,
}

/// Everything about one city the engine asks for, apart from the ruleset.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CityScenario {
    pub name: String,
    pub flags: CityFlags,
    pub owner: OwnerState,
    pub population: u32,
    pub specialists: Vec<(String, u32)>,
    pub free_population: u32,
    pub tiles: Vec<ScenarioTile>,
    pub construction: Option<ConstructionTarget>,
    /// Content-defined filters each construction satisfies, by name.
    pub construction_filters: BTreeMap<String, Vec<String>>,
    /// Yield each construction would produce once built, by name.
    pub construction_yields: BTreeMap<String, Stats>,
    /// Buildings already standing in the owner's capital.
    pub capital_buildings: Vec<String>,
    pub maintenance: f32,
    /// Named city filters this city satisfies.
    pub city_filters: Vec<String>,
    /// Conditionals that currently hold, by name.
    pub conditionals: Vec<String>,
    pub city_states: Vec<CityStateView>,
}

/// A scenario bound to difficulty settings and the catalog as it stood when
/// the binding was made.
///
/// Every rule-related answer, the era table included, comes from that one
/// pinned ruleset. Bind again to pick up later catalog extensions.
#[derive(Clone, Debug)]
pub struct ScenarioCity<'a> {
    scenario: &'a CityScenario,
    ruleset: Arc<Ruleset>,
    settings: &'a DifficultySettings,
}

impl<'a> ScenarioCity<'a> {
    pub fn new(
        scenario: &'a CityScenario,
        catalog: &RuleCatalog,
        settings: &'a DifficultySettings,
    ) -> Self {
        Self {
            scenario,
            ruleset: catalog.snapshot(),
            settings,
        }
    }

    pub fn scenario(&self) -> &'a CityScenario {
        self.scenario
    }

    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    pub fn env(&self) -> CityEnv<'_> {
        CityEnv::from_provider(self)
    }
}

impl CityOracle for ScenarioCity<'_> {
    fn flags(&self) -> CityFlags {
        self.scenario.flags
    }

    fn owner(&self) -> OwnerState {
        self.scenario.owner
    }
}

impl PopulationOracle for ScenarioCity<'_> {
    fn population(&self) -> u32 {
        self.scenario.population
    }

    fn specialists(&self) -> Vec<(String, u32)> {
        self.scenario.specialists.clone()
    }

    fn free_population(&self) -> u32 {
        self.scenario.free_population
    }
}

impl TileOracle for ScenarioCity<'_> {
    fn tiles(&self) -> Vec<TileView> {
        self.scenario
            .tiles
            .iter()
            .zip(0u32..)
            .map(|(tile, id)| TileView {
                id: TileId(id),
                is_center: tile.center,
                is_worked: tile.worked,
                yields_without_population: tile.yields_without_population,
            })
            .collect()
    }

    fn tile_yield(&self, tile: TileId) -> Stats {
        self.scenario
            .tiles
            .get(tile.0 as usize)
            .map_or(Stats::ZERO, |tile| tile.yields)
    }
}

impl ConstructionOracle for ScenarioCity<'_> {
    fn current(&self) -> Option<ConstructionTarget> {
        self.scenario.construction.clone()
    }

    fn matches_filter(&self, target: &ConstructionTarget, filter: &str) -> bool {
        self.scenario
            .construction_filters
            .get(&target.name)
            .is_some_and(|filters| filters.iter().any(|name| name == filter))
    }

    fn target_yield(&self, target: &ConstructionTarget) -> Stats {
        self.scenario
            .construction_yields
            .get(&target.name)
            .copied()
            .unwrap_or_default()
    }

    fn is_built_in_capital(&self, target: &ConstructionTarget) -> bool {
        self.scenario.capital_buildings.contains(&target.name)
    }

    fn maintenance_cost(&self) -> f32 {
        self.scenario.maintenance
    }
}

impl RuleOracle for ScenarioCity<'_> {
    fn tables(&self) -> RuleTables {
        self.ruleset.tables()
    }
}

impl FilterOracle for ScenarioCity<'_> {
    fn city_matches(&self, filter: &str) -> bool {
        self.scenario.city_filters.iter().any(|name| name == filter)
    }
}

impl ConditionalOracle for ScenarioCity<'_> {
    fn holds(&self, conditional: &Conditional) -> bool {
        self.scenario.conditionals.contains(&conditional.name)
    }
}

impl DiplomacyOracle for ScenarioCity<'_> {
    fn city_states(&self) -> Vec<CityStateView> {
        self.scenario.city_states.clone()
    }

    fn era_bonuses(&self) -> Option<Vec<EraBonus>> {
        self.ruleset.era_bonuses.clone()
    }
}

impl SettingsOracle for ScenarioCity<'_> {
    fn unhappiness_modifier(&self) -> f32 {
        self.settings.unhappiness_modifier()
    }

    fn ai_unhappiness_modifier(&self) -> f32 {
        self.settings.ai_unhappiness_modifier()
    }

    fn ai_building_maintenance_modifier(&self) -> f32 {
        self.settings.ai_building_maintenance_modifier()
    }

    fn gold_to_science_enabled(&self) -> bool {
        self.settings.gold_to_science_enabled()
    }

    fn debug_supercharged(&self) -> bool {
        self.settings.debug_supercharged()
    }
}
