//! In-memory city answering every oracle, for unit tests.

use crate::config::YieldConfig;
use crate::engine::compute;
use crate::env::{
    CityEnv, CityFlags, CityOracle, CityStateView, ConditionalOracle, ConstructionOracle,
    DiplomacyOracle, EraBonus, FilterOracle, OwnerState, PopulationOracle, RuleOracle,
    RuleTables, SettingsOracle, TileId, TileOracle, TileView,
};
use crate::rules::{Conditional, ConstructionTarget, Rule, RuleSource, StatBlock};
use crate::snapshot::StatSnapshot;
use crate::stats::Stats;

pub(crate) struct TestCity {
    pub flags: CityFlags,
    pub owner: OwnerState,
    pub population: u32,
    pub specialists: Vec<(String, u32)>,
    pub free_population: u32,
    pub tiles: Vec<(TileView, Stats)>,
    pub target: Option<ConstructionTarget>,
    /// `(target name, filter)` pairs the construction oracle accepts.
    pub construction_filters: Vec<(String, String)>,
    pub target_yields: Vec<(String, Stats)>,
    pub built_in_capital: Vec<String>,
    pub maintenance: f32,
    pub rules: Vec<(RuleSource, Rule)>,
    pub specialist_table: Vec<(String, StatBlock)>,
    pub structure_percent: Stats,
    pub city_filters: Vec<String>,
    pub failing_conditionals: Vec<String>,
    pub city_states: Vec<CityStateView>,
    pub era_bonuses: Option<Vec<EraBonus>>,
    pub unhappiness_modifier: f32,
    pub ai_unhappiness_modifier: f32,
    pub ai_maintenance_modifier: f32,
    pub gold_to_science: bool,
    pub supercharged: bool,
}

impl TestCity {
    pub fn new() -> Self {
        Self {
            flags: CityFlags::empty(),
            owner: OwnerState::default(),
            population: 0,
            specialists: Vec::new(),
            free_population: 0,
            tiles: Vec::new(),
            target: None,
            construction_filters: Vec::new(),
            target_yields: Vec::new(),
            built_in_capital: Vec::new(),
            maintenance: 0.0,
            rules: Vec::new(),
            specialist_table: Vec::new(),
            structure_percent: Stats::ZERO,
            city_filters: Vec::new(),
            failing_conditionals: Vec::new(),
            city_states: Vec::new(),
            era_bonuses: None,
            unhappiness_modifier: 1.0,
            ai_unhappiness_modifier: 1.0,
            ai_maintenance_modifier: 1.0,
            gold_to_science: false,
            supercharged: false,
        }
    }

    pub fn add_rule(&mut self, source: RuleSource, rule: Rule) {
        self.rules.push((source, rule));
    }

    pub fn add_tile(&mut self, tile: TileView, stats: Stats) {
        self.tiles.push((tile, stats));
    }

    pub fn env(&self) -> CityEnv<'_> {
        CityEnv::from_provider(self)
    }

    pub fn compute(&self) -> StatSnapshot {
        compute(&self.env(), self.target.as_ref(), &YieldConfig::default())
    }
}

impl CityOracle for TestCity {
    fn flags(&self) -> CityFlags {
        self.flags
    }

    fn owner(&self) -> OwnerState {
        self.owner
    }
}

impl PopulationOracle for TestCity {
    fn population(&self) -> u32 {
        self.population
    }

    fn specialists(&self) -> Vec<(String, u32)> {
        self.specialists.clone()
    }

    fn free_population(&self) -> u32 {
        self.free_population
    }
}

impl TileOracle for TestCity {
    fn tiles(&self) -> Vec<TileView> {
        self.tiles.iter().map(|(tile, _)| *tile).collect()
    }

    fn tile_yield(&self, tile: TileId) -> Stats {
        self.tiles
            .iter()
            .find(|(view, _)| view.id == tile)
            .map_or(Stats::ZERO, |(_, stats)| *stats)
    }
}

impl ConstructionOracle for TestCity {
    fn current(&self) -> Option<ConstructionTarget> {
        self.target.clone()
    }

    fn matches_filter(&self, target: &ConstructionTarget, filter: &str) -> bool {
        self.construction_filters
            .iter()
            .any(|(name, accepted)| *name == target.name && accepted == filter)
    }

    fn target_yield(&self, target: &ConstructionTarget) -> Stats {
        self.target_yields
            .iter()
            .find(|(name, _)| *name == target.name)
            .map_or(Stats::ZERO, |(_, stats)| *stats)
    }

    fn is_built_in_capital(&self, target: &ConstructionTarget) -> bool {
        self.built_in_capital.contains(&target.name)
    }

    fn maintenance_cost(&self) -> f32 {
        self.maintenance
    }
}

impl RuleOracle for TestCity {
    fn tables(&self) -> RuleTables {
        let mut tables = RuleTables::new();
        for (source, rule) in &self.rules {
            tables.push(*source, rule.clone());
        }
        tables.specialists = self.specialist_table.iter().cloned().collect();
        tables.structure_percent = self.structure_percent;
        tables
    }
}

impl FilterOracle for TestCity {
    fn city_matches(&self, filter: &str) -> bool {
        self.city_filters.iter().any(|accepted| accepted == filter)
    }
}

impl ConditionalOracle for TestCity {
    fn holds(&self, conditional: &Conditional) -> bool {
        !self.failing_conditionals.contains(&conditional.name)
    }
}

impl DiplomacyOracle for TestCity {
    fn city_states(&self) -> Vec<CityStateView> {
        self.city_states.clone()
    }

    fn era_bonuses(&self) -> Option<Vec<EraBonus>> {
        self.era_bonuses.clone()
    }
}

impl SettingsOracle for TestCity {
    fn unhappiness_modifier(&self) -> f32 {
        self.unhappiness_modifier
    }

    fn ai_unhappiness_modifier(&self) -> f32 {
        self.ai_unhappiness_modifier
    }

    fn ai_building_maintenance_modifier(&self) -> f32 {
        self.ai_maintenance_modifier
    }

    fn gold_to_science_enabled(&self) -> bool {
        self.gold_to_science
    }

    fn debug_supercharged(&self) -> bool {
        self.supercharged
    }
}
