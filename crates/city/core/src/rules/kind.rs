//! Rule records and the closed set of rule kinds.

use super::params::{Conditional, StatBlock, StatRef};

/// Whether a rule affects only its host city or every city of the owner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleScope {
    /// Applies to every city of the owning faction.
    Global,
    /// Applies to the city that hosts the source.
    #[default]
    Local,
}

/// Schema generation a rule was authored against.
///
/// The tag selects which resolver interprets the rule; see
/// [`crate::collect::production`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SchemaVersion {
    #[default]
    Current,
    Legacy,
}

/// A data-driven, conditionally applicable bonus declaration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    pub kind: RuleKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub conditionals: Vec<Conditional>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub scope: RuleScope,
    #[cfg_attr(feature = "serde", serde(default))]
    pub version: SchemaVersion,
}

impl Rule {
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            conditionals: Vec::new(),
            scope: RuleScope::Local,
            version: SchemaVersion::Current,
        }
    }

    pub fn global(mut self) -> Self {
        self.scope = RuleScope::Global;
        self
    }

    pub fn legacy(mut self) -> Self {
        self.version = SchemaVersion::Legacy;
        self
    }

    pub fn when(mut self, conditional: Conditional) -> Self {
        self.conditionals.push(conditional);
        self
    }

    /// Variant name, used when reporting.
    pub fn name(&self) -> &'static str {
        (&self.kind).into()
    }
}

impl From<RuleKind> for Rule {
    fn from(kind: RuleKind) -> Self {
        Self::new(kind)
    }
}

/// Every effect category the engine understands.
///
/// Filters are plain strings; `""` and `"All"` match every city.
#[derive(Clone, Debug, PartialEq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleKind {
    // ========================================================================
    // Flat yields
    // ========================================================================
    Stats {
        stats: StatBlock,
    },
    StatsInCity {
        stats: StatBlock,
        city_filter: String,
    },
    /// `stats × ⌊population / per⌋`.
    StatsPerPopulation {
        stats: StatBlock,
        per: u32,
        city_filter: String,
    },
    StatsWithPopulation {
        stats: StatBlock,
        min_population: u32,
        city_filter: String,
    },
    /// Extra yield for every specialist of a type (`"All"` for any type).
    StatsFromSpecialist {
        stats: StatBlock,
        specialist: String,
        city_filter: String,
    },
    StatsPerTradeRoute {
        stats: StatBlock,
    },
    TradeRouteGoldBonus,

    // ========================================================================
    // Percent bonuses
    // ========================================================================
    StatPercent {
        stat: StatRef,
        percent: f32,
    },
    StatPercentInCity {
        stat: StatRef,
        percent: f32,
        city_filter: String,
    },
    /// Scales one channel of the city-state bucket.
    CityStateStatPercent {
        stat: StatRef,
        percent: f32,
    },
    ProductionForConstruction {
        percent: f32,
        construction_filter: String,
        city_filter: String,
    },
    /// Legacy: building whose own yield includes `stat`.
    ProductionForStatBuildings {
        percent: f32,
        stat: StatRef,
    },
    /// Legacy: one construction by exact name.
    ProductionForNamed {
        percent: f32,
        name: String,
    },
    /// Legacy: ordinary buildings matching a construction filter.
    ProductionForBuildings {
        percent: f32,
        construction_filter: String,
    },
    /// Legacy: units matching a filter, in matching cities.
    ProductionForUnits {
        percent: f32,
        unit_filter: String,
        city_filter: String,
    },
    /// Legacy: wonders matching a filter, in matching cities.
    ProductionForWonders {
        percent: f32,
        construction_filter: String,
        city_filter: String,
    },
    /// Legacy resource bonus; overwrites the resource bucket.
    LegacyResourcePercent {
        stat: StatRef,
        percent: f32,
    },
    /// Production bonus towards buildings that already exist in the capital.
    CapitalBuildingProduction,

    // ========================================================================
    // Happiness
    // ========================================================================
    PopulationUnhappinessPercent {
        percent: f32,
        city_filter: String,
    },
    SpecialistUnhappinessPercent {
        percent: f32,
        city_filter: String,
    },
    NoAnnexedUnhappiness,
    DoubleCityUnhappiness,

    // ========================================================================
    // Final resolution
    // ========================================================================
    SpecialistFoodConsumptionPercent {
        percent: f32,
        city_filter: String,
    },
    GrowthPercent {
        percent: f32,
        city_filter: String,
    },
    MaintenancePercent {
        percent: f32,
        city_filter: String,
    },
    ExcessFoodToProduction {
        construction_filter: String,
    },
    ScienceConversionBoost,
}

impl RuleKind {
    /// Kinds whose contribution is a production percentage for the current
    /// construction target.
    pub fn is_production_for_construction(&self) -> bool {
        matches!(
            self,
            Self::ProductionForConstruction { .. }
                | Self::ProductionForStatBuildings { .. }
                | Self::ProductionForNamed { .. }
                | Self::ProductionForBuildings { .. }
                | Self::ProductionForUnits { .. }
                | Self::ProductionForWonders { .. }
        )
    }

    /// Stat blocks carried by this rule, for content validation.
    pub fn stat_blocks(&self) -> Option<&StatBlock> {
        match self {
            Self::Stats { stats }
            | Self::StatsInCity { stats, .. }
            | Self::StatsPerPopulation { stats, .. }
            | Self::StatsWithPopulation { stats, .. }
            | Self::StatsFromSpecialist { stats, .. }
            | Self::StatsPerTradeRoute { stats } => Some(stats),
            _ => None,
        }
    }

    /// Single stat reference carried by this rule, for content validation.
    pub fn stat_ref(&self) -> Option<&StatRef> {
        match self {
            Self::StatPercent { stat, .. }
            | Self::StatPercentInCity { stat, .. }
            | Self::CityStateStatPercent { stat, .. }
            | Self::ProductionForStatBuildings { stat, .. }
            | Self::LegacyResourcePercent { stat, .. } => Some(stat),
            _ => None,
        }
    }
}
