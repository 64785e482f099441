//! Per-cycle materialization of the rule catalog.

use std::collections::BTreeMap;
use std::sync::Arc;

use strum::{EnumCount, IntoEnumIterator};

use super::kind::{Rule, RuleScope};
use super::params::StatBlock;
use crate::env::{CityEnv, EraBonus, RuleTables};
use crate::stats::Stats;

/// Catalog partition a rule was declared in.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum RuleSource {
    /// The owning faction's national trait.
    Faction,
    Policy,
    /// Buildings standing in this city.
    Structure,
    /// Wonders owned anywhere by the faction.
    Wonder,
    Religion,
    Resource,
}

impl RuleSource {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Immutable, shareable copy of the rule catalog for one cycle.
///
/// Built once at cycle start from a single [`RuleTables`] read plus the era
/// table; the collectors read nothing else rule-related afterwards.
///
/// Wonder rules are civilization-wide, so only `Global` ones are kept from
/// that partition; local wonder effects arrive through the structure
/// partition of the hosting city.
#[derive(Clone, Debug)]
pub struct RuleBook {
    partitions: [Arc<[Rule]>; RuleSource::COUNT],
    specialists: Arc<BTreeMap<String, StatBlock>>,
    structure_percent: Stats,
    era_bonuses: Option<Arc<[EraBonus]>>,
}

impl RuleBook {
    pub fn empty() -> Self {
        Self {
            partitions: core::array::from_fn(|_| Arc::from(Vec::new())),
            specialists: Arc::default(),
            structure_percent: Stats::ZERO,
            era_bonuses: None,
        }
    }

    pub fn materialize(env: &CityEnv<'_>) -> Self {
        Self::from_tables(env.rules().tables(), env.diplomacy().era_bonuses())
    }

    pub fn from_tables(tables: RuleTables, era_bonuses: Option<Vec<EraBonus>>) -> Self {
        let RuleTables {
            rules,
            specialists,
            structure_percent,
        } = tables;

        let mut partitions = rules;
        partitions[RuleSource::Wonder.index()].retain(|rule| rule.scope == RuleScope::Global);

        let book = Self {
            partitions: partitions.map(Arc::from),
            specialists: Arc::new(specialists),
            structure_percent,
            era_bonuses: era_bonuses.map(Arc::from),
        };
        tracing::debug!(rules = book.len(), "materialized rule book");
        book
    }

    pub fn rules(&self, source: RuleSource) -> &[Rule] {
        &self.partitions[source.index()]
    }

    /// Every rule, partitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (RuleSource, &Rule)> {
        RuleSource::iter().flat_map(move |source| {
            self.rules(source).iter().map(move |rule| (source, rule))
        })
    }

    /// Base yield table of one specialist type.
    pub fn specialist(&self, name: &str) -> Option<&StatBlock> {
        self.specialists.get(name)
    }

    pub fn structure_percent(&self) -> Stats {
        self.structure_percent
    }

    /// `None` when the era defines no city-state table.
    pub fn era_bonuses(&self) -> Option<&[EraBonus]> {
        self.era_bonuses.as_deref()
    }

    pub fn len(&self) -> usize {
        self.partitions.iter().map(|rules| rules.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::empty()
    }
}
