//! Rule matching shared by every collector.
//!
//! A rule contributes only when its kind fits the contribution being
//! collected, its conditionals hold, and its city and construction filters
//! match. [`Matcher`] reads the per-city facts once per cycle and answers
//! those questions for all collectors.

use crate::env::{CityEnv, CityFlags, OwnerState};
use crate::error::{ContentError, finite, report};
use crate::rules::{
    CategoryFilter, ConstructionTarget, Rule, RuleBook, RuleKind, RuleSource, StatRef,
    is_any_city,
};
use crate::stats::{Stat, Stats};

use super::production::{resolver_for, schema_mismatch};

/// Per-cycle view over the environment, the rule book and the target.
pub struct Matcher<'a> {
    env: CityEnv<'a>,
    book: &'a RuleBook,
    target: Option<&'a ConstructionTarget>,
    flags: CityFlags,
    owner: OwnerState,
    population: u32,
    specialists: Vec<(String, u32)>,
    free_population: u32,
}

impl<'a> Matcher<'a> {
    pub fn new(
        env: CityEnv<'a>,
        book: &'a RuleBook,
        target: Option<&'a ConstructionTarget>,
    ) -> Self {
        let population = env.population();
        Self {
            env,
            book,
            target,
            flags: env.city().flags(),
            owner: env.city().owner(),
            population: population.population(),
            specialists: population.specialists(),
            free_population: population.free_population(),
        }
    }

    pub fn env(&self) -> &CityEnv<'a> {
        &self.env
    }

    /// The rule catalog copy this cycle reads.
    pub fn book(&self) -> &'a RuleBook {
        self.book
    }

    pub fn target(&self) -> Option<&'a ConstructionTarget> {
        self.target
    }

    pub fn flags(&self) -> CityFlags {
        self.flags
    }

    pub fn owner(&self) -> &OwnerState {
        &self.owner
    }

    pub fn population(&self) -> u32 {
        self.population
    }

    pub fn specialists(&self) -> &[(String, u32)] {
        &self.specialists
    }

    pub fn specialist_count(&self) -> u32 {
        self.specialists.iter().map(|(_, count)| count).sum()
    }

    pub fn free_population(&self) -> u32 {
        self.free_population
    }

    // ========================================================================
    // Rule selection
    // ========================================================================

    /// Rules of one partition whose conditionals hold.
    pub fn active(&self, source: RuleSource) -> impl Iterator<Item = &'a Rule> + '_ {
        self.book
            .rules(source)
            .iter()
            .filter(move |rule| self.env.conditionals().all_hold(&rule.conditionals))
    }

    /// Active rules of every partition.
    pub fn all_active(&self) -> impl Iterator<Item = &'a Rule> + '_ {
        self.book
            .iter()
            .map(|(_, rule)| rule)
            .filter(move |rule| self.env.conditionals().all_hold(&rule.conditionals))
    }

    pub fn any_active(&self, source: RuleSource, predicate: impl Fn(&RuleKind) -> bool) -> bool {
        self.active(source).any(|rule| predicate(&rule.kind))
    }

    // ========================================================================
    // Filters
    // ========================================================================

    pub fn city_matches(&self, filter: &str) -> bool {
        is_any_city(filter) || self.env.filters().city_matches(filter)
    }

    /// Decides a construction filter against the current target.
    ///
    /// Category filters are decided here; any other name is delegated to the
    /// construction oracle, and only for units, buildings and wonders.
    pub fn construction_matches(&self, filter: &str) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        match CategoryFilter::parse(filter) {
            Some(category) => category.matches(target),
            None => target.is_buildable() && self.env.construction().matches_filter(target, filter),
        }
    }

    // ========================================================================
    // Contributions
    // ========================================================================

    /// Flat yield of one rule, zero for kinds that are not flat yields.
    pub fn flat_stats(&self, rule: &Rule) -> Stats {
        let name = rule.name();
        match &rule.kind {
            RuleKind::Stats { stats } => stats.resolve(name),
            RuleKind::StatsInCity { stats, city_filter } if self.city_matches(city_filter) => {
                stats.resolve(name)
            }
            RuleKind::StatsPerPopulation {
                stats,
                per,
                city_filter,
            } if self.city_matches(city_filter) => {
                if *per == 0 {
                    report(&ContentError::ZeroPopulationDivisor, name);
                    return Stats::ZERO;
                }
                stats.resolve(name).times((self.population / per) as f32)
            }
            RuleKind::StatsWithPopulation {
                stats,
                min_population,
                city_filter,
            } if self.population >= *min_population && self.city_matches(city_filter) => {
                stats.resolve(name)
            }
            _ => Stats::ZERO,
        }
    }

    /// Summed flat yields of the active rules of one partition.
    pub fn flat_from(&self, source: RuleSource) -> Stats {
        let mut total = Stats::ZERO;
        for rule in self.active(source) {
            total.add(&self.flat_stats(rule));
        }
        total
    }

    /// Percentage points of one rule, zero for kinds that are not generic
    /// percent bonuses.
    pub fn percent_stats(&self, rule: &Rule) -> Stats {
        let name = rule.name();
        match &rule.kind {
            RuleKind::StatPercent { stat, percent } => self.stat_percent(stat, *percent, name),
            RuleKind::StatPercentInCity {
                stat,
                percent,
                city_filter,
            } if self.city_matches(city_filter) => self.stat_percent(stat, *percent, name),
            kind if kind.is_production_for_construction() => {
                if let Some(error) = schema_mismatch(rule) {
                    report(&error, name);
                    return Stats::ZERO;
                }
                resolver_for(rule.version)
                    .production_percent(kind, self)
                    .and_then(|percent| finite("percent", percent, name))
                    .map_or(Stats::ZERO, |percent| {
                        Stats::of(Stat::Production, percent)
                    })
            }
            _ => Stats::ZERO,
        }
    }

    /// Summed percentage points of the active rules of one partition.
    pub fn percent_from(&self, source: RuleSource) -> Stats {
        let mut total = Stats::ZERO;
        for rule in self.active(source) {
            total.add(&self.percent_stats(rule));
        }
        total
    }

    /// Sum of the percentages `select` extracts from active rules whose city
    /// filter matches.
    pub fn percent_sum<F>(&self, select: F) -> f32
    where
        F: Fn(&RuleKind) -> Option<(f32, &str)>,
    {
        self.city_percents(select).into_iter().sum()
    }

    /// Product of `(1 + p / 100)` over the same selection as [`Self::percent_sum`].
    pub fn percent_product<F>(&self, select: F) -> f32
    where
        F: Fn(&RuleKind) -> Option<(f32, &str)>,
    {
        self.city_percents(select)
            .into_iter()
            .map(|percent| 1.0 + percent / 100.0)
            .product()
    }

    fn city_percents<F>(&self, select: F) -> Vec<f32>
    where
        F: Fn(&RuleKind) -> Option<(f32, &str)>,
    {
        let mut percents = Vec::new();
        for rule in self.all_active() {
            let Some((percent, city_filter)) = select(&rule.kind) else {
                continue;
            };
            if !self.city_matches(city_filter) {
                continue;
            }
            if let Some(percent) = finite("percent", percent, rule.name()) {
                percents.push(percent);
            }
        }
        percents
    }

    fn stat_percent(&self, stat: &StatRef, percent: f32, name: &'static str) -> Stats {
        let Some(percent) = finite("percent", percent, name) else {
            return Stats::ZERO;
        };
        match stat.resolve() {
            Ok(stat) => Stats::of(stat, percent),
            Err(error) => {
                report(&error, name);
                Stats::ZERO
            }
        }
    }
}
