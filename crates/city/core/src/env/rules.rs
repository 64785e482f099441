use std::collections::BTreeMap;

use strum::EnumCount;

use crate::rules::{Conditional, Rule, RuleSource, StatBlock};
use crate::stats::Stats;

/// Owned copy of a rule catalog: every partition plus the ruleset tables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleTables {
    /// Rules by [`RuleSource::index`], each in catalog order.
    pub rules: [Vec<Rule>; RuleSource::COUNT],
    /// Base yield of one specialist, by type.
    pub specialists: BTreeMap<String, StatBlock>,
    /// Percent bonuses buildings declare outside the rule system.
    pub structure_percent: Stats,
}

impl RuleTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, source: RuleSource, rule: Rule) {
        self.rules[source.index()].push(rule);
    }

    pub fn partition(&self, source: RuleSource) -> &[Rule] {
        &self.rules[source.index()]
    }
}

/// Rule catalog partitions and ruleset tables.
pub trait RuleOracle: Send + Sync {
    /// Every partition and table, copied under one read so that a cycle never
    /// mixes two states of a catalog that is being extended.
    fn tables(&self) -> RuleTables;
}

/// Named city filters such as `"Coastal"` or `"in capital"`.
pub trait FilterOracle: Send + Sync {
    fn city_matches(&self, filter: &str) -> bool;
}

/// Evaluates rule conditionals against the live game state.
pub trait ConditionalOracle: Send + Sync {
    fn holds(&self, conditional: &Conditional) -> bool;

    fn all_hold(&self, conditionals: &[Conditional]) -> bool {
        conditionals.iter().all(|conditional| self.holds(conditional))
    }
}
