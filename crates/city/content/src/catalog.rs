//! Shared, extendable rule catalog.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use city_core::{Rule, RuleOracle, RuleSource, RuleTables};

use crate::ruleset::{RuleIssue, Ruleset};

/// Rule catalog shared by every city of a game.
///
/// Mods may extend the catalog while cities read it. The ruleset sits behind
/// an `Arc`: a merge copies it under the write lock and swaps the result in,
/// and readers pin whole rulesets with [`RuleCatalog::snapshot`], so nobody
/// sees a partially merged ruleset.
#[derive(Debug, Default)]
pub struct RuleCatalog {
    ruleset: RwLock<Arc<Ruleset>>,
}

impl RuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ruleset(ruleset: Ruleset) -> Self {
        Self {
            ruleset: RwLock::new(Arc::new(ruleset)),
        }
    }

    /// Layers a mod ruleset on top of the catalog.
    pub fn extend(&self, ruleset: Ruleset) {
        let added = ruleset.len();
        let total = {
            let mut current = self.write();
            Arc::make_mut(&mut *current).merge(ruleset);
            current.len()
        };
        tracing::debug!(added, total, "extended rule catalog");
    }

    pub fn push(&self, source: RuleSource, rule: Rule) {
        let mut current = self.write();
        Arc::make_mut(&mut *current).partition_mut(source).push(rule);
    }

    /// The current ruleset. Later extensions do not affect it.
    pub fn snapshot(&self) -> Arc<Ruleset> {
        Arc::clone(&*self.read())
    }

    pub fn validate(&self) -> Vec<RuleIssue> {
        self.snapshot().validate()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, Arc<Ruleset>> {
        self.ruleset.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Arc<Ruleset>> {
        self.ruleset.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Ruleset> for RuleCatalog {
    fn from(ruleset: Ruleset) -> Self {
        Self::from_ruleset(ruleset)
    }
}

impl RuleOracle for RuleCatalog {
    fn tables(&self) -> RuleTables {
        self.snapshot().tables()
    }
}
