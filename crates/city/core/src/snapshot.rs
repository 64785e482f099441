//! StatSnapshot - the complete yield picture of a city for one turn.
//!
//! A snapshot is produced whole by a recompute and never edited afterwards.
//! [`CityStats`] owns the latest one and hands out shared handles, so readers
//! always see a complete cycle result even while a new one is being built.

use std::sync::{Arc, PoisonError, RwLock};

use crate::config::YieldConfig;
use crate::engine::compute;
use crate::env::CityEnv;
use crate::rules::ConstructionTarget;
use crate::stats::{HappinessMap, StatMap, Stats};

/// Immutable output of one yield cycle.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatSnapshot {
    /// Flat contributions by source, plus the construction conversion.
    pub base: StatMap,

    /// Percentage points by source.
    pub percent: StatMap,

    /// Final buckets after every conversion and override.
    pub final_stats: StatMap,

    pub happiness: HappinessMap,

    /// Food consumed by citizens this turn.
    pub food_eaten: f32,

    /// Elementwise sum of `final_stats`.
    pub total: Stats,
}

/// Per-city holder of the latest snapshot.
///
/// Recomputes build a new snapshot off-lock and then swap it in, so a reader
/// never observes a half-built result.
#[derive(Debug, Default)]
pub struct CityStats {
    config: YieldConfig,
    current: RwLock<Arc<StatSnapshot>>,
}

impl CityStats {
    pub fn new(config: YieldConfig) -> Self {
        Self {
            config,
            current: RwLock::new(Arc::new(StatSnapshot::default())),
        }
    }

    pub fn config(&self) -> &YieldConfig {
        &self.config
    }

    /// Recomputes yields for `target` and publishes the result.
    pub fn recompute(
        &self,
        env: &CityEnv<'_>,
        target: Option<&ConstructionTarget>,
    ) -> Arc<StatSnapshot> {
        let snapshot = Arc::new(compute(env, target, &self.config));
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Arc::clone(&snapshot);
        snapshot
    }

    /// Recomputes yields for whatever the city is building right now.
    pub fn recompute_current(&self, env: &CityEnv<'_>) -> Arc<StatSnapshot> {
        let target = env.construction().current();
        self.recompute(env, target.as_ref())
    }

    /// The last published snapshot.
    pub fn snapshot(&self) -> Arc<StatSnapshot> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }

    pub fn base(&self) -> StatMap {
        self.snapshot().base.clone()
    }

    pub fn percent(&self) -> StatMap {
        self.snapshot().percent.clone()
    }

    pub fn final_stats(&self) -> StatMap {
        self.snapshot().final_stats.clone()
    }

    pub fn happiness(&self) -> HappinessMap {
        self.snapshot().happiness.clone()
    }

    pub fn total(&self) -> Stats {
        self.snapshot().total
    }

    pub fn food_eaten(&self) -> f32 {
        self.snapshot().food_eaten
    }
}
