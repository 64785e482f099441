use crate::rules::ConstructionTarget;
use crate::stats::Stats;

/// The city's construction queue, seen from the yield engine.
pub trait ConstructionOracle: Send + Sync {
    fn current(&self) -> Option<ConstructionTarget>;

    /// Decides a content-defined filter such as `"Military"` or `"Culture"`.
    /// Category filters (`All`, units, buildings, wonders) never reach here.
    fn matches_filter(&self, target: &ConstructionTarget, filter: &str) -> bool;

    /// Yield the finished construction would produce by itself.
    fn target_yield(&self, target: &ConstructionTarget) -> Stats;

    fn is_built_in_capital(&self, target: &ConstructionTarget) -> bool;

    /// Gold upkeep of every building in the city.
    fn maintenance_cost(&self) -> f32;
}
