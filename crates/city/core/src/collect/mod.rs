//! Collectors that turn rules and city facts into labeled maps.
//!
//! ```text
//! RuleBook + CityEnv ──► Matcher
//!                          ├─► base::collect       → StatMap  (flat yields)
//!                          ├─► happiness::collect  → HappinessMap
//!                          └─► percent::collect    → StatMap  (percentage points)
//! ```
//!
//! Production percentages towards the current construction go through the
//! versioned resolvers in [`production`].

pub mod base;
pub mod happiness;
pub mod matching;
pub mod percent;
pub mod production;

pub use matching::Matcher;
pub use production::{
    CurrentProductionResolver, LegacyProductionResolver, ProductionResolver, resolver_for,
    schema_mismatch,
};
