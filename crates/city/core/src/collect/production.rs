//! Versioned resolution of production-for-construction rules.
//!
//! Each rule carries the [`SchemaVersion`] it was authored against, and the
//! version picks the resolver. A resolver only interprets the kinds of its own
//! generation; anything else is reported and contributes nothing.

use crate::error::ContentError;
use crate::rules::{ConstructionKind, Rule, RuleKind, SchemaVersion};

use super::matching::Matcher;

/// Interprets production percentages towards the current construction.
pub trait ProductionResolver: Send + Sync {
    fn version(&self) -> SchemaVersion;

    fn understands(&self, kind: &RuleKind) -> bool;

    /// Percentage points for the current target, `None` when the rule does
    /// not apply to it.
    fn production_percent(&self, kind: &RuleKind, matcher: &Matcher<'_>) -> Option<f32>;
}

/// `ProductionForConstruction { construction_filter, city_filter }`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CurrentProductionResolver;

impl ProductionResolver for CurrentProductionResolver {
    fn version(&self) -> SchemaVersion {
        SchemaVersion::Current
    }

    fn understands(&self, kind: &RuleKind) -> bool {
        matches!(kind, RuleKind::ProductionForConstruction { .. })
    }

    fn production_percent(&self, kind: &RuleKind, matcher: &Matcher<'_>) -> Option<f32> {
        let RuleKind::ProductionForConstruction {
            percent,
            construction_filter,
            city_filter,
        } = kind
        else {
            return None;
        };
        (matcher.construction_matches(construction_filter) && matcher.city_matches(city_filter))
            .then_some(*percent)
    }
}

/// The five older production forms.
#[derive(Clone, Copy, Debug, Default)]
pub struct LegacyProductionResolver;

impl ProductionResolver for LegacyProductionResolver {
    fn version(&self) -> SchemaVersion {
        SchemaVersion::Legacy
    }

    fn understands(&self, kind: &RuleKind) -> bool {
        matches!(
            kind,
            RuleKind::ProductionForStatBuildings { .. }
                | RuleKind::ProductionForNamed { .. }
                | RuleKind::ProductionForBuildings { .. }
                | RuleKind::ProductionForUnits { .. }
                | RuleKind::ProductionForWonders { .. }
        )
    }

    fn production_percent(&self, kind: &RuleKind, matcher: &Matcher<'_>) -> Option<f32> {
        let target = matcher.target()?;
        let applies = match kind {
            RuleKind::ProductionForStatBuildings { stat, .. } => {
                let stat = match stat.resolve() {
                    Ok(stat) => stat,
                    Err(error) => {
                        crate::error::report(&error, "ProductionForStatBuildings");
                        return None;
                    }
                };
                target.kind == ConstructionKind::Building
                    && matcher.env().construction().target_yield(target).get(stat) > 0.0
            }
            RuleKind::ProductionForNamed { name, .. } => {
                target.is_buildable() && target.name == *name
            }
            RuleKind::ProductionForBuildings {
                construction_filter,
                ..
            } => {
                target.kind == ConstructionKind::Building
                    && matcher.construction_matches(construction_filter)
            }
            RuleKind::ProductionForUnits {
                unit_filter,
                city_filter,
                ..
            } => {
                target.kind == ConstructionKind::Unit
                    && matcher.construction_matches(unit_filter)
                    && matcher.city_matches(city_filter)
            }
            RuleKind::ProductionForWonders {
                construction_filter,
                city_filter,
                ..
            } => {
                target.kind == ConstructionKind::Wonder
                    && matcher.construction_matches(construction_filter)
                    && matcher.city_matches(city_filter)
            }
            _ => return None,
        };
        if applies {
            legacy_percent(kind)
        } else {
            None
        }
    }
}

fn legacy_percent(kind: &RuleKind) -> Option<f32> {
    match kind {
        RuleKind::ProductionForStatBuildings { percent, .. }
        | RuleKind::ProductionForNamed { percent, .. }
        | RuleKind::ProductionForBuildings { percent, .. }
        | RuleKind::ProductionForUnits { percent, .. }
        | RuleKind::ProductionForWonders { percent, .. } => Some(*percent),
        _ => None,
    }
}

static CURRENT: CurrentProductionResolver = CurrentProductionResolver;
static LEGACY: LegacyProductionResolver = LegacyProductionResolver;

/// The resolver for rules authored against `version`.
pub fn resolver_for(version: SchemaVersion) -> &'static dyn ProductionResolver {
    match version {
        SchemaVersion::Current => &CURRENT,
        SchemaVersion::Legacy => &LEGACY,
    }
}

/// Error for a production rule whose kind is not part of the schema its
/// version tag names. Such a rule contributes nothing.
pub fn schema_mismatch(rule: &Rule) -> Option<ContentError> {
    if !rule.kind.is_production_for_construction() {
        return None;
    }
    let resolver = resolver_for(rule.version);
    (!resolver.understands(&rule.kind)).then(|| ContentError::SchemaMismatch {
        version: resolver.version(),
    })
}
