//! Percent bonus collector: additive percentage points by source.

use crate::config::YieldConfig;
use crate::env::CityFlags;
use crate::error::{finite, report};
use crate::labels;
use crate::rules::{ConstructionKind, RuleKind, RuleSource};
use crate::stats::{Stat, StatMap, Stats};

use super::matching::Matcher;

pub fn collect(m: &Matcher<'_>, config: &YieldConfig) -> StatMap {
    let mut map = StatMap::new();
    let flags = m.flags();
    let owner = m.owner();

    if owner.golden_age {
        map.add(
            labels::GOLDEN_AGE,
            Stats::from_pairs([
                (Stat::Production, config.golden_age_production_percent),
                (Stat::Culture, config.golden_age_culture_percent),
            ]),
        );
    }

    map.add(labels::POLICIES, m.percent_from(RuleSource::Policy));

    let mut buildings = m.percent_from(RuleSource::Structure);
    buildings.add(&m.book().structure_percent());
    map.add(labels::BUILDINGS, buildings);

    map.add(labels::WONDERS, m.percent_from(RuleSource::Wonder));

    if flags.intersects(CityFlags::CAPITAL | CityFlags::RAIL_CONNECTED) && owner.has_railroad {
        map.add(
            labels::RAILROADS,
            Stats::of(Stat::Production, config.railroad_production_percent),
        );
    }

    map.add(labels::RESOURCES, m.percent_from(RuleSource::Resource));
    if let Some(legacy) = legacy_resource(m) {
        map.set(labels::RESOURCES, legacy);
    }

    let mut national = m.percent_from(RuleSource::Faction);
    if capital_building_bonus(m) {
        national.add_to(Stat::Production, config.capital_building_production_percent);
    }
    map.add(labels::NATIONAL_ABILITY, national);

    if flags.contains(CityFlags::PUPPET) {
        map.add(
            labels::PUPPET_CITY,
            Stats::from_pairs([
                (Stat::Science, -config.puppet_science_penalty_percent),
                (Stat::Culture, -config.puppet_culture_penalty_percent),
            ]),
        );
    }

    map.add(labels::RELIGION, m.percent_from(RuleSource::Religion));

    if owner.unit_supply_penalty > 0.0 {
        map.add(
            labels::UNIT_SUPPLY,
            Stats::of(Stat::Production, -owner.unit_supply_penalty),
        );
    }

    if m.env().settings().debug_supercharged() {
        tracing::debug!("debug supercharge replaces every percent bonus");
        map.clear();
        map.add(labels::SUPERCHARGED, Stats::splat(config.supercharged_percent));
    }
    map
}

/// The first applicable legacy resource rule, which replaces the whole
/// resource bucket.
fn legacy_resource(m: &Matcher<'_>) -> Option<Stats> {
    m.active(RuleSource::Resource).find_map(|rule| {
        let RuleKind::LegacyResourcePercent { stat, percent } = &rule.kind else {
            return None;
        };
        let percent = finite("percent", *percent, rule.name())?;
        match stat.resolve() {
            Ok(stat) => Some(Stats::of(stat, percent)),
            Err(error) => {
                report(&error, rule.name());
                None
            }
        }
    })
}

fn capital_building_bonus(m: &Matcher<'_>) -> bool {
    let Some(target) = m.target() else {
        return false;
    };
    target.kind == ConstructionKind::Building
        && m.any_active(RuleSource::Faction, |kind| {
            matches!(kind, RuleKind::CapitalBuildingProduction)
        })
        && m.env().construction().is_built_in_capital(target)
}
