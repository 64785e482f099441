//! Happiness collector: signed happiness deltas by source.

use crate::config::YieldConfig;
use crate::env::CityFlags;
use crate::labels;
use crate::rules::{RuleKind, RuleSource};
use crate::stats::{HappinessMap, Stat, StatMap};

use super::matching::Matcher;

/// Base buckets whose Happiness channel is reported, and whether the value is
/// truncated to whole units.
const FROM_BASE: [(&str, bool); 7] = [
    (labels::POLICIES, false),
    (labels::BUILDINGS, true),
    (labels::NATIONAL_ABILITY, false),
    (labels::WONDERS, false),
    (labels::RELIGION, false),
    (labels::SPECIALISTS, true),
    (labels::TILE_YIELDS, false),
];

/// Collects happiness. Reads the Happiness channel of the base buckets, so it
/// runs after the base collector.
pub fn collect(m: &Matcher<'_>, base: &StatMap, config: &YieldConfig) -> HappinessMap {
    let mut map = HappinessMap::new();
    let modifier = unhappiness_modifier(m);

    let doubled = m.any_active(RuleSource::Faction, |kind| {
        matches!(kind, RuleKind::DoubleCityUnhappiness)
    });
    let city_factor = if doubled { 2.0 } else { 1.0 };
    map.insert(
        labels::CITIES,
        config.base_city_unhappiness * city_factor * modifier,
    );

    let occupied = annex_penalty(m);
    map.insert(labels::POPULATION, 0.0 - population_unhappiness(m, config, occupied) * modifier);

    if occupied {
        map.insert(labels::OCCUPIED_CITY, config.occupied_city_unhappiness);
    }

    for (label, truncate) in FROM_BASE {
        let value = base.get(label).map_or(0.0, |stats| stats.get(Stat::Happiness));
        let value = if truncate { value.trunc() } else { value };
        map.insert_nonzero(label, value);
    }
    map
}

/// Difficulty modifier, with the AI modifier on top for non-player owners.
fn unhappiness_modifier(m: &Matcher<'_>) -> f32 {
    let settings = m.env().settings();
    let mut modifier = settings.unhappiness_modifier();
    if !m.owner().is_player {
        modifier *= settings.ai_unhappiness_modifier();
    }
    modifier
}

/// Whether an annexed foreign city suffers the occupation penalty.
fn annex_penalty(m: &Matcher<'_>) -> bool {
    m.flags().is_occupied()
        && !m.any_active(RuleSource::Structure, |kind| {
            matches!(kind, RuleKind::NoAnnexedUnhappiness)
        })
}

/// Unhappiness from citizens before the difficulty modifier, as a positive
/// number.
fn population_unhappiness(m: &Matcher<'_>, config: &YieldConfig, occupied: bool) -> f32 {
    let population = m.population() as f32;
    let specialists = m.specialist_count() as f32;

    let specialist_factor = m.percent_product(|kind| match kind {
        RuleKind::SpecialistUnhappinessPercent {
            percent,
            city_filter,
        } => Some((*percent, city_filter.as_str())),
        _ => None,
    });
    let mut unhappiness = population - specialists + specialists * specialist_factor;

    if m.flags().contains(CityFlags::PUPPET) {
        unhappiness *= config.puppet_population_unhappiness;
    } else if occupied {
        unhappiness *= config.annexed_population_unhappiness;
    }

    unhappiness
        * m.percent_product(|kind| match kind {
            RuleKind::PopulationUnhappinessPercent {
                percent,
                city_filter,
            } => Some((*percent, city_filter.as_str())),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::TestCity;
    use crate::rules::{Rule, StatBlock};

    #[test]
    fn cities_and_population_always_present() {
        let mut city = TestCity::new();
        city.population = 6;

        let happiness = city.compute().happiness;
        assert_eq!(happiness.get(labels::CITIES), Some(-3.0));
        assert_eq!(happiness.get(labels::POPULATION), Some(-6.0));
        assert_eq!(happiness.len(), 2);
    }

    #[test]
    fn ai_owner_and_trait_scale_city_unhappiness() {
        let mut city = TestCity::new();
        city.owner.is_player = false;
        city.ai_unhappiness_modifier = 0.5;
        city.add_rule(
            RuleSource::Faction,
            Rule::new(RuleKind::DoubleCityUnhappiness),
        );

        assert_eq!(city.compute().happiness.get(labels::CITIES), Some(-3.0));
    }

    #[test]
    fn annexed_city_pays_occupation() {
        let mut city = TestCity::new();
        city.flags = CityFlags::ANNEXED;
        city.population = 4;

        let happiness = city.compute().happiness;
        assert_eq!(happiness.get(labels::POPULATION), Some(-8.0));
        assert_eq!(happiness.get(labels::OCCUPIED_CITY), Some(-2.0));

        city.add_rule(
            RuleSource::Structure,
            Rule::new(RuleKind::NoAnnexedUnhappiness),
        );
        let happiness = city.compute().happiness;
        assert_eq!(happiness.get(labels::POPULATION), Some(-4.0));
        assert_eq!(happiness.get(labels::OCCUPIED_CITY), None);
    }

    #[test]
    fn puppets_pay_reduced_population_unhappiness() {
        let mut city = TestCity::new();
        city.flags = CityFlags::ANNEXED | CityFlags::PUPPET;
        city.population = 4;

        let happiness = city.compute().happiness;
        assert_eq!(happiness.get(labels::POPULATION), Some(-6.0));
        assert_eq!(happiness.get(labels::OCCUPIED_CITY), None);
    }

    #[test]
    fn specialist_percent_only_scales_specialists() {
        let mut city = TestCity::new();
        city.population = 6;
        city.specialists = vec![("Artist".into(), 2)];
        city.specialist_table.push(("Artist".into(), StatBlock::new()));
        city.add_rule(
            RuleSource::Policy,
            Rule::new(RuleKind::SpecialistUnhappinessPercent {
                percent: -50.0,
                city_filter: String::new(),
            }),
        );

        assert_eq!(city.compute().happiness.get(labels::POPULATION), Some(-5.0));
    }

    #[test]
    fn building_happiness_is_truncated() {
        let mut city = TestCity::new();
        city.add_rule(
            RuleSource::Structure,
            Rule::new(RuleKind::Stats {
                stats: StatBlock::new().with(Stat::Happiness, 2.7),
            }),
        );
        city.add_rule(
            RuleSource::Policy,
            Rule::new(RuleKind::Stats {
                stats: StatBlock::new().with(Stat::Happiness, 0.5),
            }),
        );

        let happiness = city.compute().happiness;
        assert_eq!(happiness.get(labels::BUILDINGS), Some(2.0));
        assert_eq!(happiness.get(labels::POLICIES), Some(0.5));
    }
}
