//! Base yield collector: additive per-source contributions.

use strum::IntoEnumIterator;

use crate::config::YieldConfig;
use crate::env::{CityFlags, CityStateKind, Relationship};
use crate::error::{ContentError, report};
use crate::labels;
use crate::rules::{RuleKind, RuleSource};
use crate::stats::{Stat, StatMap, Stats};

use super::matching::Matcher;

/// Collects the base bucket map. Never fails; bad content is skipped.
pub fn collect(m: &Matcher<'_>, config: &YieldConfig) -> StatMap {
    let mut map = StatMap::new();
    map.add(labels::POPULATION, population(m, config));
    map.add(labels::TILE_YIELDS, tiles(m));
    map.add(labels::SPECIALISTS, specialists(m));
    map.add(labels::TRADE_ROUTES, trade_routes(m, config));
    map.add(labels::BUILDINGS, m.flat_from(RuleSource::Structure));
    map.add(labels::POLICIES, m.flat_from(RuleSource::Policy));
    map.add(labels::NATIONAL_ABILITY, m.flat_from(RuleSource::Faction));
    map.add(labels::WONDERS, m.flat_from(RuleSource::Wonder));
    map.add(labels::RELIGION, m.flat_from(RuleSource::Religion));
    map.add(labels::CITY_STATES, city_states(m, config));
    map
}

fn population(m: &Matcher<'_>, config: &YieldConfig) -> Stats {
    Stats::from_pairs([
        (
            Stat::Science,
            m.population() as f32 * config.science_per_population,
        ),
        (
            Stat::Production,
            m.free_population() as f32 * config.production_per_free_population,
        ),
    ])
}

fn tiles(m: &Matcher<'_>) -> Stats {
    let oracle = m.env().tiles();
    let mut total = Stats::ZERO;
    for tile in oracle.tiles().iter().filter(|tile| tile.contributes()) {
        total.add(&oracle.tile_yield(tile.id));
    }
    total
}

fn specialists(m: &Matcher<'_>) -> Stats {
    let mut total = Stats::ZERO;
    for (name, count) in m.specialists() {
        if *count == 0 {
            continue;
        }
        let mut each = match m.book().specialist(name) {
            Some(block) => block.resolve("Specialist"),
            None => {
                report(&ContentError::UnknownSpecialist(name.clone()), "Specialist");
                Stats::ZERO
            }
        };
        for rule in m.all_active() {
            if let RuleKind::StatsFromSpecialist {
                stats,
                specialist,
                city_filter,
            } = &rule.kind
                && (specialist == "All" || specialist == name)
                && m.city_matches(city_filter)
            {
                each.add(&stats.resolve(rule.name()));
            }
        }
        total.add(&each.times(*count as f32));
    }
    total
}

fn trade_routes(m: &Matcher<'_>, config: &YieldConfig) -> Stats {
    let flags = m.flags();
    if flags.contains(CityFlags::CAPITAL) || !flags.contains(CityFlags::CONNECTED_TO_CAPITAL) {
        return Stats::ZERO;
    }

    let gold = m.owner().capital_population as f32 * config.trade_route_capital_population_factor
        + m.population() as f32 * config.trade_route_population_factor
        + config.trade_route_base_gold;
    let mut stats = Stats::of(Stat::Gold, gold);

    let mut gold_bonus = false;
    for rule in m.all_active() {
        match &rule.kind {
            RuleKind::StatsPerTradeRoute { stats: extra } => stats.add(&extra.resolve(rule.name())),
            RuleKind::TradeRouteGoldBonus => gold_bonus = true,
            _ => {}
        }
    }
    if gold_bonus {
        stats.apply_percent(Stat::Gold, config.trade_route_gold_bonus_percent);
    }
    stats
}

fn city_states(m: &Matcher<'_>, config: &YieldConfig) -> Stats {
    let friends: Vec<_> = m
        .env()
        .diplomacy()
        .city_states()
        .into_iter()
        .filter(|city_state| city_state.relationship.is_friendly())
        .collect();
    if friends.is_empty() {
        return Stats::ZERO;
    }

    let mut stats = Stats::ZERO;
    match m.book().era_bonuses() {
        Some(table) => {
            for city_state in &friends {
                for tier in table {
                    if tier.kind == city_state.kind
                        && tier.level <= city_state.relationship
                        && m.city_matches(&tier.city_filter)
                    {
                        stats.add(&tier.stats.resolve("CityStateBonus"));
                    }
                }
            }
        }
        None => {
            for city_state in friends
                .iter()
                .filter(|city_state| city_state.kind == CityStateKind::Maritime)
            {
                if m.flags().contains(CityFlags::CAPITAL) {
                    stats.add_to(Stat::Food, config.maritime_friend_capital_food);
                }
                if city_state.relationship == Relationship::Ally {
                    stats.add_to(Stat::Food, config.maritime_ally_city_food);
                }
            }
        }
    }

    for stat in Stat::iter() {
        let percent = m.percent_sum(|kind| match kind {
            RuleKind::CityStateStatPercent { stat: target, percent }
                if target.resolve().ok() == Some(stat) =>
            {
                Some((*percent, ""))
            }
            _ => None,
        });
        if percent != 0.0 {
            stats.apply_percent(stat, percent);
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{CityStateView, EraBonus, TileId, TileView};
    use crate::fixture::TestCity;
    use crate::rules::{Rule, StatBlock};

    fn base_of(city: &TestCity) -> StatMap {
        city.compute().base
    }

    #[test]
    fn trade_route_gold_follows_population() {
        let mut city = TestCity::new();
        city.flags = CityFlags::CONNECTED_TO_CAPITAL;
        city.owner.capital_population = 10;
        city.population = 4;

        let gold = base_of(&city).get(labels::TRADE_ROUTES).map(|s| s.get(Stat::Gold));
        assert!((gold.unwrap() - 4.9).abs() < 1e-4);
    }

    #[test]
    fn capital_has_no_trade_route() {
        let mut city = TestCity::new();
        city.flags = CityFlags::CAPITAL | CityFlags::CONNECTED_TO_CAPITAL;
        city.owner.capital_population = 10;
        city.population = 10;

        assert!(!base_of(&city).contains(labels::TRADE_ROUTES));
    }

    #[test]
    fn trade_route_bonus_scales_gold() {
        let mut city = TestCity::new();
        city.flags = CityFlags::CONNECTED_TO_CAPITAL;
        city.population = 10;
        city.add_rule(RuleSource::Policy, Rule::new(RuleKind::TradeRouteGoldBonus));

        // (10 × 1.1 − 1) × 1.25
        let gold = base_of(&city).get(labels::TRADE_ROUTES).unwrap().get(Stat::Gold);
        assert!((gold - 12.5).abs() < 1e-4);
    }

    #[test]
    fn only_contributing_tiles_count() {
        let mut city = TestCity::new();
        city.add_tile(
            TileView {
                id: TileId(0),
                is_center: true,
                is_worked: false,
                yields_without_population: false,
            },
            Stats::of(Stat::Food, 2.0),
        );
        city.add_tile(
            TileView {
                id: TileId(1),
                is_center: false,
                is_worked: false,
                yields_without_population: false,
            },
            Stats::of(Stat::Food, 5.0),
        );

        assert_eq!(
            base_of(&city).get(labels::TILE_YIELDS),
            Some(&Stats::of(Stat::Food, 2.0))
        );
    }

    #[test]
    fn specialists_multiply_base_table_and_rules() {
        let mut city = TestCity::new();
        city.specialists = vec![("Scientist".into(), 2), ("Engineer".into(), 0)];
        city.specialist_table
            .push(("Scientist".into(), StatBlock::new().with(Stat::Science, 3.0)));
        city.add_rule(
            RuleSource::Policy,
            Rule::new(RuleKind::StatsFromSpecialist {
                stats: StatBlock::new().with(Stat::Culture, 1.0),
                specialist: "All".into(),
                city_filter: String::new(),
            }),
        );

        assert_eq!(
            base_of(&city).get(labels::SPECIALISTS),
            Some(&Stats::from_pairs([(Stat::Science, 6.0), (Stat::Culture, 2.0)]))
        );
    }

    #[test]
    fn per_population_floors_and_skips_zero_divisor() {
        let mut city = TestCity::new();
        city.population = 7;
        city.add_rule(
            RuleSource::Structure,
            Rule::new(RuleKind::StatsPerPopulation {
                stats: StatBlock::new().with(Stat::Science, 1.0),
                per: 2,
                city_filter: String::new(),
            }),
        );
        city.add_rule(
            RuleSource::Structure,
            Rule::new(RuleKind::StatsPerPopulation {
                stats: StatBlock::new().with(Stat::Gold, 1.0),
                per: 0,
                city_filter: String::new(),
            }),
        );

        assert_eq!(
            base_of(&city).get(labels::BUILDINGS),
            Some(&Stats::of(Stat::Science, 3.0))
        );
    }

    #[test]
    fn failing_conditionals_and_filters_block_rules() {
        let mut city = TestCity::new();
        city.failing_conditionals.push("when at war".into());
        city.add_rule(
            RuleSource::Policy,
            Rule::new(RuleKind::Stats {
                stats: StatBlock::new().with(Stat::Gold, 5.0),
            })
            .when(crate::rules::Conditional::new("when at war")),
        );
        city.add_rule(
            RuleSource::Policy,
            Rule::new(RuleKind::StatsInCity {
                stats: StatBlock::new().with(Stat::Culture, 2.0),
                city_filter: "Coastal".into(),
            }),
        );
        city.add_rule(
            RuleSource::Policy,
            Rule::new(RuleKind::StatsWithPopulation {
                stats: StatBlock::new().with(Stat::Faith, 1.0),
                min_population: 5,
                city_filter: String::new(),
            }),
        );

        assert!(!base_of(&city).contains(labels::POLICIES));

        city.city_filters.push("Coastal".into());
        assert_eq!(
            base_of(&city).get(labels::POLICIES),
            Some(&Stats::of(Stat::Culture, 2.0))
        );
    }

    #[test]
    fn era_table_grants_every_reached_tier() {
        let mut city = TestCity::new();
        city.city_states = vec![
            CityStateView {
                name: "Sidon".into(),
                kind: CityStateKind::Cultured,
                relationship: Relationship::Ally,
            },
            CityStateView {
                name: "Kabul".into(),
                kind: CityStateKind::Cultured,
                relationship: Relationship::Neutral,
            },
        ];
        city.era_bonuses = Some(vec![
            EraBonus {
                kind: CityStateKind::Cultured,
                level: Relationship::Friend,
                stats: StatBlock::new().with(Stat::Culture, 3.0),
                city_filter: String::new(),
            },
            EraBonus {
                kind: CityStateKind::Cultured,
                level: Relationship::Ally,
                stats: StatBlock::new().with(Stat::Culture, 3.0),
                city_filter: String::new(),
            },
        ]);
        city.add_rule(
            RuleSource::Policy,
            Rule::new(RuleKind::CityStateStatPercent {
                stat: Stat::Culture.into(),
                percent: 50.0,
            }),
        );

        assert_eq!(
            base_of(&city).get(labels::CITY_STATES),
            Some(&Stats::of(Stat::Culture, 9.0))
        );
    }

    #[test]
    fn maritime_fallback_without_era_table() {
        let mut city = TestCity::new();
        city.flags = CityFlags::CAPITAL;
        city.city_states = vec![CityStateView {
            name: "Venice".into(),
            kind: CityStateKind::Maritime,
            relationship: Relationship::Ally,
        }];

        assert_eq!(
            base_of(&city).get(labels::CITY_STATES),
            Some(&Stats::of(Stat::Food, 3.0))
        );

        city.flags = CityFlags::empty();
        city.city_states[0].relationship = Relationship::Friend;
        assert!(!base_of(&city).contains(labels::CITY_STATES));
    }

    #[test]
    fn era_table_without_maritime_tiers_suppresses_fallback() {
        let mut city = TestCity::new();
        city.flags = CityFlags::CAPITAL;
        city.city_states = vec![CityStateView {
            name: "Venice".into(),
            kind: CityStateKind::Maritime,
            relationship: Relationship::Ally,
        }];
        city.era_bonuses = Some(vec![EraBonus {
            kind: CityStateKind::Cultured,
            level: Relationship::Friend,
            stats: StatBlock::new().with(Stat::Culture, 3.0),
            city_filter: String::new(),
        }]);

        assert!(!base_of(&city).contains(labels::CITY_STATES));

        city.era_bonuses = Some(Vec::new());
        assert!(!base_of(&city).contains(labels::CITY_STATES));
    }
}
