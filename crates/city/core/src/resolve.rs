//! Final resolution: the ordered algorithm combining base and percent maps.
//!
//! The order below is part of the contract. Production is scaled before it
//! feeds the construction conversion, Gold is scaled before a share of it is
//! converted, and Science is scaled last so the converted share benefits from
//! science bonuses.

use crate::collect::Matcher;
use crate::config::YieldConfig;
use crate::env::CityFlags;
use crate::labels;
use crate::rules::{ConstructionKind, RuleKind};
use crate::stats::{Stat, StatMap, Stats};

/// Final map and food eaten by citizens.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resolved {
    pub final_stats: StatMap,
    pub food_eaten: f32,
}

/// Runs the final stage. `base` gains the construction conversion bucket.
pub fn resolve(
    m: &Matcher<'_>,
    base: &mut StatMap,
    percent: &StatMap,
    config: &YieldConfig,
) -> Resolved {
    let mut out = base.clone();
    for stats in out.values_mut() {
        stats.set(Stat::Happiness, 0.0);
    }

    let pct = percent.total();
    out.apply_percent(Stat::Production, pct.get(Stat::Production));

    let conversion = construction_conversion(m, &out, config);
    out.add(labels::CONSTRUCTION, conversion);
    base.add(labels::CONSTRUCTION, conversion);

    for stat in [Stat::Gold, Stat::Culture, Stat::Food] {
        out.apply_percent(stat, pct.get(stat));
    }

    if m.env().settings().gold_to_science_enabled() {
        let amount = (out.total_of(Stat::Gold) * m.owner().gold_to_science_rate).floor();
        if amount > 0.0 {
            out.add(
                labels::GOLD_TO_SCIENCE,
                Stats::from_pairs([(Stat::Gold, -amount), (Stat::Science, amount)]),
            );
        }
    }

    out.apply_percent(Stat::Science, pct.get(Stat::Science));

    let food_eaten = food_eaten(m, config);
    out.add(labels::POPULATION, Stats::of(Stat::Food, -food_eaten));

    let total_food = out.total_of(Stat::Food);
    if m.owner().happiness < 0 && total_food > 0.0 {
        out.add(
            labels::UNHAPPINESS,
            Stats::of(Stat::Food, total_food * config.unhappy_food_multiplier),
        );
    } else if total_food > 0.0 {
        let growth = m.percent_sum(|kind| match kind {
            RuleKind::GrowthPercent {
                percent,
                city_filter,
            } => Some((*percent, city_filter.as_str())),
            _ => None,
        }) / 100.0;
        out.add(labels::POLICIES, Stats::of(Stat::Food, growth * total_food));
    }

    let maintenance = maintenance(m);
    out.add(labels::MAINTENANCE, Stats::of(Stat::Gold, -maintenance.floor()));

    let total_food = out.total_of(Stat::Food);
    if total_food > 0.0 && converts_excess_food(m) {
        out.add(
            labels::EXCESS_FOOD,
            Stats::from_pairs([(Stat::Food, -total_food), (Stat::Production, total_food)]),
        );
    }

    if m.flags().contains(CityFlags::IN_RESISTANCE) {
        out.clear();
        return Resolved {
            final_stats: out,
            food_eaten,
        };
    }

    if out.total_of(Stat::Production) < config.minimum_production {
        for stats in out.values_mut() {
            stats.set(Stat::Production, 0.0);
        }
        match out.get_mut(labels::PRODUCTION) {
            Some(stats) => stats.set(Stat::Production, config.minimum_production),
            None => out.set(
                labels::PRODUCTION,
                Stats::of(Stat::Production, config.minimum_production),
            ),
        }
    }

    Resolved {
        final_stats: out,
        food_eaten,
    }
}

/// Gold or science produced by converting production.
fn construction_conversion(m: &Matcher<'_>, out: &StatMap, config: &YieldConfig) -> Stats {
    let Some(target) = m.target() else {
        return Stats::ZERO;
    };
    let production = out.total_of(Stat::Production);
    match target.kind {
        ConstructionKind::Gold => {
            Stats::of(Stat::Gold, production / config.gold_conversion_divisor)
        }
        ConstructionKind::Science => {
            let boosted = m
                .all_active()
                .any(|rule| matches!(rule.kind, RuleKind::ScienceConversionBoost));
            let boost = if boosted {
                config.science_conversion_boost
            } else {
                1.0
            };
            Stats::of(
                Stat::Science,
                production * config.science_conversion_rate * boost,
            )
        }
        _ => Stats::ZERO,
    }
}

fn food_eaten(m: &Matcher<'_>, config: &YieldConfig) -> f32 {
    let per_citizen = config.food_per_population;
    let specialists = m.specialist_count() as f32;
    let specialist_percent = m.percent_sum(|kind| match kind {
        RuleKind::SpecialistFoodConsumptionPercent {
            percent,
            city_filter,
        } => Some((*percent, city_filter.as_str())),
        _ => None,
    });
    m.population() as f32 * per_citizen - per_citizen * specialists
        + per_citizen * specialists * (1.0 + specialist_percent / 100.0)
}

fn maintenance(m: &Matcher<'_>) -> f32 {
    let mut cost = m.env().construction().maintenance_cost();
    if !m.owner().is_player {
        cost *= m.env().settings().ai_building_maintenance_modifier();
    }
    cost * m.percent_product(|kind| match kind {
        RuleKind::MaintenancePercent {
            percent,
            city_filter,
        } => Some((*percent, city_filter.as_str())),
        _ => None,
    })
}

fn converts_excess_food(m: &Matcher<'_>) -> bool {
    m.all_active().any(|rule| match &rule.kind {
        RuleKind::ExcessFoodToProduction {
            construction_filter,
        } => m.construction_matches(construction_filter),
        _ => false,
    })
}
