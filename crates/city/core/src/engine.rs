//! One full yield cycle.

use crate::collect::{Matcher, base, happiness, percent};
use crate::config::YieldConfig;
use crate::env::CityEnv;
use crate::resolve::resolve;
use crate::rules::{ConstructionTarget, RuleBook};
use crate::snapshot::StatSnapshot;

/// Computes a fresh snapshot for one city.
///
/// Materializes the rule book, runs the base and happiness collectors, the
/// percent collector, then final resolution. Pure with respect to the
/// oracles: the same answers always produce the same snapshot.
pub fn compute(
    env: &CityEnv<'_>,
    target: Option<&ConstructionTarget>,
    config: &YieldConfig,
) -> StatSnapshot {
    let book = RuleBook::materialize(env);
    let matcher = Matcher::new(*env, &book, target);

    let mut base = base::collect(&matcher, config);
    let happiness = happiness::collect(&matcher, &base, config);
    let percent = percent::collect(&matcher, config);
    let resolved = resolve(&matcher, &mut base, &percent, config);
    let total = resolved.final_stats.total();

    tracing::debug!(
        rules = book.len(),
        base = base.len(),
        percent = percent.len(),
        buckets = resolved.final_stats.len(),
        total = %total,
        "resolved city yields"
    );

    StatSnapshot {
        base,
        percent,
        final_stats: resolved.final_stats,
        happiness,
        food_eaten: resolved.food_eaten,
        total,
    }
}

#[cfg(test)]
mod tests {
    use crate::env::CityFlags;
    use crate::fixture::TestCity;
    use crate::labels;
    use crate::rules::{ConstructionKind, ConstructionTarget, Rule, RuleKind, RuleSource, StatBlock};
    use crate::stats::{Stat, Stats};

    fn flat(stats: StatBlock) -> Rule {
        Rule::new(RuleKind::Stats { stats })
    }

    fn percent(stat: Stat, percent: f32) -> Rule {
        Rule::new(RuleKind::StatPercent {
            stat: stat.into(),
            percent,
        })
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn nothing_contributing_leaves_only_minimum_production() {
        let snapshot = TestCity::new().compute();

        assert_eq!(snapshot.final_stats.len(), 1);
        assert_eq!(
            snapshot.final_stats.get(labels::PRODUCTION),
            Some(&Stats::of(Stat::Production, 1.0))
        );
        assert_eq!(snapshot.total, Stats::of(Stat::Production, 1.0));
        assert!(snapshot.base.is_empty());
        assert!(snapshot.percent.is_empty());
    }

    #[test]
    fn science_percent_never_touches_gold() {
        let mut city = TestCity::new();
        city.add_rule(
            RuleSource::Structure,
            flat(StatBlock::new().with(Stat::Gold, 10.0).with(Stat::Science, 10.0)),
        );
        city.add_rule(RuleSource::Policy, percent(Stat::Science, 50.0));

        let total = city.compute().total;
        assert_eq!(total.get(Stat::Gold), 10.0);
        assert_eq!(total.get(Stat::Science), 15.0);
    }

    #[test]
    fn gold_to_science_is_taken_before_science_scaling() {
        let mut city = TestCity::new();
        city.gold_to_science = true;
        city.owner.gold_to_science_rate = 0.5;
        city.add_rule(
            RuleSource::Structure,
            flat(StatBlock::new().with(Stat::Gold, 10.0)),
        );
        city.add_rule(RuleSource::Policy, percent(Stat::Gold, 10.0));
        city.add_rule(RuleSource::Policy, percent(Stat::Science, 100.0));

        let snapshot = city.compute();
        // Gold 11 after its bonus, floor(5.5) = 5 converted, then doubled.
        assert_eq!(
            snapshot.final_stats.get(labels::GOLD_TO_SCIENCE),
            Some(&Stats::from_pairs([(Stat::Gold, -5.0), (Stat::Science, 10.0)]))
        );
        assert!(approx(snapshot.total.get(Stat::Gold), 6.0));
        assert_eq!(snapshot.total.get(Stat::Science), 10.0);
    }

    #[test]
    fn gold_to_science_needs_a_positive_amount() {
        let mut city = TestCity::new();
        city.gold_to_science = true;
        city.owner.gold_to_science_rate = 0.5;
        city.add_rule(
            RuleSource::Structure,
            flat(StatBlock::new().with(Stat::Gold, -4.0)),
        );

        let snapshot = city.compute();
        assert!(!snapshot.final_stats.contains(labels::GOLD_TO_SCIENCE));
        assert_eq!(snapshot.total.get(Stat::Gold), -4.0);
        assert_eq!(snapshot.total.get(Stat::Science), 0.0);

        // floor(1 × 0.5) converts nothing either.
        city.rules[0].1 = flat(StatBlock::new().with(Stat::Gold, 1.0));
        assert!(!city.compute().final_stats.contains(labels::GOLD_TO_SCIENCE));
    }

    #[test]
    fn unhappy_owner_loses_three_quarters_of_surplus_food() {
        let mut city = TestCity::new();
        city.owner.happiness = -1;
        city.add_rule(
            RuleSource::Structure,
            flat(StatBlock::new().with(Stat::Food, 12.0)),
        );
        city.add_rule(
            RuleSource::Policy,
            Rule::new(RuleKind::GrowthPercent {
                percent: 50.0,
                city_filter: String::new(),
            }),
        );

        let snapshot = city.compute();
        assert_eq!(
            snapshot.final_stats.get(labels::UNHAPPINESS),
            Some(&Stats::of(Stat::Food, -9.0))
        );
        assert_eq!(snapshot.total.get(Stat::Food), 3.0);
    }

    #[test]
    fn growth_bonus_lands_in_policies_when_content() {
        let mut city = TestCity::new();
        city.add_rule(
            RuleSource::Structure,
            flat(StatBlock::new().with(Stat::Food, 12.0)),
        );
        city.add_rule(
            RuleSource::Policy,
            Rule::new(RuleKind::GrowthPercent {
                percent: 50.0,
                city_filter: String::new(),
            }),
        );

        let snapshot = city.compute();
        assert_eq!(
            snapshot.final_stats.get(labels::POLICIES),
            Some(&Stats::of(Stat::Food, 6.0))
        );
        assert_eq!(snapshot.total.get(Stat::Food), 18.0);
    }

    #[test]
    fn fractional_production_is_floored_to_exactly_one() {
        let mut city = TestCity::new();
        city.add_rule(
            RuleSource::Structure,
            flat(StatBlock::new().with(Stat::Production, 0.4).with(Stat::Gold, 1.0)),
        );

        let snapshot = city.compute();
        assert_eq!(snapshot.total.get(Stat::Production), 1.0);
        assert_eq!(
            snapshot.final_stats.get(labels::BUILDINGS),
            Some(&Stats::of(Stat::Gold, 1.0))
        );
        assert_eq!(
            snapshot.final_stats.get(labels::PRODUCTION),
            Some(&Stats::of(Stat::Production, 1.0))
        );
    }

    #[test]
    fn resistance_clears_everything_without_floor() {
        let mut city = TestCity::new();
        city.flags = CityFlags::IN_RESISTANCE;
        city.population = 5;
        city.add_rule(
            RuleSource::Structure,
            flat(StatBlock::new().with(Stat::Gold, 3.0)),
        );

        let snapshot = city.compute();
        assert!(snapshot.final_stats.is_empty());
        assert_eq!(snapshot.total, Stats::ZERO);
        assert_eq!(snapshot.food_eaten, 10.0);
        assert!(!snapshot.base.is_empty());
    }

    #[test]
    fn trade_route_gold_reaches_total() {
        let mut city = TestCity::new();
        city.flags = CityFlags::CONNECTED_TO_CAPITAL;
        city.owner.capital_population = 10;
        city.population = 4;
        city.add_rule(
            RuleSource::Structure,
            flat(StatBlock::new().with(Stat::Food, 8.0)),
        );

        let snapshot = city.compute();
        assert!(approx(snapshot.total.get(Stat::Gold), 4.9));
        assert_eq!(snapshot.food_eaten, 8.0);
    }

    #[test]
    fn food_eaten_scales_specialist_share() {
        let mut city = TestCity::new();
        city.population = 5;
        city.specialists = vec![("Engineer".into(), 2)];
        city.specialist_table.push(("Engineer".into(), StatBlock::new()));
        city.add_rule(
            RuleSource::Policy,
            Rule::new(RuleKind::SpecialistFoodConsumptionPercent {
                percent: -50.0,
                city_filter: String::new(),
            }),
        );

        let snapshot = city.compute();
        assert_eq!(snapshot.food_eaten, 8.0);
        assert_eq!(
            snapshot.final_stats.get(labels::POPULATION).map(|s| s.get(Stat::Food)),
            Some(-8.0)
        );
    }

    #[test]
    fn production_converts_to_gold_and_science() {
        let mut city = TestCity::new();
        city.free_population = 8;
        city.target = Some(ConstructionTarget::new("Gold", ConstructionKind::Gold));

        let snapshot = city.compute();
        assert_eq!(
            snapshot.final_stats.get(labels::CONSTRUCTION),
            Some(&Stats::of(Stat::Gold, 2.0))
        );
        assert!(snapshot.base.contains(labels::CONSTRUCTION));

        city.target = Some(ConstructionTarget::new("Science", ConstructionKind::Science));
        city.add_rule(
            RuleSource::Faction,
            Rule::new(RuleKind::ScienceConversionBoost),
        );
        let science = city.compute().final_stats.get(labels::CONSTRUCTION).unwrap().get(Stat::Science);
        assert!(approx(science, 8.0 * 0.25 * 1.33));
    }

    #[test]
    fn maintenance_is_floored_and_scaled() {
        let mut city = TestCity::new();
        city.maintenance = 6.0;
        city.owner.is_player = false;
        city.ai_maintenance_modifier = 0.5;
        city.add_rule(
            RuleSource::Policy,
            Rule::new(RuleKind::MaintenancePercent {
                percent: -50.0,
                city_filter: String::new(),
            }),
        );

        // 6 × 0.5 × 0.5 = 1.5, floored.
        assert_eq!(
            city.compute().final_stats.get(labels::MAINTENANCE),
            Some(&Stats::of(Stat::Gold, -1.0))
        );
    }

    #[test]
    fn excess_food_feeds_matching_construction() {
        let mut city = TestCity::new();
        city.target = Some(ConstructionTarget::new("Settler", ConstructionKind::Unit));
        city.construction_filters.push(("Settler".into(), "Founds a new city".into()));
        city.add_rule(
            RuleSource::Structure,
            flat(StatBlock::new().with(Stat::Food, 4.0).with(Stat::Production, 3.0)),
        );
        city.add_rule(
            RuleSource::Faction,
            Rule::new(RuleKind::ExcessFoodToProduction {
                construction_filter: "Founds a new city".into(),
            }),
        );

        let snapshot = city.compute();
        assert_eq!(
            snapshot.final_stats.get(labels::EXCESS_FOOD),
            Some(&Stats::from_pairs([(Stat::Food, -4.0), (Stat::Production, 4.0)]))
        );
        assert_eq!(snapshot.total.get(Stat::Food), 0.0);
        assert_eq!(snapshot.total.get(Stat::Production), 7.0);
    }

    #[test]
    fn happiness_channel_is_reported_separately() {
        let mut city = TestCity::new();
        city.add_rule(
            RuleSource::Structure,
            flat(StatBlock::new().with(Stat::Happiness, 2.0).with(Stat::Production, 2.0)),
        );

        let snapshot = city.compute();
        assert_eq!(snapshot.total.get(Stat::Happiness), 0.0);
        assert_eq!(snapshot.happiness.get(labels::BUILDINGS), Some(2.0));
    }

    #[test]
    fn faith_is_not_percent_scaled() {
        let mut city = TestCity::new();
        city.add_rule(
            RuleSource::Religion,
            flat(StatBlock::new().with(Stat::Faith, 4.0)),
        );
        city.add_rule(RuleSource::Policy, percent(Stat::Faith, 100.0));

        assert_eq!(city.compute().total.get(Stat::Faith), 4.0);
    }
}
