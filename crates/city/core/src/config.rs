/// Tunable constants of the yield computation.
///
/// `Default` reproduces the standard ruleset balance. Content packs can
/// override any subset from TOML; missing keys fall back to the defaults and
/// unknown keys are rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct YieldConfig {
    // ===== base yields =====
    /// Science per citizen.
    pub science_per_population: f32,
    /// Production per unassigned citizen.
    pub production_per_free_population: f32,
    pub trade_route_capital_population_factor: f32,
    pub trade_route_population_factor: f32,
    pub trade_route_base_gold: f32,
    pub trade_route_gold_bonus_percent: f32,
    /// Legacy Maritime city-state food in the capital (Friend or better).
    pub maritime_friend_capital_food: f32,
    /// Legacy Maritime city-state food in every city (Ally).
    pub maritime_ally_city_food: f32,

    // ===== percent bonuses =====
    pub golden_age_production_percent: f32,
    pub golden_age_culture_percent: f32,
    pub railroad_production_percent: f32,
    pub capital_building_production_percent: f32,
    pub puppet_science_penalty_percent: f32,
    pub puppet_culture_penalty_percent: f32,
    pub supercharged_percent: f32,

    // ===== happiness =====
    pub base_city_unhappiness: f32,
    pub occupied_city_unhappiness: f32,
    pub puppet_population_unhappiness: f32,
    pub annexed_population_unhappiness: f32,

    // ===== final resolution =====
    pub gold_conversion_divisor: f32,
    pub science_conversion_rate: f32,
    pub science_conversion_boost: f32,
    pub food_per_population: f32,
    /// Share of surplus food removed while the owner is unhappy.
    pub unhappy_food_multiplier: f32,
    pub minimum_production: f32,
}

impl YieldConfig {
    pub const fn new() -> Self {
        Self {
            science_per_population: 1.0,
            production_per_free_population: 1.0,
            trade_route_capital_population_factor: 0.15,
            trade_route_population_factor: 1.1,
            trade_route_base_gold: -1.0,
            trade_route_gold_bonus_percent: 25.0,
            maritime_friend_capital_food: 2.0,
            maritime_ally_city_food: 1.0,

            golden_age_production_percent: 20.0,
            golden_age_culture_percent: 20.0,
            railroad_production_percent: 25.0,
            capital_building_production_percent: 25.0,
            puppet_science_penalty_percent: 25.0,
            puppet_culture_penalty_percent: 25.0,
            supercharged_percent: 10_000.0,

            base_city_unhappiness: -3.0,
            occupied_city_unhappiness: -2.0,
            puppet_population_unhappiness: 1.5,
            annexed_population_unhappiness: 2.0,

            gold_conversion_divisor: 4.0,
            science_conversion_rate: 0.25,
            science_conversion_boost: 1.33,
            food_per_population: 2.0,
            unhappy_food_multiplier: -0.75,
            minimum_production: 1.0,
        }
    }
}

impl Default for YieldConfig {
    fn default() -> Self {
        Self::new()
    }
}
