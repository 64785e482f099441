//! Bucket labels shown in yield breakdowns.

pub const POPULATION: &str = "Population";
pub const TILE_YIELDS: &str = "Tile yields";
pub const SPECIALISTS: &str = "Specialists";
pub const TRADE_ROUTES: &str = "Trade routes";
pub const BUILDINGS: &str = "Buildings";
pub const POLICIES: &str = "Policies";
pub const NATIONAL_ABILITY: &str = "National ability";
pub const WONDERS: &str = "Wonders";
pub const RELIGION: &str = "Religion";
pub const CITY_STATES: &str = "City-States";

pub const GOLDEN_AGE: &str = "Golden Age";
pub const RAILROADS: &str = "Railroads";
pub const RESOURCES: &str = "Resources";
pub const PUPPET_CITY: &str = "Puppet City";
pub const UNIT_SUPPLY: &str = "Unit Supply";
pub const SUPERCHARGED: &str = "Supercharged";

pub const CITIES: &str = "Cities";
pub const OCCUPIED_CITY: &str = "Occupied City";

pub const CONSTRUCTION: &str = "Construction";
pub const GOLD_TO_SCIENCE: &str = "Gold -> Science";
pub const UNHAPPINESS: &str = "Unhappiness";
pub const MAINTENANCE: &str = "Maintenance";
pub const EXCESS_FOOD: &str = "Excess food to production";
pub const PRODUCTION: &str = "Production";
