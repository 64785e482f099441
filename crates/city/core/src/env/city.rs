//! City and owner facts.

bitflags::bitflags! {
    /// Boolean facts about a city relevant to yield resolution.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CityFlags: u8 {
        const CAPITAL = 1 << 0;
        /// Road or harbor connection to the capital.
        const CONNECTED_TO_CAPITAL = 1 << 1;
        const RAIL_CONNECTED = 1 << 2;
        const PUPPET = 1 << 3;
        const ANNEXED = 1 << 4;
        /// The current owner founded this city.
        const FOUNDED_BY_OWNER = 1 << 5;
        const IN_RESISTANCE = 1 << 6;
    }
}

impl CityFlags {
    /// Annexed, not a puppet, and not founded by its owner.
    pub fn is_occupied(self) -> bool {
        self.contains(Self::ANNEXED) && !self.intersects(Self::PUPPET | Self::FOUNDED_BY_OWNER)
    }
}

/// State of the faction owning the city.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OwnerState {
    pub is_player: bool,
    pub golden_age: bool,
    /// Faction-wide happiness; negative means unhappy.
    pub happiness: i32,
    pub has_railroad: bool,
    pub capital_population: u32,
    /// Share of gold converted to science each turn, `0.0..=1.0`.
    pub gold_to_science_rate: f32,
    /// Production penalty in percent for exceeding unit supply.
    pub unit_supply_penalty: f32,
}

impl Default for OwnerState {
    fn default() -> Self {
        Self {
            is_player: true,
            golden_age: false,
            happiness: 0,
            has_railroad: false,
            capital_population: 0,
            gold_to_science_rate: 0.0,
            unit_supply_penalty: 0.0,
        }
    }
}

/// Facts about the city itself and its owner.
pub trait CityOracle: Send + Sync {
    fn flags(&self) -> CityFlags;
    fn owner(&self) -> OwnerState;
}
