use crate::rules::StatBlock;

/// City-state personality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum CityStateKind {
    Maritime,
    Mercantile,
    Militaristic,
    Cultured,
    Religious,
}

/// Diplomatic standing, worst to best.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Relationship {
    Unforgivable,
    Enemy,
    Afraid,
    Competitor,
    Neutral,
    Favorable,
    Friend,
    Ally,
}

impl Relationship {
    pub fn is_friendly(self) -> bool {
        self >= Self::Friend
    }
}

/// A city-state the owner has met.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityStateView {
    pub name: String,
    pub kind: CityStateKind,
    pub relationship: Relationship,
}

/// One tier of the current era's city-state bonus table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EraBonus {
    pub kind: CityStateKind,
    /// Minimum relationship for the tier.
    pub level: Relationship,
    pub stats: StatBlock,
    #[cfg_attr(feature = "serde", serde(default))]
    pub city_filter: String,
}

pub trait DiplomacyOracle: Send + Sync {
    fn city_states(&self) -> Vec<CityStateView>;

    /// `None` when the era defines no table; the Maritime fallback then applies.
    fn era_bonuses(&self) -> Option<Vec<EraBonus>>;
}
