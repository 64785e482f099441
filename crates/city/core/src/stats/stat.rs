//! Stat channels.

/// One named resource dimension of a city's yield.
///
/// The declaration order is the canonical channel order used by [`super::Stats`]
/// and by every breakdown display.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Stat {
    Production,
    Food,
    Gold,
    Science,
    Culture,
    Happiness,
    Faith,
}

impl Stat {
    /// Position of this channel inside a [`super::Stats`] vector.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}
