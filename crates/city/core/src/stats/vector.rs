//! Fixed-schema stat vector.

use core::ops::{AddAssign, Neg};

use strum::{EnumCount, IntoEnumIterator};

use super::stat::Stat;

/// One signed value per [`Stat`] channel.
///
/// `Stats` is a plain value type: cloning is a copy and there is no shared
/// state. All arithmetic is elementwise.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Stats {
    values: [f32; Stat::COUNT],
}

impl Stats {
    pub const ZERO: Self = Self {
        values: [0.0; Stat::COUNT],
    };

    pub fn new() -> Self {
        Self::ZERO
    }

    /// A vector with a single non-zero channel.
    pub fn of(stat: Stat, value: f32) -> Self {
        let mut stats = Self::ZERO;
        stats.set(stat, value);
        stats
    }

    /// Builds a vector from `(channel, value)` pairs; repeated channels sum.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Stat, f32)>) -> Self {
        let mut stats = Self::ZERO;
        for (stat, value) in pairs {
            stats.add_to(stat, value);
        }
        stats
    }

    /// Every channel set to `value`.
    pub fn splat(value: f32) -> Self {
        Self {
            values: [value; Stat::COUNT],
        }
    }

    #[inline]
    pub fn get(&self, stat: Stat) -> f32 {
        self.values[stat.index()]
    }

    #[inline]
    pub fn set(&mut self, stat: Stat, value: f32) {
        self.values[stat.index()] = value;
    }

    #[inline]
    pub fn add_to(&mut self, stat: Stat, value: f32) {
        self.values[stat.index()] += value;
    }

    /// Elementwise add in place.
    pub fn add(&mut self, other: &Stats) {
        for (value, other) in self.values.iter_mut().zip(other.values.iter()) {
            *value += *other;
        }
    }

    /// Scalar multiple of every channel.
    pub fn times(&self, factor: f32) -> Self {
        let mut out = *self;
        for value in &mut out.values {
            *value *= factor;
        }
        out
    }

    /// Scales one channel by `(100 + percent) / 100`.
    pub fn apply_percent(&mut self, stat: Stat, percent: f32) {
        let value = self.get(stat);
        self.set(stat, value * (100.0 + percent) / 100.0);
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|value| *value == 0.0)
    }

    /// Non-zero channels in canonical order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (Stat, f32)> + '_ {
        Stat::iter()
            .map(|stat| (stat, self.get(stat)))
            .filter(|(_, value)| *value != 0.0)
    }

    /// Sums any number of vectors.
    pub fn sum<'a>(items: impl IntoIterator<Item = &'a Stats>) -> Self {
        let mut total = Self::ZERO;
        for stats in items {
            total.add(stats);
        }
        total
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, rhs: Stats) {
        Stats::add(self, &rhs);
    }
}

impl Neg for Stats {
    type Output = Stats;

    fn neg(self) -> Stats {
        self.times(-1.0)
    }
}

impl core::fmt::Display for Stats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for (stat, value) in self.iter_nonzero() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{value:+} {stat}")?;
        }
        if first {
            f.write_str("-")?;
        }
        Ok(())
    }
}

// Channels are (de)serialized as a `{ Stat: value }` map, zeros omitted.
#[cfg(feature = "serde")]
impl serde::Serialize for Stats {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let nonzero: Vec<(Stat, f32)> = self.iter_nonzero().collect();
        let mut map = serializer.serialize_map(Some(nonzero.len()))?;
        for (stat, value) in nonzero {
            map.serialize_entry(&stat, &value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Stats {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let map = std::collections::BTreeMap::<Stat, f32>::deserialize(deserializer)?;
        Ok(Stats::from_pairs(map))
    }
}
