//! Labeled bucket maps.
//!
//! Buckets keep per-source contributions apart for breakdown display. Both maps
//! preserve insertion order; that order never changes a numeric result.

use super::{Stat, Stats};

/// Ordered mapping from a source label to a [`Stats`] vector.
///
/// Writing to an existing label sums into it. A new label is only created for
/// a non-zero contribution, so a source that contributes nothing never shows
/// up. [`StatMap::set`] is the one path that overwrites.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatMap {
    buckets: Vec<(String, Stats)>,
}

impl StatMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sums `stats` into `label`, creating the bucket only for a non-zero value.
    pub fn add(&mut self, label: &str, stats: Stats) {
        if let Some(existing) = self.get_mut(label) {
            existing.add(&stats);
        } else if !stats.is_zero() {
            self.buckets.push((label.to_owned(), stats));
        }
    }

    /// Replaces the value under `label`, keeping its position if it exists.
    pub fn set(&mut self, label: &str, stats: Stats) {
        match self.get_mut(label) {
            Some(existing) => *existing = stats,
            None => self.buckets.push((label.to_owned(), stats)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&Stats> {
        self.buckets
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, stats)| stats)
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut Stats> {
        self.buckets
            .iter_mut()
            .find(|(name, _)| name == label)
            .map(|(_, stats)| stats)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Stats)> {
        self.buckets
            .iter()
            .map(|(label, stats)| (label.as_str(), stats))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Stats> {
        self.buckets.iter_mut().map(|(_, stats)| stats)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|(label, _)| label.as_str())
    }

    /// Elementwise sum over every bucket.
    pub fn total(&self) -> Stats {
        Stats::sum(self.buckets.iter().map(|(_, stats)| stats))
    }

    /// Sum of one channel over every bucket.
    pub fn total_of(&self, stat: Stat) -> f32 {
        self.buckets.iter().map(|(_, stats)| stats.get(stat)).sum()
    }

    /// Scales `stat` in every bucket by `(100 + percent) / 100`.
    pub fn apply_percent(&mut self, stat: Stat, percent: f32) {
        for stats in self.values_mut() {
            stats.apply_percent(stat, percent);
        }
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Ordered mapping from a source label to a single happiness delta.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HappinessMap {
    entries: Vec<(String, f32)>,
}

impl HappinessMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `label`.
    pub fn insert(&mut self, label: &str, value: f32) {
        match self.entries.iter_mut().find(|(name, _)| name == label) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((label.to_owned(), value)),
        }
    }

    /// Inserts `label` only when `value` is non-zero.
    pub fn insert_nonzero(&mut self, label: &str, value: f32) {
        if value != 0.0 {
            self.insert(label, value);
        }
    }

    pub fn get(&self, label: &str) -> Option<f32> {
        self.entries
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.entries
            .iter()
            .map(|(label, value)| (label.as_str(), *value))
    }

    pub fn total(&self) -> f32 {
        self.entries.iter().map(|(_, value)| value).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sums_existing_and_skips_empty_new_buckets() {
        let mut map = StatMap::new();
        map.add("Policies", Stats::ZERO);
        assert!(map.is_empty());

        map.add("Policies", Stats::of(Stat::Gold, 2.0));
        map.add("Policies", Stats::of(Stat::Gold, 3.0));
        map.add("Wonders", Stats::of(Stat::Culture, 1.0));

        assert_eq!(map.get("Policies"), Some(&Stats::of(Stat::Gold, 5.0)));
        assert_eq!(map.labels().collect::<Vec<_>>(), ["Policies", "Wonders"]);
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut map = StatMap::new();
        map.add("Resources", Stats::of(Stat::Production, 10.0));
        map.add("Religion", Stats::of(Stat::Faith, 1.0));
        map.set("Resources", Stats::of(Stat::Production, 15.0));

        assert_eq!(map.get("Resources"), Some(&Stats::of(Stat::Production, 15.0)));
        assert_eq!(map.labels().collect::<Vec<_>>(), ["Resources", "Religion"]);
    }

    #[test]
    fn totals_sum_every_bucket() {
        let mut map = StatMap::new();
        map.add("a", Stats::from_pairs([(Stat::Food, 2.0), (Stat::Gold, 1.0)]));
        map.add("b", Stats::of(Stat::Food, -0.5));

        assert_eq!(map.total_of(Stat::Food), 1.5);
        assert_eq!(map.total().get(Stat::Gold), 1.0);
    }

    #[test]
    fn happiness_insert_replaces() {
        let mut map = HappinessMap::new();
        map.insert("Cities", -3.0);
        map.insert_nonzero("Wonders", 0.0);
        map.insert("Cities", -6.0);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Cities"), Some(-6.0));
        assert_eq!(map.total(), -6.0);
    }
}
