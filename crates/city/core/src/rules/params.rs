//! Rule parameters that name stat channels.
//!
//! Channel names stay as authored until the rule is applied. Resolution either
//! yields a typed [`Stat`] or a [`ContentError`] that the caller reports.

use core::str::FromStr;
use std::collections::BTreeMap;

use crate::error::{ContentError, report};
use crate::stats::{Stat, Stats};

/// A single stat channel referenced by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatRef(pub String);

impl StatRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn resolve(&self) -> Result<Stat, ContentError> {
        Stat::from_str(self.0.trim()).map_err(|_| ContentError::UnknownStat(self.0.clone()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Stat> for StatRef {
    fn from(stat: Stat) -> Self {
        Self(stat.to_string())
    }
}

/// A named set of flat stat amounts, e.g. `{"Gold": 2, "Culture": 1}`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatBlock(pub BTreeMap<String, f32>);

impl StatBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, stat: Stat, amount: f32) -> Self {
        *self.0.entry(stat.to_string()).or_insert(0.0) += amount;
        self
    }

    /// Strict resolution: the first unknown name fails the whole block.
    pub fn try_resolve(&self) -> Result<Stats, ContentError> {
        let mut stats = Stats::ZERO;
        for (name, amount) in &self.0 {
            let stat = StatRef::new(name.as_str()).resolve()?;
            stats.add_to(stat, *amount);
        }
        Ok(stats)
    }

    /// Lenient resolution: unknown names and non-finite amounts are reported
    /// and skipped, the rest of the block still counts.
    pub(crate) fn resolve(&self, rule: &'static str) -> Stats {
        let mut stats = Stats::ZERO;
        for (name, amount) in &self.0 {
            match StatRef::new(name.as_str()).resolve() {
                Ok(stat) => {
                    if let Some(amount) = crate::error::finite("amount", *amount, rule) {
                        stats.add_to(stat, amount);
                    }
                }
                Err(error) => report(&error, rule),
            }
        }
        stats
    }

    /// Every name that does not resolve to a channel.
    pub fn unknown_names(&self) -> impl Iterator<Item = &str> {
        self.0
            .keys()
            .filter(|name| StatRef::new(name.as_str()).resolve().is_err())
            .map(String::as_str)
    }
}

impl From<Stats> for StatBlock {
    fn from(stats: Stats) -> Self {
        Self(
            stats
                .iter_nonzero()
                .map(|(stat, amount)| (stat.to_string(), amount))
                .collect(),
        )
    }
}

/// A named predicate gating a rule, evaluated by the conditional oracle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conditional {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: Vec<String>,
}

impl Conditional {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }
}
