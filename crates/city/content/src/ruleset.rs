//! Rulesets: the authored rule catalog and its side tables.

use std::collections::BTreeMap;
use std::fmt;

use city_core::collect::schema_mismatch;
use city_core::{
    ContentError, EraBonus, ErrorSeverity, Rule, RuleKind, RuleSource, RuleTables, StatBlock,
    Stats, YieldError,
};

/// A complete or partial rule catalog, as authored by a base ruleset or mod.
///
/// Every field defaults to empty so a mod file only lists what it adds.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Ruleset {
    pub faction: Vec<Rule>,
    pub policy: Vec<Rule>,
    pub structure: Vec<Rule>,
    pub wonder: Vec<Rule>,
    pub religion: Vec<Rule>,
    pub resource: Vec<Rule>,

    /// Base yield of one specialist by type.
    pub specialists: BTreeMap<String, StatBlock>,

    /// Percent bonuses buildings declare outside the rule system.
    pub structure_percent: Stats,

    /// City-state bonus table of the current era; `None` keeps the legacy
    /// Maritime food bonus.
    pub era_bonuses: Option<Vec<EraBonus>>,
}

impl Ruleset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn partition(&self, source: RuleSource) -> &[Rule] {
        match source {
            RuleSource::Faction => &self.faction,
            RuleSource::Policy => &self.policy,
            RuleSource::Structure => &self.structure,
            RuleSource::Wonder => &self.wonder,
            RuleSource::Religion => &self.religion,
            RuleSource::Resource => &self.resource,
        }
    }

    pub fn partition_mut(&mut self, source: RuleSource) -> &mut Vec<Rule> {
        match source {
            RuleSource::Faction => &mut self.faction,
            RuleSource::Policy => &mut self.policy,
            RuleSource::Structure => &mut self.structure,
            RuleSource::Wonder => &mut self.wonder,
            RuleSource::Religion => &mut self.religion,
            RuleSource::Resource => &mut self.resource,
        }
    }

    pub fn with_rule(mut self, source: RuleSource, rule: Rule) -> Self {
        self.partition_mut(source).push(rule);
        self
    }

    /// Every rule with its partition, in catalog order.
    pub fn rules(&self) -> impl Iterator<Item = (RuleSource, &Rule)> {
        use strum::IntoEnumIterator;

        RuleSource::iter().flat_map(move |source| {
            self.partition(source).iter().map(move |rule| (source, rule))
        })
    }

    pub fn len(&self) -> usize {
        self.rules().count()
    }

    /// Copies the partitions and side tables in the shape the engine reads.
    pub fn tables(&self) -> RuleTables {
        let mut tables = RuleTables::new();
        for (source, rule) in self.rules() {
            tables.push(source, rule.clone());
        }
        tables.specialists = self.specialists.clone();
        tables.structure_percent = self.structure_percent;
        tables
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Layers `other` on top: rules are appended, specialist tables and the
    /// era table are replaced where `other` defines them, and structure
    /// percentages add up.
    pub fn merge(&mut self, other: Ruleset) {
        let Ruleset {
            faction,
            policy,
            structure,
            wonder,
            religion,
            resource,
            specialists,
            structure_percent,
            era_bonuses,
        } = other;

        self.faction.extend(faction);
        self.policy.extend(policy);
        self.structure.extend(structure);
        self.wonder.extend(wonder);
        self.religion.extend(religion);
        self.resource.extend(resource);
        self.specialists.extend(specialists);
        self.structure_percent.add(&structure_percent);
        if era_bonuses.is_some() {
            self.era_bonuses = era_bonuses;
        }
    }

    /// Finds content the engine would skip at resolution time.
    pub fn validate(&self) -> Vec<RuleIssue> {
        let mut issues = Vec::new();

        for (source, index, rule) in self.indexed_rules() {
            let location = || format!("{source}[{index}] {}", rule.name());

            if let Some(block) = rule.kind.stat_blocks() {
                for name in block.unknown_names() {
                    issues.push(RuleIssue::new(location(), ContentError::UnknownStat(name.into())));
                }
            }
            if let Some(stat) = rule.kind.stat_ref()
                && let Err(error) = stat.resolve()
            {
                issues.push(RuleIssue::new(location(), error));
            }
            if let Some(error) = schema_mismatch(rule) {
                issues.push(RuleIssue::new(location(), error));
            }
            match &rule.kind {
                RuleKind::StatsPerPopulation { per: 0, .. } => {
                    issues.push(RuleIssue::new(location(), ContentError::ZeroPopulationDivisor));
                }
                RuleKind::StatsFromSpecialist { specialist, .. }
                    if specialist != "All" && !self.specialists.contains_key(specialist) =>
                {
                    issues.push(RuleIssue::new(
                        location(),
                        ContentError::UnknownSpecialist(specialist.clone()),
                    ));
                }
                _ => {}
            }
        }

        for (name, block) in &self.specialists {
            for stat in block.unknown_names() {
                issues.push(RuleIssue::new(
                    format!("specialist {name}"),
                    ContentError::UnknownStat(stat.into()),
                ));
            }
        }

        for (index, tier) in self.era_bonuses.iter().flatten().enumerate() {
            for stat in tier.stats.unknown_names() {
                issues.push(RuleIssue::new(
                    format!("era_bonuses[{index}] {} {}", tier.kind, tier.level),
                    ContentError::UnknownStat(stat.into()),
                ));
            }
        }

        issues
    }

    fn indexed_rules(&self) -> impl Iterator<Item = (RuleSource, usize, &Rule)> {
        use strum::IntoEnumIterator;

        RuleSource::iter().flat_map(move |source| {
            self.partition(source)
                .iter()
                .enumerate()
                .map(move |(index, rule)| (source, index, rule))
        })
    }
}

/// A piece of content the engine would skip, with where it was found.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleIssue {
    pub location: String,
    pub error: ContentError,
}

impl RuleIssue {
    pub fn new(location: String, error: ContentError) -> Self {
        Self { location, error }
    }

    pub fn code(&self) -> &'static str {
        self.error.error_code()
    }
}

impl YieldError for RuleIssue {
    /// Issues are found before content reaches the engine.
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        self.code()
    }
}

impl fmt::Display for RuleIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.location, self.error, self.code())
    }
}
