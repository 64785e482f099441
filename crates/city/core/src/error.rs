//! Content error infrastructure for city-core.
//!
//! Yield resolution itself never fails. Rule catalogs are authored outside the
//! engine (base ruleset and mods), so a rule can name a stat channel that does
//! not exist or carry a parameter the engine cannot use. Such rules degrade to
//! a skipped contribution: the problem is classified, reported through
//! `tracing`, and the cycle carries on.

use crate::rules::SchemaVersion;

/// Severity level of an error, used for categorization and reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Bad content that is skipped; the cycle result stays well-formed.
    Degraded,

    /// Invalid input rejected by a validator before it reaches the engine.
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Degraded => "degraded",
            Self::Validation => "validation",
        }
    }
}

/// Common trait for classified errors in this crate.
pub trait YieldError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for logs and tests.
    fn error_code(&self) -> &'static str;
}

/// Problems found in externally authored rule content.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ContentError {
    /// A stat name does not resolve to any channel.
    #[error("unknown stat channel '{0}'")]
    UnknownStat(String),

    /// A specialist type has no base stat table in the ruleset.
    #[error("unknown specialist '{0}'")]
    UnknownSpecialist(String),

    /// A per-population rule divides by zero citizens.
    #[error("population divisor must be at least 1")]
    ZeroPopulationDivisor,

    /// A numeric parameter is NaN or infinite.
    #[error("parameter '{name}' is not a finite number ({value})")]
    NonFiniteParameter { name: &'static str, value: f32 },

    /// The rule kind belongs to another schema generation than its tag.
    #[error("rule kind is not part of the {version} schema")]
    SchemaMismatch { version: SchemaVersion },
}

impl YieldError for ContentError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Degraded
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownStat(_) => "CONTENT_UNKNOWN_STAT",
            Self::UnknownSpecialist(_) => "CONTENT_UNKNOWN_SPECIALIST",
            Self::ZeroPopulationDivisor => "CONTENT_ZERO_POPULATION_DIVISOR",
            Self::NonFiniteParameter { .. } => "CONTENT_NON_FINITE_PARAMETER",
            Self::SchemaMismatch { .. } => "CONTENT_SCHEMA_MISMATCH",
        }
    }
}

/// Reports a skipped contribution.
pub(crate) fn report(error: &ContentError, rule: &'static str) {
    tracing::warn!(
        code = error.error_code(),
        severity = error.severity().as_str(),
        rule,
        "skipping rule contribution: {error}"
    );
}

/// Returns `value` when finite, reporting and dropping it otherwise.
pub(crate) fn finite(name: &'static str, value: f32, rule: &'static str) -> Option<f32> {
    if value.is_finite() {
        Some(value)
    } else {
        report(&ContentError::NonFiniteParameter { name, value }, rule);
        None
    }
}
