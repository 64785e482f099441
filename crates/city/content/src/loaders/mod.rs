//! Content loaders for reading city data from files.
//!
//! TOML carries flat tuning tables (yield constants, difficulty), RON carries
//! structured content (rulesets, scenarios).

pub mod config;
pub mod factory;
pub mod ruleset;
pub mod scenario;
pub mod settings;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use ruleset::RulesetLoader;
pub use scenario::ScenarioLoader;
pub use settings::SettingsLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
