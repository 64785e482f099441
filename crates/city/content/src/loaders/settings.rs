//! Difficulty settings loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::settings::DifficultySettings;

/// Loader for difficulty settings from TOML files.
pub struct SettingsLoader;

impl SettingsLoader {
    pub fn load(path: &Path) -> LoadResult<DifficultySettings> {
        let content = read_file(path)?;
        let settings: DifficultySettings = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse difficulty TOML {}: {}", path.display(), e)
        })?;

        Ok(settings)
    }
}
