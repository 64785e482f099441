//! Content factory for building a full city setup from a data directory.

use std::path::{Path, PathBuf};

use city_core::YieldConfig;

use crate::catalog::RuleCatalog;
use crate::loaders::{ConfigLoader, LoadResult, RulesetLoader, ScenarioLoader, SettingsLoader};
use crate::ruleset::Ruleset;
use crate::scenario::CityScenario;
use crate::settings::DifficultySettings;

/// Content factory that loads all city content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml        (optional, defaults otherwise)
/// ├── difficulty.toml    (optional, defaults otherwise)
/// ├── ruleset.ron
/// ├── mods/
/// │   └── *.ron          (layered on the ruleset in file name order)
/// └── scenarios/
///     └── capital.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load yield tuning from `config.toml`, or defaults when absent.
    pub fn load_config(&self) -> LoadResult<YieldConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(YieldConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load difficulty settings from `difficulty.toml`, or defaults when absent.
    pub fn load_settings(&self) -> LoadResult<DifficultySettings> {
        let path = self.data_dir.join("difficulty.toml");
        if !path.exists() {
            return Ok(DifficultySettings::default());
        }
        SettingsLoader::load(&path)
    }

    /// Load `ruleset.ron` without mods.
    pub fn load_ruleset(&self) -> LoadResult<Ruleset> {
        RulesetLoader::load(&self.data_dir.join("ruleset.ron"))
    }

    /// Load the ruleset and layer every mod from `mods/` on top.
    pub fn load_catalog(&self) -> LoadResult<RuleCatalog> {
        let catalog = RuleCatalog::from_ruleset(self.load_ruleset()?);
        for ruleset in RulesetLoader::load_dir(&self.data_dir.join("mods"))? {
            catalog.extend(ruleset);
        }
        Ok(catalog)
    }

    /// Load a scenario from `scenarios/{name}.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<CityScenario> {
        let path = self.data_dir.join("scenarios").join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
