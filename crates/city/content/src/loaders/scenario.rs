//! City scenario loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::CityScenario;

/// Loader for city scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<CityScenario> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<CityScenario> {
        let scenario: CityScenario = ron::from_str(content)?;
        Ok(scenario)
    }
}
