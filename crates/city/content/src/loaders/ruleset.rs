//! Ruleset loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::ruleset::Ruleset;

/// Loader for rulesets and mod rulesets from RON files.
pub struct RulesetLoader;

impl RulesetLoader {
    pub fn load(path: &Path) -> LoadResult<Ruleset> {
        let content = read_file(path)?;
        let ruleset = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse ruleset RON {}: {}", path.display(), e))?;

        tracing::debug!(path = %path.display(), rules = ruleset.len(), "loaded ruleset");
        Ok(ruleset)
    }

    pub fn parse(content: &str) -> LoadResult<Ruleset> {
        let ruleset: Ruleset = ron::from_str(content)?;
        Ok(ruleset)
    }

    /// Loads every `*.ron` file of a directory, sorted by file name.
    ///
    /// A missing directory yields no rulesets.
    pub fn load_dir(dir: &Path) -> LoadResult<Vec<Ruleset>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?
        {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron") {
                paths.push(path);
            }
        }
        paths.sort();

        paths.iter().map(|path| Self::load(path)).collect()
    }
}
