//! Yield tuning loader.

use std::path::Path;

use city_core::YieldConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for yield tuning constants from TOML files.
///
/// Keys missing from the file keep their default values.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<YieldConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<YieldConfig> {
        let config: YieldConfig = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_table_keeps_defaults() {
        let config = ConfigLoader::parse("food_per_population = 3.0\n").unwrap();
        assert_eq!(config.food_per_population, 3.0);
        assert_eq!(config.gold_conversion_divisor, 4.0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ConfigLoader::parse("food_per_populaton = 3.0\n").is_err());
        assert!(ConfigLoader::parse("gold_to_science_enabled = true\n").is_err());
    }
}
