//! Utility functions for xtask commands

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

/// Resolve the content directory: explicit flag, then `CITY_DATA_DIR`, then
/// the workspace `data/` directory.
pub fn data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let dir = explicit
        .or_else(|| std::env::var_os("CITY_DATA_DIR").map(PathBuf::from))
        .unwrap_or_else(|| workspace_root().join("data"));

    if !dir.is_dir() {
        bail!(
            "Data directory does not exist: {}\n\
             Pass --data-dir or set CITY_DATA_DIR.",
            dir.display()
        );
    }
    Ok(dir)
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Format a yield value with sign, trimming a trailing `.0`.
pub fn format_value(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{:+}", value as i64)
    } else {
        format!("{:+.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_keep_their_sign() {
        assert_eq!(format_value(3.0), "+3");
        assert_eq!(format_value(-1.0), "-1");
        assert_eq!(format_value(4.9), "+4.90");
    }
}
