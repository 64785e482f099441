//! Check a ruleset and its mods for content the engine would skip
//!
//! The engine never fails on bad content; it reports and skips it at
//! resolution time. This command surfaces the same problems up front.

use anyhow::{Result, bail};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use city_content::{ContentFactory, RuleIssue, RulesetLoader};

use crate::utils;

/// Check a ruleset and its mods for content the engine would skip
#[derive(Parser)]
pub struct Validate {
    /// Content directory (defaults to CITY_DATA_DIR, then the workspace `data/`)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Validate a single ruleset file instead of the data directory
    #[arg(short, long, value_name = "FILE", conflicts_with = "data_dir")]
    file: Option<PathBuf>,
}

impl Validate {
    pub fn execute(self) -> Result<()> {
        let (origin, issues, rules) = match self.file {
            Some(file) => {
                let ruleset = RulesetLoader::load(&file)?;
                (file.display().to_string(), ruleset.validate(), ruleset.len())
            }
            None => {
                let data_dir = utils::data_dir(self.data_dir)?;
                let catalog = ContentFactory::new(&data_dir).load_catalog()?;
                (
                    data_dir.display().to_string(),
                    catalog.validate(),
                    catalog.len(),
                )
            }
        };

        println!("{} {}", style("Ruleset:").bold().cyan(), origin);
        println!("{} {}", style("Rules:").bold().cyan(), rules);
        println!();

        if issues.is_empty() {
            println!("{}", style("No issues found").bold().green());
            return Ok(());
        }

        print_issues(&issues);
        bail!("{} content issue(s) found", issues.len());
    }
}

fn print_issues(issues: &[RuleIssue]) {
    println!("{}", style("Issues:").bold().yellow());
    for issue in issues {
        println!(
            "  {} {}: {}",
            style(issue.code()).red(),
            issue.location,
            issue.error
        );
    }
    println!();
}
