//! Resolve a scenario city and print its yield breakdown
//!
//! Loads the ruleset, mods, tuning and difficulty from the data directory,
//! runs one yield cycle for the named scenario and prints every bucket map.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use city_content::{ContentFactory, ScenarioCity};
use city_core::{CityStats, HappinessMap, StatMap, StatSnapshot, Stats};

use crate::utils::{self, format_value};

/// Resolve a scenario city and print its yield breakdown
#[derive(Parser)]
pub struct Report {
    /// Scenario name under `scenarios/` (without `.ron`)
    #[arg(value_name = "SCENARIO")]
    scenario: String,

    /// Content directory (defaults to CITY_DATA_DIR, then the workspace `data/`)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Replace every percent bonus with the debug supercharge
    #[arg(long)]
    supercharge: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Bucket tables and totals
    Summary,
    /// Full snapshot as JSON
    Json,
    /// Pretty-printed debug format
    Debug,
}

impl Report {
    pub fn execute(self) -> Result<()> {
        let data_dir = utils::data_dir(self.data_dir)?;
        let factory = ContentFactory::new(&data_dir);

        let config = factory.load_config()?;
        let mut settings = factory.load_settings()?;
        settings.debug_supercharged |= self.supercharge;
        let catalog = factory.load_catalog()?;
        let scenario = factory
            .load_scenario(&self.scenario)
            .with_context(|| format!("Failed to load scenario '{}'", self.scenario))?;

        tracing::info!(
            scenario = %scenario.name,
            rules = catalog.len(),
            "resolving scenario"
        );

        let city = ScenarioCity::new(&scenario, &catalog, &settings);
        let stats = CityStats::new(config);
        let snapshot = stats.recompute_current(&city.env());

        println!(
            "{} {}",
            style("Scenario:").bold().cyan(),
            if scenario.name.is_empty() {
                &self.scenario
            } else {
                &scenario.name
            }
        );
        if let Some(target) = &scenario.construction {
            println!(
                "{} {} ({})",
                style("Building:").bold().cyan(),
                target.name,
                target.kind
            );
        }
        println!();

        match self.format {
            OutputFormat::Summary => print_summary(&snapshot),
            OutputFormat::Json => print_json(&snapshot)?,
            OutputFormat::Debug => println!("{:#?}", snapshot),
        }

        Ok(())
    }
}

fn print_summary(snapshot: &StatSnapshot) {
    print_buckets("Base yields:", &snapshot.base);
    print_buckets("Percent bonuses:", &snapshot.percent);
    print_buckets("Final yields:", &snapshot.final_stats);
    print_happiness(&snapshot.happiness);

    println!("{}", style("=== Total ===").bold().green());
    print_stats_row("Yield", &snapshot.total);
    println!(
        "  {:<28} {}",
        "Food eaten",
        format_value(snapshot.food_eaten)
    );
}

fn print_buckets(title: &str, map: &StatMap) {
    println!("{}", style(title).bold().yellow());
    if map.is_empty() {
        println!("  (none)");
    }
    for (label, stats) in map.iter() {
        print_stats_row(label, stats);
    }
    println!();
}

fn print_stats_row(label: &str, stats: &Stats) {
    let cells: Vec<String> = stats
        .iter_nonzero()
        .map(|(stat, value)| format!("{} {}", format_value(value), stat))
        .collect();
    let row = if cells.is_empty() {
        "-".to_owned()
    } else {
        cells.join(", ")
    };
    println!("  {:<28} {}", label, row);
}

fn print_happiness(map: &HappinessMap) {
    println!("{}", style("Happiness:").bold().yellow());
    for (label, value) in map.iter() {
        println!("  {:<28} {}", label, format_value(value));
    }
    println!("  {:<28} {}", style("Total").bold(), format_value(map.total()));
    println!();
}

fn print_json(snapshot: &StatSnapshot) -> Result<()> {
    let json =
        serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot to JSON")?;
    println!("{}", json);
    Ok(())
}
