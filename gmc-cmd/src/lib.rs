//! Command implementations for GMC CLI.
//!
//! Every command loads the dataset once, wraps it in an `Arc`, and lends it
//! to the recompute pipeline in `gmc-data`.

use anyhow::Context;
use clap::Subcommand;
use gmc_core::Dataset;
use gmc_data::DashboardConfig;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod export;
pub mod replay;
pub mod view;

#[derive(Subcommand)]
pub enum Command {
    /// Print the derived view (all chart series and the summary) as JSON
    View {
        /// Path to the consumption CSV (optionally .csv.gz)
        #[arg(short = 'd', long)]
        data: PathBuf,

        /// Selected year (defaults to the configured slider default)
        #[arg(short = 'y', long)]
        year: Option<i32>,

        /// Clicked country; omit to use the default country rule
        #[arg(short = 'c', long)]
        country: Option<String>,

        /// Optional JSON dashboard configuration
        #[arg(long)]
        config: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Write each chart series to its own JSON file for the renderer
    Export {
        #[arg(short = 'd', long)]
        data: PathBuf,

        #[arg(short = 'y', long)]
        year: Option<i32>,

        #[arg(short = 'c', long)]
        country: Option<String>,

        #[arg(long)]
        config: Option<PathBuf>,

        /// Output directory (created if missing)
        #[arg(short = 'o', long)]
        out: PathBuf,
    },

    /// List the years present in the dataset
    Years {
        #[arg(short = 'd', long)]
        data: PathBuf,
    },

    /// List the countries in the dataset, optionally for one year
    Countries {
        #[arg(short = 'd', long)]
        data: PathBuf,

        #[arg(short = 'y', long)]
        year: Option<i32>,
    },

    /// Replay a file of UI events (`year N`, `click [COUNTRY]`, `reset`) through a session
    Replay {
        #[arg(short = 'd', long)]
        data: PathBuf,

        /// Event file, one event per line
        #[arg(short = 'e', long)]
        events: PathBuf,

        #[arg(long)]
        config: Option<PathBuf>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::View {
            data,
            year,
            country,
            config,
            pretty,
        } => {
            let config = load_config(config.as_deref())?;
            let dataset = load_dataset(&data)?;
            view::run_view(&dataset, &config, year, country, pretty)
        }
        Command::Export {
            data,
            year,
            country,
            config,
            out,
        } => {
            let config = load_config(config.as_deref())?;
            let dataset = load_dataset(&data)?;
            export::run_export(&dataset, &config, year, country, &out)
        }
        Command::Years { data } => {
            let dataset = load_dataset(&data)?;
            view::run_years(&dataset)
        }
        Command::Countries { data, year } => {
            let dataset = load_dataset(&data)?;
            view::run_countries(&dataset, year)
        }
        Command::Replay {
            data,
            events,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let dataset = load_dataset(&data)?;
            replay::run_replay(dataset, config, &events)
        }
    }
}

/// Load the dataset once for the lifetime of the command.
pub fn load_dataset(path: &Path) -> anyhow::Result<Arc<Dataset>> {
    let dataset = Dataset::from_path(path)
        .with_context(|| format!("Failed to load dataset from {}", path.display()))?;
    log::info!(
        "Loaded {} records ({} countries) from {}",
        dataset.len(),
        dataset.countries().len(),
        path.display()
    );
    Ok(Arc::new(dataset))
}

/// Read a JSON dashboard configuration, or fall back to the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<DashboardConfig> {
    let Some(path) = path else {
        return Ok(DashboardConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
pub(crate) mod test_support {
    use gmc_core::Dataset;
    use std::sync::Arc;

    pub const SAMPLE_CSV: &str = "\
Country,Year,Poultry,Beef,Pork,SheepAndGoat,FishAndSeafood,OtherMeats,TotalConsumption
Germany,2020,16.0,12.0,35.0,1.0,7.0,0.5,71.5
France,2020,18.3,14.2,30.1,2.5,9.0,1.0,75.1
France,2021,18.5,14.0,29.5,2.4,9.2,1.0,74.6
";

    pub fn sample_dataset() -> Arc<Dataset> {
        Arc::new(Dataset::from_csv_str(SAMPLE_CSV).unwrap())
    }

    /// A fresh scratch directory under the system temp dir.
    pub fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("gmc-cmd-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }
}
