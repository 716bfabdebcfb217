mod collect;
mod logging;
mod regions;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "dealerscan")]
#[command(about = "Collect authorized dealer listings from a dealer-locator endpoint")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search every point of a region and write the deduplicated dealers to CSV
    Collect {
        /// Region name under the regions directory, or a path to a region file
        #[arg(long)]
        region: String,
        /// Override the output path declared by the region file
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print the search points that would be queried, without any network access
        #[arg(long)]
        dry_run: bool,
    },
    /// Validate and list region files
    Regions {
        /// Show a single region instead of every file in the regions directory
        #[arg(long)]
        region: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = dealerscan_core::load_app_config()?;
    logging::init(&config)?;

    match cli.command {
        Commands::Collect {
            region,
            output,
            dry_run,
        } => collect::run_collect(&config, &region, output.as_deref(), dry_run).await,
        Commands::Regions { region } => regions::run_regions(&config, region.as_deref()),
    }
}

#[cfg(test)]
mod tests;
