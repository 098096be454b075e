use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use planner::cli::render::{RenderArgs, render};
use planner_raster::Locale;

/// planner - School-year lesson planning raster
#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Lays out a school year's topics and events as a week raster", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the time raster for a planner document and print it as JSON
    Render {
        /// Planner document (school year, class topics, holidays, other events)
        #[arg(long, short)]
        input: PathBuf,

        /// Position of the today marker in epoch milliseconds (defaults to now)
        #[arg(long, allow_negative_numbers = true)]
        today: Option<i64>,

        /// Month label language, en or de (overrides config file)
        #[arg(long)]
        locale: Option<Locale>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = planner::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    planner::observability::init_observability(
        "planner",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Render {
            input,
            today,
            locale,
            pretty,
        } => {
            let args = RenderArgs {
                input,
                today,
                locale,
                pretty,
            };
            render(&config, args, &mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}
