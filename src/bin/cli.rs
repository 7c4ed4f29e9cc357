//! Weighmark CLI
//!
//! Offline access to the scoring engine:
//! - Show the rating table
//! - Rank platforms for an importance vector
//! - Dump chart specs as JSON
//! - Print a starter config file

use clap::{Parser, Subcommand, ValueEnum};
use weighmark::charts::{build_bar_chart, build_radar_chart};
use weighmark::config::generate_default_config;
use weighmark::ratings::RatingStore;
use weighmark::scoring::{compute_scores, ImportanceVector};

#[derive(Parser)]
#[command(name = "weighmark-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rank AI platforms by weighted task importance")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show tasks and per-platform ratings
    Ratings,

    /// Rank platforms
    Scores {
        /// Importance per task, comma-separated (default: all 1)
        #[arg(short, long, value_delimiter = ',')]
        importance: Vec<u8>,
    },

    /// Print a chart spec as JSON
    Chart {
        /// Which chart
        #[arg(value_enum)]
        kind: ChartChoice,
        /// Importance per task, comma-separated (default: all 1)
        #[arg(short, long, value_delimiter = ',')]
        importance: Vec<u8>,
    },

    /// Print a default configuration file
    InitConfig,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ChartChoice {
    Bar,
    Radar,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let store = RatingStore::fixture();

    match cli.command {
        Commands::Ratings => match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&store)?),
            OutputFormat::Table => print_ratings(&store),
        },

        Commands::Scores { importance } => {
            let importance = parse_importance(importance, &store)?;
            let scores = compute_scores(&importance, &store);

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&scores)?),
                OutputFormat::Table => {
                    println!("{:<4} {:<12} {:>8} {:>10}", "Rank", "Platform", "Score", "Total");
                    println!("{}", "-".repeat(37));
                    for (rank, entry) in scores.iter().enumerate() {
                        println!(
                            "{:<4} {:<12} {:>8.1} {:>10.2}",
                            rank + 1,
                            entry.platform,
                            entry.score,
                            entry.total
                        );
                    }
                }
            }
        }

        Commands::Chart { kind, importance } => {
            let spec = match kind {
                ChartChoice::Bar => {
                    let importance = parse_importance(importance, &store)?;
                    build_bar_chart(&compute_scores(&importance, &store), &store)
                }
                ChartChoice::Radar => build_radar_chart(&store),
            };
            println!("{}", serde_json::to_string_pretty(&spec)?);
        }

        Commands::InitConfig => print!("{}", generate_default_config()),
    }

    Ok(())
}

fn parse_importance(values: Vec<u8>, store: &RatingStore) -> anyhow::Result<ImportanceVector> {
    if values.is_empty() {
        return Ok(ImportanceVector::ones(store.task_count()));
    }
    Ok(ImportanceVector::new(values, store.task_count())?)
}

fn print_ratings(store: &RatingStore) {
    print!("{:<4} {:<48}", "#", "Task");
    for platform in store.platforms() {
        print!(" {:>10}", platform.name);
    }
    println!();
    println!("{}", "-".repeat(53 + 11 * store.platforms().len()));

    for task in store.tasks() {
        print!("{:<4} {:<48}", task.index, task.name);
        for platform in store.platforms() {
            print!(" {:>10}", platform.rating(task.index).unwrap_or(0));
        }
        println!();
    }
}
