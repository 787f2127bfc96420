mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use nobel_dash_core::constants::DEFAULT_OUTPUT_FILE;
use nobel_dash_core::{Category, Gender};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nobel-dash")]
#[command(about = "Narrative dashboard of Nobel Prize laureates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the dashboard to an HTML file (default when no command is given)
    Render(RenderArgs),
    /// Print headline figures and yearly series as JSON
    Stats(StatsArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Directory holding the CSV tables and pre-rendered artifacts
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,
    /// Output file, or `-` for stdout
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self { data_dir: PathBuf::from("."), output: PathBuf::from(DEFAULT_OUTPUT_FILE) }
    }
}

#[derive(Args)]
struct StatsArgs {
    /// Directory holding the CSV tables
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,
    /// Keep only these categories (repeatable)
    #[arg(short, long, value_parser = parse_category)]
    category: Vec<Category>,
    /// Keep only these genders: male, female or other (repeatable)
    #[arg(short, long, value_parser = parse_gender)]
    gender: Vec<Gender>,
    /// First prize year, inclusive
    #[arg(long)]
    from: Option<i32>,
    /// Last prize year, inclusive
    #[arg(long)]
    to: Option<i32>,
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse::<Category>().map_err(|e| e.to_string())
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    match s.trim().to_lowercase().as_str() {
        "male" => Ok(Gender::Male),
        "female" => Ok(Gender::Female),
        "other" => Ok(Gender::Other),
        _ => Err(format!("invalid gender {s:?}, expected male|female|other")),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Commands::Render(RenderArgs::default())) {
        Commands::Render(args) => commands::render::run(&args.data_dir, &args.output)?,
        Commands::Stats(args) => {
            if let (Some(from), Some(to)) = (args.from, args.to) {
                anyhow::ensure!(from <= to, "--from {from} is after --to {to}");
            }
            let filter = nobel_dash_core::LaureateFilter::new()
                .categories(args.category)
                .genders(args.gender)
                .years(args.from, args.to);
            commands::stats::run(&args.data_dir, &filter)?;
        },
    }

    Ok(())
}
