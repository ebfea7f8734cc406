use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::dependency_analysis::domain::LayoutOptions;

/// Explore npm dependency graphs and preview what removing a package would drop
#[derive(Parser, Debug)]
#[command(name = "dep-impact")]
#[command(version)]
#[command(
    about = "Explore npm dependency graphs and preview what removing a package would drop",
    long_about = None
)]
pub struct Args {
    /// Path to package.json
    #[arg(short, long, default_value = "package.json")]
    pub manifest: PathBuf,

    /// Path to package-lock.json
    #[arg(short, long, default_value = "package-lock.json")]
    pub lockfile: PathBuf,

    /// Output format: text, json, markdown or svg [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Package to inspect (defaults to the first direct dependency)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Direct dependency whose removal to preview (defaults to the first one)
    #[arg(short, long)]
    pub remove: Option<String>,

    /// List packages whose name contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Hops to follow from the focus package in each direction (1-5) [default: 2]
    #[arg(short, long, value_parser = parse_depth)]
    pub depth: Option<usize>,

    /// Maximum number of packages in the graph view (25-400) [default: 120]
    #[arg(short = 'n', long, value_parser = parse_max_nodes)]
    pub max_nodes: Option<usize>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./dep-impact.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase diagnostic logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress messages
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_in_range(value: &str, min: usize, max: usize) -> Result<usize, String> {
    let parsed: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a whole number", value))?;
    if !(min..=max).contains(&parsed) {
        return Err(format!("must be between {} and {}", min, max));
    }
    Ok(parsed)
}

fn parse_depth(value: &str) -> Result<usize, String> {
    parse_in_range(value, LayoutOptions::MIN_DEPTH, LayoutOptions::MAX_DEPTH)
}

fn parse_max_nodes(value: &str) -> Result<usize, String> {
    parse_in_range(
        value,
        LayoutOptions::MIN_MAX_NODES,
        LayoutOptions::MAX_MAX_NODES,
    )
}
