use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use snowflake_card::compositor::Compositor;
use snowflake_card::config::{PaperSize, SketchParams};
use snowflake_card::export::SvgDocument;
use snowflake_card::rng::SeededRandom;
use snowflake_card::Result;

/// Procedural snowflake greeting cards for pen plotters
#[derive(Parser, Debug)]
#[command(name = "snowflake-card")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML parameter file; missing keys take their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the random seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Overrides the paper size
    #[arg(long, value_enum)]
    paper_size: Option<PaperSize>,

    /// Draws the fold line
    #[arg(long)]
    page_divider: bool,

    /// Includes the boundary stars as visible geometry
    #[arg(long)]
    debug: bool,

    /// Output SVG file
    #[arg(short, long, default_value = "snowflake.svg")]
    output: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let mut params = match &cli.config {
        Some(path) => SketchParams::from_path(path)?,
        None => SketchParams::default(),
    };
    if let Some(seed) = cli.seed {
        params.seed = seed;
    }
    if let Some(paper_size) = cli.paper_size {
        params.paper_size = paper_size;
    }
    params.page_divider |= cli.page_divider;
    params.debug |= cli.debug;

    let composition = Compositor::new(&params, SeededRandom::new(params.seed)).execute()?;
    let entries = composition.flatten();
    let (width, height) = params.page_dimensions();
    SvgDocument::new(width, height, &entries)
        .with_pen_width(params.pen_width)
        .write_to(&cli.output)?;
    tracing::info!(path = %cli.output.display(), entries = entries.len(), "drawing written");
    Ok(())
}
