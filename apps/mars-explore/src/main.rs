//! mars-explore — run robot instructions against a planetary grid and report
//! where every robot ended up.
//!
//! Reads an instruction file, explores it robot by robot, and writes one
//! line per robot to stdout (or `--output`).  Logs go to stderr; set
//! `RUST_LOG` to change verbosity.

mod observer;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use mars_core::{ExecutionMode, ExploreConfig};
use mars_output::{CsvWriter, ReportWriter, TextWriter};
use mars_sim::ExplorerBuilder;

use observer::TracingObserver;

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_INPUT_PATH: &str = "./data/sample-1.txt";
const DEFAULT_LOG_FILTER: &str = "mars_explore=info,mars_sim=info,mars_parse=info";

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Explore a rectangular grid with a fleet of robots.
#[derive(Parser, Debug)]
#[command(name = "mars-explore")]
#[command(about = "Run robot instructions on a grid and report final positions")]
struct Args {
    /// Instruction file to read
    #[arg(long, short = 'i', default_value = DEFAULT_INPUT_PATH)]
    input_path: PathBuf,

    /// How to treat instructions a robot cannot carry out
    #[arg(long, default_value_t = ExecutionMode::Lenient)]
    mode: ExecutionMode,

    /// Longest instruction line accepted per robot
    #[arg(long, default_value_t = ExploreConfig::DEFAULT_MAX_INSTRUCTIONS)]
    max_instructions: usize,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write the report here instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    Text,
    Csv,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_json);

    let config = ExploreConfig {
        mode:             args.mode,
        max_instructions: args.max_instructions,
        ..ExploreConfig::default()
    };
    tracing::info!(input = %args.input_path.display(), mode = %config.mode, "mars-explore starting");

    // 1. Load and parse.
    let world = mars_parse::parse_file(&args.input_path, &config).with_context(|| {
        format!("unable to read instructions from path {}", args.input_path.display())
    })?;
    tracing::info!(surface = %world.surface, robots = world.robots.len(), "loaded world");

    // 2. Explore.
    let mut explorer = ExplorerBuilder::from_world(world)
        .config(config)
        .build()
        .context("failed to set up explorer")?;
    let mut obs = TracingObserver::default();
    explorer.run(&mut obs).context("exploration aborted")?;

    // 3. Report.
    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("unable to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer: Box<dyn ReportWriter> = match args.format {
        Format::Text => Box::new(TextWriter::new(sink)),
        Format::Csv  => Box::new(CsvWriter::new(sink)?),
    };
    writer.write_robots(explorer.robots())?;
    writer.finish()?;

    let summary = explorer.summary();
    tracing::info!(
        robots = summary.robots,
        lost = summary.lost,
        skipped = summary.skipped,
        blocked = summary.blocked,
        ignored = summary.ignored,
        events = obs.events,
        "exploration complete"
    );
    Ok(())
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
