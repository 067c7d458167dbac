use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tracing::info;
use tracing_subscriber::util::SubscriberInitExt;

use liblife::{
    config::{load_config, Config},
    pattern::{self, DEAD_MARKER},
    presets, CellGrid, Overflow, World,
};

mod logging;

const DEFAULT_PRESET: &str = "gosper";

#[derive(Parser)]
#[clap(name = "life")]
#[clap(author = "Aldo Cortesi")]
#[clap(version = "0.1.0")]
#[clap(max_term_width = 80)]
#[clap(about = "Conway's Game of Life on a toroidal grid", long_about = None)]
struct Cli {
    /// Increase output verbosity
    #[clap(short, long, action = clap::ArgAction::Count, default_value = "0")]
    verbose: u8,

    /// Decrease output verbosity
    #[clap(short, long)]
    quiet: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a pattern for a number of generations and print the result
    Run {
        /// Pattern file to load
        file: Option<PathBuf>,

        /// Use a built-in preset instead of a file
        #[clap(long, conflicts_with = "file")]
        preset: Option<String>,

        /// Number of grid rows
        #[clap(long)]
        rows: Option<usize>,

        /// Number of grid columns
        #[clap(long)]
        cols: Option<usize>,

        /// Size the grid to fit the pattern file
        #[clap(long, conflicts_with_all = ["rows", "cols", "preset"])]
        fit: bool,

        /// Number of generations to run
        #[clap(short = 'n', long)]
        generations: Option<u64>,

        /// Drop pattern lines that do not fit the grid instead of failing
        #[clap(long)]
        truncate: bool,

        /// Also print the grid every N generations
        #[clap(long)]
        every: Option<u64>,
    },
    /// List built-in presets (alias: ls)
    #[clap(alias = "ls")]
    Presets,
    /// Print the effective configuration
    Conf,
}

/// Where the initial grid comes from.
#[derive(Debug)]
enum Source {
    File(PathBuf),
    Preset(String),
}

/// Grid dimensions requested on the command line.
#[derive(Debug, Default)]
struct Dims {
    rows: Option<usize>,
    cols: Option<usize>,
    fit: bool,
}

/// Build the initial grid. Presets use their own size unless dimensions are given; files use the
/// configured size unless dimensions are given or `fit` is set.
fn initial_grid(config: &Config, source: &Source, dims: &Dims) -> Result<CellGrid> {
    let options = config.pattern_options();
    match source {
        Source::Preset(name) => {
            let preset = presets::find(name)?;
            if dims.rows.is_none() && dims.cols.is_none() {
                return Ok(preset.grid()?);
            }
            let rows = dims.rows.unwrap_or(preset.rows);
            let cols = dims.cols.unwrap_or(preset.cols);
            Ok(CellGrid::from_pattern_with(
                rows,
                cols,
                preset.pattern,
                &options,
            )?)
        }
        Source::File(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read pattern file {}", path.display()))?;
            let (rows, cols) = if dims.fit {
                pattern::dimensions(&text)
                    .with_context(|| format!("Pattern file {} is empty", path.display()))?
            } else {
                (
                    dims.rows.unwrap_or(config.rows),
                    dims.cols.unwrap_or(config.cols),
                )
            };
            Ok(CellGrid::from_pattern_with(rows, cols, &text, &options)?)
        }
    }
}

fn print_grid(out: &mut impl Write, config: &Config, grid: &CellGrid) -> io::Result<()> {
    write!(out, "{}", grid.to_pattern(config.alive, DEAD_MARKER))
}

fn print_header(out: &mut impl Write, generation: u64, grid: &CellGrid) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        format!("generation {}", generation).blue().bold(),
        format!("(population {})", grid.population()).dimmed()
    )
}

/// Run the configured number of generations and write the final grid. With `every`, each
/// multiple of `every` and the final generation are written under a header, once each.
fn run(
    out: &mut impl Write,
    config: &Config,
    grid: CellGrid,
    every: Option<u64>,
) -> io::Result<()> {
    let mut world = World::new(grid);
    info!(
        "running {} generations on a {}x{} grid",
        config.generations,
        world.grid().rows(),
        world.grid().cols()
    );
    let every = every.filter(|n| *n > 0);
    let last = config.generations;
    loop {
        let generation = world.generation();
        if let Some(n) = every {
            if generation % n == 0 || generation == last {
                print_header(out, generation, world.grid())?;
                print_grid(out, config, world.grid())?;
            }
        }
        if generation == last {
            break;
        }
        world.tick();
    }
    if every.is_none() {
        print_grid(out, config, world.grid())?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbosity = if cli.quiet { 0 } else { cli.verbose };
    logging::create_tracing_subscriber(verbosity).init();

    let mut config = load_config()?;

    match cli.command {
        Commands::Run {
            file,
            preset,
            rows,
            cols,
            fit,
            generations,
            truncate,
            every,
        } => {
            if let Some(n) = generations {
                config.generations = n;
            }
            if truncate {
                config.overflow = Overflow::Truncate;
            }
            let source = match (file, preset) {
                (Some(path), _) => Source::File(path),
                (None, Some(name)) => Source::Preset(name),
                (None, None) => Source::Preset(DEFAULT_PRESET.to_string()),
            };
            let grid = initial_grid(&config, &source, &Dims { rows, cols, fit })?;
            run(&mut io::stdout().lock(), &config, grid, every)?;
        }
        Commands::Presets => {
            for preset in presets::all() {
                println!(
                    "{} {}",
                    preset.name.blue().bold(),
                    format!("{}x{}", preset.rows, preset.cols).dimmed()
                );
                let desc = textwrap::fill(preset.desc, 72);
                for line in desc.lines() {
                    println!("    {}", line);
                }
            }
        }
        Commands::Conf => {
            println!("{}", config.to_ron()?);
        }
    }
    Ok(())
}
