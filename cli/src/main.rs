use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use minefield_core::{Board, CellCount, Coord, Coordinate, PlacementStrategy, RevealResult};
use tracing_subscriber::filter::LevelFilter;

use settings::Settings;

mod settings;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML file with any of rows, cols, mines, seed and strategy
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of rows
    #[arg(long)]
    rows: Option<Coord>,

    /// Number of columns
    #[arg(long)]
    cols: Option<Coord>,

    /// Number of mines, must leave at least one free cell
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Mine placement algorithm, "rejection" or "sequential"
    #[arg(long)]
    strategy: Option<PlacementStrategy>,

    /// Cell to reveal, repeatable. Cells are read from stdin when none are given
    #[arg(short, long = "reveal", value_name = "ROW-COL")]
    reveals: Vec<Coordinate>,

    /// Print the full board after generating it
    #[arg(long)]
    show_solution: bool,

    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity,
}

impl Args {
    fn settings(&self) -> anyhow::Result<Settings> {
        let file = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        Ok(file.merge(Settings {
            rows: self.rows,
            cols: self.cols,
            mines: self.mines,
            seed: self.seed,
            strategy: self.strategy,
        }))
    }
}

/// Routes the core's `log` records through a `tracing` fmt subscriber on stderr.
fn init_logging(verbose: &Verbosity) {
    let level = match verbose.log_level_filter() {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Reveals one cell and prints the result, returns whether play can continue.
fn play(board: &mut Board, coords: Coordinate, out: &mut impl Write) -> anyhow::Result<bool> {
    let outcome = board.reveal(coords)?;
    match &outcome {
        RevealResult::MineHit(at) => {
            writeln!(out, "Mine hit at {at}")?;
            write!(out, "{}", board.solution())?;
            return Ok(false);
        }
        RevealResult::Safe(revealed) if revealed.is_empty() => {
            writeln!(out, "{coords} is already visible")?;
        }
        RevealResult::Safe(revealed) => {
            writeln!(out, "Revealed {} cells", revealed.len())?;
        }
    }
    write!(out, "{}", board.player_view())?;
    Ok(true)
}

fn run(args: Args) -> anyhow::Result<()> {
    let settings = args.settings()?;
    let config = settings.game_config();
    let generator = settings.generator();
    log::info!(
        "Starting {}x{} game with {} mines, {} placement, seed {:?}",
        config.rows,
        config.cols,
        config.mines,
        generator.strategy(),
        generator.seed()
    );

    let mut board = generator.generate_config(config).with_context(|| {
        format!(
            "Cannot start a game with {} rows, {} columns and {} mines",
            config.rows, config.cols, config.mines
        )
    })?;

    let mut out = io::stdout().lock();
    if args.show_solution {
        writeln!(out, "{}", board.solution())?;
    }
    write!(out, "{}", board.player_view())?;

    if !args.reveals.is_empty() {
        for coords in args.reveals {
            if !play(&mut board, coords, &mut out)? {
                break;
            }
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read from stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let coords = match line.parse::<Coordinate>() {
            Ok(coords) => coords,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        if !board.contains(coords) {
            log::warn!("Ignoring {} outside the board", coords);
            writeln!(
                out,
                "{coords} is outside the {}x{} board",
                board.rows(),
                board.cols()
            )?;
            continue;
        }
        if !play(&mut board, coords, &mut out)? {
            break;
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);
    log::debug!("{:?}", args);
    run(args)
}
