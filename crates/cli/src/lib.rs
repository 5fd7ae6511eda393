use anyhow::{bail, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use noman_notes::{find_note, read_note, NotesDir, SearchDepth};
use std::path::PathBuf;

mod output;

const USAGE_EXIT_CODE: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "noman")]
#[command(about = "Print a personal note or cheat sheet from your notes directory", long_about = None)]
#[command(version)]
struct Cli {
    /// Note to print, matched as `<NOTE>.md`; only the first one is used
    #[arg(value_name = "NOTE")]
    notes: Vec<String>,

    /// Path where to look for the specified note (default: ~/.noman)
    #[arg(short, long, value_name = "DIR")]
    path: Option<PathBuf>,

    /// Also search subdirectories of the notes directory
    #[arg(short, long)]
    recursive: bool,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Quiet mode: log only errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    const fn depth(&self) -> SearchDepth {
        if self.recursive {
            SearchDepth::Recursive
        } else {
            SearchDepth::TopLevel
        }
    }
}

// clap exits with 2 on bad usage; every failure here exits with 1.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            std::process::exit(USAGE_EXIT_CODE);
        }
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder
        .format_timestamp(None)
        .format_target(false)
        .target(env_logger::Target::Stderr)
        .init();
}

pub fn main_entry() -> Result<()> {
    let cli = parse_cli();
    init_logging(&cli);
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let depth = cli.depth();
    let Some((note, extra)) = cli.notes.split_first() else {
        bail!(
            "Please provide a note you would like to search for.\n\n{}",
            Cli::command().render_usage()
        );
    };
    if !extra.is_empty() {
        log::warn!("Note: you passed more than one note; noman will only consider the first one.");
    }

    let dir = NotesDir::resolve(cli.path)?;
    log::debug!(
        "notes directory {} (from {})",
        dir.path().display(),
        dir.origin().as_str()
    );
    dir.ensure_exists()?;

    let path = find_note(dir.path(), note, depth)?;
    log::debug!("reading {}", path.display());
    let bytes = read_note(&path)?;
    output::write_stdout(&bytes)
}
