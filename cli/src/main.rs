//! Lumen CLI - prints the daily three-card reading.
//!
//! Thin presentation layer over [`lumen_engine`]: it resolves identity and
//! configuration, runs cache-or-create for today's draw, walks the reveal
//! session in order, and prints the summary and export text. All decision
//! logic lives in the engine; this binary only formats.

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;

use lumen_engine::{
    COMPLETION_DELAY, DataDir, DrawStore, ReadingSession, RevealOutcome, SHUFFLE_DELAY,
    builtin_deck, export_text, load_config, load_deck, load_or_create_identity, today_key,
};

const USAGE: &str = "usage: lumen [NAME] [--new] [--copy] [--deck PATH] [--data-dir PATH]

  NAME             display name woven into the reading (default from config)
  --new            discard today's cached reading and regenerate
  --copy           copy the shareable text to the clipboard
  --deck PATH      deck JSON file (default: config, then built-in deck)
  --data-dir PATH  override the data directory";

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    name: Option<String>,
    new_reading: bool,
    copy: bool,
    deck: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    help: bool,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = args.peekable();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--new" => parsed.new_reading = true,
            "--copy" => parsed.copy = true,
            "--help" | "-h" => parsed.help = true,
            "--deck" => {
                let value = args.next().context("--deck requires a path")?;
                parsed.deck = Some(PathBuf::from(value));
            }
            "--data-dir" => {
                let value = args.next().context("--data-dir requires a path")?;
                parsed.data_dir = Some(PathBuf::from(value));
            }
            flag if flag.starts_with('-') => bail!("unknown flag {flag}\n{USAGE}"),
            positional => {
                if parsed.name.is_some() {
                    bail!("unexpected argument {positional:?}\n{USAGE}");
                }
                parsed.name = Some(positional.to_string());
            }
        }
    }
    Ok(parsed)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    // Logs go to stderr so the reading itself stays clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_reveal(outcome: &RevealOutcome) {
    println!(
        "{}. {} — {}",
        outcome.index + 1,
        outcome.position().label(),
        outcome.card().name
    );
    let keywords = outcome.card().keyword_preview().join(" · ");
    let orientation = outcome.pick.orientation_label();
    if keywords.is_empty() {
        println!("   {orientation}");
    } else {
        println!("   {orientation} • {keywords}");
    }
    println!("   {}\n", outcome.message());
}

fn main() -> Result<()> {
    init_tracing();
    let args = parse_args(env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = load_config()?;
    let data_dir = DataDir::resolve(args.data_dir.or(config.data_dir));
    tracing::debug!(path = %data_dir.path().display(), "Using data directory");
    let token = load_or_create_identity(data_dir.path())?;

    let deck = match args.deck.or(config.deck) {
        Some(path) => load_deck(&path)?,
        None => builtin_deck(),
    };

    let day = today_key();
    let store = DrawStore::new(data_dir.path());
    if args.new_reading {
        store.invalidate(&day)?;
    }

    let name = args.name.or(config.name).unwrap_or_default();
    let draw = store.get_or_create(&day, &name, &token, &deck)?;

    println!("Daily Light Tarot — {day}\n");

    // Walk the reveal machine the way the interactive surface would; the
    // timed transitions are advanced rather than waited out.
    let now = Instant::now();
    let mut session = ReadingSession::new();
    session.start_shuffling(draw, now);
    session.tick(now + SHUFFLE_DELAY);

    let mut summary = None;
    for index in 0..3 {
        if let Some(outcome) = session.reveal(index, now) {
            print_reveal(&outcome);
            if outcome.completed.is_some() {
                summary = outcome.completed;
            }
        }
    }
    session.tick(now + SHUFFLE_DELAY + COMPLETION_DELAY);

    let summary = summary.context("reading did not complete")?;
    println!("{}\n", summary.to_plain_text());

    let draw = session.draw().context("session lost its draw")?;
    let share = export_text(draw, &summary);
    if args.copy {
        match arboard::Clipboard::new().and_then(|mut clip| clip.set_text(share.clone())) {
            Ok(()) => println!("Copied to clipboard ✨"),
            Err(e) => {
                // Recoverable: the reading stands even when the clipboard
                // is unavailable.
                eprintln!("Copy failed (clipboard unavailable): {e}");
            }
        }
    }

    Ok(())
}
