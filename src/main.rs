use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod clipboard;
mod config;
mod models;
mod playlist;
mod ui;
mod wizard;


use crate::clipboard::{Clipboard, DisabledClipboard, Osc52Clipboard, copy_best_effort};
use crate::config::{ClipboardMode, load_config};
use crate::models::{Energy, Mood, Situation};
use crate::playlist::{PlaylistResolver, RngSource};
use crate::wizard::{FileStore, KeyValueStore, MemoryStore, Step, Wizard};

#[derive(Parser)]
#[command(name = "mood-curator")]
#[command(about = "Turn your mood, situation and energy into a playlist vibe")]
#[command(version)]
struct Args {
    /// Directory holding the saved playlist (overrides MOOD_CURATOR_DATA_DIR)
    #[arg(long = "data-dir", global = true)]
    data_dir: Option<PathBuf>,

    /// Seed for generated playlist names, for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Keep the playlist in memory only - nothing is read from or written to disk
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Answer the questions interactively (default)
    Wizard,

    /// Resolve a playlist without prompting and save it
    Resolve {
        #[arg(long, value_enum)]
        mood: Mood,
        #[arg(long, value_enum)]
        situation: Situation,
        #[arg(long, value_enum)]
        energy: Energy,
    },

    /// Show the saved playlist
    Show,

    /// Copy the saved playlist description to the clipboard
    Copy,

    /// Forget the saved playlist
    Reset,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "mood_curator=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = load_config().context("Failed to load configuration")?;
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }

    let store: Box<dyn KeyValueStore> = if args.ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::new(&config.data_dir))
    };
    let resolver = match args.seed {
        Some(seed) => PlaylistResolver::new(Box::new(RngSource::seeded(seed))),
        None => PlaylistResolver::with_thread_rng(),
    };
    let mut clipboard: Box<dyn Clipboard> = match config.clipboard {
        ClipboardMode::Osc52 => Box::new(Osc52Clipboard::stdout()),
        ClipboardMode::Off => Box::new(DisabledClipboard),
    };

    let mut wizard = Wizard::start(store, resolver);
    let mut stdout = io::stdout().lock();

    match args.command.unwrap_or(Command::Wizard) {
        Command::Wizard => {
            println!("🎧 Mood Curator");
            ui::run(&mut wizard, clipboard.as_mut(), io::stdin().lock(), &mut stdout)?;
        }
        Command::Resolve {
            mood,
            situation,
            energy,
        } => {
            if wizard.step() == Step::Result {
                wizard.reset();
            }
            wizard.select_mood(mood);
            wizard.advance();
            wizard.select_situation(situation);
            wizard.advance();
            wizard.select_energy(energy);
            wizard.advance();

            let result = wizard
                .result()
                .ok_or_else(|| anyhow::anyhow!("No playlist was resolved"))?;
            ui::render_result(result, wizard.saved_at(), &mut stdout)?;
        }
        Command::Show => match wizard.result() {
            Some(result) => ui::render_result(result, wizard.saved_at(), &mut stdout)?,
            None => println!("No saved playlist. Run `mood-curator` to make one."),
        },
        Command::Copy => {
            let text = wizard
                .clipboard_text()
                .ok_or_else(|| anyhow::anyhow!("No saved playlist to copy"))?;
            if copy_best_effort(clipboard.as_mut(), &text) {
                println!("✓ Copied to clipboard:");
            } else {
                println!("Not copied. Here is the text instead:");
            }
            println!("{text}");
        }
        Command::Reset => {
            wizard.reset();
            if args.ephemeral {
                println!("Nothing saved in ephemeral mode.");
            } else {
                println!("✓ Cleared saved playlist in {}", config.data_dir.display());
            }
        }
    }

    Ok(())
}
