//! Jumble — scramble text from the terminal.
//!
//! Launches the interactive TUI by default; `--once` runs a single scramble
//! pass over a file or stdin and prints the result.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use jumble::engine::{
    self, Intensity, RandomSource, ScrambleMode, ScrambleOptions, SeededSource, SystemSource,
};
use jumble::prefs;
use jumble::tui::App;

/// Jumble — a terminal-native text scrambler.
#[derive(Parser)]
#[command(name = "jumble")]
#[command(version)]
#[command(about = "Scramble text by characters, words, lines, or readable word interiors")]
struct Cli {
    /// Input file to load (stdin with --once when omitted)
    file: Option<PathBuf>,

    /// Scrambling mode: characters, words, lines, smart
    #[arg(short, long)]
    mode: Option<ScrambleMode>,

    /// Shuffle intensity: low, medium, high
    #[arg(short, long)]
    intensity: Option<Intensity>,

    /// Force output case to match the original, position by position
    #[arg(long)]
    preserve_case: bool,

    /// Let whitespace join the character shuffle pool
    #[arg(long)]
    shuffle_spaces: bool,

    /// Let punctuation join the character shuffle pool
    #[arg(long)]
    shuffle_punctuation: bool,

    /// Seed the random source for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Scramble once and print to stdout instead of launching the TUI
    #[arg(long)]
    once: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Stored preferences form the baseline; flags override per session.
    let stored = prefs::load_prefs(&prefs::default_prefs_path()).unwrap_or_default();
    let mut options = stored.options;
    if let Some(mode) = cli.mode {
        options.mode = mode;
    }
    if let Some(intensity) = cli.intensity {
        options.intensity = intensity;
    }
    if cli.preserve_case {
        options.preserve_case = true;
    }
    if cli.shuffle_spaces {
        options.preserve_spaces = false;
    }
    if cli.shuffle_punctuation {
        options.preserve_punctuation = false;
    }

    let text = match &cli.file {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("jumble: cannot read {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None if cli.once => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("jumble: cannot read stdin: {e}");
                return ExitCode::FAILURE;
            }
            buf
        }
        None => String::new(),
    };

    if cli.once {
        let mut source: Box<dyn RandomSource> = match cli.seed {
            Some(seed) => Box::new(SeededSource::new(seed)),
            None => Box::new(SystemSource::new()),
        };
        let result = engine::scramble_with(&text, &options, source.as_mut());
        println!("{}", result.scrambled_text);
        return ExitCode::SUCCESS;
    }

    match run_tui(&text, options, cli.seed, stored.theme.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("jumble: terminal error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_tui(
    text: &str,
    options: ScrambleOptions,
    seed: Option<u64>,
    theme_name: Option<&str>,
) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(text, options, seed);
    if let Some(name) = theme_name {
        app.select_theme(name);
    }
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}
