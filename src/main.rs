use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use four_in_a_row::config::AppConfig;
use four_in_a_row::game::GameMode;
use four_in_a_row::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play four-in-a-row in the terminal.
#[derive(Parser)]
#[command(name = "four_in_a_row", about = "Four in a row on a 7x7 grid")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "four_in_a_row.toml")]
    config: PathBuf,

    /// Skip the menu: single or two
    #[arg(long)]
    mode: Option<GameMode>,

    /// Override grid side length
    #[arg(long)]
    size: Option<usize>,

    /// Override marks in a row needed to win
    #[arg(long)]
    run_length: Option<usize>,

    /// Start with sound cues muted
    #[arg(long)]
    muted: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // The TUI owns the terminal, so logs only go to a file when asked for
    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    }

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(size) = cli.size {
        app_config.grid.size = size;
    }
    if let Some(run_length) = cli.run_length {
        app_config.grid.run_length = run_length;
    }
    if cli.mode.is_some() {
        app_config.ui.start_mode = cli.mode;
    }
    if cli.muted {
        app_config.ui.muted = true;
    }

    let spec = app_config.grid.spec().context("invalid grid")?;
    log::info!(
        "starting on a {0}x{0} grid, {1} in a row",
        spec.size(),
        spec.run_length()
    );

    run(App::new(spec, &app_config.ui)).context("terminal UI failed")
}

fn run(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
