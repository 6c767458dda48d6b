use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four_minimax::ai::Difficulty;
use connect_four_minimax::config::AppConfig;
use connect_four_minimax::ui::{App, GameMode};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Connect Four against the computer.
#[derive(Parser)]
#[command(name = "connect_four_minimax", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Starting difficulty: easy, medium or hard
    #[arg(long)]
    difficulty: Option<String>,

    /// Game mode: pvp (two humans) or ai (human vs computer)
    #[arg(long, value_enum, default_value_t = GameMode::PlayerVsEngine)]
    mode: GameMode,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(name) = &cli.difficulty {
        config.engine.difficulty = name.parse::<Difficulty>()?;
    }

    let mut app = App::new(&config, cli.mode).context("invalid configuration")?;
    run(&mut app).context("terminal UI failed")
}

fn run(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even when the app loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
