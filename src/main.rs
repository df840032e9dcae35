//! Detective Quest: The Mansion Murder
//!
//! Explore the mansion, collect the clues and name the culprit.

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use detective_quest::{tui::App, GameConfig, Result, VERSION};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::fs::OpenOptions;
use std::io::stdout;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "detective-quest")]
#[command(version, about = "Explore the mansion, collect clues and name the culprit")]
struct Cli {
    /// Start with an empty case: no associations on record, no clues catalogued
    #[arg(long)]
    blank_case: bool,

    /// Write logs to this file (the terminal is busy drawing the game)
    #[arg(long, env = "DETECTIVE_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. `info` or `detective_quest=debug`
    #[arg(long, env = "DETECTIVE_LOG", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            load_case_file: !self.blank_case,
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&cli.log_level)
        .with_context(|| format!("invalid log filter '{}'", cli.log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while app.running {
        // Draw
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        // Handle input
        if !app.handle_input()? {
            break;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    tracing::info!(version = VERSION, blank_case = cli.blank_case, "starting detective-quest");

    // Create app
    let mut app = App::new(cli.game_config());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result?;

    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  Thanks for playing Detective Quest!                   ║");
    println!("║                                                        ║");
    println!("║  Until the next investigation, detective.              ║");
    println!("╚════════════════════════════════════════════════════════╝\n");
    println!("{}", app.game.check_status());

    Ok(())
}
