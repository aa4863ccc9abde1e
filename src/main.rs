mod app;
mod daemon;
mod domain;
mod editor;
mod input;
mod notifications;
mod storage;
mod ui;

use anyhow::Result;
use app::{Action, AppState};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use flexi_logger::{FileSpec, Logger};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use storage::Store;

#[derive(Parser)]
#[command(name = "mynotes")]
#[command(about = "A terminal todo and notes manager with due-date notifications", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the background notification daemon
    Daemon,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Daemon) => run_daemon(),
        None => run_tui(),
    }
}

fn run_daemon() -> Result<()> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let store = Store::open(storage::default_db_path()?)?;
    daemon::run(&store)
}

fn run_tui() -> Result<()> {
    // Log to a file so the alternate screen stays clean
    let data_dir = storage::data_dir()?;
    let _logger = Logger::try_with_env_or_str("warn")?
        .log_to_file(FileSpec::default().directory(&data_dir))
        .start()?;

    // A store that cannot be opened is the one fatal startup error
    let store = Store::open(storage::default_db_path()?)?;
    let mut app = AppState::new(store)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Block for the next key; there are no timers to tick
        if let Event::Key(key) = event::read()? {
            // Only process key press events (ignore key release)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match input::handle_key(app, key) {
                Action::None => {}
                Action::Quit => return Ok(()),
                Action::OpenEditor { note_id, seed } => {
                    // Cooperative suspension point: hand the terminal to the
                    // external editor and resume once it exits
                    disable_raw_mode()?;
                    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

                    let outcome = editor::edit_note(note_id, &seed);

                    enable_raw_mode()?;
                    execute!(io::stdout(), EnterAlternateScreen)?;
                    terminal.clear()?;

                    app.apply_editor_outcome(outcome);
                }
            }
        }
    }
}
