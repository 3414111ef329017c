mod app;
mod celebration;
mod domain;
mod input;
mod persistence;
mod reset;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_data_dir, init_local_dir, FsStore, Repository, Store};
use ratatui::{backend::CrosstermBackend, Terminal};
use reset::{ResetSchedule, SystemClock};
use std::io;
use std::time::Duration;

/// Event-loop poll interval
const TICK: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "A terminal to-do board with a daily score counter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .tally directory in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_dir()?;
            println!("Initialized data directory: {}", data_dir.display());
            println!();
            println!("Tally will now use this local directory for task storage.");
            println!("Run 'tally' to start your board.");
            Ok(())
        }
        None => {
            // Run the normal TUI application
            run_tui()
        }
    }
}

fn run_tui() -> Result<()> {
    // Ensure the data directory exists and show which one we're using
    let data_dir = ensure_data_dir()?;
    eprintln!("Using data directory: {}", data_dir.display());

    // Hydrate the board; absent or corrupt entries become defaults
    let mut repo = Repository::new(FsStore::new(data_dir));
    let board = repo.load();
    let mut app = AppState::new(board);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app, &mut repo);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save any in-progress edit and pending writes on exit
    app.save_edit();
    if let Err(e) = repo.flush(&app.board, &mut app.dirty) {
        eprintln!("Error saving state: {}", e);
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app<S: Store>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    repo: &mut Repository<S>,
) -> Result<()> {
    // Owned by the loop and dropped with it, so no reset can fire against
    // torn-down state
    let mut schedule = ResetSchedule::new(SystemClock);

    loop {
        // Check for midnight crossing
        if schedule.poll() {
            app.apply_daily_reset();
        }

        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        app.tick();

        // Flush exactly the entries the last events touched
        if app.dirty.any() {
            repo.flush(&app.board, &mut app.dirty)?;
        }
    }
}
