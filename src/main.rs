//! inkweather - weather forecast display for the terminal
//!
//! Shows the current reading, three representative hours and four day
//! summaries for one location, refreshed in the background.

use std::io;
use std::panic;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use inkweather::app::App;
use inkweather::cli::{Cli, StartupConfig};
use inkweather::config::{default_log_path, Settings, UiLabels};
use inkweather::forecast::ForecastAssembler;
use inkweather::logging::{self, LogTarget};
use inkweather::refresh::{run_update, try_recv, RefreshHandle};
use inkweather::ui;

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Runs a single update and prints the snapshot as JSON on stdout
async fn run_once(startup: &StartupConfig) -> Result<(), Box<dyn std::error::Error>> {
    let assembler = ForecastAssembler::new(startup.assembler);
    let snapshot = run_update(&startup.source, &assembler).await?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Runs the terminal UI until the user quits
async fn run_tui(
    startup: StartupConfig,
    labels: UiLabels,
) -> Result<(), Box<dyn std::error::Error>> {
    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_labels(labels);
    let mut refresh = RefreshHandle::spawn(
        startup.refresh,
        startup.source,
        ForecastAssembler::new(startup.assembler),
    );

    // Main event loop
    loop {
        while let Some(message) = try_recv(&mut refresh) {
            if app.apply_message(message) {
                tracing::debug!("display updated");
            }
        }

        // Render UI
        terminal.draw(|f| ui::render(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.take_refresh_request() {
            refresh.request_refresh();
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    refresh.shutdown().await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let (settings, config_source) = Settings::load(cli.config.as_deref())?;
    let startup = StartupConfig::from_cli(&cli, &settings)?;

    if startup.once {
        logging::init(&startup.log_level, LogTarget::Stderr)?;
        tracing::info!(config = %config_source, source = %startup.source.describe(), "single update");
        return run_once(&startup).await;
    }

    // The terminal belongs to the UI; without a data directory there is no log
    if let Some(path) = settings.logging.file.clone().or_else(default_log_path) {
        logging::init(&startup.log_level, LogTarget::File(path))?;
    }
    tracing::info!(config = %config_source, "starting");

    run_tui(startup, settings.ui).await
}
