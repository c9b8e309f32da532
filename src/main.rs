mod app;
mod breeds;
mod config;
mod content;
mod facts;
mod theme;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use app::{App, Popup};
use config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "purrview")]
#[command(version)]
#[command(about = "All About Cats: breeds, photos and random cat facts in your terminal")]
struct Args {
    /// Print one random cat fact and exit
    #[arg(long)]
    fact: bool,

    /// Fact endpoint to use instead of the configured one
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Write logs to this file (the TUI owns the terminal)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Don't fetch a fact when the view opens
    #[arg(long)]
    no_fetch: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load().unwrap_or_default();
    if let Some(endpoint) = args.endpoint {
        config.fact_endpoint = endpoint;
    }
    if args.no_fetch {
        config.fetch_on_start = false;
    }

    // Handle CLI-only commands
    if args.fact {
        init_logging(None)?;
        return print_fact(&config).await;
    }

    // Never stderr here: the TUI owns the terminal
    let log_file = config.tui_log_file(args.log_file);
    init_logging(Some(&log_file))?;

    run_tui(&config).await
}

/// Logs go to `log_file` when given, stderr otherwise. `RUST_LOG` overrides the level.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("purrview=info"));

    match log_file {
        Some(path) => {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("creating log directory {}", dir.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;

            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
        }
    }
    Ok(())
}

async fn print_fact(config: &AppConfig) -> Result<()> {
    let client = facts::FactClient::new(config.fact_endpoint.clone(), config.request_timeout())?;
    let fact = client.fetch().await?;
    println!("{}", fact);
    Ok(())
}

async fn run_tui(config: &AppConfig) -> Result<()> {
    // Create app state before touching the terminal so errors print normally
    let mut app = App::new(config)?;
    app.start(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Poll on a blocking thread so spawned fetches keep making progress
        let ready = tokio::task::spawn_blocking(|| event::poll(Duration::from_millis(100))).await??;
        if ready {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') if app.popup == Popup::None => return Ok(()),
                        KeyCode::Char('c') if key.modifiers.contains(event::KeyModifiers::CONTROL) => {
                            return Ok(())
                        }
                        _ => {
                            // Handle key and catch any errors to prevent crashes
                            if let Err(e) = app.handle_key(key) {
                                app.set_status(format!("Error: {}", e));
                            }
                        }
                    }
                }
            }
        }

        // Pick up finished fetches, expire status messages
        app.tick();
    }
}
