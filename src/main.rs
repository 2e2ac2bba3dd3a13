//! Provider TUI - rename a provider from the terminal
//!
//! A Ratatui-based dialog that submits a new alias to the provider service
//! and reports the outcome as a toast.

mod app;
mod backend;
mod config;
mod notifications;
mod platform;
mod state;
mod submit;
mod ui;

use anyhow::Result;
use app::App;
use backend::ProviderClient;
use clap::Parser;
use config::AppConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use notifications::Notifier;
use ratatui::{backend::CrosstermBackend, Terminal};
use state::Provider;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Rename a provider
#[derive(Parser, Debug)]
#[command(name = "provider-tui")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Id of the provider to rename
    provider_id: String,

    /// The provider's current alias, shown as the input placeholder
    #[arg(short, long)]
    alias: Option<String>,

    /// Provider service address (overrides config and environment)
    #[arg(short, long)]
    server: Option<String>,

    /// Persist the --server address to the config file
    #[arg(long, requires = "server")]
    remember_server: bool,

    /// Open the rename dialog immediately
    #[arg(long)]
    edit: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "provider_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut config = AppConfig::load()?;
    if cli.remember_server {
        config.server_address = cli.server.clone();
        config.save()?;
    }
    let client = ProviderClient::new(&config.server_address(cli.server.as_deref()))?;
    tracing::info!("Using provider service at {}", client.address());

    let mut app = App::new(
        Provider::new(cli.provider_id, cli.alias),
        Arc::new(client),
        Notifier::global(),
        &config,
    );
    if cli.edit {
        app.open_dialog();
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while a spinner is animating (16ms = ~60fps)
        let poll_duration = if app.state.dialog.is_submitting() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Polling blocks the thread; let spawned submissions make progress
        let has_event = tokio::task::block_in_place(|| event::poll(poll_duration))?;
        if has_event {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                app.handle_key(key);
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
