use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs, io, path::PathBuf, sync::atomic::Ordering, time::Instant};

use countrytui::{
    api::RestCountriesClient, config::Config, handlers, log_debug, services, ui, App, DEBUG_MODE,
};

/// Country lookup TUI for the REST Countries API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/countrytui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Override the search endpoint base URL
    #[arg(long)]
    base_url: Option<String>,
}

/// Determine the config file path with fallback logic
///
/// Returns `Ok(None)` when no config file exists; defaults are used then.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/countrytui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("countrytui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match get_config_path(args.config.clone())? {
        Some(path) => {
            log_debug(&format!("Loading config from: {:?}", path));
            let config_str = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            Config::from_yaml(&config_str)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => {
            log_debug("No config file found, using defaults");
            Config::default()
        }
    };

    // Override config with CLI flags
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);
    log_debug("Debug mode enabled");

    let config = load_config(&args)?;
    log_debug(&format!("Config: {:?}", config));

    let client = RestCountriesClient::new(config.base_url.clone(), config.request_timeout())?;
    let (api_tx, mut api_rx) = services::api::spawn_search_service(client);
    let mut app = App::new(&config, api_tx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app, &mut api_rx);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    api_rx: &mut tokio::sync::mpsc::UnboundedReceiver<services::SearchResponse>,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_quit {
            break;
        }

        // Process search responses (non-blocking)
        while let Ok(response) = api_rx.try_recv() {
            app.handle_search_response(response);
        }

        app.tick(Instant::now());

        // Wake up in time for a pending debounce deadline
        let timeout = app.next_wake(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key);
            }
        }
    }

    Ok(())
}
