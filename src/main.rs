use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use netwatch::{events, logging, ui, App, Settings, SimulatedSource, ThemeChoice, TrafficSource};

/// How long to wait for input before redrawing.
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "netwatch")]
#[command(about = "Terminal dashboard for simulated network traffic")]
struct Args {
    /// Path to a TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Colour theme
    #[arg(short, long, value_enum)]
    theme: Option<ThemeChoice>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter directive (e.g., "info", "netwatch=debug")
    #[arg(long)]
    log_level: Option<String>,

    /// Seed the traffic generator for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(theme) = args.theme {
        settings.theme = theme;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = Some(log_file);
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    logging::init(&settings)?;

    let source: Box<dyn TrafficSource> = match args.seed {
        Some(seed) => Box::new(SimulatedSource::with_seed(seed)),
        None => Box::new(SimulatedSource::new()),
    };
    info!(source = source.description(), theme = ?settings.theme, "starting netwatch");

    // The sampler runs on this runtime while the TUI owns the main thread
    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    let app = App::new(source, settings.theme.resolve());
    run_tui(app)
}

/// Run the TUI until the user quits
fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal. Panics on sampler threads are
    // caught and retried, so they only go to the log.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        if std::thread::current().name() != Some("main") {
            error!(%panic, "panic on background thread");
            return;
        }
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(
        samples = app.stats.samples,
        total_download = app.stats.total_download,
        total_upload = app.stats.total_upload,
        "netwatch exiting"
    );

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        // Fold in whatever the sampler produced since the last frame
        app.tick();

        terminal.draw(|frame| ui::render(frame, app))?;

        if let Some(event) = events::poll_event(FRAME_INTERVAL)? {
            events::handle_event(app, event);
        }
    }

    Ok(())
}
