use anyhow::{Context, Result};
use appletkit::app::event::AppEvent;
use appletkit::app::handler;
use appletkit::app::state::AppState;
use appletkit::config::{self, AppConfig};
use appletkit::host::Host;
use appletkit::navigation::AppletTab;
use appletkit::state::StateRegistry;
use appletkit::{kit, logging, ui};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    if let Some(path) = logging::init(&cfg.logging)? {
        info!(log = %path.display(), "logging started");
    }

    // Compose applets before touching the terminal so configuration errors
    // print normally.
    let registry = StateRegistry::new();
    let host = kit::compose(&registry, &cfg.ui).context("Failed to compose applets")?;
    if let Some(tab) = cfg.navigation.initial_tab() {
        host.selection().set(tab);
    }
    info!(applets = ?host.applet_ids(), tab = %host.selected(), "host ready");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &host, &cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    host: &Host<AppletTab>,
    cfg: &AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(Duration::from_millis(cfg.ui.status_timeout_ms));

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if term_tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    let tick_rate = Duration::from_millis(cfg.ui.tick_rate_ms.max(1));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    let mut drawn_revision = host.revision();
    let tree = host.view();
    terminal.draw(|f| ui::render(f, &tree, &state))?;
    state.dirty = false;

    // Main event loop
    while let Some(event) = event_rx.recv().await {
        let actions = handler::handle_event(&mut state, event);

        for action in &actions {
            let tree = host.view();
            handler::apply(&mut state, &tree, action);
        }

        if state.should_quit {
            info!("quitting");
            break;
        }

        // Redraw when the host re-rendered or front-end state changed
        if state.dirty || host.revision() != drawn_revision {
            let tree = host.view();
            terminal.draw(|f| ui::render(f, &tree, &state))?;
            drawn_revision = host.revision();
            state.dirty = false;
        }
    }

    Ok(())
}
