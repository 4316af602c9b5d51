//! Interactive dashboard handler.
//!
//! Owns everything the renderer must not: terminal setup and teardown, the
//! tokio runtime, the prediction service, and the channel that carries fetch
//! resolutions back into the UI thread. The single suspension point is the
//! awaited network exchange inside spawned tasks; the render loop itself is
//! synchronous.

use std::io;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::runtime::Runtime;
use tokio::sync::Mutex;

use crate::context::ExecutionContext;
use crate::presentation::renderers::{DashboardApp, FetchEvent};
use platesight_client::{HttpTransport, PredictionService};

type SharedService = Arc<Mutex<PredictionService<HttpTransport>>>;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    // Resolve config before touching the terminal so errors print normally.
    let service = Arc::new(Mutex::new(ctx.service()?));
    let runtime = Runtime::new()?;
    let (tx, rx) = std::sync::mpsc::channel();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &runtime, service, tx, rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &Runtime,
    service: SharedService,
    tx: Sender<FetchEvent>,
    rx: Receiver<FetchEvent>,
) -> Result<()> {
    let mut app = DashboardApp::new();

    loop {
        terminal.draw(|f| app.render(f))?;

        // Handle events with timeout (allows periodic redraws)
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Dispatch a queued submission, if the last keypress produced one.
        if let Some(pending) = app.take_pending_fetch() {
            let service = Arc::clone(&service);
            let tx = tx.clone();
            runtime.spawn(async move {
                let outcome = service
                    .lock()
                    .await
                    .fetch_unified(&pending.profile)
                    .await
                    .map_err(|e| e.to_string());
                let _ = tx.send(FetchEvent::Resolved {
                    generation: pending.generation,
                    outcome,
                });
            });
        }

        // Check for resolutions from fetch tasks (non-blocking)
        if let Ok(fetch_event) = rx.try_recv() {
            app.apply_fetch_event(fetch_event);
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
