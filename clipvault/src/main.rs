//! src/main.rs
//! Clipboard history monitor TUI

use std::{
    io::{self, Stdout},
    panic::PanicHookInfo,
    sync::Arc,
};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{signal, sync::Notify};
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;

use clipvault::{
    Logger,
    config::Config,
    controller::{EventLoop, HistoryController, run_session},
    view::{Banner, UIRenderer},
};
use clipvault_core::{ArboardSource, RunningFlag, WatchContext, spawn_poller};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

// One UI thread plus the dedicated poller thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    setup_panic_handler();

    let app = App::new()
        .await
        .context("Failed to initialize application")?;
    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

struct App {
    terminal: AppTerminal,
    event_loop: EventLoop,
    controller: HistoryController,
    ui_renderer: UIRenderer,
    running: RunningFlag,
    shutdown: Arc<Notify>,
    _log_guard: Option<WorkerGuard>,
}

impl App {
    async fn new() -> Result<Self> {
        // Config comes first: it says where logs go.
        let (config, config_error) = match Config::load().await {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        };

        // No terminal yet, so stderr is still ours.
        let log_guard = match Logger::init_tracing(&config.logging) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("clipvault: logging disabled: {e:#}");
                None
            }
        };
        info!("Starting clipboard history monitor");
        if let Some(e) = config_error {
            warn!("Failed to load config, using defaults: {}", e);
        }

        let ctx = WatchContext::new();
        let poller = spawn_poller(ctx.clone(), config.poller.clone(), ArboardSource::new)
            .context("Failed to start clipboard poller")?;

        let mut controller =
            HistoryController::new(ctx.clone(), &config.ui, config.poller.effective_interval());
        controller.attach_poller(poller);

        let banner = Banner::load_optional(config.ui.banner_path.as_deref());
        let ui_renderer = UIRenderer::new(banner);

        let terminal = setup_terminal().context("Failed to initialize terminal")?;
        let event_loop = EventLoop::new(config.ui.tick_interval);

        info!("Application initialized successfully");

        Ok(Self {
            terminal,
            event_loop,
            controller,
            ui_renderer,
            running: ctx.running,
            shutdown: Arc::new(Notify::new()),
            _log_guard: log_guard,
        })
    }

    async fn run(mut self) -> Result<()> {
        self.setup_shutdown_handler();
        info!("Starting event loop");

        let result = run_session(
            &mut self.terminal,
            &mut self.ui_renderer,
            &mut self.controller,
            &mut self.event_loop,
            &self.shutdown,
        )
        .await;

        let stats = self.ui_renderer.stats();
        info!(
            frames = stats.frames,
            slow = stats.slow,
            avg_us = stats.average().as_micros() as u64,
            entries = self.controller.store().len(),
            "Event loop terminated"
        );
        result.context("UI session ended with an error")
    }

    fn setup_shutdown_handler(&self) {
        let shutdown = self.shutdown.clone();
        let running = self.running.clone();

        tokio::spawn(async move {
            #[cfg(unix)]
            {
                use tokio::signal::unix::{SignalKind, signal};

                let (mut sigterm, mut sigint) =
                    match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                        (Ok(term), Ok(int)) => (term, int),
                        (Err(e), _) | (_, Err(e)) => {
                            warn!("Failed to install signal handlers: {}", e);
                            return;
                        }
                    };

                tokio::select! {
                    _ = sigterm.recv() => info!("Received SIGTERM"),
                    _ = sigint.recv() => info!("Received SIGINT"),
                    _ = signal::ctrl_c() => info!("Received Ctrl+C"),
                }
            }

            #[cfg(not(unix))]
            {
                if let Err(e) = signal::ctrl_c().await {
                    warn!("Failed to listen for Ctrl+C: {}", e);
                    return;
                }
                info!("Received Ctrl+C");
            }

            running.stop();
            shutdown.notify_one();
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            warn!("Failed to cleanup terminal: {}", e);
        }
    }
}

fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!("Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    info!("Terminal cleanup complete");
    Ok(())
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
