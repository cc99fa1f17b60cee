use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::time::Duration;

use crate::config::AppConfig;
use crate::events;
use crate::order::OrderClient;
use crate::tea::message::SystemMessage;
use crate::tea::{Model, Runtime};
use crate::ui;

pub struct App {
    runtime: Runtime,
    tick_rate: Duration,
}

impl App {
    pub fn new(config: AppConfig, order_client: Arc<dyn OrderClient>) -> Self {
        tracing::info!(endpoint = %order_client.endpoint(), "Starting Bloom Pizza");
        Self {
            runtime: Runtime::new(Model::new(config), order_client),
            tick_rate: Duration::from_millis(50),
        }
    }

    pub fn model(&self) -> &Model {
        self.runtime.model()
    }

    pub async fn run(&mut self) -> Result<()> {
        // Check if we're running in a proper terminal
        if !std::io::stdout().is_tty() {
            return Err(anyhow::anyhow!(
                "Bloom Pizza requires a proper terminal (TTY) to run. Use `bloom-pizza order` for scripted orders."
            ));
        }

        // Setup terminal
        enable_raw_mode().map_err(|e| anyhow::anyhow!("Failed to enable raw mode: {}", e))?;
        let mut stdout = io::stdout();
        or_cleanup(
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture),
            abandon_terminal,
        )
        .map_err(|e| anyhow::anyhow!("Failed to setup terminal: {}", e))?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = or_cleanup(Terminal::new(backend), abandon_terminal)
            .map_err(|e| anyhow::anyhow!("Failed to create terminal: {}", e))?;

        let result = self.run_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        let size = terminal.size()?;
        self.runtime
            .dispatch(SystemMessage::Resize(size.width, size.height).into());

        loop {
            // Results of finished validations and submissions
            self.runtime.drain();

            terminal.draw(|f| ui::render(f, self.runtime.model()))?;

            if event::poll(self.tick_rate)? {
                let event = event::read()?;
                if let Some(message) = events::map_event(self.runtime.model(), event) {
                    self.runtime.dispatch(message);
                }
            }

            if self.runtime.model().app_state.should_quit {
                tracing::info!("Quit requested");
                break;
            }
        }

        Ok(())
    }
}

/// Run `cleanup` when `result` is an error, then pass the result on
fn or_cleanup<T, E>(result: Result<T, E>, cleanup: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        cleanup();
    }
    result
}

/// Best-effort undo of a half-finished terminal setup
fn abandon_terminal() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    if let Err(e) = disable_raw_mode() {
        tracing::error!("Failed to disable raw mode: {}", e);
    }
}
