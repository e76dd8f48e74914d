//! Main application orchestrator.

use std::io::stdout;
use std::sync::Arc;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEvent, KeyEventKind,
    MouseEvent,
};
use crossterm::execute;
use futures_util::StreamExt;
use futures_util::future::Either;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::application::use_cases::LoadScheduleUseCase;
use crate::domain::keybinding::Action;
use crate::domain::ports::TrainingDataPort;
use crate::domain::{MountDate, ScheduleError, TrainingSession};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::ui::{ScheduleScreen, ScheduleScreenState, ViewOptions};

type LoadOutcome = Result<Vec<TrainingSession>, ScheduleError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

/// One mounted schedule view and its single in-flight load.
struct Mount {
    generation: u64,
    screen: ScheduleScreenState,
    pending: Option<oneshot::Receiver<LoadOutcome>>,
    loader: JoinHandle<()>,
}

impl Mount {
    fn start(generation: u64, use_case: LoadScheduleUseCase, options: &ViewOptions) -> Self {
        let mount_date = MountDate::capture(options.today_clock);
        info!(generation, today = %mount_date.as_str(), "Mounting schedule view");

        let (tx, rx) = oneshot::channel();
        let loader = tokio::spawn(async move {
            let outcome = use_case.execute().await;
            if tx.send(outcome).is_err() {
                debug!(generation, "View torn down before load finished; result discarded");
            }
        });

        Self {
            generation,
            screen: ScheduleScreenState::new(mount_date, options),
            pending: Some(rx),
            loader,
        }
    }

    fn settle(&mut self, received: Result<LoadOutcome, oneshot::error::RecvError>) {
        self.pending = None;
        let outcome = received.unwrap_or_else(|_| {
            Err(ScheduleError::fetch_failed(
                "loader stopped before producing a result",
            ))
        });
        self.screen.apply_outcome(outcome);
        debug!(generation = self.generation, mode = ?self.screen.render_mode(), "Load settled");
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.loader.abort();
    }
}

/// Terminal host for the schedule view.
pub struct App {
    state: AppState,
    use_case: LoadScheduleUseCase,
    options: ViewOptions,
    mount: Option<Mount>,
    generation: u64,
}

impl App {
    #[must_use]
    pub fn new(data_port: Arc<dyn TrainingDataPort>, options: ViewOptions) -> Self {
        Self {
            state: AppState::Running,
            use_case: LoadScheduleUseCase::new(data_port),
            options,
            mount: None,
            generation: 0,
        }
    }

    /// Mounts a fresh view, tearing down the current one. Must be called
    /// from within a tokio runtime.
    pub fn mount(&mut self) {
        // Drop first so the old loader is aborted before the new one starts.
        self.mount = None;
        self.generation += 1;
        self.mount = Some(Mount::start(
            self.generation,
            self.use_case.clone(),
            &self.options,
        ));
    }

    fn reload(&mut self) {
        info!(generation = self.generation, "Reloading schedule view");
        self.mount();
    }

    /// # Errors
    /// Returns error if drawing to or reading from the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        if self.options.mouse {
            execute!(stdout(), EnableMouseCapture)?;
        }

        self.mount();
        let result = self.run_event_loop(terminal).await;
        self.mount = None;

        if self.options.mouse
            && let Err(e) = execute!(stdout(), DisableMouseCapture)
        {
            warn!(error = %e, "Failed to disable mouse capture");
        }

        info!("Application exiting normally");
        result
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            let load_future = match self.mount.as_mut().and_then(|m| m.pending.as_mut()) {
                Some(rx) => Either::Left(rx),
                None => Either::Right(std::future::pending()),
            };
            let terminal_event = terminal_events.next();

            tokio::select! {
                received = load_future => {
                    if let Some(mount) = self.mount.as_mut() {
                        mount.settle(received);
                    }
                }

                event = terminal_event => self.on_stream_item(event)?,
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        Ok(())
    }

    /// Applies one item from the terminal event stream. A closed stream
    /// means there is no terminal left to drive the view, so the app exits.
    fn on_stream_item(&mut self, item: Option<std::io::Result<Event>>) -> color_eyre::Result<()> {
        match item {
            None => {
                warn!("Terminal event stream ended");
                self.state = AppState::Exiting;
            }
            Some(Ok(event)) => {
                if self.handle_terminal_event(event) == EventResult::Exit {
                    self.state = AppState::Exiting;
                }
            }
            Some(Err(e)) => {
                error!(error = %e, "Terminal event stream failed");
                return Err(e.into());
            }
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        if let Some(mount) = self.mount.as_mut() {
            frame.render_stateful_widget(ScheduleScreen::new(), frame.area(), &mut mount.screen);
        }
    }

    /// Dispatches one terminal event.
    pub fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        match self.options.keymap.resolve(&key) {
            Some(Action::Quit) => EventResult::Exit,
            Some(Action::Refresh) => {
                self.reload();
                EventResult::Reloaded
            }
            Some(action) => match self.mount.as_mut() {
                Some(mount) => {
                    if mount.screen.handle_action(action) {
                        EventResult::Consumed
                    } else {
                        EventResult::Continue
                    }
                }
                None => EventResult::Continue,
            },
            None => EventResult::Continue,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> EventResult {
        let Some(mount) = self.mount.as_ref() else {
            return EventResult::Continue;
        };

        if EventHandler::is_click_in(&mouse, mount.screen.button_area()) {
            debug!("Refresh button clicked");
            self.reload();
            return EventResult::Reloaded;
        }
        EventResult::Continue
    }

    /// Screen state of the current mount.
    #[must_use]
    pub fn screen(&self) -> Option<&ScheduleScreenState> {
        self.mount.as_ref().map(|m| &m.screen)
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[cfg(test)]
    async fn settle_pending(&mut self) {
        if let Some(mount) = self.mount.as_mut()
            && let Some(rx) = mount.pending.as_mut()
        {
            let received = rx.await;
            mount.settle(received);
        }
    }
}
