//! # Application Controller
//!
//! Owns the event loop: reads input, turns keys into commands, applies them
//! to the ViewModel, lands finished fetches and asks the renderer to redraw
//! whatever the ViewModel reports as stale.

use crate::app::{
    commands::{CommandContext, CommandEvent, CommandRegistry, ViewModelSnapshot},
    io::{EventStream, RenderStream, TerminalEventStream, TerminalRenderStream},
    services::{CharacterSource, HttpCharacterSource},
    view_models::{CharacterListController, FetchOutcome, ViewModel},
    views::{TerminalRenderer, ViewRenderer},
};
use crate::config::AppConfig;
use anyhow::Result;
use crossterm::event::Event;
use std::io::Stdout;
use std::sync::Arc;
use std::time::Duration;

/// How long to wait for input before checking for finished fetches
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The main application controller that orchestrates the MVVM pattern
pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: ViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    event_stream: ES,
    should_quit: bool,
}

impl AppController<TerminalEventStream, TerminalRenderStream<Stdout>> {
    /// Controller for the real terminal, fetching over HTTP
    pub fn new(config: &AppConfig) -> Result<Self> {
        let source = Arc::new(HttpCharacterSource::new(&config.source)?);
        Self::with_io_streams(
            config,
            source,
            TerminalEventStream::new(),
            TerminalRenderStream::new(),
        )
    }
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create new application controller with injected I/O streams
    pub fn with_io_streams(
        config: &AppConfig,
        source: Arc<dyn CharacterSource>,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;
        let mut view_model = ViewModel::new(CharacterListController::new(source), config);

        // Synchronize view model with actual terminal size
        let (width, height) = view_renderer.terminal_size();
        view_model.update_terminal_size(width, height);
        view_model.collect_pending_view_events();

        tracing::debug!(
            "Controller created for profile '{}' ({}x{})",
            config.profile_name,
            width,
            height
        );

        Ok(Self {
            view_model,
            view_renderer,
            command_registry: CommandRegistry::new(),
            event_stream,
            should_quit: false,
        })
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Take over the terminal, start the initial load and draw the first frame
    pub fn start(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        self.view_model.load();
        self.view_model.collect_pending_view_events();
        self.view_renderer.render_full(&self.view_model)
    }

    /// Run the main application loop.
    ///
    /// The terminal is handed back even when the loop fails.
    pub async fn run(&mut self) -> Result<()> {
        let result = match self.start() {
            Ok(()) => self.event_loop().await,
            Err(e) => Err(e),
        };

        let cleanup = self.view_renderer.cleanup();
        if let Err(e) = &result {
            tracing::error!("Event loop failed: {:#}", e);
        }
        result.and(cleanup)
    }

    async fn event_loop(&mut self) -> Result<()> {
        while !self.should_quit {
            self.poll_fetch()?;

            if self.event_stream.poll(INPUT_POLL_INTERVAL)? {
                let event = self.event_stream.read()?;
                self.handle_event(event)?;
            } else {
                // Let the fetch task make progress on single-threaded runtimes
                tokio::task::yield_now().await;
            }
        }
        Ok(())
    }

    /// Apply one terminal event and redraw what it changed
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key_event) => {
                tracing::debug!("Received key event: {:?}", key_event);

                let context =
                    CommandContext::new(ViewModelSnapshot::from_view_model(&self.view_model));
                let events = self.command_registry.process_event(key_event, &context)?;
                if !events.is_empty() {
                    tracing::debug!("Command events generated: {:?}", events);
                }
                for event in events {
                    self.apply_command_event(event);
                }
            }
            Event::Resize(width, height) => {
                self.view_model.update_terminal_size(width, height);
                self.view_renderer.update_size(width, height);
            }
            _ => {}
        }
        self.process_view_events()
    }

    /// Apply a command event to the view model
    fn apply_command_event(&mut self, event: CommandEvent) {
        match event {
            CommandEvent::ToggleFilterRequested => self.view_model.toggle_filter(),
            CommandEvent::ReloadRequested => self.view_model.load(),
            CommandEvent::ScrollRequested { direction, amount } => {
                self.view_model.scroll(direction, amount)
            }
            CommandEvent::ScrollToTopRequested => self.view_model.scroll_to_top(),
            CommandEvent::ScrollToBottomRequested => self.view_model.scroll_to_bottom(),
            CommandEvent::QuitRequested => {
                tracing::debug!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Land a finished fetch if one is waiting, without blocking
    pub fn poll_fetch(&mut self) -> Result<Option<FetchOutcome>> {
        let outcome = self.view_model.poll_fetch();
        self.process_view_events()?;
        Ok(outcome)
    }

    /// Wait for the newest fetch to land and redraw
    pub async fn settle_fetch(&mut self) -> Result<Option<FetchOutcome>> {
        let outcome = self.view_model.wait_for_fetch().await;
        self.process_view_events()?;
        Ok(outcome)
    }

    fn process_view_events(&mut self) -> Result<()> {
        let view_events = self.view_model.collect_pending_view_events();
        if self.should_quit {
            return Ok(());
        }
        for event in view_events {
            self.view_renderer
                .handle_view_event(&event, &self.view_model)?;
        }
        Ok(())
    }
}
