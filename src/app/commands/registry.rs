//! # Command Registry
//!
//! Checks each registered command's `is_relevant()` in order and executes the
//! first match.

use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind};
use std::sync::Arc;

use super::app::{AppTerminateCommand, QuitCommand};
use super::list::{ReloadCommand, ToggleFilterCommand};
use super::navigation::{
    PageDownCommand, PageUpCommand, ScrollDownCommand, ScrollToBottomCommand, ScrollToTopCommand,
    ScrollUpCommand,
};
use super::{Command, CommandContext, CommandEvent};

type CommandArc = Arc<dyn Command>;

pub struct CommandRegistry {
    commands: Vec<CommandArc>,
}

impl CommandRegistry {
    /// Create a new registry with default commands
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };
        registry.register_default_commands();
        registry
    }

    fn register_default_commands(&mut self) {
        self.add_command(Arc::new(AppTerminateCommand));
        self.add_command(Arc::new(PageDownCommand));
        self.add_command(Arc::new(PageUpCommand));

        self.add_command(Arc::new(ToggleFilterCommand));
        self.add_command(Arc::new(ReloadCommand));
        self.add_command(Arc::new(ScrollDownCommand));
        self.add_command(Arc::new(ScrollUpCommand));
        self.add_command(Arc::new(ScrollToTopCommand));
        self.add_command(Arc::new(ScrollToBottomCommand));
        self.add_command(Arc::new(QuitCommand));
    }

    pub fn add_command(&mut self, command: CommandArc) {
        self.commands.push(command);
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Run the first relevant command for a key event.
    ///
    /// Key releases (reported on some platforms) and unbound keys produce no
    /// events.
    pub fn process_event(
        &self,
        key_event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        if key_event.kind == KeyEventKind::Release {
            return Ok(Vec::new());
        }

        for command in &self.commands {
            if command.is_relevant(context, &key_event) {
                tracing::debug!(
                    "Found relevant command: {} for key {:?}",
                    command.name(),
                    key_event
                );
                return command.execute(key_event, context);
            }
        }

        tracing::debug!("No relevant command found for key {:?}", key_event);
        Ok(Vec::new())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
