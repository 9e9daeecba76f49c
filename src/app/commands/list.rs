//! # List Commands
//!
//! The filter button and manual reload.

use anyhow::Result;
use crossterm::event::KeyEvent;

use super::{is_plain_char, Command, CommandContext, CommandEvent};

/// Press the filter button (f)
///
/// Allowed while loading; the loading indicator keeps the half-refreshed list
/// off screen.
pub struct ToggleFilterCommand;

impl Command for ToggleFilterCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        is_plain_char(event, 'f')
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        tracing::debug!(
            "Filter button pressed (filter_active={})",
            context.state.filter_active
        );
        Ok(vec![CommandEvent::ToggleFilterRequested])
    }

    fn name(&self) -> &'static str {
        "ToggleFilter"
    }
}

/// Fetch the page again (r)
///
/// While the filter is on this resets it, which also refetches.
pub struct ReloadCommand;

impl Command for ReloadCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        is_plain_char(event, 'r')
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        if context.state.filter_active {
            tracing::debug!("Reload while filtered, resetting filter");
            return Ok(vec![CommandEvent::ToggleFilterRequested]);
        }
        Ok(vec![CommandEvent::ReloadRequested])
    }

    fn name(&self) -> &'static str {
        "Reload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::context::test_context;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn toggle_filter_should_be_relevant_for_f_in_any_state() {
        let cmd = ToggleFilterCommand;
        let event = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE);

        assert!(cmd.is_relevant(&test_context(false, 2), &event));
        assert!(cmd.is_relevant(&test_context(true, 0), &event));
    }

    #[test]
    fn toggle_filter_should_ignore_ctrl_f() {
        let cmd = ToggleFilterCommand;
        let event = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL);

        assert!(!cmd.is_relevant(&test_context(false, 2), &event));
    }

    #[test]
    fn toggle_filter_should_produce_toggle_event() {
        let context = test_context(false, 2);
        let event = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE);

        let events = ToggleFilterCommand.execute(event, &context).unwrap();

        assert_eq!(events, vec![CommandEvent::ToggleFilterRequested]);
    }

    #[test]
    fn reload_should_produce_reload_event() {
        let context = test_context(false, 2);
        let event = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);

        assert!(ReloadCommand.is_relevant(&context, &event));
        assert_eq!(
            ReloadCommand.execute(event, &context).unwrap(),
            vec![CommandEvent::ReloadRequested]
        );
    }

    #[test]
    fn reload_while_filtered_should_reset_filter() {
        let mut context = test_context(false, 1);
        context.state.filter_active = true;
        let event = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);

        assert_eq!(
            ReloadCommand.execute(event, &context).unwrap(),
            vec![CommandEvent::ToggleFilterRequested]
        );
    }
}
