//! # Navigation Commands
//!
//! Scrolling through the card list. None of these apply while the loading
//! indicator is shown or the list is empty.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{is_ctrl_char, is_plain_char, Command, CommandContext, CommandEvent};
use crate::app::view_models::{ScrollAmount, ScrollDirection};

/// Scroll down one card (j, Down)
pub struct ScrollDownCommand;

impl Command for ScrollDownCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.list_visible() && (is_plain_char(event, 'j') || event.code == KeyCode::Down)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::ScrollRequested {
            direction: ScrollDirection::Down,
            amount: ScrollAmount::Card,
        }])
    }

    fn name(&self) -> &'static str {
        "ScrollDown"
    }
}

/// Scroll up one card (k, Up)
pub struct ScrollUpCommand;

impl Command for ScrollUpCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.list_visible() && (is_plain_char(event, 'k') || event.code == KeyCode::Up)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::ScrollRequested {
            direction: ScrollDirection::Up,
            amount: ScrollAmount::Card,
        }])
    }

    fn name(&self) -> &'static str {
        "ScrollUp"
    }
}

/// Scroll down one page (PageDown, Ctrl+F)
pub struct PageDownCommand;

impl Command for PageDownCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.list_visible() && (event.code == KeyCode::PageDown || is_ctrl_char(event, 'f'))
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::ScrollRequested {
            direction: ScrollDirection::Down,
            amount: ScrollAmount::Page,
        }])
    }

    fn name(&self) -> &'static str {
        "PageDown"
    }
}

/// Scroll up one page (PageUp, Ctrl+B)
pub struct PageUpCommand;

impl Command for PageUpCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.list_visible() && (event.code == KeyCode::PageUp || is_ctrl_char(event, 'b'))
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::ScrollRequested {
            direction: ScrollDirection::Up,
            amount: ScrollAmount::Page,
        }])
    }

    fn name(&self) -> &'static str {
        "PageUp"
    }
}

/// Jump to the first card (g, Home)
pub struct ScrollToTopCommand;

impl Command for ScrollToTopCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.list_visible() && (is_plain_char(event, 'g') || event.code == KeyCode::Home)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::ScrollToTopRequested])
    }

    fn name(&self) -> &'static str {
        "ScrollToTop"
    }
}

/// Jump to the last page (G, End)
pub struct ScrollToBottomCommand;

impl Command for ScrollToBottomCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.list_visible() && (is_plain_char(event, 'G') || event.code == KeyCode::End)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::ScrollToBottomRequested])
    }

    fn name(&self) -> &'static str {
        "ScrollToBottom"
    }
}
