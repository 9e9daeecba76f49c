//! # Core ViewModel Structure
//!
//! Couples the list controller with the scroll position and terminal size,
//! and records which parts of the screen each change invalidates.

use super::character_list::{CharacterListController, FetchOutcome};
use super::viewport::{cards_per_page, ListViewport};
use crate::app::events::ViewEvent;
use crate::app::models::{CharacterRecord, ListView};
use crate::config::AppConfig;

/// Direction of a scroll request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Size of a scroll step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAmount {
    Card,
    Page,
}

pub struct ViewModel {
    list: CharacterListController,
    viewport: ListViewport,
    terminal_size: (u16, u16),
    name_width: usize,
    profile_name: String,
    pending_view_events: Vec<ViewEvent>,
}

impl ViewModel {
    pub fn new(list: CharacterListController, config: &AppConfig) -> Self {
        Self {
            list,
            viewport: ListViewport::new(),
            terminal_size: (80, 24),
            name_width: config.name_width,
            profile_name: config.profile_name.clone(),
            pending_view_events: Vec::new(),
        }
    }

    pub fn list(&self) -> &CharacterListController {
        &self.list
    }

    pub fn view(&self) -> ListView<'_> {
        self.list.view()
    }

    pub fn name_width(&self) -> usize {
        self.name_width
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn scroll_offset(&self) -> usize {
        self.viewport.offset()
    }

    pub fn cards_per_page(&self) -> usize {
        cards_per_page(self.terminal_size.1)
    }

    /// Cards currently inside the viewport
    pub fn visible_characters(&self) -> &[CharacterRecord] {
        let characters = self.list.characters();
        let range = self
            .viewport
            .visible_range(characters.len(), self.cards_per_page());
        &characters[range]
    }

    /// Start (or restart) fetching the page
    pub fn load(&mut self) {
        self.list.load();
        self.emit_view_event([
            ViewEvent::ListRedrawRequired,
            ViewEvent::StatusBarUpdateRequired,
        ]);
    }

    pub fn toggle_filter(&mut self) {
        self.list.toggle_filter();
        self.clamp_viewport();
        self.emit_view_event([
            ViewEvent::HeaderRedrawRequired,
            ViewEvent::ListRedrawRequired,
            ViewEvent::StatusBarUpdateRequired,
        ]);
    }

    /// Apply a finished fetch if one is waiting
    pub fn poll_fetch(&mut self) -> Option<FetchOutcome> {
        let outcome = self.list.poll_completion()?;
        self.after_fetch(&outcome);
        Some(outcome)
    }

    /// Wait for the outstanding fetch to land
    pub async fn wait_for_fetch(&mut self) -> Option<FetchOutcome> {
        let outcome = self.list.settle().await?;
        self.after_fetch(&outcome);
        Some(outcome)
    }

    fn after_fetch(&mut self, outcome: &FetchOutcome) {
        match outcome {
            FetchOutcome::Loaded { .. } => {
                self.viewport.to_top();
            }
            FetchOutcome::Failed => {
                self.clamp_viewport();
            }
            FetchOutcome::Superseded { .. } => return,
        }
        self.emit_view_event([
            ViewEvent::ListRedrawRequired,
            ViewEvent::StatusBarUpdateRequired,
        ]);
    }

    pub fn scroll(&mut self, direction: ScrollDirection, amount: ScrollAmount) {
        let step = match amount {
            ScrollAmount::Card => 1,
            ScrollAmount::Page => self.cards_per_page(),
        };
        let len = self.list.characters().len();
        let page = self.cards_per_page();

        let changed = match direction {
            ScrollDirection::Down => self.viewport.scroll_down(step, len, page),
            ScrollDirection::Up => self.viewport.scroll_up(step),
        };
        self.emit_scroll_if(changed);
    }

    pub fn scroll_to_top(&mut self) {
        let changed = self.viewport.to_top();
        self.emit_scroll_if(changed);
    }

    pub fn scroll_to_bottom(&mut self) {
        let len = self.list.characters().len();
        let page = self.cards_per_page();
        let changed = self.viewport.to_bottom(len, page);
        self.emit_scroll_if(changed);
    }

    fn emit_scroll_if(&mut self, changed: bool) {
        if changed {
            self.emit_view_event([
                ViewEvent::ListRedrawRequired,
                ViewEvent::StatusBarUpdateRequired,
            ]);
        }
    }

    fn clamp_viewport(&mut self) {
        let len = self.list.characters().len();
        let page = self.cards_per_page();
        self.viewport.clamp(len, page);
    }

    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.clamp_viewport();
        tracing::debug!("Terminal size updated to {}x{}", width, height);
        self.emit_view_event([ViewEvent::FullRedrawRequired]);
    }

    /// Queue view events, skipping ones already covered
    pub fn emit_view_event(&mut self, events: impl IntoIterator<Item = ViewEvent>) {
        for event in events {
            if self
                .pending_view_events
                .iter()
                .any(|pending| pending.covers(&event))
            {
                continue;
            }
            if event == ViewEvent::FullRedrawRequired {
                self.pending_view_events.clear();
            }
            self.pending_view_events.push(event);
        }
    }

    /// Hand the queued view events to the renderer
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::character::fixtures::{character, rick, summer};
    use crate::app::services::{CharacterSource, ScriptedCharacterSource};
    use std::sync::Arc;

    fn view_model_with(page: Vec<CharacterRecord>) -> ViewModel {
        let source: Arc<dyn CharacterSource> = Arc::new(ScriptedCharacterSource::always(page));
        let config = AppConfig::defaults("default", "/tmp/none");
        ViewModel::new(CharacterListController::new(source), &config)
    }

    fn crowd(count: i64) -> Vec<CharacterRecord> {
        (1..=count)
            .map(|id| character(id, &format!("Citizen {id}"), "Alive", "Male"))
            .collect()
    }

    #[tokio::test]
    async fn load_should_request_list_and_status_redraw() {
        let mut vm = view_model_with(vec![rick(), summer()]);

        vm.load();
        assert_eq!(
            vm.collect_pending_view_events(),
            vec![
                ViewEvent::ListRedrawRequired,
                ViewEvent::StatusBarUpdateRequired
            ]
        );

        assert_eq!(vm.wait_for_fetch().await, Some(FetchOutcome::Loaded { count: 2 }));
        assert_eq!(vm.collect_pending_view_events().len(), 2);
        assert!(vm.collect_pending_view_events().is_empty());
    }

    #[tokio::test]
    async fn toggle_filter_should_redraw_header() {
        let mut vm = view_model_with(vec![rick(), summer()]);
        vm.load();
        vm.wait_for_fetch().await;
        vm.collect_pending_view_events();

        vm.toggle_filter();

        assert!(vm
            .collect_pending_view_events()
            .contains(&ViewEvent::HeaderRedrawRequired));
        assert_eq!(vm.visible_characters(), &[rick()]);
    }

    #[tokio::test]
    async fn scrolling_should_move_visible_window() {
        let mut vm = view_model_with(crowd(20));
        vm.update_terminal_size(80, 24);
        vm.load();
        vm.wait_for_fetch().await;

        assert_eq!(vm.cards_per_page(), 6);
        assert_eq!(vm.visible_characters()[0].id, 1);

        vm.scroll(ScrollDirection::Down, ScrollAmount::Card);
        assert_eq!(vm.visible_characters()[0].id, 2);

        vm.scroll(ScrollDirection::Down, ScrollAmount::Page);
        assert_eq!(vm.visible_characters()[0].id, 8);

        vm.scroll_to_bottom();
        assert_eq!(vm.scroll_offset(), 14);
        assert_eq!(vm.visible_characters().len(), 6);

        vm.scroll(ScrollDirection::Up, ScrollAmount::Page);
        assert_eq!(vm.scroll_offset(), 8);

        vm.scroll_to_top();
        assert_eq!(vm.scroll_offset(), 0);
    }

    #[tokio::test]
    async fn scroll_without_movement_should_not_emit_events() {
        let mut vm = view_model_with(vec![rick()]);
        vm.load();
        vm.wait_for_fetch().await;
        vm.collect_pending_view_events();

        vm.scroll(ScrollDirection::Up, ScrollAmount::Card);
        vm.scroll(ScrollDirection::Down, ScrollAmount::Card);

        assert!(vm.collect_pending_view_events().is_empty());
    }

    #[tokio::test]
    async fn filter_should_clamp_scroll_position() {
        let mut page = crowd(20);
        page.push(character(99, "Beth Smith", "Alive", "Female"));
        let mut vm = view_model_with(page);
        vm.load();
        vm.wait_for_fetch().await;
        vm.scroll_to_bottom();

        vm.toggle_filter();

        assert_eq!(vm.view().characters.len(), 20);
        assert_eq!(vm.scroll_offset(), 14);
    }

    #[tokio::test]
    async fn reload_should_return_to_top() {
        let mut vm = view_model_with(crowd(20));
        vm.load();
        vm.wait_for_fetch().await;
        vm.scroll_to_bottom();

        vm.load();
        vm.wait_for_fetch().await;

        assert_eq!(vm.scroll_offset(), 0);
    }

    #[test]
    fn full_redraw_should_absorb_other_events() {
        let mut vm = view_model_with(Vec::new());

        vm.emit_view_event([ViewEvent::ListRedrawRequired]);
        vm.update_terminal_size(100, 40);
        vm.emit_view_event([ViewEvent::StatusBarUpdateRequired]);

        assert_eq!(
            vm.collect_pending_view_events(),
            vec![ViewEvent::FullRedrawRequired]
        );
        assert_eq!(vm.terminal_size(), (100, 40));
    }
}
