//! # Terminal Renderer
//!
//! Draws the character list screen:
//!
//! ```text
//! row 0        Rick & Morty Characters List
//! row 1        [ Filter Male & Alive ]
//! row 2
//! row 3..      cards (3 rows each) or the loading indicator
//! last row     status bar
//! ```

use super::ansi_escape_codes::{
    BG_256_DARK_GRAY, BG_WHITE, BOLD, CLEAR_TO_EOL, DIM, FG_BLACK, FG_GREEN, FG_RED, FG_WHITE,
    RESET, REVERSE,
};
use super::HEADER_TEXT;
use crate::app::events::ViewEvent;
use crate::app::io::RenderStream;
use crate::app::models::{CharacterRecord, STATUS_ALIVE};
use crate::app::utils::truncate_name;
use crate::app::view_models::viewport::{CARD_ROWS, HEADER_ROWS, STATUS_ROWS};
use crate::app::view_models::ViewModel;
use anyhow::Result;
use std::io::Write;

const LOADING_TEXT: &str = "Loading...";
const EMPTY_TEXT: &str = "No characters to show";

/// Trait for rendering views
pub trait ViewRenderer {
    /// Take over the terminal
    fn initialize(&mut self) -> Result<()>;

    fn render_full(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Title and filter button
    fn render_header(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Cards or loading indicator
    fn render_list(&mut self, view_model: &ViewModel) -> Result<()>;

    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()>;

    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &ViewModel) -> Result<()>;

    /// Give the terminal back
    fn cleanup(&mut self) -> Result<()>;
}

/// Character count of `text`
fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Cut `text` to at most `width` characters
fn fit(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Left padding that centers `text` in `width`
fn center_padding(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text_width(text)) / 2)
}

fn status_color(status: &str) -> &'static str {
    match status {
        STATUS_ALIVE => FG_GREEN,
        "Dead" => FG_RED,
        _ => DIM,
    }
}

pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: (u16, u16),
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            terminal_size,
        })
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    fn width(&self) -> usize {
        usize::from(self.terminal_size.0)
    }

    fn status_row(&self) -> u16 {
        self.terminal_size.1.saturating_sub(STATUS_ROWS)
    }

    /// Replace the content of `row` with already-styled text
    fn write_row(&mut self, row: u16, styled: &str) -> Result<()> {
        self.render_stream.move_cursor(0, row)?;
        write!(self.render_stream, "{styled}{RESET}{CLEAR_TO_EOL}")?;
        Ok(())
    }

    fn clear_row(&mut self, row: u16) -> Result<()> {
        self.write_row(row, "")
    }

    /// First line of a card: name on the left, "status - gender" on the right
    fn card_title_line(&self, character: &CharacterRecord, name_width: usize) -> String {
        let width = self.width();
        let name = truncate_name(&character.name, name_width);
        let details = format!("{} - {}", character.status, character.gender);

        let left = fit(&format!(" {name}"), width);
        let room = width.saturating_sub(text_width(&left));
        if room <= text_width(&details) + 1 {
            return format!("{BOLD}{left}{RESET}");
        }

        let gap = " ".repeat(room - text_width(&details) - 1);
        format!(
            "{BOLD}{left}{RESET}{gap}{}{details}{RESET}",
            status_color(&character.status)
        )
    }

    /// Second line of a card: species, type and image location
    fn card_detail_line(&self, character: &CharacterRecord) -> String {
        let species = if character.kind.is_empty() {
            character.species.clone()
        } else {
            format!("{} ({})", character.species, character.kind)
        };
        let line = format!("   {species} · {}", character.image);
        format!("{DIM}{}", fit(&line, self.width()))
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enable_raw_mode()?;
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.hide_cursor()?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_full(&mut self, view_model: &ViewModel) -> Result<()> {
        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()?;
        self.render_header(view_model)?;
        self.render_list(view_model)?;
        self.render_status_bar(view_model)?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_header(&mut self, view_model: &ViewModel) -> Result<()> {
        let width = self.width();

        let title = fit(HEADER_TEXT, width);
        let title_line = format!("{}{BOLD}{title}", center_padding(&title, width));
        self.write_row(0, &title_line)?;

        let view = view_model.view();
        let button = fit(&format!("  {}  ", view.filter_label()), width);
        let style = if view.filter_active {
            format!("{BOLD}{BG_256_DARK_GRAY}{FG_WHITE}")
        } else {
            format!("{BOLD}{BG_WHITE}{FG_BLACK}")
        };
        let button_line = format!("{}{style}{button}", center_padding(&button, width));
        self.write_row(1, &button_line)?;

        self.clear_row(2)
    }

    fn render_list(&mut self, view_model: &ViewModel) -> Result<()> {
        let list_end = self.status_row();
        let mut row = HEADER_ROWS;
        let view = view_model.view();

        if view.loading {
            let line = format!("{}{LOADING_TEXT}", center_padding(LOADING_TEXT, self.width()));
            if row < list_end {
                self.write_row(row, &line)?;
                row += 1;
            }
        } else if view.is_empty() {
            let line = format!("{}{DIM}{EMPTY_TEXT}", center_padding(EMPTY_TEXT, self.width()));
            if row < list_end {
                self.write_row(row, &line)?;
                row += 1;
            }
        } else {
            let name_width = view_model.name_width();
            for character in view_model.visible_characters() {
                if row + CARD_ROWS > list_end + 1 {
                    break;
                }
                let title = self.card_title_line(character, name_width);
                let detail = self.card_detail_line(character);
                self.write_row(row, &title)?;
                self.write_row(row + 1, &detail)?;
                if row + 2 < list_end {
                    self.clear_row(row + 2)?;
                }
                row += CARD_ROWS;
            }
        }

        while row < list_end {
            self.clear_row(row)?;
            row += 1;
        }
        Ok(())
    }

    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()> {
        let width = self.width();
        let view = view_model.view();
        let total = view.characters.len();

        let left = if view.loading {
            format!(" {LOADING_TEXT} | profile: {}", view_model.profile_name())
        } else {
            format!(
                " {} characters | filter: {} | profile: {}",
                total,
                if view.filter_active { "on" } else { "off" },
                view_model.profile_name()
            )
        };

        let right = if view.loading || total == 0 {
            String::new()
        } else {
            let first = view_model.scroll_offset() + 1;
            let last = view_model.scroll_offset() + view_model.visible_characters().len();
            format!("{first}-{last}/{total} ")
        };

        let gap = width.saturating_sub(text_width(&left) + text_width(&right));
        let line = fit(&format!("{left}{}{right}", " ".repeat(gap)), width);
        let row = self.status_row();
        self.write_row(row, &format!("{REVERSE}{line}"))
    }

    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &ViewModel) -> Result<()> {
        match event {
            ViewEvent::FullRedrawRequired => return self.render_full(view_model),
            ViewEvent::HeaderRedrawRequired => self.render_header(view_model)?,
            ViewEvent::ListRedrawRequired => self.render_list(view_model)?,
            ViewEvent::StatusBarUpdateRequired => self.render_status_bar(view_model)?,
        }
        self.render_stream.flush()?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.render_stream.show_cursor()?;
        self.render_stream.leave_alternate_screen()?;
        self.render_stream.flush()?;
        self.render_stream.disable_raw_mode()?;
        Ok(())
    }
}
