//! # Mock I/O Implementations for Testing
//!
//! [`MockEventStream`] replays a scripted list of events.
//! [`MockRenderStream`] records every render call and keeps a small text
//! screen (ANSI styling stripped) so tests can assert on what is shown.
//! Clones of a `MockRenderStream` share the same screen.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::Event;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Replays pre-programmed events
#[derive(Debug, Default)]
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }
}

/// Recorded render command for verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    ClearScreen,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    Write(String),
    Flush,
}

#[derive(Debug)]
struct MockScreen {
    commands: Vec<RenderCommand>,
    rows: Vec<Vec<char>>,
    cursor: (usize, usize),
    size: TerminalSize,
    cursor_visible: bool,
    raw_mode: bool,
    alternate_screen: bool,
}

impl MockScreen {
    fn row_mut(&mut self, row: usize) -> &mut Vec<char> {
        if self.rows.len() <= row {
            self.rows.resize(row + 1, Vec::new());
        }
        &mut self.rows[row]
    }

    fn put_char(&mut self, ch: char) {
        let (col, row) = self.cursor;
        let line = self.row_mut(row);
        if line.len() <= col {
            line.resize(col + 1, ' ');
        }
        line[col] = ch;
        self.cursor.0 += 1;
    }

    fn clear_to_end_of_line(&mut self) {
        let (col, row) = self.cursor;
        self.row_mut(row).truncate(col);
    }

    /// Interpret text with CSI sequences; only "erase to end of line" changes
    /// the screen, other sequences (colors, attributes) are dropped.
    fn write_text(&mut self, text: &str) {
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\x1b' => {
                    if chars.peek() != Some(&'[') {
                        continue;
                    }
                    chars.next();
                    for code in chars.by_ref() {
                        if ('@'..='~').contains(&code) {
                            if code == 'K' {
                                self.clear_to_end_of_line();
                            }
                            break;
                        }
                    }
                }
                '\r' => self.cursor.0 = 0,
                '\n' => {
                    self.cursor.0 = 0;
                    self.cursor.1 += 1;
                }
                _ => self.put_char(ch),
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct MockRenderStream {
    screen: Arc<Mutex<MockScreen>>,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            screen: Arc::new(Mutex::new(MockScreen {
                commands: Vec::new(),
                rows: Vec::new(),
                cursor: (0, 0),
                size,
                cursor_visible: true,
                raw_mode: false,
                alternate_screen: false,
            })),
        }
    }

    fn screen(&self) -> MutexGuard<'_, MockScreen> {
        // A poisoned lock only happens after a test already panicked
        self.screen.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, command: RenderCommand) {
        self.screen().commands.push(command);
    }

    pub fn commands(&self) -> Vec<RenderCommand> {
        self.screen().commands.clone()
    }

    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.screen().commands.contains(command)
    }

    pub fn clear_commands(&self) {
        self.screen().commands.clear();
    }

    /// Text of one screen row without trailing blanks
    pub fn row_text(&self, row: usize) -> String {
        self.screen()
            .rows
            .get(row)
            .map(|line| line.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    /// The whole screen, one line per row
    pub fn screen_text(&self) -> String {
        let rows = self.screen().rows.len();
        (0..rows)
            .map(|row| self.row_text(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn cursor_visible(&self) -> bool {
        self.screen().cursor_visible
    }

    pub fn raw_mode(&self) -> bool {
        self.screen().raw_mode
    }

    pub fn alternate_screen(&self) -> bool {
        self.screen().alternate_screen
    }

    /// Pretend the terminal was resized
    pub fn set_size(&self, size: TerminalSize) {
        self.screen().size = size;
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf).into_owned();
        let mut screen = self.screen();
        screen.write_text(&text);
        screen.commands.push(RenderCommand::Write(text));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        let mut screen = self.screen();
        screen.rows.clear();
        screen.commands.push(RenderCommand::ClearScreen);
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        let mut screen = self.screen();
        screen.cursor = (usize::from(x), usize::from(y));
        screen.commands.push(RenderCommand::MoveCursor(x, y));
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        let mut screen = self.screen();
        screen.cursor_visible = false;
        screen.commands.push(RenderCommand::HideCursor);
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        let mut screen = self.screen();
        screen.cursor_visible = true;
        screen.commands.push(RenderCommand::ShowCursor);
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.screen().size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        let mut screen = self.screen();
        screen.alternate_screen = true;
        screen.commands.push(RenderCommand::EnterAlternateScreen);
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        let mut screen = self.screen();
        screen.alternate_screen = false;
        screen.commands.push(RenderCommand::LeaveAlternateScreen);
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        let mut screen = self.screen();
        screen.raw_mode = true;
        screen.commands.push(RenderCommand::EnableRawMode);
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        let mut screen = self.screen();
        screen.raw_mode = false;
        screen.commands.push(RenderCommand::DisableRawMode);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn mock_event_stream_should_provide_events_in_order() {
        let mut stream = MockEventStream::new(vec![
            Event::Key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE)),
            Event::Resize(100, 30),
        ]);

        assert!(stream.poll(Duration::ZERO).unwrap());
        assert!(matches!(stream.read().unwrap(), Event::Key(k) if k.code == KeyCode::Char('f')));
        assert!(matches!(stream.read().unwrap(), Event::Resize(100, 30)));
        assert!(!stream.poll(Duration::ZERO).unwrap());
        assert!(stream.read().is_err());
    }

    #[test]
    fn mock_render_stream_should_record_commands() {
        let mut stream = MockRenderStream::new();

        stream.clear_screen().unwrap();
        stream.move_cursor(10, 20).unwrap();
        stream.hide_cursor().unwrap();
        stream.write_all(b"Hello").unwrap();
        stream.flush().unwrap();

        assert_eq!(
            stream.commands(),
            vec![
                RenderCommand::ClearScreen,
                RenderCommand::MoveCursor(10, 20),
                RenderCommand::HideCursor,
                RenderCommand::Write("Hello".to_string()),
                RenderCommand::Flush,
            ]
        );
        assert!(!stream.cursor_visible());
    }

    #[test]
    fn mock_screen_should_place_text_and_strip_styles() {
        let mut stream = MockRenderStream::new();

        stream.move_cursor(2, 1).unwrap();
        stream.write_all(b"\x1b[1mRick\x1b[0m Sanchez").unwrap();

        assert_eq!(stream.row_text(0), "");
        assert_eq!(stream.row_text(1), "  Rick Sanchez");
    }

    #[test]
    fn mock_screen_should_erase_to_end_of_line() {
        let mut stream = MockRenderStream::new();
        stream.write_all(b"Loading characters").unwrap();

        stream.move_cursor(0, 0).unwrap();
        stream.write_all(b"Done\x1b[K").unwrap();

        assert_eq!(stream.row_text(0), "Done");
    }

    #[test]
    fn clones_should_share_screen_state() {
        let stream = MockRenderStream::with_size((120, 40));
        let mut writer = stream.clone();

        writer.enable_raw_mode().unwrap();
        writer.enter_alternate_screen().unwrap();
        writer.write_all(b"shared").unwrap();

        assert!(stream.raw_mode());
        assert!(stream.alternate_screen());
        assert_eq!(stream.get_size().unwrap(), (120, 40));
        assert_eq!(stream.screen_text(), "shared");
    }
}
