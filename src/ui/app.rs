//! Main TUI application state and logic

use crate::parser::lexer::{tokenize, Token};
use crate::parser::printer::tree_lines;
use crate::parser::{ParseError, Parser};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Lines moved by PageUp / PageDown
const PAGE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Ast,
}

impl FocusedPane {
    /// Move focus to the other pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Ast,
            FocusedPane::Ast => FocusedPane::Source,
        }
    }
}

/// The main application state
pub struct App {
    /// Name shown in the status bar
    pub file_name: String,

    /// The source code being explored
    pub source_code: String,

    /// Token stream of `source_code`, used for highlighting
    pub tokens: Vec<Token>,

    /// Rendered tree, empty when parsing failed
    pub tree: Vec<String>,

    /// The parse error, if any
    pub error: Option<ParseError>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub ast_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Tokenize and parse `source_code` once; the explorer never re-parses.
    pub fn new(file_name: impl Into<String>, source_code: String) -> Self {
        let tokens = tokenize(&source_code);
        let (tree, error, status_message) = match Parser::new(tokens.clone()).parse_program() {
            Ok(program) => (
                tree_lines(&program),
                None,
                format!(
                    "Parsed {} tokens into {} top-level statement(s)",
                    tokens.len(),
                    program.len()
                ),
            ),
            Err(err) => {
                let message = err.to_string();
                (Vec::new(), Some(err), message)
            }
        };

        App {
            file_name: file_name.into(),
            source_code,
            tokens,
            tree,
            error,
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            ast_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        super::panes::render_source_pane(
            frame,
            columns[0],
            &self.source_code,
            &self.tokens,
            self.error.as_ref().map(|e| e.location),
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_ast_pane(
            frame,
            columns[1],
            &self.tree,
            self.error.as_ref(),
            self.focused_pane == FocusedPane::Ast,
            &mut self.ast_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.file_name,
            &self.status_message,
            self.error.is_some(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(PAGE),
            KeyCode::PageDown => self.scroll_down(PAGE),
            KeyCode::Home => *self.focused_scroll() = 0,
            // Clamped to the last page on the next render
            KeyCode::End => *self.focused_scroll() = usize::MAX,
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Ast => &mut self.ast_scroll,
        }
    }

    fn scroll_up(&mut self, lines: usize) {
        let scroll = self.focused_scroll();
        *scroll = scroll.saturating_sub(lines);
    }

    fn scroll_down(&mut self, lines: usize) {
        let scroll = self.focused_scroll();
        *scroll = scroll.saturating_add(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_new_with_valid_source() {
        let app = App::new("ok.lcc", "let x : int = 1;\nexit(x);".to_string());

        assert!(app.error.is_none());
        assert_eq!(app.tree[0], "Program");
        assert_eq!(app.tokens.len(), 12);
        assert!(app.status_message.contains("2 top-level statement(s)"));
    }

    #[test]
    fn test_new_with_parse_error() {
        let app = App::new("bad.lcc", "let x : int 5;".to_string());

        assert!(app.tree.is_empty());
        let err = app.error.as_ref().unwrap();
        assert_eq!(err.location.column, 13);
        assert_eq!(app.status_message, err.to_string());
    }

    #[test]
    fn test_keys() {
        let mut app = App::new("k.lcc", "x;".to_string());

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.source_scroll, 2);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.source_scroll, 1);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Ast);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.ast_scroll, PAGE);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.ast_scroll, 0);
        assert_eq!(app.source_scroll, 1);

        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
