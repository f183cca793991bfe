//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source code display, coloured by token category, with the
//!   parse error line highlighted
//! - [`ast`]: Indented AST dump, or the parse error when parsing failed
//! - [`status`]: Status bar with file name, parse outcome and keybindings
//!
//! Each pane module exports a primary `render_*` function. Scroll offsets are
//! owned by [`App`](crate::ui::App) and clamped by the pane while rendering.

pub mod ast;
pub mod source;
pub mod status;

pub use ast::render_ast_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block whose border colour follows focus
fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp `scroll` so the last page stays filled; returns the visible height.
fn clamp_scroll(scroll: &mut usize, total_lines: usize, area_height: u16) -> usize {
    let visible_height = area_height.saturating_sub(2).max(1) as usize; // borders
    let max_scroll = total_lines.saturating_sub(visible_height);
    *scroll = (*scroll).min(max_scroll);
    visible_height
}
