//! AST pane: the indented tree dump from [`printer::tree_lines`], or the
//! parse error when there is no tree to show.
//!
//! [`printer::tree_lines`]: crate::parser::printer::tree_lines

use super::{clamp_scroll, pane_block};
use crate::parser::ParseError;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Style the node label (text before the first ':') apart from its payload.
fn tree_line(text: &str) -> Line<'_> {
    let indent_len = text.len() - text.trim_start().len();
    let (indent, rest) = text.split_at(indent_len);
    let (label, payload) = match rest.find(':') {
        Some(pos) => rest.split_at(pos),
        None => (rest, ""),
    };

    Line::from(vec![
        Span::styled(indent, Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(label, Style::default().fg(DEFAULT_THEME.node_name)),
        Span::styled(payload, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

/// Render the AST pane
pub fn render_ast_pane(
    frame: &mut Frame,
    area: Rect,
    tree: &[String],
    error: Option<&ParseError>,
    is_focused: bool,
    scroll: &mut usize,
) {
    let block = pane_block(" AST ", is_focused);

    if let Some(err) = error {
        *scroll = 0;
        let lines = vec![
            Line::from(Span::styled(
                "No AST: parsing stopped at the first error",
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                err.to_string(),
                Style::default().fg(DEFAULT_THEME.fg),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = clamp_scroll(scroll, tree.len(), area.height);
    let visible_lines: Vec<Line> = tree
        .iter()
        .skip(*scroll)
        .take(visible_height)
        .map(|text| tree_line(text))
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
