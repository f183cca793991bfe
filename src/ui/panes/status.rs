//! Status bar rendering with parse outcome and keybindings

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    file_name: &str,
    message: &str,
    is_error: bool,
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let badge_bg = if is_error {
        DEFAULT_THEME.error
    } else {
        DEFAULT_THEME.success
    };

    let left_spans = vec![
        Span::styled(
            format!(" {} ", file_name),
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    let key_style = Style::default()
        .fg(DEFAULT_THEME.secondary)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(DEFAULT_THEME.comment);
    let right_spans = vec![
        Span::styled("Tab", key_style),
        Span::styled(" focus  ", text_style),
        Span::styled("↑↓", key_style),
        Span::styled(" scroll  ", text_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", text_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(left_paragraph, layout[0]);
    frame.render_widget(right_paragraph, layout[1]);
}
