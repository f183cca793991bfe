//! Source code pane rendering with token-based highlighting
//!
//! Colours come from the lexer itself: each token is styled by its
//! [`TokenCategory`], so what the pane shows is exactly what the parser saw.
//! Unknown characters are drawn in the error colour, and when parsing failed
//! the offending line is marked and the offending token highlighted.

use super::{clamp_scroll, pane_block};
use crate::parser::ast::SourceLocation;
use crate::parser::lexer::{Token, TokenCategory};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn token_style(category: TokenCategory) -> Style {
    match category {
        TokenCategory::Keyword => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        TokenCategory::DataType => Style::default().fg(DEFAULT_THEME.type_name),
        TokenCategory::Literal => Style::default().fg(DEFAULT_THEME.number),
        TokenCategory::Punctuation => Style::default().fg(DEFAULT_THEME.primary),
        TokenCategory::Operator | TokenCategory::Identifier => {
            Style::default().fg(DEFAULT_THEME.fg)
        }
        TokenCategory::Unknown => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::UNDERLINED),
    }
}

/// Split one source line into styled spans using the tokens that start on it.
///
/// `tokens` must be sorted by column, which is the order the lexer emits them.
fn highlight_line(line: &str, tokens: &[&Token], error_column: Option<usize>) -> Line<'static> {
    let chars: Vec<char> = line.chars().collect();
    let mut spans = Vec::new();
    let mut cursor = 0; // 0-based char index

    for token in tokens {
        let start = token.location.column.saturating_sub(1).min(chars.len());
        let end = (start + token.width()).min(chars.len());
        if start > cursor {
            spans.push(Span::raw(chars[cursor..start].iter().collect::<String>()));
        }

        let mut style = token_style(token.category());
        if error_column == Some(token.location.column) {
            style = style
                .bg(DEFAULT_THEME.error)
                .fg(ratatui::style::Color::Black);
        }
        spans.push(Span::styled(chars[start..end].iter().collect::<String>(), style));
        cursor = end;
    }

    if cursor < chars.len() {
        spans.push(Span::raw(chars[cursor..].iter().collect::<String>()));
    }

    Line::from(spans)
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    tokens: &[Token],
    error_location: Option<SourceLocation>,
    is_focused: bool,
    scroll: &mut usize,
) {
    let block = pane_block(" Source ", is_focused);

    let lines: Vec<&str> = source_code.lines().collect();
    let visible_height = clamp_scroll(scroll, lines.len(), area.height);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let on_line: Vec<&Token> = tokens
                .iter()
                .filter(|t| t.location.line == line_num)
                .collect();

            let error_column = error_location
                .filter(|loc| loc.line == line_num)
                .map(|loc| loc.column);

            let num_style = if error_column.is_some() {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut spans = vec![Span::styled(format!("{:4} ", line_num), num_style)];
            spans.extend(highlight_line(line, &on_line, error_column).spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
