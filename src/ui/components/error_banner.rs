//! 可关闭的错误提示条

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 错误条高度（含边框）
pub const ERROR_BANNER_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, message: &str, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(colors.error).add_modifier(Modifier::BOLD));

    let left = Span::styled(
        format!(" ✗ {}", message),
        Style::default().fg(colors.error),
    );
    let right = Span::styled("Esc dismiss ", Style::default().fg(colors.muted));

    let inner_width = area.width.saturating_sub(1) as usize;
    let padding_len = inner_width.saturating_sub(left.width() + right.width());

    let lines = vec![
        Line::from(""),
        Line::from(vec![left, Span::raw(" ".repeat(padding_len)), right]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
