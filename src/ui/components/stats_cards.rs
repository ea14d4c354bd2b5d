//! 统计卡片：Total / Completed / Pending

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::TaskStats;
use crate::theme::ThemeColors;

/// 卡片高度（含边框）
pub const STATS_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, stats: TaskStats, colors: &ThemeColors) {
    let [total_area, done_area, pending_area] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(area);

    render_card(frame, total_area, "Total Tasks", stats.total, colors.stat_total, colors);
    render_card(frame, done_area, "Completed", stats.completed, colors.status_done, colors);
    render_card(frame, pending_area, "Pending", stats.pending, colors.status_pending, colors);
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    label: &'static str,
    value: usize,
    accent: Color,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let line = Line::from(vec![
        Span::styled(
            value.to_string(),
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", label), Style::default().fg(colors.muted)),
    ]);

    let card = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(card, area);
}
