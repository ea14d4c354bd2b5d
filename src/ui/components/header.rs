use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use chrono::{DateTime, Local};

use crate::theme::ThemeColors;

/// Header 总高度：1 (上边框) + 1 (标题) + 1 (副标题) + 1 (后端信息)
pub const HEADER_HEIGHT: u16 = 4;

/// 渲染顶部区域（标题 + 后端信息）
pub fn render(
    frame: &mut Frame,
    area: Rect,
    api_url: &str,
    last_synced: Option<DateTime<Local>>,
    colors: &ThemeColors,
) {
    // 外框
    let block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, subtitle_area, info_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    let title = Line::from(vec![
        Span::styled(" ☰ ", Style::default().fg(colors.logo)),
        Span::styled(
            "Todo List",
            Style::default()
                .fg(colors.logo)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), title_area);

    let subtitle = Span::styled(
        "   Organize your life, one task at a time",
        Style::default().fg(colors.muted),
    );
    frame.render_widget(Paragraph::new(subtitle), subtitle_area);

    render_sync_info(frame, info_area, api_url, last_synced, colors);
}

fn render_sync_info(
    frame: &mut Frame,
    area: Rect,
    api_url: &str,
    last_synced: Option<DateTime<Local>>,
    colors: &ThemeColors,
) {
    let left = Span::styled(format!("   {}", api_url), Style::default().fg(colors.text));

    let synced = match last_synced {
        Some(at) => format!("synced {} ", at.format("%H:%M:%S")),
        None => "not synced ".to_string(),
    };
    let right = Span::styled(synced, Style::default().fg(colors.muted));

    // 计算中间填充空格
    let padding_len = (area.width as usize).saturating_sub(left.width() + right.width());
    let line = Line::from(vec![left, Span::raw(" ".repeat(padding_len)), right]);

    frame.render_widget(Paragraph::new(line), area);
}
