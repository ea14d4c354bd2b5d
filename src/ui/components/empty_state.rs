use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

use super::toast::spinner_frame;

/// 列表为空时显示的内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyKind {
    /// 首次加载中
    Loading,
    /// 没有任务
    NoTasks,
}

/// 渲染空状态（加载中 / 暂无任务）
pub fn render(frame: &mut Frame, area: Rect, kind: EmptyKind, colors: &ThemeColors) {
    let block = Block::default()
        .title(" Your Tasks ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let lines = match kind {
        EmptyKind::Loading => vec![Line::from(vec![
            Span::styled(
                format!("{} ", spinner_frame()),
                Style::default().fg(colors.highlight),
            ),
            Span::styled("Loading tasks...", Style::default().fg(colors.muted)),
        ])],
        EmptyKind::NoTasks => vec![
            Line::from(Span::styled(
                "No tasks yet",
                Style::default()
                    .fg(colors.text)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(colors.muted)),
                Span::styled(
                    " n ",
                    Style::default()
                        .fg(colors.highlight)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "to add your first task to get started!",
                    Style::default().fg(colors.muted),
                ),
            ]),
        ],
    };

    // 垂直居中
    let height = lines.len() as u16;
    let y_offset = inner_area.height.saturating_sub(height) / 2;
    let centered_area = Rect {
        x: inner_area.x,
        y: inner_area.y + y_offset,
        width: inner_area.width,
        height: height.min(inner_area.height),
    };

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, centered_area);
}
