use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// 选择 spinner 帧（基于时间，每 100ms 切换）
pub fn spinner_frame() -> char {
    let tick = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        / 100;
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

/// 计算底部居中的 Toast 区域
fn toast_area(area: Rect, text: &str) -> Rect {
    let width = (text.chars().count() + 6).min(area.width.saturating_sub(4) as usize) as u16;
    let height = 3u16.min(area.height);
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height + 3);
    Rect::new(x, y, width, height)
}

/// 在屏幕底部居中显示 Toast 消息
pub fn render(frame: &mut Frame, message: &str, colors: &ThemeColors) {
    let area = toast_area(frame.area(), message);
    render_box(frame, area, message, colors);
}

/// 在屏幕底部居中显示 Loading Toast（带 spinner 动画）
pub fn render_loading(frame: &mut Frame, message: &str, colors: &ThemeColors) {
    let display = format!("{} {}", spinner_frame(), message);
    let area = toast_area(frame.area(), &display);
    render_box(frame, area, &display, colors);
}

fn render_box(frame: &mut Frame, area: Rect, text: &str, colors: &ThemeColors) {
    // 清除背景
    frame.render_widget(Clear, area);

    let toast = Paragraph::new(text)
        .style(
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.highlight))
                .style(Style::default().bg(colors.bg)),
        );

    frame.render_widget(toast, area);
}
