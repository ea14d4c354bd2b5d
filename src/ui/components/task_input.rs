//! 新任务输入框

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

use super::toast::spinner_frame;

/// 输入框高度（含边框）
pub const TASK_INPUT_HEIGHT: u16 = 3;

const PLACEHOLDER: &str = "What needs to be done?";

/// 渲染输入框
pub fn render(
    frame: &mut Frame,
    area: Rect,
    draft: &str,
    editing: bool,
    submitting: bool,
    colors: &ThemeColors,
) {
    let border_color = if editing && !submitting {
        colors.highlight
    } else {
        colors.border
    };

    // 标题里放按钮文字：提交中显示 spinner
    let action = if submitting {
        format!(" {} Adding... ", spinner_frame())
    } else {
        " + Add Task ".to_string()
    };

    let block = Block::default()
        .title(action)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let mut spans = vec![Span::raw(" ")];
    if draft.is_empty() && !editing {
        spans.push(Span::styled(PLACEHOLDER, Style::default().fg(colors.muted)));
    } else {
        let text_style = if submitting {
            Style::default().fg(colors.muted)
        } else {
            Style::default().fg(colors.text)
        };
        spans.push(Span::styled(draft, text_style));
        if editing && !submitting {
            // 光标
            spans.push(Span::styled(
                "█",
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        if draft.is_empty() {
            spans.push(Span::styled(
                format!(" {}", PLACEHOLDER),
                Style::default().fg(colors.muted),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
