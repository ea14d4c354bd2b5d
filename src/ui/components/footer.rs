use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::InputMode;
use crate::theme::ThemeColors;

/// 渲染底部快捷键提示栏
pub fn render(
    frame: &mut Frame,
    area: Rect,
    mode: InputMode,
    has_items: bool,
    colors: &ThemeColors,
) {
    let shortcuts = get_shortcuts(mode, has_items);

    let mut spans = vec![Span::raw("  ")];

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn get_shortcuts(mode: InputMode, has_items: bool) -> Vec<(&'static str, &'static str)> {
    match mode {
        InputMode::Editing => vec![("Enter", "add"), ("Esc", "done")],
        InputMode::Normal if has_items => vec![
            ("n", "new"),
            ("Space", "toggle"),
            ("d", "delete"),
            ("r", "refresh"),
            ("?", "help"),
            ("q", "quit"),
        ],
        InputMode::Normal => vec![("n", "new"), ("r", "refresh"), ("?", "help"), ("q", "quit")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts_depend_on_mode() {
        let keys: Vec<_> = get_shortcuts(InputMode::Normal, true)
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert!(keys.contains(&"Space"));
        assert!(keys.contains(&"d"));

        let keys: Vec<_> = get_shortcuts(InputMode::Normal, false)
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert!(!keys.contains(&"d"));

        assert_eq!(get_shortcuts(InputMode::Editing, true)[0], ("Enter", "add"));
    }
}
