use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, InputMode};

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl-C 任何时候都退出
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // 帮助面板
    if app.show_help {
        handle_help_key(app, key);
        return;
    }

    match app.input_mode {
        InputMode::Editing => handle_input_key(app, key),
        InputMode::Normal => handle_normal_key(app, key),
    }
}

/// 处理列表导航模式的键盘事件
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),

        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // 切换完成状态
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),

        // 删除
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => app.delete_selected(),

        // 新建任务
        KeyCode::Char('n') | KeyCode::Char('i') | KeyCode::Char('a') => app.start_editing(),

        // 刷新
        KeyCode::Char('r') | KeyCode::Char('R') => app.refresh(),

        // 关闭错误提示
        KeyCode::Esc => app.dismiss_error(),

        // 主题
        KeyCode::Char('t') | KeyCode::Char('T') => app.cycle_theme(),

        // 帮助
        KeyCode::Char('?') => app.show_help = true,

        _ => {}
    }
}

/// 处理输入模式的键盘事件
fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.stop_editing(),
        KeyCode::Enter => app.submit_draft(),
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Char(c) => app.input_char(c),
        _ => {}
    }
}

/// 帮助面板：任意关闭键返回
fn handle_help_key(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter
    ) {
        app.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{Call, Op};
    use crate::app::tests::{app_with, task, WAIT};
    use crate::controller::{ADD_FAILED, EMPTY_TITLE};
    use crate::model::{NewTask, TaskId};

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_space_toggles_selected() {
        let (fake, mut app) = app_with(vec![task(1, "a", false), task(2, "b", false)]);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char(' '));
        assert!(app.controller.settle(WAIT));

        assert!(fake.calls().contains(&Call::Toggle(TaskId::from(2))));
        assert!(app.controller.tasks()[1].completed);
        assert_eq!(app.controller.stats().pending, 1);
    }

    #[test]
    fn test_d_deletes_selected() {
        let (fake, mut app) = app_with(vec![task(1, "a", false)]);
        press(&mut app, KeyCode::Char('d'));
        assert!(app.controller.settle(WAIT));

        assert!(fake.calls().contains(&Call::Delete(TaskId::from(1))));
        assert!(app.controller.tasks().is_empty());
    }

    #[test]
    fn test_input_mode_creates_task() {
        let (fake, mut app) = app_with(vec![]);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Editing);

        // 输入模式下 q / d 只是普通字符
        type_str(&mut app, "Read docs");
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "s!");
        press(&mut app, KeyCode::Enter);
        assert!(app.controller.settle(WAIT));

        assert!(fake
            .calls()
            .contains(&Call::Create(NewTask::new("Read docs!"))));
        assert!(app.controller.state().draft_title.is_empty());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_blank_submit_shows_validation_error() {
        let (fake, mut app) = app_with(vec![]);
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.controller.state().last_error.as_deref(), Some(EMPTY_TITLE));
        assert_eq!(fake.calls(), vec![Call::List]);

        // Esc 先退出输入模式，再关闭错误提示
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.controller.state().last_error.is_some());
        press(&mut app, KeyCode::Esc);
        assert!(app.controller.state().last_error.is_none());
    }

    #[test]
    fn test_failed_create_surfaces_message() {
        let (fake, mut app) = app_with(vec![]);
        fake.fail(Op::Create);
        press(&mut app, KeyCode::Char('n'));
        type_str(&mut app, "x");
        press(&mut app, KeyCode::Enter);
        assert!(app.controller.settle(WAIT));

        assert_eq!(app.controller.state().last_error.as_deref(), Some(ADD_FAILED));
        assert!(!app.controller.state().is_submitting);
    }

    #[test]
    fn test_refresh_key_refetches() {
        let (fake, mut app) = app_with(vec![]);
        press(&mut app, KeyCode::Char('r'));
        assert!(app.controller.settle(WAIT));
        assert_eq!(fake.list_calls(), 2);
    }

    #[test]
    fn test_help_panel_swallows_keys() {
        let (fake, mut app) = app_with(vec![task(1, "a", false)]);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        press(&mut app, KeyCode::Char('d'));
        assert!(!app.controller.has_pending());

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert_eq!(fake.calls(), vec![Call::List]);
    }

    #[test]
    fn test_quit_keys() {
        let (_fake, mut app) = app_with(vec![]);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let (_fake, mut app) = app_with(vec![]);
        press(&mut app, KeyCode::Char('n'));
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
