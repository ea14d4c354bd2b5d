//! 任务列表页面渲染

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::{App, InputMode};

use super::components::{
    empty_state::{self, EmptyKind},
    error_banner::{self, ERROR_BANNER_HEIGHT},
    footer,
    header::{self, HEADER_HEIGHT},
    help_panel,
    stats_cards::{self, STATS_HEIGHT},
    task_input::{self, TASK_INPUT_HEIGHT},
    task_list, toast,
};

/// 渲染整个页面
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.colors;
    let state = app.controller.state();

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let error_height = if state.last_error.is_some() {
        ERROR_BANNER_HEIGHT
    } else {
        0
    };

    let [header_area, stats_area, error_area, input_area, list_area, footer_area] =
        Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(STATS_HEIGHT),
            Constraint::Length(error_height),
            Constraint::Length(TASK_INPUT_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(area);

    header::render(
        frame,
        header_area,
        &app.api_url,
        state.last_synced,
        colors,
    );

    stats_cards::render(frame, stats_area, app.controller.stats(), colors);

    if let Some(ref message) = state.last_error {
        error_banner::render(frame, error_area, message, colors);
    }

    task_input::render(
        frame,
        input_area,
        &state.draft_title,
        app.input_mode == InputMode::Editing,
        state.is_submitting,
        colors,
    );

    render_list(frame, list_area, app);

    let has_items = !state.tasks.is_empty();
    footer::render(frame, footer_area, app.input_mode, has_items, colors);

    // 已有数据时的刷新用 loading toast 提示，避免列表闪烁
    if state.is_loading && has_items {
        toast::render_loading(frame, "Syncing tasks...", colors);
    } else if let Some(ref t) = app.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, colors);
        }
    }

    // 渲染帮助面板
    if app.show_help {
        help_panel::render(frame, colors);
    }
}

fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.controller.state();
    let colors = &app.colors;

    if state.tasks.is_empty() {
        let kind = if state.is_loading {
            EmptyKind::Loading
        } else {
            EmptyKind::NoTasks
        };
        empty_state::render(frame, area, kind, colors);
    } else {
        task_list::render(frame, area, &state.tasks, app.list_state.selected(), colors);
    }
}
