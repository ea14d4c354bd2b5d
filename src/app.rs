use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::controller::TaskListController;
use crate::model::Task;
use crate::theme::{get_theme_colors, Theme, ThemeColors};

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// 输入模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// 列表导航
    Normal,
    /// 正在编辑新任务标题
    Editing,
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务列表同步
    pub controller: TaskListController,
    /// 列表选择状态
    pub list_state: ListState,
    /// 当前输入模式
    pub input_mode: InputMode,
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示帮助面板
    pub show_help: bool,
    /// 后端集合地址（显示在 header）
    pub api_url: String,
}

impl App {
    pub fn new(controller: TaskListController, theme: Theme, api_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            controller,
            list_state: ListState::default(),
            input_mode: InputMode::Normal,
            toast: None,
            theme,
            colors: get_theme_colors(theme),
            show_help: false,
            api_url: api_url.into(),
        }
    }

    /// 启动时拉取一次任务列表
    pub fn start(&mut self) {
        self.controller.fetch_tasks();
    }

    /// 处理已完成的后台请求
    pub fn poll_bg_result(&mut self) {
        if self.controller.poll() > 0 {
            self.ensure_selection();
        }
    }

    // ========== Selection ==========

    /// 当前选中的任务
    pub fn selected_task(&self) -> Option<&Task> {
        self.list_state
            .selected()
            .and_then(|i| self.controller.tasks().get(i))
    }

    /// 列表替换后修正选中项
    pub fn ensure_selection(&mut self) {
        let len = self.controller.tasks().len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            None => self.list_state.select(Some(0)),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            Some(_) => {}
        }
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.controller.tasks().len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.controller.tasks().len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    // ========== Task actions ==========

    /// 切换选中任务的完成状态
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task().map(|t| t.id.clone()) {
            self.controller.toggle_task(&id);
        }
    }

    /// 删除选中任务
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task().map(|t| t.id.clone()) {
            self.controller.delete_task(&id);
        }
    }

    /// 手动刷新（拉取进行中时忽略）
    pub fn refresh(&mut self) {
        if !self.controller.state().is_loading {
            self.controller.fetch_tasks();
        }
    }

    /// 关闭错误提示
    pub fn dismiss_error(&mut self) {
        self.controller.dismiss_error();
    }

    // ========== New task input ==========

    /// 进入输入模式
    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
    }

    /// 退出输入模式（保留草稿）
    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// 输入字符（提交中禁用）
    pub fn input_char(&mut self, c: char) {
        if !self.controller.state().is_submitting {
            self.controller.push_draft_char(c);
        }
    }

    /// 删除字符（提交中禁用）
    pub fn delete_char(&mut self) {
        if !self.controller.state().is_submitting {
            self.controller.pop_draft_char();
        }
    }

    /// 提交草稿；空标题的校验错误由 controller 写入错误提示
    pub fn submit_draft(&mut self) {
        if self.controller.state().is_submitting {
            return;
        }
        if let Err(e) = self.controller.submit_draft() {
            // 校验错误已写入 last_error，由错误提示条展示
            tracing::debug!(error = %e, "draft rejected");
        }
    }

    // ========== Theme / misc ==========

    /// 切换到下一个主题
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.colors = get_theme_colors(self.theme);
        self.show_toast(format!("Theme: {}", self.theme.label()));
    }

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, Duration::from_secs(2)));
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
