//! Task list synchronization
//!
//! `TaskListController` owns the client-side state and is the only thing
//! that mutates it. Every remote call runs on a worker thread and posts a
//! [`Completion`] back; [`TaskListController::poll`] applies completions one
//! at a time on the owning thread. After any successful write the controller
//! refetches the whole collection, so `tasks` only ever holds what the server
//! last returned.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::api::TaskApi;
use crate::async_ops_state::AsyncOpsState;
use crate::error::{Result, TaskDeckError};
use crate::model::{NewTask, Task, TaskId, TaskStats};

pub const EMPTY_TITLE: &str = "Task title cannot be empty.";
pub const FETCH_FAILED: &str = "Failed to fetch tasks.";
pub const ADD_FAILED: &str = "Failed to add task.";
pub const UPDATE_FAILED: &str = "Failed to update task.";
pub const DELETE_FAILED: &str = "Failed to delete task.";

/// Result of a background request, applied by [`TaskListController::poll`].
#[derive(Debug)]
pub enum Completion {
    Fetched { seq: u64, result: Result<Vec<Task>> },
    Created(Result<()>),
    Toggled(Result<()>),
    Deleted(Result<()>),
}

/// Process-local client state
#[derive(Debug, Clone, Default)]
pub struct ClientState {
    /// Server order; replaced wholesale on every successful fetch
    pub tasks: Vec<Task>,
    pub draft_title: String,
    /// True while the most recently issued fetch is outstanding
    pub is_loading: bool,
    /// True while a create request is outstanding
    pub is_submitting: bool,
    pub last_error: Option<String>,
    pub last_synced: Option<DateTime<Local>>,
}

pub struct TaskListController {
    api: Arc<dyn TaskApi>,
    state: ClientState,
    ops: AsyncOpsState,
}

impl TaskListController {
    pub fn new(api: Arc<dyn TaskApi>) -> Self {
        Self {
            api,
            state: ClientState::default(),
            ops: AsyncOpsState::new(),
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    /// Recomputed on every call
    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.state.tasks)
    }

    pub fn has_pending(&self) -> bool {
        self.ops.has_pending()
    }

    // ========== Operations ==========

    pub fn fetch_tasks(&mut self) {
        self.state.is_loading = true;
        self.state.last_error = None;
        let seq = self.ops.next_fetch_seq();
        tracing::debug!(seq, "fetching tasks");
        self.spawn(move |api| Completion::Fetched {
            seq,
            result: api.list_tasks(),
        });
    }

    /// Rejects an empty (after trim) title locally, without a request.
    pub fn add_task(&mut self, title: &str) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            self.state.last_error = Some(EMPTY_TITLE.to_string());
            return Err(TaskDeckError::validation(EMPTY_TITLE));
        }

        self.state.is_submitting = true;
        let task = NewTask::new(title);
        tracing::debug!(title = %task.title, "creating task");
        self.spawn(move |api| Completion::Created(api.create_task(&task)));
        Ok(())
    }

    pub fn submit_draft(&mut self) -> Result<()> {
        let draft = self.state.draft_title.clone();
        self.add_task(&draft)
    }

    pub fn toggle_task(&mut self, id: &TaskId) {
        let id = id.clone();
        tracing::debug!(id = %id, "toggling task");
        self.spawn(move |api| Completion::Toggled(api.toggle_task(&id)));
    }

    pub fn delete_task(&mut self, id: &TaskId) {
        let id = id.clone();
        tracing::debug!(id = %id, "deleting task");
        self.spawn(move |api| Completion::Deleted(api.delete_task(&id)));
    }

    pub fn dismiss_error(&mut self) {
        self.state.last_error = None;
    }

    // ========== Draft ==========

    pub fn set_draft(&mut self, title: impl Into<String>) {
        self.state.draft_title = title.into();
    }

    pub fn push_draft_char(&mut self, c: char) {
        self.state.draft_title.push(c);
    }

    pub fn pop_draft_char(&mut self) {
        self.state.draft_title.pop();
    }

    // ========== Completion handling ==========

    /// Apply every completion that has already arrived. Returns how many.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Some(completion) = self.ops.try_next() {
            self.apply(completion);
            applied += 1;
        }
        applied
    }

    /// Block until every issued request, including refetches triggered
    /// while waiting, has been applied. Returns false on timeout.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.ops.has_pending() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            match self.ops.next_timeout(remaining) {
                Some(completion) => self.apply(completion),
                None => return false,
            }
        }
        true
    }

    fn spawn<F>(&mut self, request: F)
    where
        F: FnOnce(&dyn TaskApi) -> Completion + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let tx = self.ops.begin();
        thread::spawn(move || {
            // 接收端随控制器一起销毁时直接丢弃结果
            let _ = tx.send(request(api.as_ref()));
        });
    }

    fn apply(&mut self, completion: Completion) {
        self.ops.finish();

        match completion {
            Completion::Fetched { seq, result } => {
                if !self.ops.is_latest_fetch(seq) {
                    tracing::debug!(seq, "discarding stale fetch");
                    return;
                }
                self.state.is_loading = false;
                match result {
                    Ok(tasks) => {
                        tracing::debug!(count = tasks.len(), "tasks fetched");
                        self.state.tasks = tasks;
                        self.state.last_synced = Some(Local::now());
                    }
                    Err(e) => self.fail("fetch", FETCH_FAILED, &e),
                }
            }
            Completion::Created(result) => {
                match result {
                    Ok(()) => {
                        self.state.draft_title.clear();
                        self.fetch_tasks();
                    }
                    Err(e) => self.fail("create", ADD_FAILED, &e),
                }
                self.state.is_submitting = false;
            }
            Completion::Toggled(result) => match result {
                Ok(()) => self.fetch_tasks(),
                Err(e) => self.fail("toggle", UPDATE_FAILED, &e),
            },
            Completion::Deleted(result) => match result {
                Ok(()) => self.fetch_tasks(),
                Err(e) => self.fail("delete", DELETE_FAILED, &e),
            },
        }
    }

    fn fail(&mut self, op: &'static str, message: &str, err: &TaskDeckError) {
        if err.is_remote() {
            tracing::warn!(op, error = %err, "{}", message);
        } else {
            tracing::error!(op, error = %err, "{}", message);
        }
        self.state.last_error = Some(message.to_string());
    }
}
