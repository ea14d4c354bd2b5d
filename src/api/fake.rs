//! In-memory `TaskApi` that records every call, for controller and UI tests.

use std::collections::HashSet;
use std::sync::Mutex;

use super::TaskApi;
use crate::error::{Result, TaskDeckError};
use crate::model::{NewTask, Task, TaskId};

/// 被记录的请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(NewTask),
    Toggle(TaskId),
    Delete(TaskId),
}

/// 可注入失败的操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Create,
    Toggle,
    Delete,
}

#[derive(Debug, Default)]
struct FakeState {
    tasks: Vec<Task>,
    next_id: u64,
    calls: Vec<Call>,
    failing: HashSet<Op>,
}

/// Behaves like a well-formed backend: toggle flips `completed`
#[derive(Debug, Default)]
pub struct FakeTaskApi {
    state: Mutex<FakeState>,
}

impl FakeTaskApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let fake = Self::new();
        {
            let mut state = fake.state.lock().unwrap();
            state.next_id = tasks.len() as u64;
            state.tasks = tasks;
        }
        fake
    }

    pub fn fail(&self, op: Op) {
        self.state.lock().unwrap().failing.insert(op);
    }

    pub fn recover(&self, op: Op) {
        self.state.lock().unwrap().failing.remove(&op);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls().iter().filter(|c| **c == Call::List).count()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.state.lock().unwrap().tasks.clone()
    }

    fn record(&self, call: Call, op: Op) -> Result<std::sync::MutexGuard<'_, FakeState>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.failing.contains(&op) {
            return Err(TaskDeckError::transport("connection reset by peer"));
        }
        Ok(state)
    }
}

impl TaskApi for FakeTaskApi {
    fn list_tasks(&self) -> Result<Vec<Task>> {
        let state = self.record(Call::List, Op::List)?;
        Ok(state.tasks.clone())
    }

    fn create_task(&self, task: &NewTask) -> Result<()> {
        let mut state = self.record(Call::Create(task.clone()), Op::Create)?;
        state.next_id += 1;
        let id = TaskId::from(state.next_id);
        state.tasks.push(Task {
            id,
            title: task.title.clone(),
            completed: task.completed,
        });
        Ok(())
    }

    fn toggle_task(&self, id: &TaskId) -> Result<()> {
        let mut state = self.record(Call::Toggle(id.clone()), Op::Toggle)?;
        let task = state
            .tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or(TaskDeckError::Status { code: 404 })?;
        task.completed = !task.completed;
        Ok(())
    }

    fn delete_task(&self, id: &TaskId) -> Result<()> {
        let mut state = self.record(Call::Delete(id.clone()), Op::Delete)?;
        let before = state.tasks.len();
        state.tasks.retain(|t| &t.id != id);
        if state.tasks.len() == before {
            return Err(TaskDeckError::Status { code: 404 });
        }
        Ok(())
    }
}
