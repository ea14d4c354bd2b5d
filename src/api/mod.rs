//! Remote task collection client
//!
//! `TaskApi` is the seam between the controller and the transport. Every
//! method is a single blocking request; callers run them off the UI thread.

mod http;

#[cfg(test)]
pub mod fake;

pub use http::HttpTaskApi;

use crate::error::Result;
use crate::model::{NewTask, Task, TaskId};

/// The four operations the client performs against `/tasks`.
///
/// Write operations ignore the response body; any non-2xx status is an error.
pub trait TaskApi: Send + Sync {
    /// `GET /tasks`
    fn list_tasks(&self) -> Result<Vec<Task>>;

    /// `POST /tasks` with `{title, completed: false}`
    fn create_task(&self, task: &NewTask) -> Result<()>;

    /// `PUT /tasks/{id}` without a body; the server decides the new state
    fn toggle_task(&self, id: &TaskId) -> Result<()>;

    /// `DELETE /tasks/{id}`
    fn delete_task(&self, id: &TaskId) -> Result<()>;
}
