pub mod task;

pub use task::{NewTask, Task, TaskId, TaskStats};
