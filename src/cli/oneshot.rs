//! 非交互子命令：执行一次操作，等待所有请求完成后打印列表

use std::time::Duration;

use crate::controller::TaskListController;
use crate::model::{Task, TaskId, TaskStats};

/// 未配置超时时，等待后台请求的上限
const DEFAULT_SETTLE_TIMEOUT: Duration = Duration::from_secs(30);

/// 一次性操作
#[derive(Debug, Clone, PartialEq)]
pub enum OneShot {
    List,
    Add(String),
    Toggle(TaskId),
    Delete(TaskId),
}

/// 执行结果：打印到 stdout 的列表，以及需要写到 stderr 的错误
#[derive(Debug)]
pub struct Outcome {
    pub listing: String,
    pub error: Option<String>,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        if self.error.is_some() {
            1
        } else {
            0
        }
    }
}

/// 执行操作并等待结果
///
/// 写操作成功后控制器会自动重新拉取，`list` 之外的操作因此不需要
/// 额外的 fetch。
pub fn execute(
    controller: &mut TaskListController,
    op: OneShot,
    timeout: Option<Duration>,
) -> Outcome {
    let is_write = op != OneShot::List;
    match op {
        OneShot::List => controller.fetch_tasks(),
        OneShot::Add(title) => {
            // 校验失败时错误已写入 last_error
            let _ = controller.add_task(&title);
        }
        OneShot::Toggle(id) => controller.toggle_task(&id),
        OneShot::Delete(id) => controller.delete_task(&id),
    }

    let settled = settle(controller, timeout);
    let error = if !settled {
        Some("Timed out waiting for the server.".to_string())
    } else {
        let error = controller.state().last_error.clone();
        // 写操作失败不会触发 refetch，补一次拉取，打印服务端当前状态；
        // fetch 会清掉 last_error，所以先保留原始错误
        if is_write && error.is_some() && controller.state().last_synced.is_none() {
            controller.fetch_tasks();
            settle(controller, timeout);
        }
        error
    };

    Outcome {
        listing: format_listing(controller.tasks(), controller.stats()),
        error,
    }
}

fn settle(controller: &mut TaskListController, timeout: Option<Duration>) -> bool {
    // 一次操作最多包含写请求和一次 refetch
    let timeout = timeout.map(|t| t * 2).unwrap_or(DEFAULT_SETTLE_TIMEOUT);
    let ok = controller.settle(timeout);
    if !ok {
        tracing::warn!(?timeout, "requests still pending after timeout");
    }
    ok
}

/// 格式化任务列表与统计
pub fn format_listing(tasks: &[Task], stats: TaskStats) -> String {
    let mut out = String::new();

    if tasks.is_empty() {
        out.push_str("No tasks yet\n");
    } else {
        let id_width = tasks
            .iter()
            .map(|t| t.id.as_str().chars().count())
            .max()
            .unwrap_or(0);
        for task in tasks {
            out.push_str(&format!(
                "{} {:>width$}  {}\n",
                task.icon(),
                task.id.as_str(),
                task.title,
                width = id_width
            ));
        }
    }

    out.push_str(&format!(
        "\nTotal: {}  Completed: {}  Pending: {}\n",
        stats.total, stats.completed, stats.pending
    ));
    out
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::fake::{Call, FakeTaskApi, Op};
    use crate::controller::{ADD_FAILED, DELETE_FAILED, EMPTY_TITLE};
    use crate::model::NewTask;

    fn task(id: u64, title: &str, completed: bool) -> Task {
        Task {
            id: TaskId::from(id),
            title: title.to_string(),
            completed,
        }
    }

    fn controller(fake: &Arc<FakeTaskApi>) -> TaskListController {
        TaskListController::new(fake.clone())
    }

    #[test]
    fn test_list_prints_tasks_and_stats() {
        let fake = Arc::new(FakeTaskApi::with_tasks(vec![
            task(1, "Buy milk", false),
            task(12, "Walk dog", true),
        ]));
        let outcome = execute(&mut controller(&fake), OneShot::List, None);

        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(
            outcome.listing,
            "○  1  Buy milk\n✓ 12  Walk dog\n\nTotal: 2  Completed: 1  Pending: 1\n"
        );
    }

    #[test]
    fn test_add_creates_then_lists() {
        let fake = Arc::new(FakeTaskApi::new());
        let outcome = execute(
            &mut controller(&fake),
            OneShot::Add("  Buy milk ".to_string()),
            None,
        );

        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(
            fake.calls(),
            vec![Call::Create(NewTask::new("Buy milk")), Call::List]
        );
        assert!(outcome.listing.contains("Buy milk"));
    }

    #[test]
    fn test_blank_add_fails_without_request() {
        let fake = Arc::new(FakeTaskApi::new());
        let outcome = execute(&mut controller(&fake), OneShot::Add("  ".to_string()), None);

        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(outcome.error.as_deref(), Some(EMPTY_TITLE));
        // 只有补充的一次拉取，没有创建请求
        assert_eq!(fake.calls(), vec![Call::List]);
    }

    #[test]
    fn test_failed_write_reports_error_and_current_list() {
        let fake = Arc::new(FakeTaskApi::with_tasks(vec![task(1, "Buy milk", false)]));
        fake.fail(Op::Create);
        let outcome = execute(&mut controller(&fake), OneShot::Add("x".to_string()), None);

        assert_eq!(outcome.error.as_deref(), Some(ADD_FAILED));
        assert!(outcome.listing.contains("Buy milk"));
    }

    #[test]
    fn test_delete_unknown_id() {
        let fake = Arc::new(FakeTaskApi::new());
        let outcome = execute(
            &mut controller(&fake),
            OneShot::Delete(TaskId::from(9)),
            None,
        );
        assert_eq!(outcome.error.as_deref(), Some(DELETE_FAILED));
        assert!(outcome.listing.starts_with("No tasks yet"));
    }

    #[test]
    fn test_toggle_lists_updated_task() {
        let fake = Arc::new(FakeTaskApi::with_tasks(vec![task(3, "Read", false)]));
        let outcome = execute(
            &mut controller(&fake),
            OneShot::Toggle(TaskId::from(3)),
            None,
        );
        assert_eq!(outcome.exit_code(), 0);
        assert!(outcome.listing.starts_with("✓ 3  Read"));
    }
}
