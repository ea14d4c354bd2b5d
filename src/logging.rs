//! 日志初始化
//!
//! TUI 占用终端，日志写入 `~/.taskdeck/logs/`（按天滚动）；命令行子命令和
//! 开发后端写到 stderr。过滤规则来自 `TASKDECK_LOG`（`EnvFilter` 语法）。

use std::fs;
use std::path::PathBuf;

use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::taskdeck_dir;

/// 日志过滤环境变量
pub const LOG_ENV: &str = "TASKDECK_LOG";

const LOG_FILE_PREFIX: &str = "taskdeck.log";

/// 日志输出位置
#[derive(Debug, Clone)]
pub enum LogTarget {
    /// 写入目录下的滚动文件
    File(PathBuf),
    /// 写到 stderr
    Stderr,
}

/// 持有后台写线程；drop 时刷新剩余日志
pub struct LogGuard {
    _worker: Option<WorkerGuard>,
}

/// 默认日志目录
pub fn log_dir() -> PathBuf {
    taskdeck_dir().join("logs")
}

fn build_filter(default_level: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy()
}

/// 初始化全局 subscriber（重复调用时保持第一次的设置）
pub fn init(target: LogTarget, default_level: LevelFilter) -> LogGuard {
    let filter = build_filter(default_level);

    match target {
        LogTarget::File(dir) => {
            if let Err(e) = fs::create_dir_all(&dir) {
                eprintln!("Warning: cannot create log dir {}: {}", dir.display(), e);
                return LogGuard { _worker: None };
            }
            let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
            let (writer, worker) = tracing_appender::non_blocking(appender);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init();
            LogGuard {
                _worker: Some(worker),
            }
        }
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
            LogGuard { _worker: None }
        }
    }
}
