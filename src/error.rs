//! taskdeck 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;
use thiserror::Error;

/// taskdeck 错误类型
#[derive(Debug, Error)]
pub enum TaskDeckError {
    /// 本地校验失败（不会发起网络请求）
    #[error("{0}")]
    Validation(String),

    /// 网络层错误（连接失败、超时、DNS 等）
    #[error("Transport error: {0}")]
    Transport(String),

    /// 服务端返回非 2xx 状态码
    #[error("Server responded with status {code}")]
    Status { code: u16 },

    /// 响应体解析失败
    #[error("Decode error: {0}")]
    Decode(String),

    /// I/O 错误（配置文件、日志目录等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),
}

/// taskdeck Result 类型别名
pub type Result<T> = std::result::Result<T, TaskDeckError>;

impl TaskDeckError {
    /// 创建 Validation 错误
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// 创建 Transport 错误
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// 创建 Decode 错误
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// 是否为远端操作失败（网络、状态码、解析）
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Status { .. } | Self::Decode(_)
        )
    }
}

impl From<ureq::Error> for TaskDeckError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => Self::Status { code },
            ureq::Error::Transport(t) => Self::Transport(t.to_string()),
        }
    }
}
