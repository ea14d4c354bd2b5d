//! 应用配置加载
//!
//! 配置文件位于 `~/.taskdeck/config.toml`，不存在或无法解析时使用默认值。
//! API 地址优先级：`--api-url` > `TASKDECK_API_URL` > 配置文件 > 默认值。

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskDeckError};

/// 默认后端地址（集合资源为 `{base_url}/tasks`）
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// 覆盖后端地址的环境变量
pub const API_URL_ENV: &str = "TASKDECK_API_URL";

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// 后端连接配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 请求超时（秒）；不设置时沿用传输层默认行为
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Dark".to_string(),
        }
    }
}

/// 获取 ~/.taskdeck/ 目录路径
pub fn taskdeck_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".taskdeck")
}

/// 获取配置文件路径
fn config_path() -> PathBuf {
    taskdeck_dir().join("config.toml")
}

/// 从指定路径读取配置
pub fn load_config_from(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 加载配置（不存在或解析失败则返回默认值）
pub fn load_config() -> Config {
    let path = config_path();
    if !path.exists() {
        return Config::default();
    }
    match load_config_from(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            Config::default()
        }
    }
}

/// 按优先级合并后端地址覆盖项，并校验地址格式
pub fn resolve_api(
    mut api: ApiConfig,
    env_url: Option<String>,
    cli_url: Option<String>,
) -> Result<ApiConfig> {
    if let Some(url) = cli_url.or(env_url).filter(|u| !u.trim().is_empty()) {
        api.base_url = url.trim().to_string();
    }

    let parsed = url::Url::parse(&api.base_url)
        .map_err(|e| TaskDeckError::config(format!("invalid api url '{}': {}", api.base_url, e)))?;
    if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
        return Err(TaskDeckError::config(format!(
            "api url must be an http(s) url: {}",
            api.base_url
        )));
    }

    Ok(api)
}
