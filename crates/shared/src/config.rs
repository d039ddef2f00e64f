//! 配置管理模块
//!
//! 只承载诊断相关的配置（日志级别、日志格式），通过环境变量覆盖。
//! 夹具的输出形状、大小与路径均为固定值，不在此处配置。

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::Result;

/// 环境变量前缀（FIXTURE_LOG_LEVEL -> log_level）
pub const ENV_PREFIX: &str = "FIXTURE";

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// 人类可读
    #[default]
    Pretty,
    /// 结构化 JSON
    Json,
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// 从环境变量加载配置
    ///
    /// 未设置的项使用默认值：`info` / `pretty`。
    /// 取值无法解析时返回 [`FixtureError::Config`](crate::error::FixtureError::Config)。
    pub fn load() -> Result<Self> {
        Self::load_from(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    fn load_from(source: Environment) -> Result<Self> {
        let config = Config::builder()
            .set_default("log_level", default_log_level())?
            .set_default("log_format", "pretty")?
            .add_source(source)
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// 命令行参数覆盖日志级别
    pub fn with_log_level(mut self, level: Option<String>) -> Self {
        if let Some(level) = level {
            self.log_level = level;
        }
        self
    }
}
