//! 统一错误处理模块
//!
//! 定义夹具生成过程中的错误类型，使用 thiserror 提供良好的错误信息。

use std::path::PathBuf;

use thiserror::Error;

/// 夹具生成错误类型
#[derive(Debug, Error)]
pub enum FixtureError {
    // ==================== 文件系统错误 ====================
    /// 目录不存在、无写权限、磁盘已满等
    #[error("写入夹具文件失败: {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ==================== 序列化错误 ====================
    #[error("序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),

    // ==================== 配置错误 ====================
    #[error("配置加载失败: {0}")]
    Config(#[from] config::ConfigError),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, FixtureError>;

impl FixtureError {
    /// 包装 IO 错误并附带目标路径
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Write { .. } => "WRITE_FAILED",
            Self::Serialize(_) => "SERIALIZE_FAILED",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}
