//! 命令执行器
//!
//! 生成夹具、写入文件并记录结构化的统计日志。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::generators::FixtureGenerator;
use crate::writer::{self, DEFAULT_OUTPUT_PATH, WriteReport};

/// 命令执行器
///
/// 持有输出路径，二进制入口始终使用 [`DEFAULT_OUTPUT_PATH`]。
pub struct CommandRunner {
    output_path: PathBuf,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_PATH)
    }
}

impl CommandRunner {
    /// 创建命令执行器
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// 生成并写入夹具
    pub fn run(&self) -> Result<WriteReport> {
        let fixture = FixtureGenerator::new().generate();
        let summary = fixture.summary();

        let report = writer::write_fixture(&self.output_path, &fixture)
            .with_context(|| format!("生成夹具失败: {}", self.output_path.display()))?;

        info!(
            path = %report.path.display(),
            records = summary.records,
            padding_len = summary.padding_len,
            bytes = report.bytes,
            "夹具生成完成"
        );

        Ok(report)
    }
}
