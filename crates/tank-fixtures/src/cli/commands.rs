//! CLI 命令定义
//!
//! 使用 clap derive 宏定义命令行接口结构。

use clap::Parser;

/// 水箱设置夹具生成工具
///
/// 在当前工作目录下生成 `config/tank_settings.json`。
/// 目标目录必须已存在。
#[derive(Parser, Debug)]
#[command(name = "gen-tank-settings")]
#[command(version, about = "生成水箱设置 JSON 夹具")]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)，覆盖 FIXTURE_LOG_LEVEL
    #[arg(short, long)]
    pub log_level: Option<String>,
}

// ============================================================================
// 单元测试
// ============================================================================
