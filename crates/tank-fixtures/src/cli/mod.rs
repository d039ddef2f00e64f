//! CLI 模块
//!
//! 命令行入口不接受任何影响输出的参数，唯一的选项用于调整日志级别。
//!
//! # 使用示例
//!
//! ```bash
//! # 在项目根目录生成 config/tank_settings.json
//! gen-tank-settings
//!
//! # 输出调试日志
//! gen-tank-settings --log-level debug
//! ```

pub mod commands;
pub mod runner;

pub use commands::Cli;
pub use runner::CommandRunner;
