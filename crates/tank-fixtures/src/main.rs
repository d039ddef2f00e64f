//! 水箱设置夹具生成 CLI
//!
//! 在当前工作目录下写入 `config/tank_settings.json`。
//! 只有写入失败会导致非零退出；日志配置异常时回退到默认配置并继续生成。

use clap::Parser;
use tank_fixtures::cli::{Cli, CommandRunner};
use tank_shared::config::LoggingConfig;
use tank_shared::observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 优先使用环境变量 RUST_LOG，其次是命令行参数和 FIXTURE_ 前缀的配置
    let logging = LoggingConfig::load()
        .unwrap_or_else(|e| {
            eprintln!("警告: {}，使用默认日志配置", e);
            LoggingConfig::default()
        })
        .with_log_level(cli.log_level);

    if let Err(e) = observability::init_logging(&logging) {
        eprintln!("警告: 日志初始化失败: {}", e);
    }

    CommandRunner::default().run()?;

    Ok(())
}
