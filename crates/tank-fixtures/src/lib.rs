//! Tank Fixtures
//!
//! 生成水箱设置 JSON 夹具文件，供其他服务作为样例输入。
//!
//! # 主要模块
//!
//! - `models`: 设置记录与容器对象
//! - `generators`: 确定性的夹具生成器
//! - `writer`: 序列化与文件写入
//! - `cli`: 命令行定义与执行器
//!
//! # 使用示例
//!
//! ```rust,no_run
//! use tank_fixtures::generators::FixtureGenerator;
//! use tank_fixtures::writer::{DEFAULT_OUTPUT_PATH, write_fixture};
//!
//! let fixture = FixtureGenerator::new().generate();
//! assert_eq!(fixture.settings.len(), 10);
//!
//! write_fixture(DEFAULT_OUTPUT_PATH, &fixture)?;
//! # Ok::<(), tank_shared::error::FixtureError>(())
//! ```

pub mod cli;
pub mod generators;
pub mod models;
pub mod writer;
