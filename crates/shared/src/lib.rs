//! 共享库
//!
//! 包含夹具生成工具共用的配置、错误处理和日志初始化代码。

pub mod config;
pub mod error;
pub mod observability;
