//! 生成器模块
//!
//! 提供水箱设置夹具的确定性生成功能。

pub mod data_generator;

pub use data_generator::FixtureGenerator;
