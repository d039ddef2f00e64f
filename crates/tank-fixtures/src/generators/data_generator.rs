//! 数据生成器
//!
//! 构建固定形状的夹具容器：10 条设置记录和一个 124,000 字符的填充字符串。
//! 生成过程没有输入，每次结果完全相同。

use crate::models::{
    PADDING_ALPHABET, PADDING_LEN, PADDING_REPEAT, SETTING_COUNT, SettingRecord, TankSettings,
};

/// 夹具数据生成器
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureGenerator;

impl FixtureGenerator {
    /// 创建数据生成器
    pub fn new() -> Self {
        Self
    }

    /// 生成设置记录，id 从 1 到 10 升序
    pub fn generate_settings(&self) -> Vec<SettingRecord> {
        (1..=SETTING_COUNT).map(SettingRecord::new).collect()
    }

    /// 生成填充字符串
    pub fn generate_padding(&self) -> String {
        let padding = PADDING_ALPHABET.repeat(PADDING_REPEAT);
        debug_assert_eq!(padding.len(), PADDING_LEN);
        padding
    }

    /// 组装完整的夹具容器
    pub fn generate(&self) -> TankSettings {
        TankSettings {
            settings: self.generate_settings(),
            padding: self.generate_padding(),
        }
    }
}
