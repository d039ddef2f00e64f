//! 水箱设置模型
//!
//! 设置记录的取值由 id 确定性推导，容器序列化时字段顺序固定为 `settings`、`padding`。

use serde::{Deserialize, Serialize};

/// 生成的设置记录数量
pub const SETTING_COUNT: u32 = 10;

/// 填充字符串的基础序列（数字、小写字母、大写字母，共 62 个字符）
pub const PADDING_ALPHABET: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// 基础序列的重复次数
pub const PADDING_REPEAT: usize = 2000;

/// 填充字符串的总长度
pub const PADDING_LEN: usize = PADDING_ALPHABET.len() * PADDING_REPEAT;

/// 根据 id 计算设置值：A..Z 中第 `(id - 1) mod 26` 个字母
///
/// id 从 1 开始；传入 0 时按 26 个字母循环回绕到 `Z`。
pub fn setting_letter(id: u32) -> char {
    let offset = (id % 26 + 25) % 26;
    char::from(b'A' + offset as u8)
}

/// 单条设置记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingRecord {
    pub id: u32,
    pub value: String,
}

impl SettingRecord {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            value: setting_letter(id).to_string(),
        }
    }
}

/// 夹具容器对象
///
/// 序列化结果恰好包含两个键，顺序与字段声明一致。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TankSettings {
    pub settings: Vec<SettingRecord>,
    pub padding: String,
}

/// 生成结果统计，用于日志输出
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TankSettingsSummary {
    pub records: usize,
    pub padding_len: usize,
}

impl TankSettings {
    pub fn summary(&self) -> TankSettingsSummary {
        TankSettingsSummary {
            records: self.settings.len(),
            padding_len: self.padding.len(),
        }
    }
}
