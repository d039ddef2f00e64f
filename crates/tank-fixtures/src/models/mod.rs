//! 夹具数据模型
//!
//! 定义设置记录与容器对象，仅在一次生成过程中存在。

pub mod settings;

pub use settings::{
    PADDING_ALPHABET, PADDING_LEN, PADDING_REPEAT, SETTING_COUNT, SettingRecord, TankSettings,
    TankSettingsSummary, setting_letter,
};
