//! 夹具写入
//!
//! 序列化容器并写入目标文件。目标目录必须已存在，此处不会创建目录。

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use tank_shared::error::{FixtureError, Result};
use tracing::debug;

use crate::models::TankSettings;

/// 默认输出路径，相对于当前工作目录
pub const DEFAULT_OUTPUT_PATH: &str = "config/tank_settings.json";

/// 写入结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub path: PathBuf,
    pub bytes: usize,
}

/// 序列化为紧凑 JSON
pub fn to_json(fixture: &TankSettings) -> Result<String> {
    Ok(serde_json::to_string(fixture)?)
}

/// 将夹具写入指定路径
///
/// 文件已存在时截断后整体覆盖。文件句柄在函数返回前释放，错误路径同样如此。
pub fn write_fixture(path: impl AsRef<Path>, fixture: &TankSettings) -> Result<WriteReport> {
    let path = path.as_ref();
    let json = to_json(fixture)?;

    let mut file = fs::File::create(path).map_err(|e| FixtureError::write(path, e))?;
    file.write_all(json.as_bytes())
        .map_err(|e| FixtureError::write(path, e))?;

    debug!(path = %path.display(), bytes = json.len(), "夹具文件已写入");

    Ok(WriteReport {
        path: path.to_path_buf(),
        bytes: json.len(),
    })
}
