//! 夹具文件的集成测试
//!
//! 在临时目录中驱动库函数与二进制入口，验证输出文件的结构、确定性与覆盖行为。

use std::fs;
use std::path::Path;
use std::process::Command;

use serde_json::Value;
use tank_fixtures::cli::CommandRunner;
use tank_fixtures::generators::FixtureGenerator;
use tank_fixtures::models::{PADDING_ALPHABET, TankSettings};
use tank_fixtures::writer::write_fixture;

const BIN: &str = env!("CARGO_BIN_EXE_gen-tank-settings");

fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

// ==================== 库接口 ====================

#[test]
fn test_output_is_valid_json_with_expected_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tank_settings.json");

    CommandRunner::new(&path).run().unwrap();

    let value = read_json(&path);
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);

    let settings = object["settings"].as_array().unwrap();
    assert_eq!(settings.len(), 10);
    for (i, record) in settings.iter().enumerate() {
        assert_eq!(record["id"], (i + 1) as u64);
        let letter = char::from(b'A' + (i % 26) as u8).to_string();
        assert_eq!(record["value"], letter.as_str());
    }

    let padding = object["padding"].as_str().unwrap();
    assert_eq!(padding.len(), 124_000);
    assert_eq!(padding, PADDING_ALPHABET.repeat(2000));
}

#[test]
fn test_two_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tank_settings.json");
    let runner = CommandRunner::new(&path);

    runner.run().unwrap();
    let first = fs::read(&path).unwrap();
    runner.run().unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_file_parses_back_into_generated_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tank_settings.json");

    CommandRunner::new(&path).run().unwrap();

    let bytes = fs::read(&path).unwrap();
    let parsed: TankSettings = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed, FixtureGenerator::new().generate());
}

#[test]
fn test_existing_file_is_fully_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tank_settings.json");
    let fixture = FixtureGenerator::new().generate();

    // 先写入一份更长的旧内容，确保覆盖后不残留尾部字节
    let stale = "x".repeat(300_000);
    fs::write(&path, &stale).unwrap();

    let report = write_fixture(&path, &fixture).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes.len(), report.bytes);
    assert!(bytes.len() < stale.len());
    assert_eq!(serde_json::from_slice::<Value>(&bytes).unwrap()["settings"][9]["value"], "J");
}

#[test]
fn test_missing_directory_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config").join("tank_settings.json");

    assert!(CommandRunner::new(&path).run().is_err());
    assert!(!path.exists());
    assert!(!dir.path().join("config").exists());
}

// ==================== 二进制入口 ====================

#[test]
fn test_binary_writes_default_path() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("config")).unwrap();

    let output = Command::new(BIN)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let value = read_json(&dir.path().join("config/tank_settings.json"));
    assert_eq!(value["settings"][0]["id"], 1);
    assert_eq!(value["settings"][0]["value"], "A");
    assert_eq!(value["padding"].as_str().unwrap().len(), 124_000);
}

#[test]
fn test_binary_fails_without_config_directory() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(BIN)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
    assert!(!dir.path().join("config").exists());
}

#[test]
fn test_binary_ignores_invalid_log_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("config")).unwrap();

    let output = Command::new(BIN)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env("FIXTURE_LOG_FORMAT", "xml")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(!output.stderr.is_empty());

    let path = dir.path().join("config/tank_settings.json");
    let parsed: TankSettings = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(parsed, FixtureGenerator::new().generate());
}
