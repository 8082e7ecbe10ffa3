use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::thread::sleep;
use std::time::Duration;
use tempfile::tempdir;

fn llm_scan() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("llm-scan"))
}

fn make_repo(root: &Path, name: &str, payload_bytes: usize) {
    let snapshot = root.join(name).join("snapshots/abc123");
    fs::create_dir_all(&snapshot).unwrap();
    fs::write(snapshot.join("model.bin"), vec![0u8; payload_bytes]).unwrap();
}

#[test]
fn scan_cache_end_to_end() {
    let temp = tempdir().unwrap();

    // gpt2 first: 3 MiB exactly. llama created afterwards so its directory
    // atime is more recent; space the creations past coarse timestamp
    // granularity.
    make_repo(temp.path(), "models--openai--gpt2", 3 * 1_048_576);
    sleep(Duration::from_millis(1100));
    make_repo(temp.path(), "models--meta--llama", 1024);

    let mut cmd = llm_scan();
    cmd.arg("scan-cache").arg("--cache-root").arg(temp.path());

    let assert = cmd.assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let records: Vec<Value> = serde_json::from_str(&stdout).expect("stdout is a JSON array");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["repo_id"], "meta/llama");
    assert_eq!(records[1]["repo_id"], "openai/gpt2");
    assert_eq!(records[1]["size_mb"], 3.0);

    for record in &records {
        let path = record["path"].as_str().unwrap();
        assert!(Path::new(path).is_absolute());
        let last_access = record["last_access"].as_str().unwrap();
        assert!(last_access.ends_with('Z'));
        assert!(!last_access.contains("+00:00"));
    }

    // index.json under the cache root holds the same records
    let index = fs::read_to_string(temp.path().join("index.json")).unwrap();
    let indexed: Vec<Value> = serde_json::from_str(&index).unwrap();
    assert_eq!(indexed, records);
}

#[test]
fn scan_cache_empty_root_prints_empty_array() {
    let temp = tempdir().unwrap();

    let mut cmd = llm_scan();
    cmd.arg("scan-cache").arg("--cache-root").arg(temp.path());

    let assert = cmd.assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout.trim(), "[]");

    assert_eq!(
        fs::read_to_string(temp.path().join("index.json")).unwrap(),
        "[]"
    );
}

#[test]
fn scan_cache_skips_non_matching_directories() {
    let temp = tempdir().unwrap();

    make_repo(temp.path(), "models--bert-base--uncased", 16);
    fs::create_dir(temp.path().join("snapshots")).unwrap();
    fs::create_dir(temp.path().join("models-foo")).unwrap();
    fs::create_dir(temp.path().join("models--onlyonepart")).unwrap();

    let mut cmd = llm_scan();
    cmd.arg("scan-cache").arg("--cache-root").arg(temp.path());

    let assert = cmd.assert().success();
    let records: Vec<Value> =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["repo_id"], "bert-base/uncased");
}

#[test]
fn scan_cache_honors_output_flag() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("reports/index.json");

    make_repo(temp.path(), "models--openai--gpt2", 64);

    let mut cmd = llm_scan();
    cmd.arg("scan-cache")
        .arg("--cache-root")
        .arg(temp.path())
        .arg("--output")
        .arg(&out);

    cmd.assert().success();

    let written: Vec<Value> =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written.len(), 1);

    // Default location is untouched when --output is given
    assert!(!temp.path().join("index.json").exists());
}

#[test]
fn scan_cache_unwritable_output_exits_one() {
    let temp = tempdir().unwrap();
    // A plain file where the output's parent directory should go
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let mut cmd = llm_scan();
    cmd.arg("scan-cache")
        .arg("--cache-root")
        .arg(temp.path())
        .arg("--output")
        .arg(blocker.join("index.json"));

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("[scan-cache] error:"));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let mut cmd = llm_scan();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
