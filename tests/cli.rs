use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn allocator(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("allocator").unwrap();
    cmd.env("ALLOCATOR_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

fn stored_budgets(dir: &TempDir) -> serde_json::Value {
    let text = std::fs::read_to_string(dir.path().join("data").join("store.json")).unwrap();
    let map: serde_json::Value = serde_json::from_str(&text).unwrap();
    serde_json::from_str(map["Budgets"].as_str().unwrap()).unwrap()
}

#[test]
fn list_with_no_budgets() {
    let dir = TempDir::new().unwrap();
    allocator(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved budgets."));
}

#[test]
fn add_clamps_and_persists() {
    let dir = TempDir::new().unwrap();
    allocator(&dir)
        .args([
            "budget",
            "add",
            "--market",
            "700000",
            "--development",
            "600000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Development clamped to 500000 kr"))
        .stdout(predicate::str::contains("Saved budget #0"));

    assert_eq!(
        stored_budgets(&dir),
        serde_json::json!([{"market": 700000, "development": 500000, "sell": 0}])
    );
}

#[test]
fn add_below_total_is_rejected() {
    let dir = TempDir::new().unwrap();
    allocator(&dir)
        .args(["budget", "add", "--market", "100000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Budget incomplete"));

    assert!(!dir.path().join("data").join("store.json").exists());
}

#[test]
fn update_and_remove() {
    let dir = TempDir::new().unwrap();
    allocator(&dir)
        .args(["budget", "add", "--sell", "1200000"])
        .assert()
        .success();
    allocator(&dir)
        .args(["budget", "add", "--market", "1200000"])
        .assert()
        .success();

    allocator(&dir)
        .args(["budget", "update", "0", "--sell", "200000", "--market", "1000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated budget #0"));

    assert_eq!(
        stored_budgets(&dir),
        serde_json::json!([
            {"market": 1000000, "development": 0, "sell": 200000},
            {"market": 1200000, "development": 0, "sell": 0}
        ])
    );

    allocator(&dir)
        .args(["budget", "remove", "0"])
        .assert()
        .success();
    assert_eq!(
        stored_budgets(&dir),
        serde_json::json!([{"market": 1200000, "development": 0, "sell": 0}])
    );
}

#[test]
fn invalid_index_fails() {
    let dir = TempDir::new().unwrap();
    allocator(&dir)
        .args(["budget", "remove", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid index 3"));
}

#[test]
fn corrupt_store_falls_back_to_empty() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("store.json"), r#"{"Budgets": "[{oops"}"#).unwrap();

    allocator(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Corrupt storage"))
        .stdout(predicate::str::contains("No saved budgets."));
}

#[test]
fn export_csv_to_stdout() {
    let dir = TempDir::new().unwrap();
    allocator(&dir)
        .args(["budget", "add", "--development", "1200000"])
        .assert()
        .success();

    allocator(&dir)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Index,Market,Development,Sales,Total"))
        .stdout(predicate::str::contains("0,0,1200000,0,1200000"));
}

#[test]
fn config_init_writes_settings_file() {
    let dir = TempDir::new().unwrap();
    allocator(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote settings to"))
        .stdout(predicate::str::contains("Total to allocate: 1200000 kr"));

    let text = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    let settings: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(settings["max_total"], 1200000);
    assert_eq!(settings["step"], 1000);
}

#[test]
fn over_cap_entry_can_be_reduced() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(
        dir.path().join("data").join("store.json"),
        r#"{"Budgets":"[{\"market\":1000000,\"development\":300000,\"sell\":0}]"}"#,
    )
    .unwrap();

    allocator(&dir)
        .args(["budget", "update", "0", "--market", "900000"])
        .assert()
        .success();

    assert_eq!(
        stored_budgets(&dir),
        serde_json::json!([{"market": 900000, "development": 300000, "sell": 0}])
    );
}
