#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn fs() -> Command {
    cargo_bin_cmd!("fleetsheet")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fleetsheet.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    fs().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add_employee(db_path: &str, name: &str, token: &str, rate: &str) {
    fs().args([
        "--db", db_path, "employee", "add", "--name", name, "--token", token, "--rate", rate,
    ])
    .assert()
    .success();
}

/// Two drivers, one shared trip and a day off.
///
/// Ledger afterwards:
///   #1 12 2024-01-01 Day Off
///   #2 12 2024-01-02 2h 30m 300 km
///   #3 34 2024-01-02 2h 30m 300 km
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_employee(db_path, "Alice", "12", "100");
    add_employee(db_path, "Bob", "34", "80");

    fs().args([
        "--db", db_path, "entry", "add", "--tokens", "12", "--date", "2024-01-01", "--day-off",
    ])
    .assert()
    .success();

    fs().args([
        "--db",
        db_path,
        "entry",
        "add",
        "--tokens",
        "12,34",
        "--date",
        "2024-01-02",
        "--hours",
        "2",
        "--minutes",
        "30",
        "--distance",
        "300",
    ])
    .assert()
    .success();
}
