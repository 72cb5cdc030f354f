#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn rta() -> Command {
    let mut cmd = cargo_bin_cmd!("rattendance");
    cmd.env_remove("RATTENDANCE_LOG")
        .env_remove("RATTENDANCE_DEBUG_LOG");
    cmd
}

/// A Friday.
pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date")
}

pub fn t(h: u32, m: u32, s: u32) -> NaiveDateTime {
    day().and_hms_opt(h, m, s).expect("valid time")
}

/// Temp dir holding a config file with `content`. Keep the TempDir alive
/// for as long as the path is used.
pub fn config_with(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(format!("{name}.conf"));
    fs::write(&path, content).expect("write config");
    (dir, path)
}

/// Temp dir with a path where no config file exists yet.
pub fn missing_config(name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(format!("{name}.conf"));
    (dir, path)
}
