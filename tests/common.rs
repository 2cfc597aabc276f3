#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::Write as _;
use std::path::PathBuf;

pub fn kiosk() -> Command {
    cargo_bin_cmd!("fpkiosk")
}

/// Create a unique temp file path and remove any leftover from a prior run.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fpkiosk.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a master ledger file with the standard header and the given rows.
pub fn write_master(path: &str, rows: &[(u32, &str)]) {
    let mut f = fs::File::create(path).expect("create master ledger");
    writeln!(f, "ID,Name,DOB,Father's Name,DL Number,DL Expiry,National ID").unwrap();
    for (token, name) in rows {
        writeln!(f, "{token},{name},1990-01-01,Dad,DL-1,2030-01-01,N-1").unwrap();
    }
}

/// Write a device capture file, one line per device message.
pub fn write_replay(name: &str, lines: &[&str]) -> String {
    let path = temp_path(name, "replay");
    let mut f = fs::File::create(&path).expect("create replay file");
    for line in lines {
        writeln!(f, "{line}").unwrap();
    }
    path
}

/// Initialize both ledgers through the CLI (creates files with headers).
pub fn init_ledgers(master: &str, ledger: &str) {
    kiosk()
        .args(["--master", master, "--ledger", ledger, "--test", "init"])
        .assert()
        .success();
}
