use predicates::str::contains;
use std::fs;

mod common;
use common::{init_ledgers, kiosk, temp_path, write_master, write_replay};

/// Seed the attendance ledger with one committed row through a replayed
/// session.
fn seed_ledger(name: &str, master: &str, ledger: &str) {
    init_ledgers(master, ledger);
    write_master(master, &[(7, "Alice")]);

    let replay = write_replay(
        name,
        &[
            "Fingerprint ID found: 7",
            "ID: 7, ALC: 4000",
            "Status: Absent",
        ],
    );

    kiosk()
        .args(["--master", master, "--ledger", ledger, "attend", "--replay", &replay])
        .assert()
        .success();
}

#[test]
fn test_export_csv() {
    let master = temp_path("export_csv_master", "csv");
    let ledger = temp_path("export_csv_ledger", "csv");
    seed_ledger("export_csv", &master, &ledger);

    let out = temp_path("export_csv_out", "csv");

    kiosk()
        .args(["--ledger", &ledger, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("Date,Time,ID,Name,ALC Level,Attendance Status,Test Status"));
    assert!(content.contains("7,Alice,4000,Absent,NG"));
}

#[test]
fn test_export_json() {
    let master = temp_path("export_json_master", "csv");
    let ledger = temp_path("export_json_ledger", "csv");
    seed_ledger("export_json", &master, &ledger);

    let out = temp_path("export_json_out", "json");

    kiosk()
        .args(["--ledger", &ledger, "export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("\"name\": \"Alice\""));
    assert!(content.contains("\"test\": \"NG\""));
}

#[test]
fn test_export_xlsx() {
    let master = temp_path("export_xlsx_master", "csv");
    let ledger = temp_path("export_xlsx_ledger", "csv");
    seed_ledger("export_xlsx", &master, &ledger);

    let out = temp_path("export_xlsx_out", "xlsx");

    kiosk()
        .args(["--ledger", &ledger, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).unwrap();
    assert!(meta.len() > 0);
}

#[test]
fn test_export_period_with_no_rows_warns() {
    let master = temp_path("export_empty_master", "csv");
    let ledger = temp_path("export_empty_ledger", "csv");
    seed_ledger("export_empty", &master, &ledger);

    let out = temp_path("export_empty_out", "csv");

    kiosk()
        .args([
            "--ledger", &ledger, "export", "--format", "csv", "--file", &out, "--period", "1999",
        ])
        .assert()
        .success()
        .stdout(contains("No attendance rows found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_relative_path_is_rejected() {
    let master = temp_path("export_rel_master", "csv");
    let ledger = temp_path("export_rel_ledger", "csv");
    seed_ledger("export_rel", &master, &ledger);

    kiosk()
        .args(["--ledger", &ledger, "export", "--format", "csv", "--file", "out.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let master = temp_path("export_force_master", "csv");
    let ledger = temp_path("export_force_ledger", "csv");
    seed_ledger("export_force", &master, &ledger);

    let out = temp_path("export_force_out", "csv");
    fs::write(&out, "already here").unwrap();

    kiosk()
        .args(["--ledger", &ledger, "export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));

    // With --force the file is replaced.
    kiosk()
        .args([
            "--ledger", &ledger, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("Alice"));
}
