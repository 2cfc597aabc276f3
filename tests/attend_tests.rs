use predicates::str::contains;
use std::fs;

mod common;
use common::{init_ledgers, kiosk, temp_path, write_master, write_replay};

#[test]
fn test_attend_commits_completed_record() {
    let master = temp_path("attend_commit_master", "csv");
    let ledger = temp_path("attend_commit_ledger", "csv");
    init_ledgers(&master, &ledger);
    write_master(&master, &[(7, "Alice")]);

    let replay = write_replay(
        "attend_commit",
        &[
            "Fingerprint ID found: 7",
            "ID: 7, ALC: 4000",
            "Status: Absent",
        ],
    );

    kiosk()
        .args(["--master", &master, "--ledger", &ledger, "attend", "--replay", &replay])
        .assert()
        .success()
        .stdout(contains("Attendance logged for ID 7 (Alice) with level 4000"));

    let content = fs::read_to_string(&ledger).unwrap();
    assert!(content.starts_with("Date,Time,ID,Name,ALC Level,Attendance Status,Test Status"));
    assert!(content.contains("7,Alice,4000,Absent,NG"));
}

#[test]
fn test_attend_below_threshold_is_present_ok() {
    let master = temp_path("attend_present_master", "csv");
    let ledger = temp_path("attend_present_ledger", "csv");
    init_ledgers(&master, &ledger);
    write_master(&master, &[(3, "Bob")]);

    let replay = write_replay(
        "attend_present",
        &[
            "Fingerprint ID found: 3",
            "ID: 3, ALC: 1200",
            "Status: Present, OK",
        ],
    );

    kiosk()
        .args(["--master", &master, "--ledger", &ledger, "attend", "--replay", &replay])
        .assert()
        .success();

    let content = fs::read_to_string(&ledger).unwrap();
    assert!(content.contains("3,Bob,1200,Present,OK"));
}

#[test]
fn test_attend_missing_data_drops_record() {
    let master = temp_path("attend_missing_master", "csv");
    let ledger = temp_path("attend_missing_ledger", "csv");
    init_ledgers(&master, &ledger);
    write_master(&master, &[(3, "Bob")]);

    // No identity line before the commit trigger: the name is never set.
    let replay = write_replay("attend_missing", &["ID: 3, ALC: 1200", "Status: Present, OK"]);

    kiosk()
        .args(["--master", &master, "--ledger", &ledger, "attend", "--replay", &replay])
        .assert()
        .success()
        .stderr(contains("Missing data"));

    let content = fs::read_to_string(&ledger).unwrap();
    assert_eq!(content.lines().count(), 1, "only the header row expected");
}

#[test]
fn test_attend_unknown_token_uses_sentinel_name() {
    let master = temp_path("attend_unknown_master", "csv");
    let ledger = temp_path("attend_unknown_ledger", "csv");
    init_ledgers(&master, &ledger);
    write_master(&master, &[(7, "Alice")]);

    let replay = write_replay(
        "attend_unknown",
        &[
            "Fingerprint ID found: 99",
            "ID: 99, ALC: 50",
            "Status: Present, OK",
        ],
    );

    kiosk()
        .args(["--master", &master, "--ledger", &ledger, "attend", "--replay", &replay])
        .assert()
        .success();

    let content = fs::read_to_string(&ledger).unwrap();
    assert!(content.contains("99,Unknown User,50,Present,OK"));
}

#[test]
fn test_attend_noise_lines_are_ignored() {
    let master = temp_path("attend_noise_master", "csv");
    let ledger = temp_path("attend_noise_ledger", "csv");
    init_ledgers(&master, &ledger);
    write_master(&master, &[(7, "Alice")]);

    let replay = write_replay(
        "attend_noise",
        &[
            "Sensor warming up...",
            "Fingerprint ID found: 7",
            "some debug chatter",
            "ID: 7, ALC: 10",
            "Status: Present, OK",
        ],
    );

    kiosk()
        .args(["--master", &master, "--ledger", &ledger, "attend", "--replay", &replay])
        .assert()
        .success();

    let content = fs::read_to_string(&ledger).unwrap();
    assert_eq!(content.lines().count(), 2, "header plus one committed row");
}

#[test]
fn test_attend_missing_master_ledger_is_fatal() {
    let master = temp_path("attend_nomaster_master", "csv");
    let ledger = temp_path("attend_nomaster_ledger", "csv");
    init_ledgers(&master, &ledger);
    fs::remove_file(&master).unwrap();

    let replay = write_replay("attend_nomaster", &["Status: Absent"]);

    kiosk()
        .args(["--master", &master, "--ledger", &ledger, "attend", "--replay", &replay])
        .assert()
        .failure()
        .stderr(contains("Required ledger file not found"));
}

#[test]
fn test_attend_missing_attendance_ledger_is_fatal() {
    let master = temp_path("attend_noledger_master", "csv");
    let ledger = temp_path("attend_noledger_ledger", "csv");
    init_ledgers(&master, &ledger);
    write_master(&master, &[(7, "Alice")]);
    fs::remove_file(&ledger).unwrap();

    let replay = write_replay("attend_noledger", &["Status: Absent"]);

    kiosk()
        .args(["--master", &master, "--ledger", &ledger, "attend", "--replay", &replay])
        .assert()
        .failure()
        .stderr(contains("Required ledger file not found"));
}

#[test]
fn test_attend_header_enforcement_is_idempotent() {
    let master = temp_path("attend_header_master", "csv");
    let ledger = temp_path("attend_header_ledger", "csv");
    init_ledgers(&master, &ledger);
    write_master(&master, &[(7, "Alice")]);

    let replay = write_replay("attend_header", &[]);

    for _ in 0..2 {
        kiosk()
            .args(["--master", &master, "--ledger", &ledger, "attend", "--replay", &replay])
            .assert()
            .success();
    }

    let content = fs::read_to_string(&ledger).unwrap();
    assert_eq!(
        content.trim(),
        "Date,Time,ID,Name,ALC Level,Attendance Status,Test Status"
    );
}

#[test]
fn test_attend_corrects_mismatched_header() {
    let master = temp_path("attend_fixheader_master", "csv");
    let ledger = temp_path("attend_fixheader_ledger", "csv");
    init_ledgers(&master, &ledger);
    write_master(&master, &[(7, "Alice")]);

    fs::write(&ledger, "Date,Time,ID,Name,Alcohol,Status,Check\n").unwrap();

    let replay = write_replay("attend_fixheader", &[]);

    kiosk()
        .args(["--master", &master, "--ledger", &ledger, "attend", "--replay", &replay])
        .assert()
        .success()
        .stdout(contains("Attendance ledger header written."));

    let content = fs::read_to_string(&ledger).unwrap();
    assert!(content.starts_with("Date,Time,ID,Name,ALC Level,Attendance Status,Test Status"));
}
