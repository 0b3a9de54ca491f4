#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("corvee-cli").unwrap()
}

#[test]
fn generate_prints_one_block_per_week() {
    cli()
        .args([
            "generate",
            "--employees",
            "Alice,Bob,Carol",
            "--roles",
            "Floors,Trash",
            "--seed",
            "42",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Semaine 1").and(predicate::str::contains("Semaine 2")),
        );
}

#[test]
fn show_clamps_the_requested_week() {
    cli()
        .args([
            "show",
            "--employees",
            "Alice,Bob",
            "--roles",
            "Floors,Trash",
            "--seed",
            "1",
            "--week",
            "99",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Semaine 2").and(predicate::str::contains("2 de 2")));
}

#[test]
fn empty_roster_warns_with_code_2() {
    cli()
        .args(["generate", "--roles", "Floors"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Aucun employé"));
}

#[test]
fn check_flags_forced_double_booking() {
    cli()
        .args([
            "check",
            "--employees",
            "Alice",
            "--roles",
            "Floors,Trash",
            "--seed",
            "7",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("conflict"));
}

#[test]
fn check_passes_with_enough_employees() {
    cli()
        .args([
            "check",
            "--employees",
            "Alice,Bob,Carol",
            "--roles",
            "Floors,Trash",
            "--seed",
            "7",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: no conflicts"));
}

#[test]
fn notify_writes_the_reminder_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("rappel.txt");

    cli()
        .args([
            "notify",
            "--employees",
            "Alice",
            "--roles",
            "Floors",
            "--seed",
            "3",
            "--employee",
            "Alice",
            "--week",
            "1",
            "--out",
        ])
        .arg(&out)
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.contains("Bonjour Alice"));
    assert!(content.contains("- Floors"));
}

#[test]
fn export_writes_the_three_sheets() {
    let dir = tempdir().unwrap();
    let stem = dir.path().join("Maintenance_and_Cleaning_Schedule");

    cli()
        .args([
            "export",
            "--employees",
            "Alice,Bob",
            "--roles",
            "Floors,Trash",
            "--seed",
            "5",
            "--stem",
        ])
        .arg(&stem)
        .assert()
        .success();

    for sheet in ["Assignments", "Employees", "Roles"] {
        let path = dir
            .path()
            .join(format!("Maintenance_and_Cleaning_Schedule_{sheet}.csv"));
        assert!(path.exists(), "{} manquant", path.display());
    }
}
