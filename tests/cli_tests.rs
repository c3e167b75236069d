use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn captrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("captrack").unwrap();
    cmd.env("CAPTRACK_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn first_run_lists_default_capitals() {
    let dir = TempDir::new().unwrap();

    captrack(&dir)
        .args(["capital", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cash"))
        .stdout(predicate::str::contains("Bank Account"))
        .stdout(predicate::str::contains("$6000.00"));

    assert!(dir.path().join("data").join("captrack_capitals.json").exists());
}

#[test]
fn expense_reduces_capital_balance() {
    let dir = TempDir::new().unwrap();

    captrack(&dir)
        .args(["capital", "add", "Wallet", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added capital: Wallet"));

    captrack(&dir)
        .args([
            "expense", "add", "wallet", "12.50", "--category", "food", "--note", "Lunch",
            "--date", "2024-03-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining: $187.50"));

    captrack(&dir)
        .args(["expense", "list", "--search", "lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("2024-03-01"));

    captrack(&dir)
        .args(["show", "capitals"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$187.50"));
}

#[test]
fn invalid_amount_fails_without_saving() {
    let dir = TempDir::new().unwrap();

    captrack(&dir)
        .args(["expense", "add", "Cash", "-10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    captrack(&dir)
        .args(["expense", "add", "Cash", "NaN"])
        .assert()
        .failure();

    captrack(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found"));
}

#[test]
fn low_funds_warning_on_dashboard() {
    let dir = TempDir::new().unwrap();

    captrack(&dir)
        .args(["expense", "add", "Cash", "850", "--date", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("low on funds"));

    captrack(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: Cash is low on funds"));
}

#[test]
fn deleting_capital_removes_its_expenses() {
    let dir = TempDir::new().unwrap();

    captrack(&dir)
        .args(["expense", "add", "Cash", "25", "--note", "Taxi"])
        .assert()
        .success();

    captrack(&dir)
        .args(["capital", "delete", "Cash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Also removed 1 expense(s)"));

    captrack(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found"));
}

#[test]
fn theme_toggle_persists() {
    let dir = TempDir::new().unwrap();

    captrack(&dir)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: Dark"));

    captrack(&dir)
        .args(["show", "settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dark"));
}

#[test]
fn reset_requires_confirmation_and_restores_defaults() {
    let dir = TempDir::new().unwrap();

    captrack(&dir)
        .args(["capital", "add", "Crypto", "300"])
        .assert()
        .success();

    captrack(&dir).arg("reset").assert().failure();

    captrack(&dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default capitals restored"));

    captrack(&dir)
        .args(["capital", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Crypto").not());
}

#[test]
fn unknown_capital_is_reported() {
    let dir = TempDir::new().unwrap();

    captrack(&dir)
        .args(["expense", "add", "Nowhere", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Capital not found: Nowhere"));
}
