use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ram(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ram").unwrap();
    cmd.env("RAM_DATA_DIR", data_dir.path())
        .env_remove("RAM_PIN")
        .env_remove("RAM_NEW_PIN")
        .env("RUST_LOG", "ram=warn");
    cmd
}

fn enroll(data_dir: &TempDir) {
    ram(data_dir)
        .args(["pin", "set", "--new-pin", "2468"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PIN set."));
}

#[test]
fn test_debt_add_and_list() {
    let dir = TempDir::new().unwrap();

    ram(&dir)
        .args(["debt", "add", "Alice", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: Alice owes you $50.00"));

    ram(&dir)
        .args(["debt", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice owes you $50.00"));

    assert!(dir.path().join("data").join("debts.json").exists());
}

#[test]
fn test_debt_invalid_amount_rejected() {
    let dir = TempDir::new().unwrap();

    ram(&dir)
        .args(["debt", "add", "Bob", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));

    ram(&dir)
        .args(["debt", "list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No debts recorded."));
}

#[test]
fn test_debt_total_and_delete() {
    let dir = TempDir::new().unwrap();

    ram(&dir).args(["debt", "add", "Alice", "50"]).assert().success();
    ram(&dir).args(["debt", "add", "Bob", "12.50"]).assert().success();

    ram(&dir)
        .args(["debt", "total"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$62.50"));

    ram(&dir)
        .args(["debt", "delete", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted: Alice ($50.00)"));

    ram(&dir)
        .args(["debt", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob owes you $12.50"))
        .stdout(predicate::str::contains("Alice").not());
}

#[test]
fn test_credential_add_requires_authentication() {
    let dir = TempDir::new().unwrap();

    ram(&dir)
        .args(["credential", "add", "example.com", "alice", "-p", "hunter2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication required"));

    ram(&dir)
        .args(["credential", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Authenticate to view passwords"));
}

#[test]
fn test_credentials_with_pin() {
    let dir = TempDir::new().unwrap();
    enroll(&dir);

    ram(&dir)
        .args(["--pin", "2468", "credential", "add", "example.com", "alice"])
        .args(["-p", "hunter2"])
        .assert()
        .success();

    ram(&dir)
        .args(["--pin", "2468", "credential", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Website: example.com"))
        .stdout(predicate::str::contains("hunter2"));

    ram(&dir)
        .args(["--pin", "0000", "credential", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Authenticate to view passwords"))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn test_credential_delete() {
    let dir = TempDir::new().unwrap();
    enroll(&dir);

    for site in ["example.com", "example.org"] {
        ram(&dir)
            .env("RAM_PIN", "2468")
            .args(["credential", "add", site, "alice", "-p", "pw"])
            .assert()
            .success();
    }

    ram(&dir)
        .env("RAM_PIN", "2468")
        .args(["credential", "delete", "0"])
        .assert()
        .success();

    ram(&dir)
        .env("RAM_PIN", "2468")
        .args(["credential", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("example.org"))
        .stdout(predicate::str::contains("example.com").not());
}

#[test]
fn test_launch_shows_both_sections() {
    let dir = TempDir::new().unwrap();
    ram(&dir).args(["debt", "add", "Alice", "50"]).assert().success();

    ram(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Debts Owed to You"))
        .stdout(predicate::str::contains("Alice owes you $50.00"))
        .stdout(predicate::str::contains("Authenticate to view passwords"));
}

#[test]
fn test_locked_add_without_password_does_not_prompt() {
    let dir = TempDir::new().unwrap();

    ram(&dir)
        .args(["credential", "add", "example.com", "alice"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Password:").not())
        .stderr(predicate::str::contains("Authentication required to add passwords"));
}

#[test]
fn test_unlock_reports_phase() {
    let dir = TempDir::new().unwrap();
    enroll(&dir);

    ram(&dir)
        .args(["--pin", "2468", "credential", "unlock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Passwords: unlocked"));

    ram(&dir)
        .args(["--pin", "0000", "credential", "unlock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Authentication failed: "))
        .stdout(predicate::str::contains("Passwords: locked"));
}
