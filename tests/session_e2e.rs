use assert_cmd::Command;
use predicates::prelude::*;

fn phonebook(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.arg("--config-dir")
        .arg(config_dir)
        .arg("--no-color")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_and_display_all() {
    let temp_dir = tempfile::tempdir().unwrap();

    phonebook(temp_dir.path())
        .write_stdin("1\nAlice\n555-1111\n1\nBob\n555-2222\n4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("New entry successfully added."))
        .stdout(predicate::str::contains(format!(
            "{:<20} {:<15}\n{:<20} {:<15} \n{:<20} {:<15} \n",
            "Name", "Phone", "Alice", "555-1111", "Bob", "555-2222"
        )))
        .stdout(predicate::str::ends_with("Quitting program...\n"));
}

#[test]
fn delete_and_find_missing_name() {
    let temp_dir = tempfile::tempdir().unwrap();

    phonebook(temp_dir.path())
        .write_stdin("2\nNobody\n3\nNobody\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No person named Nobody found.").count(2));
}

#[test]
fn duplicates_are_removed_oldest_first() {
    let temp_dir = tempfile::tempdir().unwrap();

    phonebook(temp_dir.path())
        .write_stdin("1\nAlice\n1\n1\nAlice\n2\n2\nAlice\n3\nAlice\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice removed."))
        .stdout(predicate::str::contains(format!("{:<20} {:<15} \n", "Alice", "2")))
        .stdout(predicate::str::contains(format!("{:<20} {:<15} \n", "Alice", "1")).not());
}

#[test]
fn invalid_choice_reprompts_menu() {
    let temp_dir = tempfile::tempdir().unwrap();

    phonebook(temp_dir.path())
        .write_stdin("7\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input, please try again."))
        .stdout(predicate::str::contains("1) Add").count(2));
}

#[test]
fn end_of_input_quits_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();

    phonebook(temp_dir.path())
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Quitting program...\n"));
}

#[test]
fn config_widths_are_applied() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{"name_width": 8, "phone_width": 6}"#,
    )
    .unwrap();

    phonebook(temp_dir.path())
        .write_stdin("4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name     Phone \n"));
}

#[test]
fn malformed_config_is_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("config.json"), "{ nope").unwrap();

    phonebook(temp_dir.path())
        .write_stdin("5\n")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: Serialization error"));
}
