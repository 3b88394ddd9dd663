#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use chrono::Local;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn todo_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("todo"));
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("TODO_FILE")
        .env_remove("TODO_DONE_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

fn add(dir: &Path, text: &str) {
    todo_cmd(dir).args(["add", text]).assert().success();
}

#[test]
fn no_command_prints_usage_and_creates_no_files() {
    let temp = TempDir::new().unwrap();

    todo_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Usage :-"))
        .stdout(predicate::str::contains("$ ./todo report           # Statistics"));

    assert!(!temp.path().join("todo.txt").exists());
    assert!(!temp.path().join("done.txt").exists());
}

#[test]
fn unknown_command_prints_usage() {
    let temp = TempDir::new().unwrap();
    todo_cmd(temp.path())
        .args(["remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage :-"));
    assert!(!temp.path().join("todo.txt").exists());
}

#[test]
fn newest_is_one_and_listed_first_oldest_is_k_and_listed_last() {
    let temp = TempDir::new().unwrap();

    todo_cmd(temp.path())
        .args(["add", "the thing i need to do"])
        .assert()
        .success()
        .stdout("Added todo: \"the thing i need to do\"\n");
    add(temp.path(), "water the plants");
    add(temp.path(), "change light bulb");

    let output = todo_cmd(temp.path()).arg("ls").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let listed: Vec<&str> = stdout.lines().collect();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed.first(), Some(&"[1] change light bulb"));
    assert_eq!(listed.last(), Some(&"[3] the thing i need to do"));
    assert_eq!(
        listed,
        vec!["[1] change light bulb", "[2] water the plants", "[3] the thing i need to do"]
    );

    let stored = fs::read_to_string(temp.path().join("todo.txt")).unwrap();
    let lines: Vec<&str> = stored.lines().collect();
    assert_eq!(
        lines,
        vec!["the thing i need to do", "water the plants", "change light bulb"]
    );
}

#[test]
fn help_flag_after_add_is_stored_as_text() {
    let temp = TempDir::new().unwrap();
    todo_cmd(temp.path())
        .args(["add", "-h"])
        .assert()
        .success()
        .stdout("Added todo: \"-h\"\n");
    assert_eq!(
        fs::read_to_string(temp.path().join("todo.txt")).unwrap().trim_end(),
        "-h"
    );
}

#[test]
fn unknown_flags_print_usage_and_exit_zero() {
    let temp = TempDir::new().unwrap();
    for flag in ["--bogus", "-h", "--help"] {
        todo_cmd(temp.path())
            .arg(flag)
            .assert()
            .code(0)
            .stdout(predicate::str::contains("Usage :-"));
    }
    assert!(!temp.path().join("todo.txt").exists());
}

#[test]
fn command_names_are_case_insensitive() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "a");
    todo_cmd(temp.path())
        .arg("LS")
        .assert()
        .success()
        .stdout("[1] a\n");
}

#[test]
fn empty_list() {
    let temp = TempDir::new().unwrap();
    todo_cmd(temp.path())
        .arg("ls")
        .assert()
        .success()
        .stdout("There are no pending todos!\n");
}

#[test]
fn add_without_text() {
    let temp = TempDir::new().unwrap();
    todo_cmd(temp.path())
        .arg("add")
        .assert()
        .success()
        .stdout("Error: Missing todo string. Nothing added!\n");
    assert!(!temp.path().join("todo.txt").exists());
}

#[test]
fn delete_by_display_number() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "one");
    add(temp.path(), "two");
    add(temp.path(), "three");

    todo_cmd(temp.path())
        .args(["del", "3"])
        .assert()
        .success()
        .stdout("Deleted todo #3\n");

    todo_cmd(temp.path())
        .arg("ls")
        .assert()
        .success()
        .stdout("[1] three\n[2] two\n");
}

#[test]
fn delete_invalid_numbers_leave_file_untouched() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "one");
    add(temp.path(), "two");
    let before = fs::read_to_string(temp.path().join("todo.txt")).unwrap();

    for (arg, shown) in [("0", "0"), ("3", "3"), ("-1", "-1"), ("abc", "0")] {
        todo_cmd(temp.path())
            .args(["del", arg])
            .assert()
            .success()
            .stdout(format!(
                "Error: todo #{} does not exist. Nothing deleted.\n",
                shown
            ));
    }

    todo_cmd(temp.path())
        .arg("del")
        .assert()
        .success()
        .stdout("Error: Missing NUMBER for deleting todo.\n");

    let after = fs::read_to_string(temp.path().join("todo.txt")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn delete_with_no_todo_file() {
    let temp = TempDir::new().unwrap();
    todo_cmd(temp.path())
        .args(["del", "1"])
        .assert()
        .success()
        .stdout("Error: todo #1 does not exist. Nothing deleted.\n");
    assert!(!temp.path().join("todo.txt").exists());
}

#[test]
fn done_round_trip() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "buy milk");

    todo_cmd(temp.path())
        .args(["done", "1"])
        .assert()
        .success()
        .stdout("Marked todo #1 as done.\n");

    todo_cmd(temp.path())
        .arg("ls")
        .assert()
        .success()
        .stdout("There are no pending todos!\n");

    let done = fs::read_to_string(temp.path().join("done.txt")).unwrap();
    assert_eq!(done.lines().collect::<Vec<_>>(), vec![format!("x {} buy milk", today())]);
}

#[test]
fn done_errors() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "one");

    todo_cmd(temp.path())
        .args(["done", "2"])
        .assert()
        .success()
        .stdout("Error: todo #2 does not exist. Nothing Marked as done.\n");

    for args in [vec!["done"], vec!["done", "first"]] {
        todo_cmd(temp.path())
            .args(&args)
            .assert()
            .success()
            .stdout("Error: Missing NUMBER for marking todo as done.\n");
    }

    assert!(!temp.path().join("done.txt").exists());
}

#[test]
fn report_counts_both_lists() {
    let temp = TempDir::new().unwrap();

    todo_cmd(temp.path())
        .arg("report")
        .assert()
        .success()
        .stdout(format!("{} Pending : 0 Completed : 0\n", today()));

    add(temp.path(), "a");
    add(temp.path(), "b");
    add(temp.path(), "c");
    todo_cmd(temp.path()).args(["done", "2"]).assert().success();

    todo_cmd(temp.path())
        .arg("report")
        .assert()
        .success()
        .stdout(format!("{} Pending : 2 Completed : 1\n", today()));
}

#[test]
fn file_locations_from_flags_and_env() {
    let temp = TempDir::new().unwrap();

    todo_cmd(temp.path())
        .args(["--todo-file", "lists/pending.txt", "add", "flagged"])
        .assert()
        .success();
    assert!(temp.path().join("lists").join("pending.txt").exists());

    todo_cmd(temp.path())
        .env("TODO_FILE", "lists/pending.txt")
        .env("TODO_DONE_FILE", "lists/finished.txt")
        .args(["done", "1"])
        .assert()
        .success();

    let done = fs::read_to_string(temp.path().join("lists").join("finished.txt")).unwrap();
    assert!(done.ends_with("flagged\n"));
    assert!(!temp.path().join("todo.txt").exists());
}

#[test]
fn file_locations_from_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("todo-config.json"),
        r#"{ "todo_file": "tasks.txt", "done_file": "archive.txt" }"#,
    )
    .unwrap();

    add(temp.path(), "configured");
    assert!(temp.path().join("tasks.txt").exists());
    assert!(!temp.path().join("todo.txt").exists());
}

#[test]
fn broken_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("todo-config.json"), "not json").unwrap();

    todo_cmd(temp.path())
        .arg("ls")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let temp = TempDir::new().unwrap();
    todo_cmd(temp.path())
        .args(["-v", "add", "quiet stdout"])
        .assert()
        .success()
        .stdout("Added todo: \"quiet stdout\"\n")
        .stderr(predicate::str::contains("added todo"));
}
