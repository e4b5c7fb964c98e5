use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn pompilot(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("pompilot");
    cmd.current_dir(dir.path()).env("HOME", dir.path());
    cmd
}

#[test]
fn help_prints_usage_and_fails() {
    let dir = tempfile::tempdir().unwrap();
    for flag in ["--help", "--h"] {
        pompilot(&dir)
            .args([flag, "demo", "a:b:c"])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("POM Pilot"))
            .stderr(predicate::str::is_empty());
    }
    assert!(!dir.path().join("demo").exists());
}

#[test]
fn missing_dependencies_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    pompilot(&dir)
        .arg("demo")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("pompilot [options] project-name"));

    pompilot(&dir).assert().code(1).stdout(predicate::str::contains("POM Pilot"));
}

#[test]
fn generates_project_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    pompilot(&dir)
        .args(["project-demo", "junit:junit:4.12:scope=test"])
        .assert()
        .success();

    let root = dir.path().join("project-demo");
    assert!(root.join("pom.xml").is_file());
    assert!(root.join("src/main/java/project/demo/App.java").is_file());
    assert!(root.join("src/test/java/project/demo/AppTest.java").is_file());
    assert!(root.join("src/main/resources/log4j.properties").is_file());
}

#[test]
fn invalid_name_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    pompilot(&dir)
        .args(["bad!name", "a:b:c"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: invalid project name"))
        .stderr(predicate::str::contains("Trace:").not());
}

#[test]
fn debug_adds_trace_detail() {
    let dir = tempfile::tempdir().unwrap();
    pompilot(&dir)
        .args(["--debug", "bad!name", "a:b:c"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: invalid project name"))
        .stderr(predicate::str::contains("Trace:"))
        .stderr(predicate::str::contains("InvalidProjectName"));
}

#[test]
fn malformed_dependency_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    pompilot(&dir)
        .args(["project-demo", "junit:junit:4.12:badfield"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: malformed dependency field"));
    assert!(!dir.path().join("project-demo").exists());
}

#[test]
fn leading_double_dash_is_the_project_name() {
    let dir = tempfile::tempdir().unwrap();
    pompilot(&dir)
        .args(["--", "demo", "a:b:c"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: invalid project name \"--\""));
    assert!(!dir.path().join("demo").exists());
}

#[test]
fn blocked_directory_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("demo"), "not a directory").unwrap();

    pompilot(&dir)
        .args(["demo", "a:b:c"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: failed to create directory"));
}

#[test]
fn unused_option_is_warned_about() {
    let dir = tempfile::tempdir().unwrap();
    pompilot(&dir)
        .args(["--typo", "demo", "a:b:c"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Ignoring unknown option --typo"));
}

#[test]
fn bad_config_file_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    pompilot(&dir)
        .args(["--config=absent.toml", "demo", "a:b:c"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: failed to read config"));
}
