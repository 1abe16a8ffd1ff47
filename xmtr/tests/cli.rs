use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Run the binary from an empty directory so no stray xmtr.toml is picked up.
fn xmtr(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("xmtr").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn scales_engineering_value_to_raw() {
    let dir = TempDir::new().unwrap();

    xmtr(&dir)
        .args(["--signal", "0-10v", "to-raw", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: Raw Count (16-bit): 32768"))
        .stdout(predicate::str::contains("Calculated Voltage: 5.000 V"))
        .stdout(predicate::str::contains("Percent of Span: 50.0%"));
}

#[test]
fn reads_channel_from_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("xmtr.toml"),
        "[channel]\nurv = 250.0\nresolution = 12\nsignal = \"4-20ma\"\n",
    )
    .unwrap();

    xmtr(&dir)
        .args(["to-eng", "0x0CCC"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: Engineering Value: 250.0000"))
        .stdout(predicate::str::contains("Calculated Current: 20.00 mA"));
}

#[test]
fn flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("loop.toml");
    fs::write(&path, "[channel]\nurv = 250.0\nsignal = \"4-20ma\"\n").unwrap();

    xmtr(&dir)
        .arg("--config")
        .arg(&path)
        .args(["--urv", "100", "to-raw", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Raw Count (16-bit): 65535"))
        .stdout(predicate::str::contains("Calculated Current: 20.00 mA"));
}

#[test]
fn json_output() {
    let dir = TempDir::new().unwrap();

    let output = xmtr(&dir)
        .args(["--json", "to-eng", "0"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["result"]["percent_of_span"], 0.0);
}

#[test]
fn reports_validation_failures() {
    let dir = TempDir::new().unwrap();

    xmtr(&dir)
        .args(["to-eng", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Raw count must be between 0 and 65535"));

    xmtr(&dir)
        .args(["--lrv", "10", "--urv", "5", "to-raw", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("LRV must be less than URV"));

    xmtr(&dir)
        .args(["--resolution", "12", "--signal", "4-20ma", "to-eng", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Raw count for 4–20 mA at 12-bit must be between 655 and 3276",
        ));

    xmtr(&dir)
        .args(["to-raw", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid engineering value"));
}

#[test]
fn lists_signals() {
    let dir = TempDir::new().unwrap();

    xmtr(&dir)
        .arg("signals")
        .assert()
        .success()
        .stdout(predicate::str::contains("4–20 mA"))
        .stdout(predicate::str::contains("Voltage (1–5V)"));
}
