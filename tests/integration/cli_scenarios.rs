// tests/integration/cli_scenarios.rs
use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::TempWorkspace;

fn batch_filesize() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_batch_filesize"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    batch_filesize()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("batch_filesize"))
        .stdout(predicate::str::contains("--ext"));
}

#[test]
fn empty_root_writes_header_only() {
    let ws = TempWorkspace::new("cli_empty");
    let data = ws.create_data_dir();

    batch_filesize()
        .arg(&data)
        .arg("-o")
        .arg(ws.report())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(ws.read_report(), "uid,nBytes\n");
}

#[test]
fn marked_file_is_excluded() {
    let ws = TempWorkspace::new("cli_marker");
    ws.create_sized("abc123456789012345678901TF.mp4", 8);
    ws.create_sized("abc123456789012345678901TG.mp4", 9);

    batch_filesize().arg(ws.data()).arg("-o").arg(ws.report()).assert().success();

    assert_eq!(ws.report_rows(), vec!["456789012345678901TG,9"]);
}

#[test]
fn row_holds_last_twenty_stem_characters() {
    let ws = TempWorkspace::new("cli_row");
    ws.create_sized("video_00000000000000000001.mp4", 1_048_576);

    batch_filesize()
        .arg(ws.data())
        .arg("--output")
        .arg(ws.report())
        .assert()
        .success()
        .stdout("0000:0001\n");

    assert_eq!(ws.read_report(), "uid,nBytes\n00000000000000000001,1048576\n");
}

#[test]
fn nested_directories_are_scanned() {
    let ws = TempWorkspace::new("cli_nested");
    ws.create_sized("2021/11/15/cam1_aaaaaaaaaaaaaaaaaaaa.mp4", 1);
    ws.create_sized("2021/11/16/cam1_bbbbbbbbbbbbbbbbbbbb.mp4", 2);
    ws.create_sized("top_cccccccccccccccccccc.mp4", 3);

    batch_filesize()
        .arg(ws.data())
        .arg("-o")
        .arg(ws.report())
        .arg("--sort")
        .assert()
        .success()
        .stdout("0000:0003\n0001:0003\n0002:0003\n");

    assert_eq!(
        ws.report_rows(),
        vec!["aaaaaaaaaaaaaaaaaaaa,1", "bbbbbbbbbbbbbbbbbbbb,2", "cccccccccccccccccccc,3"]
    );
}

#[test]
fn missing_output_parent_fails_without_file() {
    let ws = TempWorkspace::new("cli_no_parent");
    ws.create_sized("clip.mp4", 1);
    let output = ws.path().join("absent").join("log.csv");

    batch_filesize()
        .arg(ws.data())
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to create report"));

    assert!(!output.exists());
}

#[test]
fn missing_root_fails() {
    let ws = TempWorkspace::new("cli_no_root");

    batch_filesize()
        .arg(ws.path().join("nowhere"))
        .arg("-o")
        .arg(ws.report())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not accessible"));

    assert!(!ws.report().exists());
}

#[test]
fn quiet_suppresses_progress() {
    let ws = TempWorkspace::new("cli_quiet");
    ws.create_sized("clip.mp4", 4);

    batch_filesize()
        .arg(ws.data())
        .arg("-o")
        .arg(ws.report())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(ws.report_rows(), vec!["clip,4"]);
}

#[test]
fn other_extension_and_default_report_name() {
    let ws = TempWorkspace::new("cli_ext");
    ws.create_sized("a.mkv", 5);
    ws.create_sized("b.mp4", 6);

    batch_filesize()
        .current_dir(ws.path())
        .arg("data")
        .arg("--ext")
        .arg(".mkv")
        .assert()
        .success();

    let report = fs::read_to_string(ws.path().join("log-size-mkv.csv")).unwrap();
    assert_eq!(report, "uid,nBytes\na,5\n");
}

#[test]
fn invalid_extension_is_rejected() {
    let ws = TempWorkspace::new("cli_bad_ext");
    let data = ws.create_data_dir();

    batch_filesize()
        .arg(&data)
        .arg("--ext")
        .arg("mp4")
        .arg("-o")
        .arg(ws.report())
        .assert()
        .failure()
        .stderr(predicate::str::contains("must start with '.'"));

    assert!(!ws.report().exists());
}

#[test]
fn config_file_supplies_settings() {
    let ws = TempWorkspace::new("cli_config");
    ws.create_sized("clip_zzzzzzzzzzzzzzzzzzzz.mp4", 12);
    let config = ws.path().join("scan.yaml");
    fs::write(&config, "root: data\noutput: sizes.csv\nquiet: true\n").unwrap();

    batch_filesize()
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let report = fs::read_to_string(ws.path().join("sizes.csv")).unwrap();
    assert_eq!(report, "uid,nBytes\nzzzzzzzzzzzzzzzzzzzz,12\n");
}
