// tests/integration/end_to_end.rs
use batch_filesize::app;
use batch_filesize_domain::ScanConfig;
use batch_filesize_shared_kernel::{BatchFilesizeError, FilesystemError};

use crate::common::TempWorkspace;

fn config_for(ws: &TempWorkspace) -> ScanConfig {
    ScanConfig::builder()
        .root(ws.data())
        .output(Some(ws.report()))
        .sort(true)
        .quiet(true)
        .build()
        .expect("config builds")
}

fn filesystem_error(err: BatchFilesizeError) -> FilesystemError {
    match err {
        BatchFilesizeError::Context { source, .. } => filesystem_error(*source),
        BatchFilesizeError::Filesystem(fs) => fs,
        other => panic!("expected a filesystem error, got {other:?}"),
    }
}

#[test]
fn row_count_is_matches_minus_marked_files() {
    let ws = TempWorkspace::new("counts");
    ws.create_sized("a/clip_aaaaaaaaaaaaaaaaaaaa.mp4", 1);
    ws.create_sized("a/clip_bbbbbbbbbbbbbbbbbbbbTF.mp4", 2);
    ws.create_sized("b/clip_cccccccccccccccccccc.mp4", 3);
    ws.create_sized("b/c/clip_ddddddddddddddddddTF.mp4", 4);
    ws.create_sized("b/c/clip_eeeeeeeeeeeeeeeeeeee.mp4", 5);
    ws.create_sized("b/c/readme.txt", 6);

    let summary = app::run(&config_for(&ws)).expect("run succeeds");

    assert_eq!(summary.discovered, 5);
    assert_eq!(summary.excluded, 2);
    assert_eq!(summary.written, 3);
    assert_eq!(summary.total_size.bytes(), 9);
    assert_eq!(
        ws.report_rows(),
        // Sorted by path components: "b/c/..." precedes "b/clip_...".
        vec!["aaaaaaaaaaaaaaaaaaaa,1", "eeeeeeeeeeeeeeeeeeee,5", "cccccccccccccccccccc,3"]
    );
}

#[test]
fn rows_carry_stem_tail_and_exact_size() {
    let ws = TempWorkspace::new("rows");
    ws.create_sized("session/video_00000000000000000001.mp4", 1_048_576);
    ws.create_sized("session/short.mp4", 17);

    app::run(&config_for(&ws)).expect("run succeeds");

    let text = ws.read_report();
    assert!(text.starts_with("uid,nBytes\n"));
    let rows = ws.report_rows();
    assert!(rows.contains(&"00000000000000000001,1048576".to_string()));
    assert!(rows.contains(&"short,17".to_string()));
}

#[test]
fn empty_root_yields_header_only() {
    let ws = TempWorkspace::new("empty");
    ws.create_data_dir();

    let summary = app::run(&config_for(&ws)).expect("run succeeds");

    assert_eq!(summary.written, 0);
    assert_eq!(ws.read_report(), "uid,nBytes\n");
}

#[test]
fn rerun_on_unchanged_tree_is_byte_identical() {
    let ws = TempWorkspace::new("idempotent");
    ws.create_sized("x/one_11111111111111111111.mp4", 10);
    ws.create_sized("y/two_22222222222222222222.mp4", 20);
    ws.create_sized("y/z/three_33333333333333333333.mp4", 30);
    let config = config_for(&ws);

    app::run(&config).unwrap();
    let first = std::fs::read(ws.report()).unwrap();
    app::run(&config).unwrap();
    let second = std::fs::read(ws.report()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn rerun_in_walk_order_is_byte_identical() {
    let ws = TempWorkspace::new("idempotent_walk");
    ws.create_sized("x/one_11111111111111111111.mp4", 10);
    ws.create_sized("y/two_22222222222222222222.mp4", 20);
    ws.create_sized("y/z/three_33333333333333333333.mp4", 30);
    ws.create_sized("y/z/four_4444444444444444444TF.mp4", 40);
    let config = ScanConfig::builder()
        .root(ws.data())
        .output(Some(ws.report()))
        .quiet(true)
        .build()
        .unwrap();

    let summary = app::run(&config).unwrap();
    let first = std::fs::read(ws.report()).unwrap();
    app::run(&config).unwrap();
    let second = std::fs::read(ws.report()).unwrap();

    assert_eq!(summary.written, 3);
    assert_eq!(first, second);
}

#[test]
fn short_name_under_marker_directory_is_excluded() {
    let ws = TempWorkspace::new("short_marker");
    ws.create_sized("TF/a.s", 1);
    ws.create_sized("keep/b.s", 2);
    let config = ScanConfig::builder()
        .root(ws.data())
        .extension(".s")
        .output(Some(ws.report()))
        .quiet(true)
        .build()
        .unwrap();

    let summary = app::run(&config).unwrap();

    assert_eq!(summary.excluded, 1);
    assert_eq!(ws.read_report(), "uid,nBytes\nb,2\n");
}

#[test]
fn existing_report_is_truncated() {
    let ws = TempWorkspace::new("truncate");
    ws.create_sized("only.mp4", 3);
    std::fs::write(ws.report(), "stale contents that are much longer than the new report\n".repeat(10))
        .unwrap();

    app::run(&config_for(&ws)).unwrap();

    assert_eq!(ws.read_report(), "uid,nBytes\nonly,3\n");
}

#[test]
fn missing_output_directory_fails_without_creating_file() {
    let ws = TempWorkspace::new("no_parent");
    ws.create_sized("clip.mp4", 1);
    let output = ws.path().join("missing").join("log.csv");
    let config = ScanConfig::builder()
        .root(ws.data())
        .output(Some(output.clone()))
        .quiet(true)
        .build()
        .unwrap();

    let err = filesystem_error(app::run(&config).unwrap_err());

    assert!(matches!(err, FilesystemError::Create { .. }));
    assert!(!output.exists());
}

#[test]
fn missing_root_fails_before_report_is_created() {
    let ws = TempWorkspace::new("no_root");
    let config = config_for(&ws);

    let err = filesystem_error(app::run(&config).unwrap_err());

    assert!(matches!(err, FilesystemError::RootInaccessible { .. }));
    assert!(!ws.report().exists());
}
