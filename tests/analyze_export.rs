//! Round-trip test for the analyze command's JSON export

use oxo::cli::commands::analyze::{AnalyzeArgs, execute};

#[test]
fn export_writes_a_parseable_report() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("analysis.json");

    execute(AnalyzeArgs {
        state: Some("XX.O.....".to_string()),
        export: Some(path.clone()),
    })
    .expect("analyze should succeed on an open position");

    let file = std::fs::File::open(&path).expect("export file exists");
    let reports: serde_json::Value = serde_json::from_reader(file).expect("export parses");

    let report = &reports[0];
    assert_eq!(report["board"], "XX.O.....");
    assert_eq!(report["to_move"], "O");
    // Every other reply loses to the top row immediately
    assert_eq!(report["best_move"], 2);
    assert_eq!(report["values"].as_array().unwrap().len(), 6);
}

#[test]
fn rejects_unreachable_positions() {
    let result = execute(AnalyzeArgs {
        state: Some("XXX......".to_string()),
        export: None,
    });
    assert!(result.is_err());
}
