use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Run the binary against an empty config so the user's own file is ignored.
fn run(dir: &Path, args: &[&str]) -> Output {
    let config = dir.join("config.toml");
    if !config.exists() {
        std::fs::write(&config, "").unwrap();
    }
    Command::new(env!("CARGO_BIN_EXE_fitlab-cli"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn route_resolves_and_rejects() {
    let dir = tempfile::tempdir().unwrap();

    let ok = run(dir.path(), &["route", "#schedule"]);
    assert!(ok.status.success());
    assert!(stdout(&ok).contains("#schedule -> Schedule"));

    let unknown = run(dir.path(), &["route", "#reports"]);
    assert!(!unknown.status.success());
    let err = String::from_utf8(unknown.stderr).unwrap();
    assert!(err.contains("no route for #reports"));
}

#[test]
fn drill_json_reports_the_screen() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        dir.path(),
        &["drill", "athletes", "--select", "ath_001", "--json"],
    );
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["level"], "mid");
    assert_eq!(report["back"], "clear_all");
    assert_eq!(report["path"][0], "Maya Okafor");
    assert_eq!(report["rows"].as_array().unwrap().len(), 3);
}

#[test]
fn export_csv_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out: PathBuf = dir.path().join("sessions.csv");
    let output = run(
        dir.path(),
        &[
            "export",
            "sessions",
            "--format",
            "csv",
            "--out",
            out.to_str().unwrap(),
        ],
    );
    assert!(output.status.success());
    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("id,title,date,start,duration_min,location,battery_id,athlete_ids"));
}

#[test]
fn filters_are_athletes_only() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["list", "equipment", "--status", "injured"]);
    assert!(!output.status.success());
}

#[test]
fn fixtures_flag_replaces_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, r#"{ "as_of": "2025-01-01" }"#).unwrap();

    let output = run(
        dir.path(),
        &["--fixtures", path.to_str().unwrap(), "summary", "--json"],
    );
    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(summary["athletes"], 0);
    assert_eq!(summary["as_of"], "2025-01-01");
    assert!(summary["mean_readiness"].is_null());
}
