//! CLI tests for `sumton verify`.

use std::process::Command;

use sumton::exit_codes;

#[test]
fn verify_passes_and_reports_counts() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = Command::new(env!("CARGO_BIN_EXE_sumton"))
        .current_dir(temp.path())
        .args(["verify", "--upto", "100"])
        .output()
        .expect("sumton verify");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "verify: upto=100 checked=303 mismatches=0\n"
    );
}

#[test]
fn verify_json_report() {
    let temp = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        temp.path().join("sumton.toml"),
        "max_recursion_depth = 10\nverify_upto = 12\n",
    )
    .expect("write config");

    let output = Command::new(env!("CARGO_BIN_EXE_sumton"))
        .current_dir(temp.path())
        .args(["verify", "--json"])
        .output()
        .expect("sumton verify --json");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(report["upto"], 12);
    assert_eq!(report["skipped_recursive"], 2);
    assert_eq!(report["checked"], 37);
    assert_eq!(report["mismatches"].as_array().map(Vec::len), Some(0));
}

#[test]
fn verify_rejects_negative_upto() {
    let temp = tempfile::tempdir().expect("tempdir");
    let status = Command::new(env!("CARGO_BIN_EXE_sumton"))
        .current_dir(temp.path())
        .args(["verify", "--upto", "-5"])
        .status()
        .expect("sumton verify");

    assert_eq!(status.code(), Some(exit_codes::INVALID));
}
