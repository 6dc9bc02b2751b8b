use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lintstat"))
        .current_dir(root)
        .env("NO_COLOR", "1")
        .args(args)
        .output()
        .expect("run lintstat")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

#[test]
fn categories_reads_default_report_with_preamble() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".git")).unwrap();
    fs::write(
        dir.path().join("lint_report_phase4_check2.json"),
        "> eslint . -f json\n[{\"filePath\":\"a.ts\",\"messages\":[{\"ruleId\":\"@typescript-eslint/no-explicit-any\",\"line\":5}]}]",
    )
    .unwrap();
    let out = run(dir.path(), &["categories", "-q"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("NO EXPLICIT ANY (1)\na.ts:5\n"));
    assert!(text.contains("NO UNUSED VARS (0)"));
}

#[test]
fn categories_without_json_start_exits_1() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("report.txt"), "npm ERR! lint crashed").unwrap();
    let out = run(dir.path(), &["categories", "--report", "report.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("no JSON start token"));
}

#[test]
fn categories_missing_file_is_reported_but_not_fatal() {
    let dir = tempdir().unwrap();
    let out = run(dir.path(), &["categories", "--report", "absent.json"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stderr).contains("report file not found"));

    let out = run(dir.path(), &["categories", "--report", "absent.json", "--strict"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn warnings_tallies_by_rule_and_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("eslint_report_after.json"),
        r#"[
          {"filePath":"a.ts","messages":[
            {"ruleId":"react-hooks/exhaustive-deps","severity":1,"line":3},
            {"ruleId":"eqeqeq","severity":2,"line":4}
          ]},
          {"filePath":"b.ts","messages":[
            {"ruleId":"react-hooks/exhaustive-deps","severity":1,"line":8},
            {"ruleId":"@typescript-eslint/no-unused-vars","severity":1,"line":9}
          ]}
        ]"#,
    )
    .unwrap();
    let out = run(dir.path(), &["warnings", "-q"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.starts_with("Total warnings: 3\n"));
    assert!(text.contains("     2  react-hooks/exhaustive-deps\n"));
    assert!(text.contains("     2  b.ts\n"));
    assert!(text.contains("NO UNUSED VARS (1)\nb.ts:9\n"));
    assert!(!text.contains("eqeqeq"));

    let out = run(dir.path(), &["warnings", "--output", "json"]);
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["total"], 3);
    assert_eq!(v["by_file"][0]["key"], "b.ts");
}

#[test]
fn warnings_malformed_report_exits_1() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("eslint_report_after.json"), "[{\"filePath\":").unwrap();
    let out = run(dir.path(), &["warnings"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("malformed JSON"));
}

#[test]
fn invalid_output_mode_exits_2() {
    let dir = tempdir().unwrap();
    let out = run(dir.path(), &["warnings", "--output", "xml"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn unknown_severity_exits_2() {
    let dir = tempdir().unwrap();
    let out = run(dir.path(), &["warnings", "--severity", "bogus"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown severity 'bogus'"));
}

#[test]
fn error_severity_uses_errors_wording() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("eslint_report_after.json"),
        r#"[{"filePath":"a.ts","messages":[
            {"ruleId":"eqeqeq","severity":2,"line":4},
            {"ruleId":"no-unused-vars","severity":1,"line":5}
        ]}]"#,
    )
    .unwrap();
    let out = run(dir.path(), &["warnings", "--severity", "error", "-q"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.starts_with("Total errors: 1\n"));
    assert!(text.contains("     1  eqeqeq\n"));
    assert!(text.contains("NO UNUSED VARS (0)"));
}

#[test]
fn unparsable_config_exits_2() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("lintstat.toml"), "limit = \"ten\"\noutput = \"json\"\n").unwrap();
    let out = run(dir.path(), &["categories"]);
    assert_eq!(out.status.code(), Some(2));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("invalid config"));
    assert!(!err.contains("No lintstat.toml found"));
}
